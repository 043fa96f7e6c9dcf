use super::decode::filter_string_to_obj;
use super::encode::get_query_filters;
use crate::error::Result;
use crate::types::SelectedFilters;

/// Name of the URL parameter carrying the filter query in shareable links.
pub const FILTERS_PARAM: &str = "filters";

/// `filters=<urlencoded query>` for the selection, or `""` if nothing is selected.
pub fn to_url_param(selected: &SelectedFilters) -> String {
    let query = get_query_filters(selected);
    if query.is_empty() {
        return String::new();
    }
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(FILTERS_PARAM, &query)
        .finish()
}

/// Restore a selection from a link's parameter string (`a=1&filters=...`).
///
/// A missing `filters` parameter gives the default selection; when it appears
/// more than once the last one wins.
pub fn from_url_params(params_str: &str) -> Result<SelectedFilters> {
    let params = params_str.strip_prefix('?').unwrap_or(params_str);
    let mut filters = None;
    for (key, value) in url::form_urlencoded::parse(params.as_bytes()) {
        if key == FILTERS_PARAM {
            filters = Some(value.into_owned());
        }
    }
    match filters {
        Some(f) => filter_string_to_obj(&f),
        None => Ok(SelectedFilters::default()),
    }
}
