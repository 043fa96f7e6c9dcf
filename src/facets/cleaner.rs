use super::funders::combine_funders;
use super::rollup::sort_by_value_desc;
use super::sources::clean_sources;
use crate::error::Result;
use crate::settings::FacetSettings;
use crate::types::{FacetEntry, FacetGroup, FilterField, RawFacetResponse};

pub const SOURCE_FIELD: &str = "_index";
const KEYWORD_SUFFIX: &str = ".keyword";

/// Clean a backend facet response into the sidebar model.
///
/// Emits `funder`, then `source`, then one group per default facet field.
/// `facet_size` limits the funder list only.
pub fn clean_facets(
    facets: &RawFacetResponse,
    facet_size: Option<usize>,
) -> Result<Vec<FacetGroup>> {
    clean_facets_with(facets, &FacetSettings::with_limit(facet_size))
}

pub fn clean_facets_with(
    facets: &RawFacetResponse,
    settings: &FacetSettings,
) -> Result<Vec<FacetGroup>> {
    let mut cleaned = Vec::with_capacity(2 + settings.facet_fields.len());

    cleaned.push(FacetGroup {
        variable: FilterField::Funder.to_string(),
        counts: combine_funders(
            facets,
            settings.max_values_per_facet,
            settings.include_unknown_funders,
        )?,
    });

    cleaned.push(FacetGroup {
        variable: FilterField::Source.to_string(),
        counts: clean_sources(&facets.field(SOURCE_FIELD)?.terms),
    });

    for field in &settings.facet_fields {
        let mut counts: Vec<FacetEntry> = facets
            .field(field)?
            .terms
            .iter()
            .map(|b| FacetEntry::new(b.term.clone(), b.count))
            .collect();
        sort_by_value_desc(&mut counts);
        cleaned.push(FacetGroup {
            variable: field.replacen(KEYWORD_SUFFIX, "", 1),
            counts,
        });
    }

    tracing::debug!(groups = cleaned.len(), total = facets.total, "cleaned facets");
    Ok(cleaned)
}
