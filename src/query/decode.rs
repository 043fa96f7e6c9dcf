use super::clause::Clause;
use super::parser::{funder_clause, source_clause, terms_clause};
use crate::error::{FacetError, Result};
use crate::facets::sources::clean_source_name;
use crate::types::SelectedFilters;

const FUNDER_CLAUSE_HEAD: &str = "(funder.name.keyword:";
const SOURCE_CLAUSE_HEAD: &str = "(_index:";

/// Rebuild the UI selection from a filter query produced by
/// [`get_query_filters`](super::get_query_filters).
///
/// The result always carries the five known ids; a clause on any other field
/// adds that id. Only query strings of the encoder's shape are accepted.
///
/// # Errors
///
/// Returns [`FacetError::QueryParse`] naming the first clause that does not
/// match its grammar.
pub fn filter_string_to_obj(filter_str: &str) -> Result<SelectedFilters> {
    let mut selected = SelectedFilters::default();
    if filter_str.is_empty() {
        return Ok(selected);
    }

    for raw in filter_str.split(" AND ") {
        let (id, values) = parse_clause(raw)?.into_parts();
        selected.set(id, values);
    }

    tracing::debug!(query = %filter_str, "decoded filter query");
    Ok(selected)
}

fn parse_clause(raw: &str) -> Result<Clause> {
    let malformed =
        |kind: &str| FacetError::QueryParse(format!("malformed {} clause: {}", kind, raw));

    // Dispatch on the clause head only; quoted values may contain field names.
    if raw.starts_with(FUNDER_CLAUSE_HEAD) {
        let (_, (funder, funding)) = funder_clause(raw).map_err(|_| malformed("funder"))?;
        if funder != funding {
            tracing::warn!(
                ?funder,
                ?funding,
                "funder and funding funder lists differ, keeping funder list"
            );
        }
        Ok(Clause::Funder(funder))
    } else if raw.starts_with(SOURCE_CLAUSE_HEAD) {
        let (_, stems) = source_clause(raw).map_err(|_| malformed("source"))?;
        Ok(Clause::Source(
            stems.into_iter().map(clean_source_name).collect(),
        ))
    } else {
        let (_, (field, values)) = terms_clause(raw).map_err(|_| malformed("field"))?;
        Ok(Clause::Terms { field, values })
    }
}
