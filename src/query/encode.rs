use super::clause::Clause;
use crate::types::SelectedFilters;

/// Build the backend filter query for the current selection.
///
/// Ids are visited in the selection's order and ids with nothing selected are
/// skipped; the remaining clauses are joined with `" AND "`. An empty
/// selection gives an empty string.
pub fn get_query_filters(selected: &SelectedFilters) -> String {
    let clauses: Vec<String> = selected
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(id, values)| reduce_query(id, values))
        .collect();
    tracing::debug!(clauses = clauses.len(), "encoded filter query");
    clauses.join(" AND ")
}

/// Render the clause for a single filter id.
pub fn reduce_query(id: &str, values: &[String]) -> String {
    Clause::for_selection(id, values).to_string()
}
