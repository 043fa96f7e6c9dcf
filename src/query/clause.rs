use crate::facets::cleaner::SOURCE_FIELD;
use crate::facets::funders::{FUNDER_FIELD, FUNDING_FUNDER_FIELD};
use crate::types::FilterField;
use std::fmt;

pub(crate) const INDEX_PREFIX: &str = "indexed_";
pub(crate) const KEYWORD_SUFFIX: &str = ".keyword";

/// One field-scoped condition of the filter query string.
///
/// `Source` holds display names; the index-name form only exists on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Funder(Vec<String>),
    Source(Vec<String>),
    Terms { field: String, values: Vec<String> },
}

impl Clause {
    pub fn for_selection(id: &str, values: &[String]) -> Clause {
        match FilterField::from_id(id) {
            Some(FilterField::Funder) => Clause::Funder(values.to_vec()),
            Some(FilterField::Source) => Clause::Source(values.to_vec()),
            _ => Clause::Terms {
                field: id.to_string(),
                values: values.to_vec(),
            },
        }
    }

    /// Filter id and selected values.
    pub fn into_parts(self) -> (String, Vec<String>) {
        match self {
            Clause::Funder(values) => (FilterField::Funder.to_string(), values),
            Clause::Source(values) => (FilterField::Source.to_string(), values),
            Clause::Terms { field, values } => (field, values),
        }
    }
}

/// `("v1","v2")`, values written verbatim.
fn quoted_list(values: &[String]) -> String {
    format!("(\"{}\")", values.join("\",\""))
}

/// Index-name stem the backend matches for a source display name.
pub(crate) fn source_index_stem(display: &str) -> String {
    let lowered = display.replacen("Omics DI", "omicsdi", 1).to_lowercase();
    match lowered.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((pos, c)) => format!("{}_{}", &lowered[..pos], &lowered[pos + c.len_utf8()..]),
        None => lowered,
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Funder(values) => {
                let list = quoted_list(values);
                write!(
                    f,
                    "({}:{} OR {}:{})",
                    FUNDER_FIELD, list, FUNDING_FUNDER_FIELD, list
                )
            }
            Clause::Source(values) => {
                let terms: Vec<String> = values
                    .iter()
                    .map(|v| {
                        format!("{}:{}{}*", SOURCE_FIELD, INDEX_PREFIX, source_index_stem(v))
                    })
                    .collect();
                write!(f, "({})", terms.join(" OR "))
            }
            Clause::Terms { field, values } => {
                write!(f, "{}{}:{}", field, KEYWORD_SUFFIX, quoted_list(values))
            }
        }
    }
}
