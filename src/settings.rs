use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

fn default_facet_fields() -> Vec<String> {
    vec![
        "variableMeasured.keyword".to_string(),
        "measurementTechnique.keyword".to_string(),
        "keywords.keyword".to_string(),
    ]
}

/// Controls which plain facets are cleaned and how funders are truncated.
///
/// The funder and source groups are always emitted; `facetFields` lists the
/// remaining backend fields, in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSettings {
    #[serde(rename = "facetFields", default = "default_facet_fields")]
    pub facet_fields: Vec<String>,

    /// Top-K cut applied to the merged funder list.
    #[serde(rename = "maxValuesPerFacet")]
    pub max_values_per_facet: Option<usize>,

    #[serde(rename = "includeUnknownFunders")]
    pub include_unknown_funders: bool,
}

impl Default for FacetSettings {
    fn default() -> Self {
        FacetSettings {
            facet_fields: default_facet_fields(),
            max_values_per_facet: None,
            include_unknown_funders: false,
        }
    }
}

impl FacetSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: FacetSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            max_values_per_facet: limit,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        let mut seen = HashSet::new();
        for field in &self.facet_fields {
            if field.trim().is_empty() {
                return Err(crate::error::FacetError::Config(
                    "facetFields contains an empty field name".to_string(),
                ));
            }
            if !seen.insert(field.as_str()) {
                return Err(crate::error::FacetError::Config(format!(
                    "facetFields lists '{}' more than once",
                    field
                )));
            }
        }
        Ok(())
    }
}
