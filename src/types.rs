use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One raw term/frequency pair from a backend aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub term: String,
    pub count: u64,
}

impl Bucket {
    pub fn new(term: impl Into<String>, count: u64) -> Self {
        Bucket {
            term: term.into(),
            count,
        }
    }
}

/// Aggregation result for a single backend field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFieldResult {
    #[serde(default)]
    pub terms: Vec<Bucket>,
    /// Number of documents that carry a value for this field.
    #[serde(default)]
    pub total: u64,
}

/// The backend's facet response: per-field aggregations plus the grand total.
///
/// The source distribution arrives as the `_index` field like any other facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFacetResponse {
    pub total: u64,
    pub fields: IndexMap<String, FacetFieldResult>,
}

impl RawFacetResponse {
    pub fn new(total: u64) -> Self {
        RawFacetResponse {
            total,
            fields: IndexMap::new(),
        }
    }

    /// Builder used by callers that assemble a response by hand.
    pub fn with_field(mut self, name: impl Into<String>, terms: Vec<Bucket>, total: u64) -> Self {
        self.fields
            .insert(name.into(), FacetFieldResult { terms, total });
        self
    }

    /// Parse a [`RawFacetResponse`] from the backend's JSON body.
    ///
    /// Every top-level object holding a `terms` array is taken as a facet
    /// field. `total` is the grand total (0 when absent); any other key (`took`,
    /// `max_score`, ...) is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FacetError::InvalidFacetResponse`] if the body is not
    /// a JSON object, `total` is present but not an unsigned integer, or a
    /// facet field has malformed buckets.
    pub fn from_json(json: &serde_json::Value) -> crate::error::Result<Self> {
        use crate::error::FacetError;

        let obj = json.as_object().ok_or_else(|| {
            FacetError::InvalidFacetResponse("Expected JSON object".to_string())
        })?;

        let total = match obj.get("total") {
            None => 0,
            Some(v) => v.as_u64().ok_or_else(|| {
                FacetError::InvalidFacetResponse(format!(
                    "total must be an unsigned integer, got {}",
                    v
                ))
            })?,
        };

        let mut fields = IndexMap::new();
        for (key, val) in obj {
            if key == "total" {
                continue;
            }
            let is_facet = val
                .as_object()
                .map(|o| o.get("terms").is_some_and(|t| t.is_array()))
                .unwrap_or(false);
            if !is_facet {
                tracing::trace!(key = %key, "ignoring non-facet key in facet response");
                continue;
            }
            let field: FacetFieldResult = serde_json::from_value(val.clone()).map_err(|e| {
                FacetError::InvalidFacetResponse(format!("field '{}': {}", key, e))
            })?;
            fields.insert(key.clone(), field);
        }

        Ok(RawFacetResponse { total, fields })
    }

    pub fn field(&self, name: &str) -> crate::error::Result<&FacetFieldResult> {
        self.fields
            .get(name)
            .ok_or_else(|| crate::error::FacetError::MissingField(name.to_string()))
    }
}

/// A display label and its document count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetEntry {
    pub key: String,
    pub value: u64,
}

impl FacetEntry {
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        FacetEntry {
            key: key.into(),
            value,
        }
    }
}

/// Cleaned counts for one facet, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    /// Field name without the `.keyword` suffix.
    pub variable: String,
    pub counts: Vec<FacetEntry>,
}

/// The filter ids the discovery UI knows about, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Funder,
    Source,
    VariableMeasured,
    MeasurementTechnique,
    Keywords,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Funder,
        FilterField::Source,
        FilterField::VariableMeasured,
        FilterField::MeasurementTechnique,
        FilterField::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Funder => "funder",
            FilterField::Source => "source",
            FilterField::VariableMeasured => "variableMeasured",
            FilterField::MeasurementTechnique => "measurementTechnique",
            FilterField::Keywords => "keywords",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        FilterField::ALL.into_iter().find(|f| f.as_str() == id)
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected display values per filter id, in insertion order.
///
/// [`Default`] seeds the five known ids with empty lists; an id that is absent
/// reads as an empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedFilters {
    filters: IndexMap<String, Vec<String>>,
}

impl Default for SelectedFilters {
    fn default() -> Self {
        SelectedFilters {
            filters: FilterField::ALL
                .iter()
                .map(|f| (f.as_str().to_string(), Vec::new()))
                .collect(),
        }
    }
}

impl SelectedFilters {
    /// A selection with no ids at all, not even the known ones.
    pub fn empty() -> Self {
        SelectedFilters {
            filters: IndexMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> &[String] {
        self.filters.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the selection for `id`, appending the id if it is new.
    pub fn set(&mut self, id: impl Into<String>, values: Vec<String>) {
        self.filters.insert(id.into(), values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.filters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// True when no id has a selected value.
    pub fn is_empty(&self) -> bool {
        self.filters.values().all(Vec::is_empty)
    }
}

impl FromIterator<(String, Vec<String>)> for SelectedFilters {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        SelectedFilters {
            filters: iter.into_iter().collect(),
        }
    }
}
