//! Facet cleanup and filter query-string codec for a dataset discovery portal.
//!
//! Two independent conversions live here:
//!
//! - [`clean_facets`] turns a search backend's raw aggregation buckets into the
//!   `[{variable, counts: [{key, value}]}]` model the filter sidebar renders.
//! - [`get_query_filters`] and [`filter_string_to_obj`] translate between the
//!   sidebar's selected filters and the backend's boolean query string.
//!
//! ```
//! use discovery_facets::{filter_string_to_obj, get_query_filters, SelectedFilters};
//!
//! let mut selected = SelectedFilters::default();
//! selected.set("funder", vec!["NIH".to_string()]);
//!
//! let q = get_query_filters(&selected);
//! assert_eq!(
//!     q,
//!     r#"(funder.name.keyword:("NIH") OR funding.funder.name.keyword:("NIH"))"#
//! );
//! assert_eq!(filter_string_to_obj(&q).unwrap(), selected);
//! ```

pub mod error;
pub mod facets;
pub mod query;
pub mod settings;
pub mod types;

pub use error::{FacetError, Result};
pub use facets::{
    clean_facets, clean_facets_with, clean_source_name, clean_sources, combine_funders,
};
pub use query::{
    filter_string_to_obj, from_url_params, get_query_filters, reduce_query, to_url_param, Clause,
};
pub use settings::FacetSettings;
pub use types::{
    Bucket, FacetEntry, FacetFieldResult, FacetGroup, FilterField, RawFacetResponse,
    SelectedFilters,
};
