pub mod cleaner;
pub mod funders;
pub mod rollup;
pub mod sources;

pub use cleaner::{clean_facets, clean_facets_with};
pub use funders::combine_funders;
pub use sources::{clean_source_name, clean_sources};
