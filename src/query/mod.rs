pub mod clause;
pub mod decode;
pub mod encode;
pub mod params;
mod parser;

pub use clause::Clause;
pub use decode::filter_string_to_obj;
pub use encode::{get_query_filters, reduce_query};
pub use params::{from_url_params, to_url_param};
