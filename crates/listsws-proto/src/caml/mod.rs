//! CAML query, view-field and query-option payloads for `GetListItems`.

mod query;
mod query_options;
mod view_fields;

pub use query::{CamlQuery, Comparison, Operator, QueryFilter, build_equality_filter};
pub use query_options::QueryOptions;
pub use view_fields::{ViewFieldSpec, build_view_fields};
