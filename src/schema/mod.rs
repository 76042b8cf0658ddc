//! Collection and field definitions for query construction.

pub mod collection;
pub mod field;

pub use self::collection::SolrCollection;
pub use self::field::{FieldKind, FieldValue, FieldValueType, SolrField, SortClause, SortOrder};
