//! # Pilum
//!
//! A typed query construction library for Apache Solr.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Typed field references produced by a collection registry
//! - Boolean filter-expression algebra with exact text rendering
//! - Dismax and extended dismax relevance builders
//! - Insertion-ordered parameter bag ready for a transport client

pub mod error;
pub mod params;
pub mod query;
pub mod schema;

pub mod prelude {
    pub use crate::error::{PilumError, Result};
    pub use crate::params::{QueryParam, SolrParams};
    pub use crate::query::{
        DisMaxBuilder, DisMaxQuery, Expression, ExtendedDisMaxQuery, Filter, MinimumMatch,
        QueryBuilder, RawExpression,
    };
    pub use crate::schema::{FieldKind, SolrCollection, SolrField, SortClause, SortOrder};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
