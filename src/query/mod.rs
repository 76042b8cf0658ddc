//! Query construction for outbound search requests.

pub mod dismax;
pub mod edismax;
pub mod expression;
pub mod filter;
pub mod minimum_match;

pub use self::dismax::{DISMAX, DisMaxBuilder, DisMaxQuery};
pub use self::edismax::{EDISMAX, ExtendedDisMaxQuery, USER_FIELDS_ALL, USER_FIELDS_NONE};
pub use self::expression::{Expression, RawExpression};
pub use self::filter::Filter;
pub use self::minimum_match::MinimumMatch;

use crate::params::{QueryParam, SolrParams};
use crate::schema::field::SortClause;

/// Request-level surface shared by the relevance query builders.
///
/// A builder wraps one [`SolrParams`] bag. Setters overwrite their
/// parameter key and return the builder for chaining; only the last
/// value per key survives. There is no sealed state, a builder may be
/// mutated until it is handed to a transport.
pub trait QueryBuilder {
    /// The parameter bag backing this builder.
    fn params(&self) -> &SolrParams;

    /// Mutable access to the parameter bag.
    fn params_mut(&mut self) -> &mut SolrParams;

    /// Set the main query string.
    fn set_query(&mut self, query: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.params_mut().set(QueryParam::Query, query);
        self
    }

    /// Attach a filter to the request.
    ///
    /// Filters are repeatable: each call appends one `fq` entry with the
    /// filter's rendered text.
    fn add_filter(&mut self, filter: &Filter) -> &mut Self
    where
        Self: Sized,
    {
        let text = filter.to_text();
        self.params_mut().add(QueryParam::FilterQuery, text);
        self
    }

    /// Set the result ordering, comma-joined in call order.
    fn set_sort(&mut self, clauses: &[SortClause]) -> &mut Self
    where
        Self: Sized,
    {
        let text = clauses
            .iter()
            .map(|clause| clause.to_text())
            .collect::<Vec<_>>()
            .join(",");
        self.params_mut().set(QueryParam::Sort, text);
        self
    }

    /// Set the result offset.
    fn set_start(&mut self, start: usize) -> &mut Self
    where
        Self: Sized,
    {
        self.params_mut().set(QueryParam::Start, start.to_string());
        self
    }

    /// Set the result page size.
    fn set_rows(&mut self, rows: usize) -> &mut Self
    where
        Self: Sized,
    {
        self.params_mut().set(QueryParam::Rows, rows.to_string());
        self
    }

    /// Set the list of fields returned for each hit, comma-joined.
    fn set_field_list(&mut self, fields: &[&dyn Expression]) -> &mut Self
    where
        Self: Sized,
    {
        let text = fields
            .iter()
            .map(|field| field.to_text())
            .collect::<Vec<_>>()
            .join(",");
        self.params_mut().set(QueryParam::FieldList, text);
        self
    }
}
