//! Disjunction-max relevance query builder.

use crate::params::{QueryParam, SolrParams};
use crate::query::QueryBuilder;
use crate::query::expression::Expression;

/// Query-type token for the disjunction-max parser.
pub const DISMAX: &str = "dismax";

/// Render `(field, boost)` pairs as a space-joined weighted field list.
///
/// Caller order is preserved. Whole-number boosts keep their decimal
/// point (`2.0`, not `2`).
fn render_weighted_fields(fields: &[(&dyn Expression, f32)]) -> String {
    fields
        .iter()
        .map(|(field, boost)| format!("{}^{boost:?}", field.to_text()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Relevance-tuning setters shared by the dismax-family builders.
///
/// Each setter overwrites its parameter key; the last call per key wins.
pub trait DisMaxBuilder: QueryBuilder {
    /// Set the weighted query-field list (`qf`).
    fn set_query_fields(&mut self, fields: &[(&dyn Expression, f32)]) -> &mut Self
    where
        Self: Sized,
    {
        let text = render_weighted_fields(fields);
        self.params_mut().set(QueryParam::QueryFields, text);
        self
    }

    /// Set the tie-breaker controlling how much secondary per-field
    /// scores contribute (`tie`).
    fn set_tie(&mut self, tie: f32) -> &mut Self
    where
        Self: Sized,
    {
        self.params_mut().set(QueryParam::Tie, format!("{tie:?}"));
        self
    }

    /// Set the minimum-match rules (`mm`), space-joined in call order.
    fn set_minimum_match(&mut self, rules: &[&dyn Expression]) -> &mut Self
    where
        Self: Sized,
    {
        let text = rules
            .iter()
            .map(|rule| rule.to_text())
            .collect::<Vec<_>>()
            .join(" ");
        self.params_mut().set(QueryParam::MinimumMatch, text);
        self
    }

    /// Set the weighted phrase-field list (`pf`).
    fn set_phrase_fields(&mut self, fields: &[(&dyn Expression, f32)]) -> &mut Self
    where
        Self: Sized,
    {
        let text = render_weighted_fields(fields);
        self.params_mut().set(QueryParam::PhraseFields, text);
        self
    }

    /// Set the phrase slop (`ps`).
    fn set_phrase_slop(&mut self, slop: u32) -> &mut Self
    where
        Self: Sized,
    {
        self.params_mut()
            .set(QueryParam::PhraseSlop, slop.to_string());
        self
    }

    /// Set the query phrase slop (`qs`).
    fn set_query_phrase_slop(&mut self, slop: u32) -> &mut Self
    where
        Self: Sized,
    {
        self.params_mut()
            .set(QueryParam::QueryPhraseSlop, slop.to_string());
        self
    }
}

/// A disjunction-max relevance query.
///
/// Construction fixes the query-type parameter to [`DISMAX`]; everything
/// else is populated through the [`QueryBuilder`] and [`DisMaxBuilder`]
/// setters.
#[derive(Debug, Clone)]
pub struct DisMaxQuery {
    params: SolrParams,
}

impl DisMaxQuery {
    /// Create a new dismax query.
    pub fn new() -> Self {
        let mut params = SolrParams::new();
        params.set(QueryParam::DefType, DISMAX);
        DisMaxQuery { params }
    }

    /// Consume the builder, yielding the populated parameter bag.
    pub fn into_params(self) -> SolrParams {
        self.params
    }
}

impl Default for DisMaxQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for DisMaxQuery {
    fn params(&self) -> &SolrParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut SolrParams {
        &mut self.params
    }
}

impl DisMaxBuilder for DisMaxQuery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::expression::RawExpression;

    #[test]
    fn test_new_fixes_query_type() {
        let query = DisMaxQuery::new();
        assert_eq!(query.params().get(QueryParam::DefType), Some("dismax"));
    }

    #[test]
    fn test_weighted_field_rendering_keeps_decimal_point() {
        let title = RawExpression::new("title");
        let author = RawExpression::new("author");
        let fields: [(&dyn Expression, f32); 2] = [(&title, 2.0), (&author, 1.5)];

        assert_eq!(render_weighted_fields(&fields), "title^2.0 author^1.5");
    }

    #[test]
    fn test_setters_overwrite() {
        let mut query = DisMaxQuery::new();
        query.set_tie(0.1).set_tie(0.5);

        assert_eq!(query.params().get(QueryParam::Tie), Some("0.5"));
        assert_eq!(query.params().len(), 2);
    }
}
