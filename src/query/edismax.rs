//! Extended disjunction-max relevance query builder.

use crate::params::{QueryParam, SolrParams};
use crate::query::QueryBuilder;
use crate::query::dismax::{DisMaxBuilder, DisMaxQuery};
use crate::query::expression::Expression;

/// Query-type token for the extended disjunction-max parser.
pub const EDISMAX: &str = "edismax";

/// `uf` token disallowing every user-specified field.
pub const USER_FIELDS_NONE: &str = "-*";

/// `uf` wildcard allowing every field.
pub const USER_FIELDS_ALL: &str = "*";

/// An extended disjunction-max relevance query.
///
/// A strict superset of [`DisMaxQuery`]: construction starts from the
/// base builder and overrides the query-type parameter to [`EDISMAX`].
/// All base setters apply unchanged; boosting, whitespace handling, and
/// user-field controls are added here.
#[derive(Debug, Clone)]
pub struct ExtendedDisMaxQuery {
    params: SolrParams,
}

impl ExtendedDisMaxQuery {
    /// Create a new edismax query.
    pub fn new() -> Self {
        let mut base = DisMaxQuery::new();
        base.params_mut().set(QueryParam::DefType, EDISMAX);
        ExtendedDisMaxQuery {
            params: base.into_params(),
        }
    }

    /// Consume the builder, yielding the populated parameter bag.
    pub fn into_params(self) -> SolrParams {
        self.params
    }

    /// Set the boost field (`bf`), or clear it with `None`.
    pub fn set_boost_field(&mut self, field: Option<&dyn Expression>) -> &mut Self {
        match field {
            Some(field) => self.params.set(QueryParam::BoostField, field.to_text()),
            None => self.params.remove(QueryParam::BoostField),
        }
        self
    }

    /// Set the multiplicative boost function (`boost`).
    ///
    /// Any expression node is accepted, not just a field reference.
    pub fn set_boost_function(&mut self, function: &dyn Expression) -> &mut Self {
        self.params
            .set(QueryParam::BoostFunction, function.to_text());
        self
    }

    /// Set the split-on-whitespace flag (`sow`).
    pub fn set_split_on_whitespace(&mut self, split: bool) -> &mut Self {
        self.params
            .set(QueryParam::SplitOnWhitespace, split.to_string());
        self
    }

    /// Set the lowercase-operators flag (`lowercaseOperators`).
    pub fn set_lowercase_operators(&mut self, lowercase: bool) -> &mut Self {
        self.params
            .set(QueryParam::LowercaseOperators, lowercase.to_string());
        self
    }

    /// Set the user-field allow/deny list (`uf`).
    ///
    /// With both lists empty the literal [`USER_FIELDS_NONE`] token is
    /// emitted. Otherwise the allowed names are space-joined (the
    /// [`USER_FIELDS_ALL`] wildcard stands in when none are given),
    /// followed by a space and the space-joined disallowed names.
    ///
    /// Disallowed names are emitted as rendered: no negation marker is
    /// prefixed here, callers supply already-prefixed names.
    pub fn set_user_fields(
        &mut self,
        allowed: &[&dyn Expression],
        disallowed: &[&dyn Expression],
    ) -> &mut Self {
        let text = if allowed.is_empty() && disallowed.is_empty() {
            USER_FIELDS_NONE.to_string()
        } else {
            let allowed = if allowed.is_empty() {
                USER_FIELDS_ALL.to_string()
            } else {
                join_fields(allowed)
            };
            format!("{allowed} {}", join_fields(disallowed))
        };
        self.params.set(QueryParam::UserFields, text);
        self
    }

    /// Set only the allowed user fields.
    pub fn set_allowed_user_fields(&mut self, fields: &[&dyn Expression]) -> &mut Self {
        self.set_user_fields(fields, &[])
    }

    /// Set only the disallowed user fields; every other field stays
    /// allowed.
    pub fn set_disallowed_user_fields(&mut self, fields: &[&dyn Expression]) -> &mut Self {
        self.set_user_fields(&[], fields)
    }
}

fn join_fields(fields: &[&dyn Expression]) -> String {
    fields
        .iter()
        .map(|field| field.to_text())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for ExtendedDisMaxQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for ExtendedDisMaxQuery {
    fn params(&self) -> &SolrParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut SolrParams {
        &mut self.params
    }
}

impl DisMaxBuilder for ExtendedDisMaxQuery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::expression::RawExpression;

    #[test]
    fn test_new_overrides_query_type() {
        let query = ExtendedDisMaxQuery::new();
        assert_eq!(query.params().get(QueryParam::DefType), Some("edismax"));
    }

    #[test]
    fn test_user_fields_disable_everything_token() {
        let mut query = ExtendedDisMaxQuery::new();
        query.set_user_fields(&[], &[]);

        assert_eq!(query.params().get(QueryParam::UserFields), Some("-*"));
    }

    #[test]
    fn test_boost_field_clearing() {
        let mut query = ExtendedDisMaxQuery::new();
        let upvotes = RawExpression::new("upvotes");

        query.set_boost_field(Some(&upvotes));
        assert_eq!(query.params().get(QueryParam::BoostField), Some("upvotes"));

        query.set_boost_field(None);
        assert_eq!(query.params().get(QueryParam::BoostField), None);
    }
}
