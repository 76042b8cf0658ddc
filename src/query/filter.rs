//! Filter expression algebra for boolean result-set restrictions.

use serde::{Deserialize, Serialize};

use crate::query::expression::Expression;

/// A boolean filter expression attached to a request as a filter query.
///
/// Filters restrict the result set without affecting relevance scoring.
/// There are exactly two variants: a single field comparison, and the
/// flattened text of a composition. Composition is eager: once two
/// filters are combined the original sub-expressions are gone, so no
/// re-traversal or re-optimization is possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// A single field comparison.
    Simple {
        /// The field name.
        field: String,
        /// The comparison value in the engine's lexical form.
        value: String,
        /// Whether the value may be quoted when it contains whitespace.
        quote: bool,
    },
    /// The flattened text of a composed or negated filter.
    Compound {
        /// The rendered text.
        text: String,
    },
}

impl Filter {
    /// Combine with another filter; both must match.
    ///
    /// Operands are joined with a bare `AND`. The engine's filter parser
    /// evaluates same-precedence boolean chains left to right, so no
    /// grouping is added.
    pub fn and(&self, other: &Filter) -> Filter {
        Filter::Compound {
            text: format!("{} AND {}", self.to_text(), other.to_text()),
        }
    }

    /// Combine with another filter; either may match.
    ///
    /// Operands are joined with a bare `OR`, like [`Filter::and`].
    pub fn or(&self, other: &Filter) -> Filter {
        Filter::Compound {
            text: format!("{} OR {}", self.to_text(), other.to_text()),
        }
    }

    /// Negate this filter.
    ///
    /// The entire accumulated expression is parenthesized. Without the
    /// parentheses the negation would scope to the final clause only.
    pub fn not(&self) -> Filter {
        Filter::Compound {
            text: format!("NOT ({})", self.to_text()),
        }
    }
}

impl Expression for Filter {
    fn to_text(&self) -> String {
        match self {
            Filter::Simple {
                field,
                value,
                quote,
            } => {
                if *quote && value.contains(char::is_whitespace) {
                    format!("{field}:\"{value}\"")
                } else {
                    format!("{field}:{value}")
                }
            }
            Filter::Compound { text } => text.clone(),
        }
    }
}
