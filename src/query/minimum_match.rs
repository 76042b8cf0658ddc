//! Minimum-match rules for disjunction queries.

use serde::{Deserialize, Serialize};

use crate::query::expression::Expression;

/// A rule describing how many optional clauses of a disjunction must
/// match for a document to qualify.
///
/// Builders accept any [`Expression`], so externally supplied rule types
/// work as well; this enum covers the forms the engine's `mm` grammar
/// accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimumMatch {
    /// A fixed number of optional clauses that must match. A negative
    /// count gives the number of clauses that may be missing.
    Clauses(i32),
    /// A percentage of the optional clauses, truncated by the engine.
    Percent(i32),
    /// Applies the inner rule only when the query has more than
    /// `threshold` optional clauses.
    Conditional {
        /// Clause count above which the rule takes effect.
        threshold: u32,
        /// The rule applied past the threshold.
        rule: Box<MinimumMatch>,
    },
}

impl MinimumMatch {
    /// Create a conditional rule.
    pub fn conditional(threshold: u32, rule: MinimumMatch) -> Self {
        MinimumMatch::Conditional {
            threshold,
            rule: Box::new(rule),
        }
    }
}

impl Expression for MinimumMatch {
    fn to_text(&self) -> String {
        match self {
            MinimumMatch::Clauses(count) => count.to_string(),
            MinimumMatch::Percent(percent) => format!("{percent}%"),
            MinimumMatch::Conditional { threshold, rule } => {
                format!("{threshold}<{}", rule.to_text())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_count_rendering() {
        assert_eq!(MinimumMatch::Clauses(3).to_text(), "3");
        assert_eq!(MinimumMatch::Clauses(-2).to_text(), "-2");
    }

    #[test]
    fn test_percent_rendering() {
        assert_eq!(MinimumMatch::Percent(75).to_text(), "75%");
        assert_eq!(MinimumMatch::Percent(-25).to_text(), "-25%");
    }

    #[test]
    fn test_conditional_rendering() {
        let rule = MinimumMatch::conditional(3, MinimumMatch::Percent(90));
        assert_eq!(rule.to_text(), "3<90%");
    }

    #[test]
    fn test_nested_conditional_rendering() {
        let rule = MinimumMatch::conditional(
            9,
            MinimumMatch::conditional(3, MinimumMatch::Percent(-25)),
        );
        assert_eq!(rule.to_text(), "9<3<-25%");
    }
}
