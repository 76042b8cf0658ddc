//! Base expression trait for query text rendering.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Trait for nodes that render themselves as query text.
///
/// The returned string is the exact literal fragment attached to a
/// request parameter; no escaping or reformatting happens downstream.
pub trait Expression: Debug + Send + Sync {
    /// Produce the literal query text for this node.
    fn to_text(&self) -> String;
}

/// A raw, pre-rendered query fragment.
///
/// Escape hatch for engine-side function queries (e.g.
/// `recip(ms(NOW,uploaded),3.16e-11,1,1)`) and for user-field names that
/// already carry a negation marker. The text is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExpression(String);

impl RawExpression {
    /// Create a raw expression from already-formatted query text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        RawExpression(text.into())
    }
}

impl Expression for RawExpression {
    fn to_text(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_expression_is_verbatim() {
        let expr = RawExpression::new("recip(ms(NOW,uploaded),3.16e-11,1,1)");
        assert_eq!(expr.to_text(), "recip(ms(NOW,uploaded),3.16e-11,1,1)");
    }
}
