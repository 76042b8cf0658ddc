//! Request parameter bag keyed by a closed vocabulary of parameter names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Solr request parameter name.
///
/// The key set is closed: only parameters the downstream engine consumes
/// can be placed in a [`SolrParams`] bag. Arbitrary string keys are not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryParam {
    /// Query-type selector (`defType`).
    #[serde(rename = "defType")]
    DefType,
    /// Main query string (`q`).
    #[serde(rename = "q")]
    Query,
    /// Weighted query-field list (`qf`).
    #[serde(rename = "qf")]
    QueryFields,
    /// Tie-breaker for disjunction-max scoring (`tie`).
    #[serde(rename = "tie")]
    Tie,
    /// Minimum-match rules (`mm`).
    #[serde(rename = "mm")]
    MinimumMatch,
    /// Weighted phrase-field list (`pf`).
    #[serde(rename = "pf")]
    PhraseFields,
    /// Phrase slop (`ps`).
    #[serde(rename = "ps")]
    PhraseSlop,
    /// Query phrase slop (`qs`).
    #[serde(rename = "qs")]
    QueryPhraseSlop,
    /// Boost field (`bf`).
    #[serde(rename = "bf")]
    BoostField,
    /// Multiplicative boost function (`boost`).
    #[serde(rename = "boost")]
    BoostFunction,
    /// Split-on-whitespace flag (`sow`).
    #[serde(rename = "sow")]
    SplitOnWhitespace,
    /// Lowercase-operators flag (`lowercaseOperators`).
    #[serde(rename = "lowercaseOperators")]
    LowercaseOperators,
    /// User-field allow/deny list (`uf`).
    #[serde(rename = "uf")]
    UserFields,
    /// Filter query (`fq`). Repeatable: one entry per attached filter.
    #[serde(rename = "fq")]
    FilterQuery,
    /// Sort specification (`sort`).
    #[serde(rename = "sort")]
    Sort,
    /// Result offset (`start`).
    #[serde(rename = "start")]
    Start,
    /// Result page size (`rows`).
    #[serde(rename = "rows")]
    Rows,
    /// Returned field list (`fl`).
    #[serde(rename = "fl")]
    FieldList,
}

impl QueryParam {
    /// Get the wire name of this parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryParam::DefType => "defType",
            QueryParam::Query => "q",
            QueryParam::QueryFields => "qf",
            QueryParam::Tie => "tie",
            QueryParam::MinimumMatch => "mm",
            QueryParam::PhraseFields => "pf",
            QueryParam::PhraseSlop => "ps",
            QueryParam::QueryPhraseSlop => "qs",
            QueryParam::BoostField => "bf",
            QueryParam::BoostFunction => "boost",
            QueryParam::SplitOnWhitespace => "sow",
            QueryParam::LowercaseOperators => "lowercaseOperators",
            QueryParam::UserFields => "uf",
            QueryParam::FilterQuery => "fq",
            QueryParam::Sort => "sort",
            QueryParam::Start => "start",
            QueryParam::Rows => "rows",
            QueryParam::FieldList => "fl",
        }
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An insertion-ordered parameter bag representing one outbound request.
///
/// Single-valued parameters follow last-write-wins: `set` overwrites the
/// value in place, keeping the original position. Repeatable parameters
/// (`fq`) accumulate through `add`. The populated bag is handed to a
/// transport client and discarded; sharing one bag across concurrent
/// flows is caller responsibility.
#[derive(Debug, Clone, Default)]
pub struct SolrParams {
    /// Parameter entries in insertion order.
    entries: Vec<(QueryParam, String)>,
}

impl SolrParams {
    /// Create a new empty parameter bag.
    pub fn new() -> Self {
        SolrParams {
            entries: Vec::new(),
        }
    }

    /// Set a single-valued parameter, overwriting any previous value.
    ///
    /// An overwritten parameter keeps its original position in the bag.
    pub fn set<V: Into<String>>(&mut self, param: QueryParam, value: V) {
        let value = value.into();
        match self.entries.iter().position(|(p, _)| *p == param) {
            Some(index) => {
                self.entries.retain(|(p, _)| *p != param);
                self.entries.insert(index, (param, value));
            }
            None => self.entries.push((param, value)),
        }
    }

    /// Append a repeatable parameter entry.
    pub fn add<V: Into<String>>(&mut self, param: QueryParam, value: V) {
        self.entries.push((param, value.into()));
    }

    /// Remove all entries for a parameter.
    pub fn remove(&mut self, param: QueryParam) {
        self.entries.retain(|(p, _)| *p != param);
    }

    /// Get the first value for a parameter.
    pub fn get(&self, param: QueryParam) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a parameter in insertion order.
    pub fn get_all(&self, param: QueryParam) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == param)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if a parameter is present.
    pub fn contains(&self, param: QueryParam) -> bool {
        self.entries.iter().any(|(p, _)| *p == param)
    }

    /// Iterate over `(wire name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the bag for transports speaking the JSON request API.
    ///
    /// Repeated parameters collapse into a JSON array under their key.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (param, value) in &self.entries {
            match map.get_mut(param.as_str()) {
                Some(serde_json::Value::Array(values)) => {
                    values.push(value.clone().into());
                }
                Some(existing) => {
                    let first = existing.take();
                    *existing = serde_json::Value::Array(vec![first, value.clone().into()]);
                }
                None => {
                    map.insert(param.as_str().to_string(), value.clone().into());
                }
            }
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut params = SolrParams::new();
        params.set(QueryParam::Query, "first");
        params.set(QueryParam::Tie, "0.1");
        params.set(QueryParam::Query, "second");

        assert_eq!(params.get(QueryParam::Query), Some("second"));
        assert_eq!(params.len(), 2);

        // Overwriting keeps the original position.
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("q", "second"), ("tie", "0.1")]);
    }

    #[test]
    fn test_add_accumulates() {
        let mut params = SolrParams::new();
        params.add(QueryParam::FilterQuery, "a:1");
        params.add(QueryParam::FilterQuery, "b:2");

        assert_eq!(params.get(QueryParam::FilterQuery), Some("a:1"));
        assert_eq!(params.get_all(QueryParam::FilterQuery), vec!["a:1", "b:2"]);
    }

    #[test]
    fn test_set_collapses_repeated_entries() {
        let mut params = SolrParams::new();
        params.add(QueryParam::FilterQuery, "a:1");
        params.add(QueryParam::FilterQuery, "b:2");
        params.set(QueryParam::FilterQuery, "c:3");

        assert_eq!(params.get_all(QueryParam::FilterQuery), vec!["c:3"]);
    }

    #[test]
    fn test_remove() {
        let mut params = SolrParams::new();
        params.set(QueryParam::BoostField, "upvotes");
        assert!(params.contains(QueryParam::BoostField));

        params.remove(QueryParam::BoostField);
        assert!(!params.contains(QueryParam::BoostField));
        assert!(params.is_empty());
    }

    #[test]
    fn test_to_json_repeated_params_become_arrays() {
        let mut params = SolrParams::new();
        params.set(QueryParam::Query, "ghost");
        params.add(QueryParam::FilterQuery, "a:1");
        params.add(QueryParam::FilterQuery, "b:2");

        let json = params.to_json();
        assert_eq!(json["q"], "ghost");
        assert_eq!(json["fq"], serde_json::json!(["a:1", "b:2"]));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(QueryParam::DefType.as_str(), "defType");
        assert_eq!(QueryParam::LowercaseOperators.as_str(), "lowercaseOperators");
        assert_eq!(QueryParam::BoostFunction.as_str(), "boost");
        assert_eq!(QueryParam::UserFields.to_string(), "uf");
    }
}
