//! Typed field references and value rendering.

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::query::expression::Expression;
use crate::query::filter::Filter;

/// Schema kind of a field's scalar value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Text values.
    Text,
    /// 32-bit integer values.
    Int,
    /// 64-bit integer values.
    Long,
    /// 32-bit floating point values.
    Float,
    /// 64-bit floating point values.
    Double,
    /// Boolean values.
    Bool,
    /// Date values.
    Date,
}

impl FieldKind {
    /// Get the name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Int => "int",
            FieldKind::Long => "long",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::Bool => "bool",
            FieldKind::Date => "date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value type usable in field comparisons.
///
/// Values render in the engine's lexical form; no escaping is applied
/// beyond the optional quoting of [`Filter::Simple`].
pub trait FieldValue {
    /// Schema kind corresponding to this value type.
    const KIND: FieldKind;

    /// Render the value in the engine's lexical form.
    fn to_value_string(&self) -> String;
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value_string(&self) -> String {
        self.clone()
    }
}

impl FieldValue for i32 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value_string(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for i64 {
    const KIND: FieldKind = FieldKind::Long;

    fn to_value_string(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for f32 {
    const KIND: FieldKind = FieldKind::Float;

    // Whole numbers keep their decimal point (2.0, not 2).
    fn to_value_string(&self) -> String {
        format!("{self:?}")
    }
}

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Double;

    fn to_value_string(&self) -> String {
        format!("{self:?}")
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value_string(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Date;

    // The engine expects whole-second UTC dates with a Z suffix.
    fn to_value_string(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Declared value type of a field: a scalar type, or a multivalued
/// sequence of one.
pub trait FieldValueType {
    /// The scalar element type the comparison operators accept.
    type Value: FieldValue;

    /// Whether the declared type is a multivalued sequence.
    const MULTI_VALUED: bool;
}

impl FieldValueType for String {
    type Value = String;
    const MULTI_VALUED: bool = false;
}

impl FieldValueType for i32 {
    type Value = i32;
    const MULTI_VALUED: bool = false;
}

impl FieldValueType for i64 {
    type Value = i64;
    const MULTI_VALUED: bool = false;
}

impl FieldValueType for f32 {
    type Value = f32;
    const MULTI_VALUED: bool = false;
}

impl FieldValueType for f64 {
    type Value = f64;
    const MULTI_VALUED: bool = false;
}

impl FieldValueType for bool {
    type Value = bool;
    const MULTI_VALUED: bool = false;
}

impl FieldValueType for DateTime<Utc> {
    type Value = DateTime<Utc>;
    const MULTI_VALUED: bool = false;
}

impl<T: FieldValue> FieldValueType for Vec<T> {
    type Value = T;
    const MULTI_VALUED: bool = true;
}

/// A typed reference to a field of a collection.
///
/// Produced by [`SolrCollection`](crate::schema::SolrCollection), which
/// owns existence and typing validation; the reference itself is
/// immutable. As an [`Expression`] a field renders its bare name.
pub struct SolrField<T> {
    collection: String,
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SolrField<T> {
    pub(crate) fn new<C, N>(collection: C, name: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        SolrField {
            collection: collection.into(),
            name: name.into(),
            _marker: PhantomData,
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the owning collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Match any document with a value for this field.
    pub fn any(&self) -> Filter {
        Filter::Simple {
            field: self.name.clone(),
            value: "*".to_string(),
            quote: false,
        }
    }

    /// Sort ascending by this field.
    pub fn asc(&self) -> SortClause {
        SortClause::new(&self.name, SortOrder::Asc)
    }

    /// Sort descending by this field.
    pub fn desc(&self) -> SortClause {
        SortClause::new(&self.name, SortOrder::Desc)
    }
}

impl<T: FieldValueType> SolrField<T> {
    /// Match documents whose field equals the value.
    ///
    /// The value is quoted when it contains whitespace. On a multivalued
    /// field this matches documents where any element equals the value.
    pub fn eq(&self, value: impl Into<T::Value>) -> Filter {
        Filter::Simple {
            field: self.name.clone(),
            value: value.into().to_value_string(),
            quote: true,
        }
    }

    /// Like [`SolrField::eq`], but the value is never quoted.
    pub fn eq_unquoted(&self, value: impl Into<T::Value>) -> Filter {
        Filter::Simple {
            field: self.name.clone(),
            value: value.into().to_value_string(),
            quote: false,
        }
    }

    /// Match documents whose field is strictly less than the value.
    pub fn less(&self, value: impl Into<T::Value>) -> Filter {
        self.range(format!("{{* TO {}}}", value.into().to_value_string()))
    }

    /// Match documents whose field is at most the value.
    pub fn less_eq(&self, value: impl Into<T::Value>) -> Filter {
        self.range(format!("[* TO {}]", value.into().to_value_string()))
    }

    /// Match documents whose field is strictly greater than the value.
    pub fn greater(&self, value: impl Into<T::Value>) -> Filter {
        self.range(format!("{{{} TO *}}", value.into().to_value_string()))
    }

    /// Match documents whose field is at least the value.
    pub fn greater_eq(&self, value: impl Into<T::Value>) -> Filter {
        self.range(format!("[{} TO *]", value.into().to_value_string()))
    }

    // Range values contain spaces and must never be quoted.
    fn range(&self, value: String) -> Filter {
        Filter::Simple {
            field: self.name.clone(),
            value,
            quote: false,
        }
    }
}

impl<T> Clone for SolrField<T> {
    fn clone(&self) -> Self {
        SolrField {
            collection: self.collection.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

// Manual Debug implementation to avoid a bound on the phantom type.
impl<T> fmt::Debug for SolrField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolrField")
            .field("collection", &self.collection)
            .field("name", &self.name)
            .finish()
    }
}

impl<T> Expression for SolrField<T> {
    fn to_text(&self) -> String {
        self.name.clone()
    }
}

/// Sort direction of a [`SortClause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Get the wire form of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A single ordering criterion of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortClause {
    field: String,
    order: SortOrder,
}

impl SortClause {
    /// Create a sort clause for a field name.
    pub fn new<S: Into<String>>(field: S, order: SortOrder) -> Self {
        SortClause {
            field: field.into(),
            order,
        }
    }

    /// Sort by the relevance score pseudo-field.
    pub fn score(order: SortOrder) -> Self {
        SortClause::new("score", order)
    }
}

impl Expression for SortClause {
    fn to_text(&self) -> String {
        format!("{} {}", self.field, self.order.as_str())
    }
}
