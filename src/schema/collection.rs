//! Collection registry producing typed field references.

use ahash::AHashMap;

use crate::error::{PilumError, Result};
use crate::schema::field::{FieldKind, FieldValue, FieldValueType, SolrField};

/// A registered field of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldEntry {
    kind: FieldKind,
    multi_valued: bool,
}

/// A collection schema: the set of known fields with their kinds.
///
/// The collection is the sole producer of [`SolrField`] references.
/// The typed accessors validate existence, kind, and arity, so a
/// reference obtained here matches the declared schema; the rendered
/// query text itself is never validated against the live engine.
#[derive(Debug, Clone)]
pub struct SolrCollection {
    /// Collection name.
    name: String,
    /// Map of field names to their registrations.
    fields: AHashMap<String, FieldEntry>,
    /// Ordered list of field names (for consistent ordering).
    field_names: Vec<String>,
}

impl SolrCollection {
    /// Create a new empty collection.
    pub fn new<S: Into<String>>(name: S) -> Self {
        SolrCollection {
            name: name.into(),
            fields: AHashMap::new(),
            field_names: Vec::new(),
        }
    }

    /// Get the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a single-valued field.
    pub fn add_field<S: Into<String>>(&mut self, name: S, kind: FieldKind) -> Result<()> {
        self.insert_field(name.into(), kind, false)
    }

    /// Register a multivalued field.
    pub fn add_multi_valued_field<S: Into<String>>(
        &mut self,
        name: S,
        kind: FieldKind,
    ) -> Result<()> {
        self.insert_field(name.into(), kind, true)
    }

    fn insert_field(&mut self, name: String, kind: FieldKind, multi_valued: bool) -> Result<()> {
        if name.is_empty() {
            return Err(PilumError::schema("Field name cannot be empty"));
        }

        if self.fields.contains_key(&name) {
            return Err(PilumError::schema(format!(
                "Field '{name}' already exists"
            )));
        }

        self.fields.insert(name.clone(), FieldEntry { kind, multi_valued });
        self.field_names.push(name);

        Ok(())
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all field names in the order they were added.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the collection has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a typed reference to a field.
    ///
    /// The requested type must match the registered kind and arity:
    /// `field::<i32>("upvotes")` for a scalar, `field::<Vec<String>>`
    /// for a multivalued field.
    pub fn field<T: FieldValueType>(&self, name: &str) -> Result<SolrField<T>> {
        let entry = self.fields.get(name).ok_or_else(|| {
            PilumError::field(format!(
                "Field '{name}' is not defined in collection '{}'",
                self.name
            ))
        })?;

        let kind = <T::Value as FieldValue>::KIND;
        if entry.kind != kind {
            return Err(PilumError::field(format!(
                "Field '{name}' is declared as {}, not {kind}",
                entry.kind
            )));
        }

        if entry.multi_valued != T::MULTI_VALUED {
            let declared = if entry.multi_valued {
                "multivalued"
            } else {
                "single-valued"
            };
            return Err(PilumError::field(format!(
                "Field '{name}' is {declared}"
            )));
        }

        Ok(SolrField::new(self.name.clone(), name))
    }

    /// Get a typed reference to a multivalued field by its element type.
    pub fn multi_valued_field<T>(&self, name: &str) -> Result<SolrField<Vec<T>>>
    where
        T: FieldValue,
        Vec<T>: FieldValueType,
    {
        self.field::<Vec<T>>(name)
    }
}
