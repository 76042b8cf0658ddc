//! Integration tests for the collection registry.

use chrono::{DateTime, Utc};
use pilum::prelude::*;

fn build_collection() -> Result<SolrCollection> {
    let mut collection = SolrCollection::new("beatmaps");
    collection.add_field("title", FieldKind::Text)?;
    collection.add_field("uploaded", FieldKind::Date)?;
    collection.add_field("rating", FieldKind::Float)?;
    collection.add_multi_valued_field("tags", FieldKind::Text)?;
    Ok(collection)
}

#[test]
fn test_collection_produces_typed_fields() -> Result<()> {
    let collection = build_collection()?;

    let title = collection.field::<String>("title")?;
    let uploaded = collection.field::<DateTime<Utc>>("uploaded")?;
    let rating = collection.field::<f32>("rating")?;
    let tags = collection.field::<Vec<String>>("tags")?;

    assert_eq!(title.name(), "title");
    assert_eq!(uploaded.collection(), "beatmaps");
    assert_eq!(rating.to_text(), "rating");
    assert_eq!(tags.to_text(), "tags");

    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() {
    let collection = build_collection().unwrap();
    let error = collection.field::<String>("missing").unwrap_err();

    match error {
        PilumError::Field(message) => {
            assert!(message.contains("missing"));
            assert!(message.contains("beatmaps"));
        }
        other => panic!("Expected field error, got {other:?}"),
    }
}

#[test]
fn test_kind_and_arity_are_enforced() {
    let collection = build_collection().unwrap();

    // Wrong kind.
    assert!(collection.field::<i64>("rating").is_err());
    // Scalar access to a multivalued field, and the reverse.
    assert!(collection.field::<String>("tags").is_err());
    assert!(collection.field::<Vec<String>>("title").is_err());
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut collection = build_collection().unwrap();
    let error = collection.add_field("title", FieldKind::Int).unwrap_err();

    match error {
        PilumError::Schema(message) => assert!(message.contains("title")),
        other => panic!("Expected schema error, got {other:?}"),
    }
}

#[test]
fn test_fields_from_registry_compose_into_filters() -> Result<()> {
    let collection = build_collection()?;
    let title = collection.field::<String>("title")?;
    let tags = collection.field::<Vec<String>>("tags")?;

    let filter = title.eq("ghost").and(&tags.eq("chroma")).not();
    assert_eq!(filter.to_text(), "NOT (title:ghost AND tags:chroma)");

    Ok(())
}
