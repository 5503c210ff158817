use cqlmap_core::schema::{CompositeKey, Field, Keyspace, PRIMARY_KEY};
use cqlmap_core::Mapping;

fn builder() -> cqlmap_core::schema::mapping::Builder {
    let mut builder = Mapping::builder();
    builder
        .key_class("String")
        .persistent_class("User")
        .keyspace(Keyspace::new("app"))
        .core_name("users");
    builder
}

fn field(name: &str, primary_key: Option<&str>) -> Field {
    let field = Field::new(name, name, "text");
    match primary_key {
        Some(value) => field.with_property(PRIMARY_KEY, value),
        None => field,
    }
}

#[test]
fn empty_mapping_has_no_primary_key() {
    let mapping = builder().build().unwrap();
    assert!(!mapping.has_primary_key_defined());
}

#[test]
fn unflagged_fields_define_no_primary_key() {
    let mut builder = builder();
    builder
        .field(field("id", None))
        .field(field("email", Some("false")))
        .field(field("name", Some("yes")))
        .field(field("age", Some("1")));

    assert!(!builder.has_primary_key_defined());
    assert!(!builder.build().unwrap().has_primary_key_defined());
}

#[test]
fn one_flagged_field_defines_primary_key() {
    let mut builder = builder();
    builder
        .field(field("email", Some("false")))
        .field(field("id", Some("True")));

    assert!(builder.build().unwrap().has_primary_key_defined());
}

#[test]
fn composite_key_always_defines_primary_key() {
    let key = CompositeKey::new("UserKey")
        .with_field(field("a", None))
        .with_field(field("b", Some("false")));

    let mut builder = builder();
    builder.composite_key(key);

    let mapping = builder.build().unwrap();
    assert!(mapping.has_primary_key_defined());
    assert_eq!(mapping.composite_key().map(|key| key.name()), Some("UserKey"));
}

#[test]
fn empty_composite_key_still_defines_primary_key() {
    let mut builder = builder();
    builder.composite_key(CompositeKey::new("Empty"));

    let mapping = builder.build().unwrap();
    assert!(mapping.has_primary_key_defined());
    assert!(mapping.fields().is_empty());
}
