use cqlmap_core::schema::{Keyspace, TypeRef};
use cqlmap_core::{Mapping, Schema};

fn mapping(persistent_class: &str, table: &str) -> Mapping {
    let mut builder = Mapping::builder();
    builder
        .key_class("String")
        .persistent_class(persistent_class)
        .keyspace(Keyspace::new("app"))
        .core_name(table);
    builder.build().unwrap()
}

#[test]
fn mappings_are_found_by_persistent_class() {
    let schema = Schema::builder()
        .mapping(mapping("User", "users"))
        .mapping(mapping("Order", "orders"))
        .build()
        .unwrap();

    assert_eq!(schema.len(), 2);
    assert!(!schema.is_empty());

    let users = schema.mapping_for(&TypeRef::new("User")).unwrap();
    assert_eq!(users.core_name(), "users");

    assert!(schema.mapping_for(&TypeRef::new("Missing")).is_none());

    let tables: Vec<_> = schema.mappings().map(|mapping| mapping.core_name()).collect();
    assert_eq!(tables, ["users", "orders"]);
}

#[test]
fn duplicate_persistent_class_is_rejected() {
    let err = Schema::builder()
        .mapping(mapping("User", "users"))
        .mapping(mapping("User", "users_v2"))
        .build()
        .unwrap_err();

    assert!(err.is_duplicate_mapping());
    assert_eq!(
        err.to_string(),
        "duplicate mapping: `User` is already mapped"
    );
}

#[test]
fn empty_schema() {
    let schema = Schema::builder().build().unwrap();
    assert!(schema.is_empty());
    assert_eq!(schema.mappings().len(), 0);
}

#[test]
fn failed_build_keeps_collected_mappings() {
    let mut builder = Schema::builder();
    builder
        .mapping(mapping("User", "users"))
        .mapping(mapping("User", "users_v2"))
        .mapping(mapping("Order", "orders"));

    assert!(builder.build().unwrap_err().is_duplicate_mapping());

    // Nothing was drained, so the duplicate is still reported.
    assert!(builder.build().unwrap_err().is_duplicate_mapping());
}

#[test]
fn successful_build_drains_the_builder() {
    let mut builder = Schema::builder();
    builder.mapping(mapping("User", "users"));

    assert_eq!(builder.build().unwrap().len(), 1);
    assert!(builder.build().unwrap().is_empty());
}
