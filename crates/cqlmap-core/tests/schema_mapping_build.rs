use cqlmap_core::schema::{Keyspace, Replication, TypeRef};
use cqlmap_core::Mapping;

struct Order;

fn complete() -> cqlmap_core::schema::mapping::Builder {
    let mut builder = Mapping::builder();
    builder
        .key_class(TypeRef::of::<String>())
        .persistent_class(TypeRef::of::<Order>())
        .keyspace(Keyspace::new("shop").with_replication(Replication::Simple { factor: 3 }))
        .core_name("orders");
    builder
}

#[test]
fn build_exposes_configuration() {
    let mapping = complete().build().unwrap();

    assert_eq!(mapping.key_class(), &TypeRef::of::<String>());
    assert_eq!(mapping.persistent_class(), &TypeRef::of::<Order>());
    assert_eq!(mapping.keyspace().name(), "shop");
    assert_eq!(mapping.keyspace().replication.total_replicas(), 3);
    assert_eq!(mapping.core_name(), "orders");
    assert!(mapping.composite_key().is_none());
}

#[test]
fn later_core_name_wins() {
    let mut builder = complete();
    builder.core_name("orders_v2");

    assert_eq!(builder.build().unwrap().core_name(), "orders_v2");
}

#[test]
fn missing_property_is_none() {
    let mapping = complete().build().unwrap();
    assert_eq!(mapping.property("missing"), None);
    assert!(mapping.properties().is_empty());
}

#[test]
fn properties_are_replaced_by_key() {
    let mut builder = complete();
    builder
        .property("compaction", "SizeTieredCompactionStrategy")
        .property("gc_grace_seconds", "864000")
        .property("compaction", "LeveledCompactionStrategy");

    let mapping = builder.build().unwrap();
    assert_eq!(mapping.property("compaction"), Some("LeveledCompactionStrategy"));
    assert_eq!(mapping.property("gc_grace_seconds"), Some("864000"));
    assert_eq!(mapping.properties().len(), 2);
}

#[test]
fn missing_persistent_class_is_rejected() {
    let mut builder = Mapping::builder();
    builder
        .key_class("String")
        .keyspace(Keyspace::new("shop"))
        .core_name("orders");

    let err = builder.build().unwrap_err();
    assert!(err.is_invalid_mapping());
    assert_eq!(
        err.to_string(),
        "invalid mapping: persistent class was never set"
    );
}

#[test]
fn missing_parts_are_rejected() {
    let mut builder = Mapping::builder();
    builder.persistent_class("Order");

    let err = builder.build().unwrap_err();
    assert!(err.is_invalid_mapping());
    assert_eq!(
        err.to_string(),
        "invalid mapping: key class was never set for `Order`"
    );

    builder.key_class("String");
    let err = builder.build().unwrap_err();
    assert!(err.to_string().contains("keyspace was never set"));

    builder.keyspace(Keyspace::new("shop"));
    let err = builder.build().unwrap_err();
    assert!(err.to_string().contains("core name was never set"));

    builder.core_name("orders");
    assert!(builder.build().is_ok());
}

#[test]
fn builder_can_build_repeatedly() {
    let builder = complete();
    let a = builder.build().unwrap();
    let b = builder.build().unwrap();
    assert_eq!(a.core_name(), b.core_name());
}
