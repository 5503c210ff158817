//! Describes how persistent types map onto CQL tables.
//!
//! Mappings are either assembled by hand with [`Mapping::builder`] or loaded
//! from a TOML document with a [`Loader`], then collected into a [`Schema`]
//! that the persistence layer reads from.

mod loader;
pub use loader::Loader;

pub use cqlmap_core::schema::{
    ClusteringKey, ClusteringOrder, CompositeKey, Field, Keyspace, Replication, TypeRef,
    PRIMARY_KEY,
};
pub use cqlmap_core::{err, schema, Error, Mapping, Result, Schema};
