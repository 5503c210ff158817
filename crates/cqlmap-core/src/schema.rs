mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, PRIMARY_KEY};

mod key;
pub use key::{ClusteringKey, ClusteringOrder, CompositeKey};

mod keyspace;
pub use keyspace::{Keyspace, Replication};

pub mod mapping;
pub use mapping::Mapping;

mod type_ref;
pub use type_ref::TypeRef;

use indexmap::IndexMap;
use std::sync::Arc;

/// Every mapping known to the persistence layer, keyed by the persistent
/// type it describes.
///
/// Mappings are frozen and reference counted so the schema can hand them out
/// to any number of readers.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    mappings: IndexMap<TypeRef, Arc<Mapping>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the mapping for the given persistent type, if one was
    /// registered.
    pub fn mapping_for(&self, persistent_class: &TypeRef) -> Option<&Arc<Mapping>> {
        self.mappings.get(persistent_class)
    }

    /// Iterates the mappings in registration order.
    pub fn mappings(&self) -> impl ExactSizeIterator<Item = &Arc<Mapping>> + '_ {
        self.mappings.values()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
