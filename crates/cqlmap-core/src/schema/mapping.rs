mod builder;
pub use builder::Builder;

use super::{CompositeKey, Field, Keyspace, TypeRef};
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Name of the placeholder key column used when a mapping defines no key.
pub const DEFAULT_KEY: &str = "defaultId";

/// Describes how one persistent type maps onto a table.
///
/// A mapping is assembled with a [`Builder`] and is immutable afterwards, so
/// it can be shared freely between threads. The only state computed after
/// construction is the partition key subset, which is derived on first use
/// and then cached.
#[derive(Debug, Clone)]
pub struct Mapping {
    key_class: TypeRef,

    persistent_class: TypeRef,

    keyspace: Keyspace,

    /// Set when the key is defined by an explicit composite key rather than
    /// by flagging individual fields.
    composite_key: Option<CompositeKey>,

    /// Every column of the table, in declaration order. Fields of the
    /// composite key, if any, are included.
    fields: Vec<Field>,

    /// Table-level options.
    properties: IndexMap<String, String>,

    /// Name of the table.
    core_name: String,

    partition_keys: PartitionKeys,
}

/// Compute-once cache of the indices of the fields flagged as primary key.
///
/// Indices stay valid as fields are only ever appended. Once computed, the
/// cache is not refreshed.
#[derive(Debug, Default, Clone)]
pub(crate) struct PartitionKeys {
    indices: OnceLock<Vec<usize>>,
}

impl Mapping {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn key_class(&self) -> &TypeRef {
        &self.key_class
    }

    pub fn persistent_class(&self) -> &TypeRef {
        &self.persistent_class
    }

    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    pub fn composite_key(&self) -> Option<&CompositeKey> {
        self.composite_key.as_ref()
    }

    pub fn core_name(&self) -> &str {
        &self.core_name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the first field with the given name. Names are compared
    /// exactly.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        field_by_name(&self.fields, name)
    }

    /// The name of every field, in field order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    /// A placeholder `text` key column for mappings that define no key.
    ///
    /// Returns a new field on every call.
    pub fn default_key_field(&self) -> Field {
        Field::new(DEFAULT_KEY, DEFAULT_KEY, "text")
    }

    /// True if the mapping has a composite key, or if any field is flagged
    /// with `primarykey = true`.
    pub fn has_primary_key_defined(&self) -> bool {
        has_primary_key_defined(self.composite_key.as_ref(), &self.fields)
    }

    /// Iterate over the fields flagged with `primarykey = true`, in
    /// declaration order.
    ///
    /// Fields contributed by a composite key only count if they carry the
    /// flag themselves.
    pub fn partition_key_fields(&self) -> impl ExactSizeIterator<Item = &'_ Field> + '_ {
        self.partition_keys.fields(&self.fields)
    }
}

impl PartitionKeys {
    fn fields<'a>(&'a self, fields: &'a [Field]) -> impl ExactSizeIterator<Item = &'a Field> + 'a {
        self.indices(fields).iter().map(move |index| &fields[*index])
    }

    fn indices(&self, fields: &[Field]) -> &[usize] {
        self.indices.get_or_init(|| {
            let indices: Vec<_> = fields
                .iter()
                .enumerate()
                .filter(|(_, field)| field.is_primary_key())
                .map(|(index, _)| index)
                .collect();

            log::trace!(
                "computed partition key: {} of {} field(s)",
                indices.len(),
                fields.len()
            );

            indices
        })
    }
}

fn field_by_name<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|field| field.name == name)
}

fn has_primary_key_defined(composite_key: Option<&CompositeKey>, fields: &[Field]) -> bool {
    composite_key.is_some() || fields.iter().any(Field::is_primary_key)
}
