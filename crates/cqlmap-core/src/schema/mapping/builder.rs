use super::{field_by_name, has_primary_key_defined, Mapping, PartitionKeys};
use crate::schema::{CompositeKey, Field, Keyspace, TypeRef};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Assembles a [`Mapping`].
///
/// The builder is the only place a mapping can change. Everything set here
/// is copied into the mapping by [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    key_class: Option<TypeRef>,

    persistent_class: Option<TypeRef>,

    keyspace: Option<Keyspace>,

    composite_key: Option<CompositeKey>,

    fields: Vec<Field>,

    properties: IndexMap<String, String>,

    core_name: Option<String>,

    partition_keys: PartitionKeys,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_class(&mut self, key_class: impl Into<TypeRef>) -> &mut Self {
        self.key_class = Some(key_class.into());
        self
    }

    pub fn persistent_class(&mut self, persistent_class: impl Into<TypeRef>) -> &mut Self {
        self.persistent_class = Some(persistent_class.into());
        self
    }

    pub fn keyspace(&mut self, keyspace: Keyspace) -> &mut Self {
        self.keyspace = Some(keyspace);
        self
    }

    /// Sets the table name.
    pub fn core_name(&mut self, core_name: impl Into<String>) -> &mut Self {
        self.core_name = Some(core_name.into());
        self
    }

    /// Sets the composite key and appends its fields after the fields added
    /// so far.
    ///
    /// Meant to be called at most once. Calling it again replaces the key
    /// but appends the new key's fields as well, without removing the old
    /// ones.
    pub fn composite_key(&mut self, key: CompositeKey) -> &mut Self {
        if let Some(previous) = &self.composite_key {
            log::warn!(
                "composite key `{}` replaced by `{}`; fields of both remain in the field list",
                previous.name,
                key.name
            );
        }

        self.fields.extend(key.fields.iter().cloned());
        self.composite_key = Some(key);
        self
    }

    /// Appends a field. Field names are not checked for uniqueness.
    pub fn field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Sets a table-level property, replacing any previous value.
    pub fn property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        field_by_name(&self.fields, name)
    }

    pub fn has_primary_key_defined(&self) -> bool {
        has_primary_key_defined(self.composite_key.as_ref(), &self.fields)
    }

    /// See [`Mapping::partition_key_fields`].
    ///
    /// The result is cached on first call and carried into every mapping
    /// built afterwards, even if more fields are added in between.
    pub fn partition_key_fields(&self) -> impl ExactSizeIterator<Item = &'_ Field> + '_ {
        self.partition_keys.fields(&self.fields)
    }

    /// Freezes the current state into a [`Mapping`].
    ///
    /// The key class, persistent class, keyspace, and core name must all
    /// have been set.
    pub fn build(&self) -> Result<Mapping> {
        let persistent_class = self
            .persistent_class
            .clone()
            .ok_or_else(|| Error::invalid_mapping("persistent class was never set"))?;

        let missing = |what: &str| {
            Error::invalid_mapping(format!("{what} was never set for `{persistent_class}`"))
        };

        let key_class = self.key_class.clone().ok_or_else(|| missing("key class"))?;
        let keyspace = self.keyspace.clone().ok_or_else(|| missing("keyspace"))?;
        let core_name = self.core_name.clone().ok_or_else(|| missing("core name"))?;

        log::debug!(
            "built mapping for `{}` -> {}.{} ({} field(s))",
            persistent_class,
            keyspace.name,
            core_name,
            self.fields.len()
        );

        Ok(Mapping {
            key_class,
            persistent_class,
            keyspace,
            composite_key: self.composite_key.clone(),
            fields: self.fields.clone(),
            properties: self.properties.clone(),
            core_name,
            partition_keys: self.partition_keys.clone(),
        })
    }
}
