use super::{Mapping, Schema, TypeRef};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::{collections::HashSet, sync::Arc};

/// Collects frozen mappings into a [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    mappings: Vec<Mapping>,
}

impl Builder {
    pub fn new() -> Self {
        Self { mappings: vec![] }
    }

    pub fn mapping(&mut self, mapping: Mapping) -> &mut Self {
        self.mappings.push(mapping);
        self
    }

    /// Builds the schema, draining the mappings collected so far.
    ///
    /// Fails if two mappings describe the same persistent type. The builder
    /// keeps its mappings when it fails.
    pub fn build(&mut self) -> Result<Schema> {
        let mut seen = HashSet::<&TypeRef>::new();

        for mapping in &self.mappings {
            if !seen.insert(mapping.persistent_class()) {
                return Err(Error::duplicate_mapping(mapping.persistent_class().name()));
            }
        }

        let mappings: IndexMap<TypeRef, Arc<Mapping>> = self
            .mappings
            .drain(..)
            .map(|mapping| (mapping.persistent_class().clone(), Arc::new(mapping)))
            .collect();

        log::debug!("built schema with {} mapping(s)", mappings.len());

        Ok(Schema { mappings })
    }
}
