use super::Field;

/// An explicit multi-column primary key.
///
/// When a mapping is given a composite key, the key's fields are appended to
/// the mapping's own field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    /// Name of the key, usually the name of the key type.
    pub name: String,

    /// Fields composing the partition key, in key order.
    pub fields: Vec<Field>,

    /// Clustering columns, in key order.
    pub clustering_keys: Vec<ClusteringKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringKey {
    /// Name of the clustering column.
    pub column: String,

    pub order: ClusteringOrder,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusteringOrder {
    #[default]
    Asc,
    Desc,
}

impl CompositeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            clustering_keys: vec![],
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_clustering_key(mut self, column: impl Into<String>, order: ClusteringOrder) -> Self {
        self.clustering_keys.push(ClusteringKey {
            column: column.into(),
            order,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn clustering_keys(&self) -> &[ClusteringKey] {
        &self.clustering_keys
    }
}

impl ClusteringOrder {
    pub fn is_desc(self) -> bool {
        matches!(self, ClusteringOrder::Desc)
    }
}
