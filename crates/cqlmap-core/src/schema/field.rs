use indexmap::IndexMap;

/// Name of the field property that flags a field as part of the partition
/// key.
pub const PRIMARY_KEY: &str = "primarykey";

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name, as the application knows it.
    pub name: String,

    /// The name of the column in the table.
    pub column: String,

    /// The storage type of the column, e.g. `text` or `uuid`.
    pub ty: String,

    /// Any additional attributes given for the field.
    pub properties: IndexMap<String, String>,
}

impl Field {
    pub fn new(name: impl Into<String>, column: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            ty: ty.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the column name.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Gets the storage type.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// True if the field's `primarykey` property reads as `true`.
    ///
    /// Only a case-insensitive `"true"` counts. A missing or malformed value
    /// is `false`.
    pub fn is_primary_key(&self) -> bool {
        parse_bool(self.property(PRIMARY_KEY))
    }
}

fn parse_bool(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}
