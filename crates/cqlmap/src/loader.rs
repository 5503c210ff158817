use cqlmap_core::schema::{
    mapping, ClusteringOrder, CompositeKey, Field, Keyspace, Replication, Schema,
};
use cqlmap_core::{err, Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Loads mappings from a TOML document.
///
/// A document declares keyspaces, composite keys, and classes. Each class
/// becomes one mapping:
///
/// ```toml
/// [[keyspace]]
/// name = "app"
/// replication = { strategy = "simple", factor = 3 }
///
/// [[class]]
/// name = "User"
/// key_class = "String"
/// keyspace = "app"
/// table = "users"
/// fields = [
///     { name = "id", column = "id", type = "uuid", primarykey = true },
///     { name = "email", type = "text" },
/// ]
/// ```
///
/// Attributes of a field other than `name`, `column`, and `type` become
/// string properties of the field. A class whose `key_class` names a `[[key]]`
/// is given that composite key.
#[derive(Debug, Default)]
pub struct Loader {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(default, rename = "keyspace")]
    keyspaces: Vec<KeyspaceDef>,

    #[serde(default, rename = "key")]
    keys: Vec<KeyDef>,

    #[serde(default, rename = "class")]
    classes: Vec<ClassDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyspaceDef {
    name: String,

    #[serde(default = "default_durable_writes")]
    durable_writes: bool,

    #[serde(default)]
    replication: ReplicationDef,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
enum ReplicationDef {
    Simple {
        #[serde(default = "default_replication_factor")]
        factor: u32,
    },
    NetworkTopology {
        data_centers: IndexMap<String, u32>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyDef {
    name: String,

    #[serde(default)]
    fields: Vec<FieldDef>,

    #[serde(default)]
    clustering: Vec<ClusteringDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClusteringDef {
    column: String,

    #[serde(default)]
    order: OrderDef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OrderDef {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassDef {
    name: String,

    key_class: String,

    keyspace: String,

    table: String,

    #[serde(default)]
    properties: IndexMap<String, toml::Value>,

    #[serde(default)]
    fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize)]
struct FieldDef {
    name: String,

    /// Defaults to the field name
    column: Option<String>,

    #[serde(rename = "type")]
    ty: String,

    #[serde(flatten)]
    properties: IndexMap<String, toml::Value>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            table_name_prefix: None,
        }
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Reads and loads the document at `path`.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Schema> {
        let path = path.as_ref();

        let src = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(err!("failed to read {}", path.display())))?;

        self.load_str(&src)
            .map_err(|e| e.context(err!("failed to load {}", path.display())))
    }

    pub fn load_str(&self, src: &str) -> Result<Schema> {
        let mut schema = Schema::builder();

        for builder in self.builders(src)? {
            schema.mapping(builder.build()?);
        }

        schema.build()
    }

    /// Parses the document into one unfrozen builder per class, in document
    /// order.
    pub fn builders(&self, src: &str) -> Result<Vec<mapping::Builder>> {
        let document: Document = toml::from_str(src).map_err(|e| {
            Error::from(anyhow::Error::from(e)).context(err!("failed to parse mapping document"))
        })?;

        let builders = document
            .classes
            .iter()
            .map(|class| {
                self.builder_for(&document, class)
                    .map_err(|e| e.context(err!("class `{}`", class.name)))
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("parsed {} class mapping(s)", builders.len());

        Ok(builders)
    }

    fn builder_for(&self, document: &Document, class: &ClassDef) -> Result<mapping::Builder> {
        let keyspace = document
            .keyspaces
            .iter()
            .find(|keyspace| keyspace.name == class.keyspace)
            .ok_or_else(|| {
                Error::invalid_mapping(format!("undeclared keyspace `{}`", class.keyspace))
            })?;

        let core_name = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{}", class.table),
            None => class.table.clone(),
        };

        let mut builder = mapping::Builder::new();
        builder
            .key_class(class.key_class.as_str())
            .persistent_class(class.name.as_str())
            .keyspace(keyspace.to_keyspace())
            .core_name(core_name);

        for (key, value) in &class.properties {
            builder.property(key.as_str(), property_value(value));
        }

        for field in &class.fields {
            builder.field(field.to_field());
        }

        if let Some(key) = document.keys.iter().find(|key| key.name == class.key_class) {
            builder.composite_key(key.to_composite_key());
        }

        Ok(builder)
    }
}

impl KeyspaceDef {
    fn to_keyspace(&self) -> Keyspace {
        let replication = match &self.replication {
            ReplicationDef::Simple { factor } => Replication::Simple { factor: *factor },
            ReplicationDef::NetworkTopology { data_centers } => Replication::NetworkTopology {
                data_centers: data_centers.clone(),
            },
        };

        Keyspace::new(self.name.as_str())
            .with_durable_writes(self.durable_writes)
            .with_replication(replication)
    }
}

impl KeyDef {
    fn to_composite_key(&self) -> CompositeKey {
        let mut key = CompositeKey::new(self.name.as_str());

        for field in &self.fields {
            key = key.with_field(field.to_field());
        }

        for clustering in &self.clustering {
            let order = match clustering.order {
                OrderDef::Asc => ClusteringOrder::Asc,
                OrderDef::Desc => ClusteringOrder::Desc,
            };
            key = key.with_clustering_key(clustering.column.as_str(), order);
        }

        key
    }
}

impl FieldDef {
    fn to_field(&self) -> Field {
        let column = self.column.as_deref().unwrap_or(&self.name);
        let mut field = Field::new(self.name.as_str(), column, self.ty.as_str());

        for (key, value) in &self.properties {
            field = field.with_property(key.as_str(), property_value(value));
        }

        field
    }
}

impl Default for ReplicationDef {
    fn default() -> Self {
        ReplicationDef::Simple {
            factor: default_replication_factor(),
        }
    }
}

fn default_durable_writes() -> bool {
    true
}

fn default_replication_factor() -> u32 {
    1
}

/// Key of the single-entry table `toml` produces for a date or time that
/// passed through a flattened map.
const DATETIME_FIELD: &str = "$__toml_private_datetime";

/// Strings are taken as written; anything else uses its TOML rendering, so
/// `primarykey = true` reads the same as `primarykey = "true"`. Dates and
/// times render as written in the document.
fn property_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(value) => value.clone(),
        toml::Value::Datetime(datetime) => datetime.to_string(),
        toml::Value::Table(table) if table.len() == 1 => match table.get(DATETIME_FIELD) {
            Some(toml::Value::String(datetime)) => datetime.clone(),
            _ => value.to_string(),
        },
        value => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_values_are_stringified() {
        assert_eq!(property_value(&toml::Value::Boolean(true)), "true");
        assert_eq!(property_value(&toml::Value::Integer(864000)), "864000");
        assert_eq!(property_value(&toml::Value::String("TRUE".into())), "TRUE");
    }

    #[test]
    fn datetime_property_values_render_as_written() {
        let date: toml::value::Datetime = "1979-05-27".parse().unwrap();
        assert_eq!(property_value(&toml::Value::Datetime(date)), "1979-05-27");

        let mut wrapped = toml::value::Table::new();
        wrapped.insert(
            DATETIME_FIELD.to_string(),
            toml::Value::String("1979-05-27T07:32:00Z".into()),
        );
        assert_eq!(
            property_value(&toml::Value::Table(wrapped)),
            "1979-05-27T07:32:00Z"
        );
    }

    #[test]
    fn replication_defaults_to_one_simple_replica() {
        let def: KeyspaceDef = toml::from_str(r#"name = "app""#).unwrap();
        let keyspace = def.to_keyspace();

        assert!(keyspace.durable_writes);
        assert_eq!(keyspace.replication, Replication::Simple { factor: 1 });
    }
}
