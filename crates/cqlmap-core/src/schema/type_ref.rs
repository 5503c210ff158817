use std::{fmt, sync::Arc};

/// Opaque handle naming an application type.
///
/// Mappings use it for their key class and persistent class. Only identity
/// matters: two handles are equal when their names are equal. Resolving the
/// name back to behavior is left to the persistence layer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef {
    name: Arc<str>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().into(),
        }
    }

    /// Derives a handle from a Rust type's name.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TypeRef({})", self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.name)
    }
}
