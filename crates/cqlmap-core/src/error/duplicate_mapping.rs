use super::Error;

/// Error when two mappings are registered for the same persistent type.
#[derive(Debug)]
pub(super) struct DuplicateMapping {
    persistent_class: Box<str>,
}

impl std::error::Error for DuplicateMapping {}

impl core::fmt::Display for DuplicateMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate mapping: `{}` is already mapped",
            self.persistent_class
        )
    }
}

impl Error {
    /// Creates a duplicate mapping error for the given persistent type name.
    pub fn duplicate_mapping(persistent_class: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateMapping(DuplicateMapping {
            persistent_class: persistent_class.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate mapping error.
    pub fn is_duplicate_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateMapping(_))
    }
}
