//! Error types for parsing catalog enumerations from text

use thiserror::Error;

/// Errors raised when text does not name a known catalog value.
///
/// Lookups themselves never fail; only the `FromStr` impls on the
/// enumerations report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown ship property: {0}")]
    UnknownProperty(String),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl CatalogError {
    pub(crate) fn variant(kind: &'static str, value: &str) -> Self {
        CatalogError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::UnknownProperty("wingspan".into()).to_string(),
            "unknown ship property: wingspan"
        );
        assert_eq!(
            CatalogError::variant("damage type", "sonic").to_string(),
            "unknown damage type: sonic"
        );
    }
}
