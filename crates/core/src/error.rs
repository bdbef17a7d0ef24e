//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Queries over users, products and orders never fail; this type covers the
/// few places where an outside value has to be interpreted (configuration,
/// parsing).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value was not one of the recognised options.
    #[error("unsupported {kind}: {value}")]
    Unsupported { kind: &'static str, value: String },
}

impl DomainError {
    pub fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unsupported {
            kind,
            value: value.into(),
        }
    }
}
