//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The day-advance rules never produce one of these. They come from the
/// advisory checks a caller runs on an item after construction or after an
/// update.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_wrap_the_message() {
        assert_eq!(
            DomainError::validation("name cannot be empty"),
            DomainError::Validation("name cannot be empty".to_string())
        );
        assert_eq!(
            DomainError::validation("sell_in -1 is negative").to_string(),
            "validation failed: sell_in -1 is negative"
        );
    }
}
