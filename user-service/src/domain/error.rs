//! Domain-level error type.
//!
//! Kept transport agnostic; the inbound HTTP adapter maps each variant to a
//! status code and a JSON envelope.

use thiserror::Error as ThisError;

/// Failure categories surfaced by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The requested record does not exist in the registry.
    #[error("user {id} not found")]
    NotFound {
        /// Identifier that failed to resolve.
        id: u64,
    },
    /// An unexpected failure inside the service.
    #[error("{message}")]
    Internal {
        /// Human-readable description, not shown to clients verbatim.
        message: String,
    },
}

impl Error {
    /// Convenience constructor for a registry miss.
    #[must_use]
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Convenience constructor for internal failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_missing_id() {
        let err = Error::not_found(42);
        assert_eq!(err.to_string(), "user 42 not found");
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn internal_reports_a_stable_code() {
        assert_eq!(Error::internal("boom").code(), "internal_error");
    }
}
