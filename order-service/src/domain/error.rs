//! Domain-level error type for the order side.
//!
//! Transport agnostic: the inbound HTTP adapter maps each code to a status.
//! Keeping the taxonomy here means the composition service can distinguish a
//! missing record from a broken upstream without knowing anything about HTTP.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested resource does not exist.
    NotFound,
    /// The user service could not be reached or timed out.
    UpstreamUnavailable,
    /// The user service answered with a payload this service cannot decode.
    UpstreamInvalid,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload carried to the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "not_found")]
    code: ErrorCode,
    #[schema(example = "order 999 not found")]
    message: String,
}

impl Error {
    /// Create a new error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamUnavailable`].
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamInvalid`].
    pub fn upstream_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamInvalid, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn codes_serialize_as_snake_case() {
        let err = Error::upstream_unavailable("user service unreachable");
        let value = serde_json::to_value(err).expect("error should serialize");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("upstream_unavailable")
        );
    }

    #[test]
    fn display_uses_the_message() {
        let err = Error::not_found("order 999 not found");
        assert_eq!(err.to_string(), "order 999 not found");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
