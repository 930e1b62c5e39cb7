//! Driven port for resolving a user id against the user service.
//!
//! The domain owns the contract so the composition service stays
//! adapter-agnostic: production backs this port with an HTTP client, tests
//! with mocks. The port keeps the three outcomes separate by construction —
//! a resolved user, an explicitly absent user (`Ok(None)`), and a failed
//! lookup — so absence is never conflated with a transport fault.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::UserSummary;

/// Errors surfaced while calling the user service.
///
/// Absence of the user is not an error; it is the `Ok(None)` outcome of
/// [`UserLookup::user_by_id`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum UserLookupError {
    /// Network transport failed before receiving a response.
    #[error("user service transport failed: {message}")]
    Transport {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The call exceeded the configured timeout.
    #[error("user service timeout: {message}")]
    Timeout {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The response could not be decoded into the user projection.
    #[error("user service response decode failed: {message}")]
    Decode {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The adapter rejected the request before executing it.
    #[error("user lookup request invalid: {message}")]
    InvalidRequest {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl UserLookupError {
    /// Constructor for [`UserLookupError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Constructor for [`UserLookupError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Constructor for [`UserLookupError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Constructor for [`UserLookupError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Whether the user service itself was unreachable, as opposed to
    /// answering with something this service could not use.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for resolving a user id into the cross-service user projection.
///
/// One blocking call per invocation: the implementation runs the lookup to
/// completion or failure with no retry and no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fetch the user with `id` from the user service.
    ///
    /// Returns `Ok(None)` when the user service reports no such user.
    async fn user_by_id(&self, id: u64) -> Result<Option<UserSummary>, UserLookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_accept_str_messages() {
        let err = UserLookupError::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "user service transport failed: connection refused"
        );
    }

    #[test]
    fn unreachable_covers_transport_and_timeout_only() {
        assert!(UserLookupError::transport("x").is_unreachable());
        assert!(UserLookupError::timeout("x").is_unreachable());
        assert!(!UserLookupError::decode("x").is_unreachable());
        assert!(!UserLookupError::invalid_request("x").is_unreachable());
    }
}
