//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn redacted_message(error: &Error) -> String {
    match error {
        // Do not leak internal detail to clients.
        Error::Internal { .. } => "Internal server error".to_owned(),
        other => other.to_string(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Internal { message } = self {
            error!(detail = %message, "internal error surfaced at the HTTP boundary");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "code": self.code(),
            "message": redacted_message(self),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use rstest::rstest;
    use serde_json::Value;

    fn body_json(response: HttpResponse) -> Value {
        let bytes = response
            .into_body()
            .try_into_bytes()
            .expect("body should be in memory");
        serde_json::from_slice(&bytes).expect("error payload should be JSON")
    }

    #[rstest]
    #[case::not_found(Error::not_found(7), StatusCode::NOT_FOUND, "not_found")]
    #[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR, "internal_error")]
    fn variants_map_to_expected_status_and_code(
        #[case] err: Error,
        #[case] expected_status: StatusCode,
        #[case] expected_code: &str,
    ) {
        assert_eq!(err.status_code(), expected_status);
        let value = body_json(err.error_response());
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some(expected_code)
        );
    }

    #[test]
    fn not_found_keeps_its_message_in_the_envelope() {
        let value = body_json(Error::not_found(7).error_response());
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("user 7 not found")
        );
    }

    #[test]
    fn internal_detail_is_redacted() {
        let err = Error::internal("db exploded at 0x1234");
        let value = body_json(err.error_response());
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
    }
}
