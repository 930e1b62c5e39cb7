//! HTTP adapter mapping for domain errors.
//!
//! This is the single error-mapping boundary: the composition service only
//! produces typed domain errors, and status-code policy lives here. A missing
//! record is 404, an unreachable or unusable user service is 502 — never the
//! opaque 500 the naive propagation would give.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UpstreamUnavailable | ErrorCode::UpstreamInvalid => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code(), ErrorCode::InternalError) {
        // Do not leak implementation details to clients.
        Error::internal("Internal server error")
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(detail = %self.message(), "internal error surfaced at the HTTP boundary");
        }
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}
