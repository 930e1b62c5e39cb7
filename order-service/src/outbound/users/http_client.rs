//! Reqwest-backed user lookup adapter.
//!
//! This adapter owns transport details only: endpoint construction, timeout
//! and HTTP error mapping, and JSON decoding into the domain projection. A
//! remote 404 is mapped to the port's explicit absent outcome, never to an
//! error, so callers can tell "no such user" from "user service down".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::UserRecordDto;
use crate::domain::UserSummary;
use crate::domain::ports::{UserLookup, UserLookupError};

/// Default timeout applied to each lookup request.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// User lookup adapter performing one HTTP GET per invocation.
pub struct UserServiceClient {
    client: Client,
    base_url: Url,
}

impl UserServiceClient {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn user_endpoint(&self, id: u64) -> Result<Url, UserLookupError> {
        self.base_url
            .join(&format!("api/users/{id}"))
            .map_err(|err| {
                UserLookupError::invalid_request(format!("cannot build user endpoint: {err}"))
            })
    }
}

#[async_trait]
impl UserLookup for UserServiceClient {
    async fn user_by_id(&self, id: u64) -> Result<Option<UserSummary>, UserLookupError> {
        let endpoint = self.user_endpoint(id)?;
        debug!(user_id = id, %endpoint, "looking up user");

        let response = self
            .client
            .get(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The user service signals absence with 404; surface it as the
            // explicit absent outcome rather than a failure.
            return Ok(None);
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_user(body.as_ref()).map(Some)
    }
}

fn parse_user(body: &[u8]) -> Result<UserSummary, UserLookupError> {
    let decoded: UserRecordDto = serde_json::from_slice(body).map_err(|error| {
        UserLookupError::decode(format!("invalid user payload: {error}"))
    })?;
    Ok(decoded.into())
}

fn map_transport_error(error: reqwest::Error) -> UserLookupError {
    if error.is_timeout() {
        UserLookupError::timeout(error.to_string())
    } else {
        UserLookupError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserLookupError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserLookupError::timeout(message)
        }
        _ if status.is_client_error() => UserLookupError::invalid_request(message),
        _ => UserLookupError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers; the live request path is
    //! exercised by the cross-service integration test.

    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_the_projected_user_fields() {
        let body = br#"{"id":5,"username":"alice","email":"alice@example.com","city":"Berlin"}"#;
        let user = parse_user(body).expect("payload should decode");
        assert_eq!(user.id, 5);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn undecodable_payloads_map_to_decode_errors() {
        let error = parse_user(b"<html>oops</html>").expect_err("decode should fail");
        assert!(matches!(error, UserLookupError::Decode { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT)]
    fn timeout_statuses_map_to_timeout(#[case] status: StatusCode) {
        let error = map_status_error(status, b"");
        assert!(matches!(error, UserLookupError::Timeout { .. }));
    }

    #[test]
    fn server_errors_map_to_transport() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"boom");
        assert!(matches!(error, UserLookupError::Transport { .. }));
        assert!(error.to_string().contains("status 500"));
    }

    #[test]
    fn unexpected_client_errors_map_to_invalid_request() {
        let error = map_status_error(StatusCode::FORBIDDEN, b"{}");
        assert!(matches!(error, UserLookupError::InvalidRequest { .. }));
    }

    #[test]
    fn status_message_includes_a_bounded_body_preview() {
        let long_body = "x".repeat(500);
        let error = map_status_error(StatusCode::BAD_GATEWAY, long_body.as_bytes());
        let rendered = error.to_string();
        assert!(rendered.contains("status 502"));
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn endpoint_paths_are_joined_against_the_base_url() {
        let client = UserServiceClient::new(
            Url::parse("http://127.0.0.1:8081/").expect("static URL"),
            DEFAULT_LOOKUP_TIMEOUT,
        )
        .expect("client should build");

        let endpoint = client.user_endpoint(5).expect("endpoint should build");
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8081/api/users/5");
    }
}
