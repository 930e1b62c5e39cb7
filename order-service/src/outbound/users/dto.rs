//! Wire representation of a user record as served by the user service.

use serde::Deserialize;

use crate::domain::UserSummary;

/// User payload as it appears on the wire.
///
/// The user service serves more fields than this (display name, city, and so
/// on); only the projected subset is part of the cross-service contract, so
/// unknown fields are deliberately ignored rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserRecordDto {
    id: u64,
    username: String,
    email: String,
}

impl From<UserRecordDto> for UserSummary {
    fn from(value: UserRecordDto) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_server_side_fields_outside_the_projection() {
        let body = r#"{
            "id": 5,
            "username": "alice",
            "email": "alice@example.com",
            "firstName": "Alice",
            "lastName": "Lovelace",
            "city": "Edinburgh"
        }"#;

        let dto: UserRecordDto = serde_json::from_str(body).expect("payload should decode");
        let user = UserSummary::from(dto);
        assert_eq!(user.id, 5);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn rejects_payloads_missing_projected_fields() {
        let body = r#"{ "id": 5, "username": "alice" }"#;
        assert!(serde_json::from_str::<UserRecordDto>(body).is_err());
    }
}
