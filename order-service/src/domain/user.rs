//! Client-side projection of a user record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The slice of a user record this service relies on.
///
/// The user service holds a richer representation; only these fields are part
/// of the cross-service contract, and anything else it returns is ignored by
/// the lookup adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Stable user identifier.
    #[schema(example = 5)]
    pub id: u64,
    /// Unique login name.
    #[schema(example = "alice")]
    pub username: String,
    /// Contact email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let user = UserSummary {
            id: 5,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
        };
        let json = serde_json::to_string(&user).expect("summary should serialize");
        let decoded: UserSummary = serde_json::from_str(&json).expect("summary should deserialize");
        assert_eq!(decoded, user);
    }
}
