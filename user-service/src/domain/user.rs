//! User record model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record held by the directory.
///
/// ## Invariants
/// - `id` is a positive integer, unique within the registry, and immutable
///   once generated.
///
/// Remote consumers are only guaranteed `id`, `username`, and `email`; the
/// display fields (`first_name`, `last_name`, `city`) are part of this
/// service's own representation and may be ignored cross-service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier, assigned densely from 1 upwards.
    #[schema(example = 5)]
    pub id: u64,
    /// Unique login name.
    #[schema(example = "alice")]
    pub username: String,
    /// Contact email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Given name shown on profile pages.
    pub first_name: String,
    /// Family name shown on profile pages.
    pub last_name: String,
    /// Home city shown on profile pages.
    pub city: String,
}
