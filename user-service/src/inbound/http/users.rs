//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{id}
//! ```
//!
//! Pure local reads against the registry; a miss is an explicit 404, never a
//! `null` success body.

use actix_web::{get, web};

use crate::domain::{Error, User, UserRegistry};
use crate::inbound::http::ApiResult;

/// List every user record in generation order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users in generation order", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(registry: web::Data<UserRegistry>) -> web::Json<Vec<User>> {
    web::Json(registry.list().to_vec())
}

/// Fetch one user record by id.
///
/// The order service consumes the 404 here as its "user absent" signal, so the
/// status must stay distinct from transport-level failures.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    registry: web::Data<UserRegistry>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    registry
        .get(id)
        .cloned()
        .map(web::Json)
        .ok_or_else(|| Error::not_found(id))
}
