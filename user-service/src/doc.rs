//! OpenAPI documentation configuration.
//!
//! The generated specification backs Swagger UI in debug builds and can be
//! exported for external tooling.

use utoipa::OpenApi;

use crate::domain::User;

/// OpenAPI document for the user directory REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Read-only access to the in-memory user registry.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User)),
    tags(
        (name = "users", description = "User record queries"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;
