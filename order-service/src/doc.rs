//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Order, OrderStatus, OrderWithUser, UserSummary};

/// OpenAPI document for the order REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order service API",
        description = "Order queries, including enrichment with user data fetched from the user service.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::get_order_with_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Order, OrderStatus, OrderWithUser, UserSummary, Error, ErrorCode)),
    tags(
        (name = "orders", description = "Order queries and user enrichment"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi as _;

    #[test]
    fn document_lists_the_public_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/orders"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/orders/{id}"));
        assert!(
            paths
                .iter()
                .any(|p| p.as_str() == "/api/orders/{id}/with-user")
        );
    }
}
