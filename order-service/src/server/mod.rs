//! Server construction and wiring.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use url::Url;

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::ApiDoc;
use crate::domain::{OrderQueryService, OrderRegistry};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::orders::{get_order, get_order_with_user, list_orders};
use crate::inbound::http::state::HttpState;
use crate::outbound::users::UserServiceClient;

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the user service (the only service-discovery input).
    pub user_service_url: Url,
    /// Per-request timeout applied to user lookups.
    pub lookup_timeout: Duration,
}

/// Build the Actix application serving the order API.
///
/// Exposed so tests can run the exact production app in-process with any
/// [`HttpState`], including ones backed by lookup doubles.
pub fn app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    let api = web::scope("/api")
        .service(list_orders)
        .service(get_order)
        .service(get_order_with_user);

    let app = App::new()
        .app_data(state)
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server and mark the service ready once bound.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the lookup client cannot be constructed or
/// binding the socket fails.
pub fn create_server(
    registry: Arc<OrderRegistry>,
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let users = UserServiceClient::new(config.user_service_url.clone(), config.lookup_timeout)
        .map_err(|e| std::io::Error::other(format!("user lookup client construction failed: {e}")))?;
    let state = web::Data::new(HttpState::new(Arc::new(OrderQueryService::new(
        registry,
        Arc::new(users),
    ))));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || app(state.clone(), server_health_state.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
