//! Order service entry-point: seeds the registry, wires the user lookup
//! client, and serves the REST surface.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use order_service::domain::OrderRegistry;
use order_service::inbound::http::health::HealthState;
use order_service::outbound::users::UserServiceClient;
use order_service::seed::{DEFAULT_RECORD_COUNT, DEFAULT_SEED, generate_orders};
use order_service::server::{ServerConfig, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_USER_SERVICE_URL: &str = "http://127.0.0.1:8081/";

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, "unparseable value, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;
    let user_service_url: Url = env::var("USER_SERVICE_URL")
        .unwrap_or_else(|_| DEFAULT_USER_SERVICE_URL.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid USER_SERVICE_URL: {e}")))?;
    let record_count = env_parsed("RECORD_COUNT", DEFAULT_RECORD_COUNT);
    let seed = env_parsed("SEED", DEFAULT_SEED);

    let registry = Arc::new(OrderRegistry::new(generate_orders(record_count, seed)));
    info!(
        records = registry.len(),
        %bind_addr,
        user_service = %user_service_url,
        "order registry seeded"
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig {
        bind_addr,
        user_service_url,
        lookup_timeout: order_service::outbound::users::DEFAULT_LOOKUP_TIMEOUT,
    };
    let server = create_server(registry, health_state, &config)?;
    server.await
}
