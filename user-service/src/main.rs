//! User service entry-point: seeds the registry and serves the REST surface.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::domain::UserRegistry;
use user_service::inbound::http::health::HealthState;
use user_service::seed::{DEFAULT_RECORD_COUNT, DEFAULT_SEED, generate_users};
use user_service::server::{ServerConfig, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";

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
    let record_count = env_parsed("RECORD_COUNT", DEFAULT_RECORD_COUNT);
    let seed = env_parsed("SEED", DEFAULT_SEED);

    let registry = web::Data::new(UserRegistry::new(generate_users(record_count, seed)));
    info!(records = registry.len(), %bind_addr, "user registry seeded");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(registry, health_state, &ServerConfig { bind_addr })?;
    server.await
}
