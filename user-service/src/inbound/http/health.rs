//! Health endpoints: liveness & readiness probes for orchestration and load
//! balancers. State tracking lives in the shared [`service_health`] crate.

use actix_web::{HttpResponse, get, web};

pub use service_health::HealthState;

/// Readiness probe. Returns 200 once the registry is seeded and the server can
/// handle traffic; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    service_health::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while the process is marked alive and 503 once
/// draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    service_health::probe_response(state.is_alive())
}
