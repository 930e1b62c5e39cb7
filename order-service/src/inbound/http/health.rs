//! Health endpoints: liveness & readiness probes.
//!
//! Readiness reports this process only; it deliberately does not probe the
//! user service, whose availability is surfaced per-request as a 502 on the
//! composition path. State tracking lives in the shared [`service_health`]
//! crate.

use actix_web::{HttpResponse, get, web};

pub use service_health::HealthState;

/// Readiness probe.
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

/// Liveness probe.
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
