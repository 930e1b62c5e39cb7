//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the domain service and stay testable with in-memory doubles.

use std::sync::Arc;

use crate::domain::OrderQueryService;

/// State shared by all order handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The order query service, including the composition path.
    pub orders: Arc<OrderQueryService>,
}

impl HttpState {
    /// Bundle the order query service for handler injection.
    #[must_use]
    pub fn new(orders: Arc<OrderQueryService>) -> Self {
        Self { orders }
    }
}
