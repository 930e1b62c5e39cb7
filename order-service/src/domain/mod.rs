//! Domain types and services for the order side.
//!
//! Everything here is transport agnostic: the inbound adapter maps the error
//! type to HTTP statuses, and the outbound adapter implements the
//! [`ports::UserLookup`] port against the user service's wire format.

mod error;
mod order;
pub mod ports;
mod registry;
mod service;
mod user;

pub use error::{Error, ErrorCode};
pub use order::{Order, OrderStatus, OrderWithUser};
pub use registry::OrderRegistry;
pub use service::OrderQueryService;
pub use user::UserSummary;
