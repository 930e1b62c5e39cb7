//! Domain types for the user directory.
//!
//! These types are transport agnostic. The inbound adapter maps them to HTTP
//! responses; the registry is populated once at startup and never mutated.

mod error;
mod registry;
mod user;

pub use error::Error;
pub use registry::UserRegistry;
pub use user::User;
