//! User directory service library.
//!
//! The service owns a fixed, in-memory set of user records generated once at
//! startup and exposes them through a read-only REST surface. Nothing mutates
//! the registry after generation, so request handling needs no locking.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod seed;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
