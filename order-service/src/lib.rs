//! Order query service library.
//!
//! The service owns a fixed, in-memory set of order records generated once at
//! startup. Plain order queries are local reads; the one cross-service path
//! enriches an order with its owning user's record, fetched from the user
//! service over HTTP through the [`domain::ports::UserLookup`] port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod seed;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
