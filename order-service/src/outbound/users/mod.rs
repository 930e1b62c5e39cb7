//! Reqwest-backed adapter for the user lookup port.

mod dto;
mod http_client;

pub use http_client::{DEFAULT_LOOKUP_TIMEOUT, UserServiceClient};
