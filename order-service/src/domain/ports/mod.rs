//! Driven ports the order domain depends on.

mod user_lookup;

pub use user_lookup::{UserLookup, UserLookupError};

#[cfg(test)]
pub use user_lookup::MockUserLookup;
