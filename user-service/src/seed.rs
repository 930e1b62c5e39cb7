//! Deterministic user record generation.
//!
//! The registry is seeded once at process start. Generation is driven by a
//! seeded ChaCha RNG so the same seed value always produces an identical
//! record set, which keeps local runs and tests reproducible.

use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::internet::raw::{SafeEmail, Username};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::User;

/// Default number of records generated at startup.
pub const DEFAULT_RECORD_COUNT: usize = 20;

/// Default RNG seed used when none is configured.
pub const DEFAULT_SEED: u64 = 20;

/// Generate `count` user records with ids assigned densely from `1..=count`.
///
/// The same `(count, seed)` pair always yields the same records.
#[must_use]
pub fn generate_users(count: usize, seed: u64) -> Vec<User> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut users = Vec::with_capacity(count);

    for index in 1..=count {
        users.push(User {
            id: index as u64,
            username: Username(EN).fake_with_rng(&mut rng),
            email: SafeEmail(EN).fake_with_rng(&mut rng),
            first_name: FirstName(EN).fake_with_rng(&mut rng),
            last_name: LastName(EN).fake_with_rng(&mut rng),
            city: CityName(EN).fake_with_rng(&mut rng),
        });
    }

    users
}
