//! Deterministic order record generation.
//!
//! Mirrors the user service's seeding discipline: a seeded ChaCha RNG drives
//! generation so the same seed always produces the same registry. `user_id`
//! values are drawn from the user service's default id pool but are not
//! referentially enforced — a smaller user registry leaves dangling
//! references, which the composition path must tolerate.

use fake::Fake;
use fake::faker::company::raw::Buzzword;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use crate::domain::{Order, OrderStatus};

/// Default number of records generated at startup.
pub const DEFAULT_RECORD_COUNT: usize = 20;

/// Default RNG seed used when none is configured.
pub const DEFAULT_SEED: u64 = 20;

/// Id pool the `user_id` foreign key is drawn from, matching the user
/// service's default record count.
const USER_ID_POOL: u64 = 20;

/// Price bounds in cents: [10.00, 1000.00).
const MIN_PRICE_CENTS: i64 = 1_000;
const MAX_PRICE_CENTS: i64 = 99_999;

const PRODUCT_KINDS: &[&str] = &[
    "Chair", "Table", "Lamp", "Keyboard", "Gloves", "Shoes", "Watch", "Bottle", "Hat", "Plate",
];

/// Generate `count` order records with ids assigned densely from `1..=count`.
///
/// The same `(count, seed)` pair always yields the same records.
#[must_use]
pub fn generate_orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for index in 1..=count {
        orders.push(Order {
            id: index as u64,
            user_id: rng.random_range(1..=USER_ID_POOL),
            product: product_name(&mut rng),
            quantity: rng.random_range(1..=9),
            price: Decimal::new(rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS), 2),
            status: status(&mut rng),
        });
    }

    orders
}

fn product_name(rng: &mut ChaCha8Rng) -> String {
    let adjective: String = Buzzword(EN).fake_with_rng(rng);
    let kind = PRODUCT_KINDS.choose(rng).copied().unwrap_or("Widget");
    format!("{adjective} {kind}")
}

fn status(rng: &mut ChaCha8Rng) -> OrderStatus {
    match rng.random_range(0..4u8) {
        0 => OrderStatus::Pending,
        1 => OrderStatus::Processing,
        2 => OrderStatus::Shipped,
        _ => OrderStatus::Delivered,
    }
}
