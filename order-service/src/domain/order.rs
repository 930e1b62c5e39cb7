//! Order record model and the per-request composite.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserSummary;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted but not yet picked up for processing.
    Pending,
    /// Being prepared for shipment.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
}

/// An order record held by the registry.
///
/// ## Invariants
/// - `id` is a positive integer, unique within the registry, and immutable
///   once generated.
/// - `user_id` references a user by id but is **not** referentially enforced;
///   it may point at a user that no longer exists on the user side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Stable order identifier, assigned densely from 1 upwards.
    #[schema(example = 1)]
    pub id: u64,
    /// Foreign key naming the owning user.
    #[schema(example = 5)]
    pub user_id: u64,
    /// Ordered product name.
    #[schema(example = "Widget")]
    pub product: String,
    /// Ordered quantity, always positive.
    #[schema(example = 3)]
    pub quantity: u32,
    /// Unit price with two fractional digits.
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,
    /// Current lifecycle state.
    pub status: OrderStatus,
}

/// Per-request composite joining an order to its owning user.
///
/// Never stored: constructed by the composition service, returned to the
/// caller, then discarded. `user` is `None` when the order's `user_id` does
/// not resolve on the user side — a deliberate, explicit state distinct from
/// a transport failure, which surfaces as an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithUser {
    /// The locally stored order.
    pub order: Order,
    /// The owning user, when the remote lookup resolved one.
    pub user: Option<UserSummary>,
}
