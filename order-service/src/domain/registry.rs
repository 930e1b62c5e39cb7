//! In-memory order registry.

use super::Order;

/// Read-only store of order records, populated exactly once at startup.
///
/// Lookup is a linear scan by id equality; the record set is small and fixed,
/// so nothing here warrants indexing. Immutable after construction, hence
/// safely shared between request workers.
#[derive(Debug, Clone)]
pub struct OrderRegistry {
    orders: Vec<Order>,
}

impl OrderRegistry {
    /// Build a registry over an already generated record set.
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// All records in generation order (stable across calls).
    #[must_use]
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Look up one record by id, returning `None` when it does not exist.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
