//! Order query service, including the one cross-service read path.

use std::sync::Arc;

use tracing::warn;

use super::ports::{UserLookup, UserLookupError};
use super::{Error, Order, OrderRegistry, OrderWithUser};

/// Query service over the order registry with user enrichment.
///
/// Dependencies are constructor-injected; the service holds no per-request
/// state, so repeated calls with unchanged registries return equal results.
#[derive(Clone)]
pub struct OrderQueryService {
    registry: Arc<OrderRegistry>,
    users: Arc<dyn UserLookup>,
}

impl OrderQueryService {
    /// Create a service over the given registry and user lookup port.
    pub fn new(registry: Arc<OrderRegistry>, users: Arc<dyn UserLookup>) -> Self {
        Self { registry, users }
    }

    /// All orders in generation order.
    #[must_use]
    pub fn list_orders(&self) -> Vec<Order> {
        self.registry.list().to_vec()
    }

    /// One order by id, `None` when it does not exist.
    #[must_use]
    pub fn order_by_id(&self, id: u64) -> Option<Order> {
        self.registry.get(id).cloned()
    }

    /// Join an order to its owning user across the service boundary.
    ///
    /// The order lookup is local and short-circuits: a missing order returns
    /// `Ok(None)` without any remote call. Otherwise the user lookup runs to
    /// completion; an absent user (dangling `user_id`) yields a composite
    /// with `user: None`, while a failed lookup propagates as a typed error
    /// for the HTTP boundary to map.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] with an upstream code when the user service is
    /// unreachable or answers with an undecodable payload.
    pub async fn order_with_user(&self, order_id: u64) -> Result<Option<OrderWithUser>, Error> {
        let Some(order) = self.registry.get(order_id).cloned() else {
            return Ok(None);
        };

        let user = self
            .users
            .user_by_id(order.user_id)
            .await
            .map_err(|err| map_lookup_error(order.user_id, &err))?;
        if user.is_none() {
            warn!(order_id, user_id = order.user_id, "order references a user that no longer exists");
        }

        Ok(Some(OrderWithUser { order, user }))
    }
}

fn map_lookup_error(user_id: u64, err: &UserLookupError) -> Error {
    if err.is_unreachable() {
        Error::upstream_unavailable(format!("user service unreachable for user {user_id}: {err}"))
    } else {
        match err {
            UserLookupError::Decode { .. } => {
                Error::upstream_invalid(format!("user service returned an unusable payload: {err}"))
            }
            other => Error::internal(format!("user lookup failed for user {user_id}: {other}")),
        }
    }
}
