//! Orders API handlers.
//!
//! ```text
//! GET /api/orders
//! GET /api/orders/{id}
//! GET /api/orders/{id}/with-user
//! ```
//!
//! The first two are pure local reads. The third is the cross-service
//! composition path: it blocks the request on one remote user lookup and
//! maps lookup failures to 502 through the shared error boundary.

use actix_web::{get, web};

use crate::domain::{Error, Order, OrderWithUser};
use crate::inbound::http::{ApiResult, HttpState};

/// List every order record in generation order.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Orders in generation order", body = [Order]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(state: web::Data<HttpState>) -> web::Json<Vec<Order>> {
    web::Json(state.orders.list_orders())
}

/// Fetch one order by id.
///
/// A registry miss is an explicit 404 with the error envelope, not a `null`
/// success body.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = u64, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order record", body = Order),
        (status = 404, description = "No order with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "getOrderById"
)]
#[get("/orders/{id}")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Order>> {
    let id = path.into_inner();
    state
        .orders
        .order_by_id(id)
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("order {id} not found")))
}

/// Fetch one order enriched with its owning user.
///
/// `user` is `null` when the order's `userId` no longer resolves on the user
/// side; a user service outage is a 502, keeping the two cases distinct.
#[utoipa::path(
    get,
    path = "/api/orders/{id}/with-user",
    params(("id" = u64, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order with its owning user", body = OrderWithUser),
        (status = 404, description = "No order with this id", body = Error),
        (status = 502, description = "User service unreachable or unusable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "getOrderWithUser"
)]
#[get("/orders/{id}/with-user")]
pub async fn get_order_with_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<OrderWithUser>> {
    let id = path.into_inner();
    state
        .orders
        .order_with_user(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("order {id} not found")))
}
