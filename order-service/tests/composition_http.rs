//! Cross-service integration coverage for the composition path.
//!
//! Runs the real user service app on a random local port and points the real
//! reqwest-backed lookup adapter at it, so the full chain — order registry,
//! remote lookup, composite assembly, HTTP error mapping — is exercised
//! without doubles.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use reqwest::Url;
use rust_decimal::Decimal;
use serde_json::Value;

use order_service::domain::{Order, OrderQueryService, OrderRegistry, OrderStatus, ErrorCode};
use order_service::inbound::http::HttpState;
use order_service::outbound::users::UserServiceClient;
use user_service::domain::{User, UserRegistry};
use user_service::inbound::http::health::HealthState;

fn alice() -> User {
    User {
        id: 5,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Lovelace".to_owned(),
        city: "Edinburgh".to_owned(),
    }
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            user_id: 5,
            product: "Widget".to_owned(),
            quantity: 3,
            price: Decimal::new(1999, 2),
            status: OrderStatus::Pending,
        },
        // Dangling reference: no user 99 exists on the user side.
        Order {
            id: 2,
            user_id: 99,
            product: "Gadget".to_owned(),
            quantity: 1,
            price: Decimal::new(4950, 2),
            status: OrderStatus::Shipped,
        },
    ]
}

fn start_user_service() -> actix_test::TestServer {
    let registry = web::Data::new(UserRegistry::new(vec![alice()]));
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    actix_test::start(move || user_service::server::app(registry.clone(), health.clone()))
}

fn composition_service(user_service_url: &str) -> OrderQueryService {
    let base = Url::parse(user_service_url).expect("test server URL should parse");
    let client =
        UserServiceClient::new(base, Duration::from_secs(5)).expect("client should build");
    OrderQueryService::new(Arc::new(OrderRegistry::new(orders())), Arc::new(client))
}

#[actix_web::test]
async fn composes_an_order_with_a_live_remote_user() {
    let srv = start_user_service();
    let service = composition_service(&srv.url("/"));

    let composite = service
        .order_with_user(1)
        .await
        .expect("composition should succeed")
        .expect("order 1 exists");

    assert_eq!(composite.order.product, "Widget");
    let user = composite.user.expect("user 5 exists remotely");
    assert_eq!(user.id, 5);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
}

#[actix_web::test]
async fn a_dangling_user_reference_is_an_absent_user_not_an_error() {
    let srv = start_user_service();
    let service = composition_service(&srv.url("/"));

    let composite = service
        .order_with_user(2)
        .await
        .expect("remote 404 is the absent outcome")
        .expect("order 2 exists");

    assert_eq!(composite.order.product, "Gadget");
    assert!(composite.user.is_none());
}

#[actix_web::test]
async fn a_missing_order_never_reaches_the_wire() {
    // No user service running at all: if the composition tried a remote
    // call, it would fail. A registry miss must short-circuit first.
    let service = composition_service("http://127.0.0.1:9/");

    let result = service
        .order_with_user(999)
        .await
        .expect("a registry miss is not an error");
    assert!(result.is_none());
}

#[actix_web::test]
async fn a_stopped_user_service_surfaces_as_upstream_unavailable() {
    let srv = start_user_service();
    let url = srv.url("/");
    srv.stop().await;

    let service = composition_service(&url);
    let err = service
        .order_with_user(1)
        .await
        .expect_err("transport failure must propagate");
    assert_eq!(err.code(), ErrorCode::UpstreamUnavailable);
}

#[actix_web::test]
async fn the_full_http_surface_composes_end_to_end() {
    let user_srv = start_user_service();
    let service = composition_service(&user_srv.url("/"));

    let state = web::Data::new(HttpState::new(Arc::new(service)));
    let health = web::Data::new(order_service::inbound::http::health::HealthState::new());
    health.mark_ready();
    let order_srv =
        actix_test::start(move || order_service::server::app(state.clone(), health.clone()));

    let mut response = order_srv
        .get("/api/orders/1/with-user")
        .send()
        .await
        .expect("request should complete");
    assert!(response.status().is_success());

    let value: Value = response.json().await.expect("response JSON");
    assert_eq!(
        value.pointer("/order/price").and_then(Value::as_f64),
        Some(19.99)
    );
    assert_eq!(
        value.pointer("/user/username").and_then(Value::as_str),
        Some("alice")
    );
}
