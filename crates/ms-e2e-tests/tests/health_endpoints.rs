//! E2E tests for the cart and product liveness endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::TestHarness;

#[tokio::test]
async fn e2e_cart_health() {
    let h = TestHarness::new();
    let (status, body) = h.cart_get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cart Service is up and running!");
}

#[tokio::test]
async fn e2e_cart_status() {
    let h = TestHarness::new();
    let (status, body) = h.cart_get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cart Service is operational.");
}

#[tokio::test]
async fn e2e_product_health() {
    let h = TestHarness::new();
    let (status, body) = h.product_get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Product Service is up and running!");
}

/// Health responses do not change across calls or after person writes.
#[tokio::test]
async fn e2e_health_is_stable() {
    let h = TestHarness::new();
    h.submit(1, "Alice", 30).await;

    for _ in 0..3 {
        assert_eq!(h.cart_get("/health").await.1, ms_cart_api::routes::health::HEALTH_MESSAGE);
        assert_eq!(h.cart_get("/").await.1, ms_cart_api::routes::health::STATUS_MESSAGE);
        assert_eq!(
            h.product_get("/health").await.1,
            ms_product_api::routes::health::HEALTH_MESSAGE
        );
    }
}

/// The services share no routes: each only answers its own paths.
#[tokio::test]
async fn e2e_services_are_independent() {
    let h = TestHarness::new();
    assert_eq!(h.product_get("/").await.0, StatusCode::NOT_FOUND);
    assert_eq!(h.cart_get("/persons").await.0, StatusCode::NOT_FOUND);
}
