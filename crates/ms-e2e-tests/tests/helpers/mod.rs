//! Shared test harness for E2E integration tests.
//!
//! Builds all three service routers in-process and drives them with
//! `tower::ServiceExt::oneshot`. The person service runs on its in-memory store.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ms_common::Person;
use ms_person_api::state::AppState;

/// End-to-end harness holding one router per service.
pub struct TestHarness {
    /// Person service state (in-memory, no DB).
    pub person_state: AppState,
    pub person_router: Router,
    pub cart_router: Router,
    pub product_router: Router,
}

impl TestHarness {
    /// Harness with an empty person store.
    pub fn new() -> Self {
        Self::with_persons(Vec::new())
    }

    /// Harness with the person store pre-populated.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> Self {
        let person_state = AppState::with_persons(persons);
        Self {
            person_router: ms_person_api::routes::build_router(person_state.clone()),
            person_state,
            cart_router: ms_cart_api::routes::build_router(),
            product_router: ms_product_api::routes::build_router(),
        }
    }

    /// POST /persons with an arbitrary JSON body.
    /// Returns (HTTP status code, raw response body).
    pub async fn post_person_raw(&self, body: &serde_json::Value) -> (StatusCode, Vec<u8>) {
        let request = Request::post("/persons")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        send(&self.person_router, request).await
    }

    /// POST /persons. Returns (HTTP status code, response JSON body).
    pub async fn submit(&self, id: i64, name: &str, age: i32) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "id": id, "name": name, "age": age });
        let (status, bytes) = self.post_person_raw(&body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// GET /persons, decoded into wire records.
    pub async fn list(&self) -> Vec<Person> {
        let request = Request::get("/persons").body(Body::empty()).unwrap();
        let (status, bytes) = send(&self.person_router, request).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&bytes).unwrap()
    }

    /// GET `uri` on the cart service, returned as text.
    pub async fn cart_get(&self, uri: &str) -> (StatusCode, String) {
        get_text(&self.cart_router, uri).await
    }

    /// GET `uri` on the product service, returned as text.
    pub async fn product_get(&self, uri: &str) -> (StatusCode, String) {
        get_text(&self.product_router, uri).await
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_text(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(router, request).await;
    (status, String::from_utf8(bytes).unwrap())
}
