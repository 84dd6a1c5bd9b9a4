// tests/support/helpers.rs
use super::mocks::{FixedClock, MemoryBlobStore, MemoryCatalog};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use craftstore::application::{
    carousel::{CarouselTiming, SlideRotationController},
    services::{ApplicationServices, ServiceDependencies},
};
use craftstore::domain::carousel::SlideDeck;
use craftstore::infrastructure::carts::{CartLimits, InMemoryCartStore};
use craftstore::presentation::http::{
    routes::build_router,
    state::{AdminToken, HttpSettings, HttpState},
};
use serde_json::Value;
use std::sync::Arc;

pub const ADMIN_TOKEN: &str = "test-admin-token";

#[derive(Debug, Clone, Default)]
pub struct TestOptions {
    pub maintenance_mode: bool,
    pub admin_token: Option<&'static str>,
    pub upload_max_bytes: Option<usize>,
    pub cart_limits: Option<CartLimits>,
}

impl TestOptions {
    pub fn secured() -> Self {
        Self {
            admin_token: Some(ADMIN_TOKEN),
            ..Self::default()
        }
    }
}

pub struct TestApp {
    pub router: axum::Router,
    pub catalog: Arc<MemoryCatalog>,
    pub blobs: Arc<MemoryBlobStore>,
    pub state: HttpState,
}

pub fn build_services(
    catalog: &Arc<MemoryCatalog>,
    blobs: &Arc<MemoryBlobStore>,
    upload_max_bytes: usize,
) -> Arc<ApplicationServices> {
    build_services_with_carts(catalog, blobs, upload_max_bytes, CartLimits::default())
}

pub fn build_services_with_carts(
    catalog: &Arc<MemoryCatalog>,
    blobs: &Arc<MemoryBlobStore>,
    upload_max_bytes: usize,
    cart_limits: CartLimits,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(ServiceDependencies {
        categories: catalog.clone(),
        products: catalog.clone(),
        reviews: catalog.clone(),
        carts: Arc::new(InMemoryCartStore::with_limits(cart_limits)),
        blobs: blobs.clone(),
        clock: Arc::new(FixedClock::default()),
        upload_max_bytes,
    }))
}

/// Must run inside a tokio runtime: the hero carousel starts its autoplay task.
pub fn build_test_app_with(catalog: Arc<MemoryCatalog>, options: TestOptions) -> TestApp {
    let upload_max_bytes = options.upload_max_bytes.unwrap_or(1024 * 1024);
    let blobs = Arc::new(MemoryBlobStore::default());
    let services = build_services_with_carts(
        &catalog,
        &blobs,
        upload_max_bytes,
        options.cart_limits.unwrap_or_default(),
    );

    let hero = SlideRotationController::start(SlideDeck::storefront(), CarouselTiming::default())
        .expect("hero carousel");

    let state = HttpState {
        services,
        hero: Arc::new(hero),
        settings: Arc::new(HttpSettings {
            maintenance_mode: options.maintenance_mode,
            admin_token: options.admin_token.map(AdminToken::new),
            allowed_origins: vec!["http://localhost:3000".into()],
            media_root: None,
            upload_max_bytes,
        }),
    };

    TestApp {
        router: build_router(state.clone()),
        catalog,
        blobs,
        state,
    }
}

pub fn build_test_app(options: TestOptions) -> TestApp {
    build_test_app_with(Arc::new(MemoryCatalog::new()), options)
}

pub async fn make_test_router() -> axum::Router {
    build_test_app(TestOptions::default()).router
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn with_admin(mut req: Request<Body>) -> Request<Body> {
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {ADMIN_TOKEN}").parse().unwrap(),
    );
    req
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
/// Returns the parsed body for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
