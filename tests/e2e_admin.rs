use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{TestOptions, build_test_app, get, json_body, json_request, with_admin};

#[tokio::test]
async fn admin_routes_require_the_configured_token() {
    let app = build_test_app(TestOptions::secured());

    let missing = app
        .router
        .clone()
        .oneshot(get("/api/v1/admin/dashboard"))
        .await
        .unwrap();
    support::assert_error_response(missing, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let mut wrong = get("/api/v1/admin/dashboard");
    wrong
        .headers_mut()
        .insert(header::AUTHORIZATION, "Bearer nope".parse().unwrap());
    let wrong = app.router.clone().oneshot(wrong).await.unwrap();
    support::assert_error_response(wrong, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let ok = app
        .router
        .oneshot(with_admin(get("/api/v1/admin/dashboard")))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
}

#[tokio::test]
async fn dashboard_counts_each_collection() {
    let app = build_test_app(TestOptions::secured());
    let category = app.catalog.seed_category("Rugs", "rugs");
    app.catalog.seed_product("Runner", 9900, Some(category.id));
    app.catalog.seed_product("Mat", 2900, None);
    app.catalog.seed_review("li", 5, None);

    let resp = app
        .router
        .oneshot(with_admin(get("/api/v1/admin/dashboard")))
        .await
        .unwrap();
    assert_eq!(
        json_body(resp).await,
        json!({ "products": 2, "categories": 1, "reviews": 1 })
    );
}

#[tokio::test]
async fn creating_a_category_derives_its_slug() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/categories",
        json!({ "name": "Home Decor!!" }),
    ));

    let resp = app.router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["slug"], "home-decor");
    assert_eq!(app.catalog.category_count(), 1);
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let app = build_test_app(TestOptions::secured());
    app.catalog.seed_category("Wall Art", "wall-art");

    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/categories",
        json!({ "name": "Wall  Art" }),
    ));
    let resp = app.router.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn renaming_a_category_keeps_its_slug() {
    let app = build_test_app(TestOptions::secured());
    let category = app.catalog.seed_category("Wall Art", "wall-art");

    let req = with_admin(json_request(
        Method::PUT,
        &format!("/api/v1/admin/categories/{}", category.id.0),
        json!({ "name": "Prints & Posters" }),
    ));
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Prints & Posters");
    assert_eq!(body["slug"], "wall-art");

    let req = with_admin(json_request(
        Method::PUT,
        &format!("/api/v1/admin/categories/{}", category.id.0),
        json!({ "name": "Prints & Posters", "slug": "prints" }),
    ));
    let body = json_body(app.router.oneshot(req).await.unwrap()).await;
    assert_eq!(body["slug"], "prints");
}

#[tokio::test]
async fn malformed_manual_slug_is_a_field_error() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/categories",
        json!({ "name": "Rugs", "slug": "Rugs--Mats" }),
    ));

    let resp = app.router.oneshot(req).await.unwrap();
    let body = support::assert_error_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert!(body["fields"]["slug"].is_string());
    assert_eq!(app.catalog.category_count(), 0);
}

#[tokio::test]
async fn updating_a_missing_category_is_404() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::PUT,
        "/api/v1/admin/categories/999",
        json!({ "name": "Ghost" }),
    ));
    let resp = app.router.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn new_product_requires_name_price_and_stock() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/products",
        json!({ "description": "no essentials" }),
    ));

    let resp = app.router.oneshot(req).await.unwrap();
    let body = support::assert_error_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(body["fields"]["name"], "Name is required");
    assert_eq!(body["fields"]["price"], "Price is required");
    assert_eq!(body["fields"]["stock"], "Stock is required");
    assert_eq!(app.catalog.product_count(), 0);
}

#[tokio::test]
async fn product_with_unknown_category_is_rejected() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/products",
        json!({ "name": "Bowl", "price": 18.0, "stock": 3, "category_id": 42 }),
    ));

    let resp = app.router.oneshot(req).await.unwrap();
    let body = support::assert_error_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(body["fields"]["category_id"], "category not found");
}

#[tokio::test]
async fn product_update_can_clear_its_category() {
    let app = build_test_app(TestOptions::secured());
    let category = app.catalog.seed_category("Rugs", "rugs");
    let product = app.catalog.seed_product("Runner", 9900, Some(category.id));

    let req = with_admin(json_request(
        Method::PUT,
        &format!("/api/v1/admin/products/{}", product.id.0),
        json!({ "category_id": null, "price": 89.5 }),
    ));
    let resp = app.router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = app.catalog.product(product.id.0).unwrap();
    assert!(stored.category_id.is_none());
    assert_eq!(stored.price.cents(), 8950);
    assert_eq!(stored.name.as_str(), "Runner");
}

#[tokio::test]
async fn unconfirmed_delete_is_a_silent_no_op() {
    let app = build_test_app(TestOptions::secured());
    let category = app.catalog.seed_category("Rugs", "rugs");
    let uri = format!("/api/v1/admin/categories/{}", category.id.0);

    let req = with_admin(
        Request::builder()
            .method(Method::DELETE)
            .uri(&uri)
            .body(Body::empty())
            .unwrap(),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.catalog.category_count(), 1);

    let req = with_admin(
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("{uri}?confirm=true"))
            .body(Body::empty())
            .unwrap(),
    );
    let resp = app.router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(app.catalog.category_count(), 0);
}

#[tokio::test]
async fn confirmed_delete_of_missing_review_is_404() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(
        Request::builder()
            .method(Method::DELETE)
            .uri("/api/v1/admin/reviews/77?confirm=true")
            .body(Body::empty())
            .unwrap(),
    );
    let resp = app.router.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn slug_preview_normalizes_the_title() {
    let app = build_test_app(TestOptions::secured());
    let resp = app
        .router
        .oneshot(with_admin(get(
            "/api/v1/admin/slugs/preview?title=%20%20--Hand%20Made%20Mugs!!",
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["slug"], "hand-made-mugs");
}

#[tokio::test]
async fn upload_stores_image_and_returns_url() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/admin/uploads")
            .header(header::CONTENT_TYPE, "image/png")
            .body(Body::from(&b"\x89PNG\r\n\x1a\nfake"[..]))
            .unwrap(),
    );

    let resp = app.router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert!(body["url"].as_str().unwrap().ends_with(".png"));
    assert_eq!(body["size"], 12);
    assert_eq!(app.blobs.len(), 1);
}

#[tokio::test]
async fn upload_rejects_unsupported_type_and_empty_body() {
    let app = build_test_app(TestOptions::secured());

    let pdf = with_admin(
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/admin/uploads")
            .header(header::CONTENT_TYPE, "application/pdf")
            .body(Body::from("%PDF"))
            .unwrap(),
    );
    let body = support::assert_error_response(
        app.router.clone().oneshot(pdf).await.unwrap(),
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert!(body["fields"]["file"].is_string());

    let empty = with_admin(
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/admin/uploads")
            .header(header::CONTENT_TYPE, "image/gif")
            .body(Body::empty())
            .unwrap(),
    );
    let body = support::assert_error_response(
        app.router.oneshot(empty).await.unwrap(),
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(body["fields"]["file"], "file is empty");
    assert_eq!(app.blobs.len(), 0);
}

#[tokio::test]
async fn product_images_can_be_set_and_cleared() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/products",
        json!({
            "name": "Vase",
            "price": 42.0,
            "stock": 2,
            "images": ["https://cdn.example.com/vase-1.png", "  ", "https://cdn.example.com/vase-2.png"]
        }),
    ));
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = json_body(resp).await["id"].as_i64().unwrap();
    let stored = app.catalog.product(id).unwrap();
    assert_eq!(stored.images.len(), 2);
    assert!(stored.image_url.is_none());

    let uri = format!("/api/v1/admin/products/{id}");
    let req = with_admin(json_request(
        Method::PUT,
        &uri,
        json!({ "image_url": "https://cdn.example.com/vase.png" }),
    ));
    let body = json_body(app.router.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(body["image_url"], "https://cdn.example.com/vase.png");
    assert_eq!(
        app.catalog
            .product(id)
            .unwrap()
            .image_url
            .map(|url| url.into_inner())
            .as_deref(),
        Some("https://cdn.example.com/vase.png")
    );

    let req = with_admin(json_request(Method::PUT, &uri, json!({ "image_url": null })));
    let resp = app.router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let stored = app.catalog.product(id).unwrap();
    assert!(stored.image_url.is_none());
    assert_eq!(stored.images.len(), 2);
}

#[tokio::test]
async fn relative_product_image_is_a_field_error() {
    let app = build_test_app(TestOptions::secured());
    let product = app.catalog.seed_product("Vase", 4200, None);

    let req = with_admin(json_request(
        Method::PUT,
        &format!("/api/v1/admin/products/{}", product.id.0),
        json!({ "image_url": "/media/vase.png" }),
    ));
    let body = support::assert_error_response(
        app.router.oneshot(req).await.unwrap(),
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert!(body["fields"]["image_url"].is_string());
}

#[tokio::test]
async fn empty_category_body_reports_missing_name() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/categories",
        json!({}),
    ));

    let body = support::assert_error_response(
        app.router.oneshot(req).await.unwrap(),
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(body["fields"]["name"], "name is required");
    assert_eq!(app.catalog.category_count(), 0);
}

#[tokio::test]
async fn mistyped_product_field_is_reported_under_its_name() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(json_request(
        Method::POST,
        "/api/v1/admin/products",
        json!({ "name": "Vase", "price": "cheap", "stock": 1 }),
    ));

    let body = support::assert_error_response(
        app.router.oneshot(req).await.unwrap(),
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert!(
        body["fields"]["price"]
            .as_str()
            .is_some_and(|msg| msg.contains("invalid type"))
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = build_test_app(TestOptions::secured());
    let req = with_admin(
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/admin/categories")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": "Rugs""#))
            .unwrap(),
    );
    support::assert_error_response(
        app.router.oneshot(req).await.unwrap(),
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}
