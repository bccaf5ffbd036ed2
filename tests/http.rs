//! Router-level tests that never reach the database: the pool is lazy, so a
//! connection would only be made by a handler that actually runs a query.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use northwind_api::{api_routes, common_routes, AppState};
use tower::ServiceExt;

fn app() -> axum::Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/northwind_test")
        .expect("lazy pool");
    let state = AppState {
        pool,
        page_size: 10,
    };
    axum::Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_plain_greeting() {
    let res = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Hello World!");
}

#[tokio::test]
async fn health_is_ok() {
    let res = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn version_reports_crate_metadata() {
    let res = app()
        .oneshot(Request::get("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["name"], "northwind-api");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let res = app()
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = body_json(res).await;
    assert!(doc["paths"].as_object().unwrap().contains_key("/api/products"));
    assert!(!doc["paths"].as_object().unwrap().contains_key("/"));
}

#[tokio::test]
async fn product_list_rejects_page_zero() {
    let res = app()
        .oneshot(
            Request::get("/api/products?page=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn customer_list_rejects_page_zero() {
    let res = app()
        .oneshot(
            Request::get("/api/customers?page=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn non_numeric_page_fails_in_the_extractor() {
    let res = app()
        .oneshot(
            Request::get("/api/products?page=ten")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_product_with_non_integer_id_is_not_found() {
    let body = r#"{"product_name":"Chai","units_in_stock":3}"#;
    let res = app()
        .oneshot(
            Request::put("/api/products/notanumber")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_product_with_non_integer_id_is_not_found() {
    let res = app()
        .oneshot(
            Request::delete("/api/products/notanumber")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let res = app()
        .oneshot(Request::get("/api/suppliers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_product_rejects_non_object_body() {
    let res = app()
        .oneshot(
            Request::post("/api/products")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("[1,2,3]"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
