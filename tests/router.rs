//! In-process router tests driven through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use contoso_sales_metrics::{build_router, create_prom_metrics, SALE_RECORDED};
use tower::ServiceExt;

fn app() -> Router {
    build_router(create_prom_metrics().unwrap())
}

async fn body_text(response: axum::response::Response) -> String {
    // ---
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn root_returns_hello_world() {
    // ---
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Hello World!");
}

#[tokio::test]
async fn complete_sale_returns_acknowledgement() {
    // ---
    let request = Request::builder()
        .method("POST")
        .uri("/complete-sale?utm_medium=social")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"productName":"Widget","quantitySold":5,"age":25,"location":"Lisbon"}"#,
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, SALE_RECORDED);
}

#[tokio::test]
async fn complete_sale_without_json_content_type_is_rejected() {
    // ---
    let request = Request::builder()
        .method("POST")
        .uri("/complete-sale")
        .body(Body::from(
            r#"{"productName":"Widget","quantitySold":5,"age":25,"location":"Lisbon"}"#,
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn complete_sale_missing_field_is_rejected() {
    // ---
    let request = Request::builder()
        .method("POST")
        .uri("/complete-sale")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"productName":"Widget","quantitySold":5}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_on_sale_endpoint_is_method_not_allowed() {
    // ---
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/complete-sale")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
