use axum::response::IntoResponse;

/// Handler for `GET /`.
pub async fn root_handler() -> impl IntoResponse {
    "Hello World!"
}
