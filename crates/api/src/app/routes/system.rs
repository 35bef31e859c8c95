use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::app::openapi::ApiDoc;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
