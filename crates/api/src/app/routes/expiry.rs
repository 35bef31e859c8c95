use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use shelflife_core::Clock;

use crate::app::{dto, errors};

/// Compute the expiry of a product from its manufacturing date.
///
/// The shelf life is fixed at 12 months. `data_fabricacao` must be exactly
/// `DD-MM-YYYY` (e.g. `10-09-2024`); anything else is a 400.
#[utoipa::path(
    get,
    path = "/validadeprodutos/{produto}/{data_fabricacao}",
    tag = "validade",
    params(
        ("produto" = String, Path, description = "Product identifier (free-form)"),
        ("data_fabricacao" = String, Path, description = "Manufacturing date, DD-MM-YYYY"),
    ),
    responses(
        (status = 200, description = "Expiry report", body = dto::ExpiryResponse),
        (status = 400, description = "Malformed manufacturing date", body = dto::ErrorResponse),
    )
)]
pub async fn validade_produtos(
    Extension(clock): Extension<Arc<dyn Clock>>,
    Path((produto, data_fabricacao)): Path<(String, String)>,
) -> axum::response::Response {
    match shelflife_products::compute(produto, &data_fabricacao, clock.now()) {
        Ok(report) => (StatusCode::OK, Json(dto::ExpiryResponse::from(&report))).into_response(),
        Err(e) => {
            tracing::warn!(data_fabricacao = %data_fabricacao, error = %e, "rejected manufacturing date");
            errors::domain_error_to_response(e)
        }
    }
}
