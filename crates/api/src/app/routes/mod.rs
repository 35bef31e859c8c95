use axum::{routing::get, Router};

pub mod expiry;
pub mod system;

/// Router for the product expiry endpoints.
///
/// Handlers expect an `Extension<Arc<dyn Clock>>` layered on top.
pub fn router() -> Router {
    Router::new().route(
        "/validadeprodutos/:produto/:data_fabricacao",
        get(expiry::validade_produtos),
    )
}
