use utoipa::OpenApi;

use crate::app::dto::{ErrorResponse, ExpiryResponse};
use crate::app::routes;

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "API Validade de Produtos", version = "1.0.0"),
    paths(routes::expiry::validade_produtos),
    components(schemas(ExpiryResponse, ErrorResponse)),
    tags((name = "validade", description = "Cálculo de validade de produtos"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_expiry_endpoint() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "API Validade de Produtos");
        assert_eq!(doc.info.version, "1.0.0");
        assert!(doc
            .paths
            .paths
            .contains_key("/validadeprodutos/{produto}/{data_fabricacao}"));
    }
}
