use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use shelflife_core::DomainError;

use crate::app::dto::ErrorResponse;

/// Client-facing message for a manufacturing date that does not parse.
pub const INVALID_DATE_MESSAGE: &str = "Formato de data inválido. Use DD-MM-YYYY.";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(_) => json_error(StatusCode::BAD_REQUEST, INVALID_DATE_MESSAGE),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let res = domain_error_to_response(DomainError::validation("invalid date format"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
