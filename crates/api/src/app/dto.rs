use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use shelflife_products::ExpiryReport;

// -------------------------
// Response DTOs
// -------------------------

/// Expiry report as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExpiryResponse {
    /// Product identifier, echoed as received.
    #[serde(rename = "produto")]
    #[schema(example = "leite")]
    pub product: String,
    /// Manufacturing date (`DD-MM-YYYY`).
    #[serde(rename = "fabricacao")]
    #[schema(example = "10-09-2024")]
    pub manufacture_date: String,
    /// Expiry date (`DD-MM-YYYY`).
    #[serde(rename = "validade")]
    #[schema(example = "10-09-2025")]
    pub expiry_date: String,
    #[serde(rename = "dias")]
    #[schema(example = 166)]
    pub days: u64,
    #[serde(rename = "semanas")]
    #[schema(example = 23)]
    pub weeks: u64,
    #[serde(rename = "meses")]
    #[schema(example = 5)]
    pub months: u32,
    #[serde(rename = "anos")]
    #[schema(example = 0)]
    pub years: u32,
    /// Human-readable expiry verdict.
    #[serde(rename = "situacao")]
    #[schema(example = "Não excedeu o prazo de validade!")]
    pub status: String,
}

impl From<&ExpiryReport> for ExpiryResponse {
    fn from(report: &ExpiryReport) -> Self {
        Self {
            product: report.product().to_string(),
            manufacture_date: report.manufacture_date().to_string(),
            expiry_date: report.expiry_date().to_string(),
            days: report.days_remaining(),
            weeks: report.weeks_remaining(),
            months: report.months_remaining(),
            years: report.years_remaining(),
            status: report.status().message().to_string(),
        }
    }
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(rename = "erro")]
    #[schema(example = "Formato de data inválido. Use DD-MM-YYYY.")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn expiry_response_uses_portuguese_field_names() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let report = shelflife_products::compute("leite", "10-09-2024", now).unwrap();

        let json = serde_json::to_value(ExpiryResponse::from(&report)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "produto": "leite",
                "fabricacao": "10-09-2024",
                "validade": "10-09-2025",
                "dias": 184,
                "semanas": 26,
                "meses": 6,
                "anos": 0,
                "situacao": "Não excedeu o prazo de validade!",
            })
        );
    }
}
