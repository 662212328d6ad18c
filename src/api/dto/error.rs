//! Error response DTOs.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "error": "user with phone '251911000000' not found",
    "code": "NOT_FOUND",
    "status": 404
}))]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
    /// HTTP status code, repeated for clients that only see the body
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str, status: u16) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
            status,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {} '{}' not found", entity, field, value),
            404,
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{} with {} '{}' already exists", entity, field, value),
            409,
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new(
            "VALIDATION_ERROR",
            &format!("Validation failed for {}: {}", field, reason),
            400,
        )
        .with_details(serde_json::json!({
            "field": field,
            "reason": reason,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::new("UNAUTHORIZED", "Invalid credentials", 401))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Invalid credentials",
                "code": "UNAUTHORIZED",
                "status": 401
            })
        );
    }

    #[test]
    fn test_not_found_error_details() {
        let error = ErrorResponse::not_found_error("user", "phone", "251911000000");
        assert_eq!(error.status, 404);
        assert_eq!(error.details.unwrap()["field"], "phone");
    }
}
