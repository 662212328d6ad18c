//! Donation DTOs.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{Donation, NewDonation};

/// Upper bound (exclusive) that fits the `NUMERIC(12, 2)` column.
const MAX_AMOUNT: i64 = 10_000_000_000;
const AMOUNT_SCALE: i64 = 2;

fn valid_amount(amount: &BigDecimal) -> Result<(), ValidationError> {
    if amount <= &BigDecimal::zero() {
        return Err(
            ValidationError::new("amount").with_message("Amount must be greater than zero".into())
        );
    }
    if amount >= &BigDecimal::from(MAX_AMOUNT) {
        return Err(ValidationError::new("amount")
            .with_message("Amount must be less than 10000000000".into()));
    }
    if &amount.with_scale(AMOUNT_SCALE) != amount {
        return Err(ValidationError::new("amount")
            .with_message("Amount must have at most 2 decimal places".into()));
    }
    Ok(())
}

/// Public donation submission.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    #[schema(example = "Abebe Kebede")]
    pub full_name: String,
    #[validate(length(min = 7, max = 32, message = "Phone number must be between 7 and 32 characters"))]
    #[schema(example = "251911000001")]
    pub phone_number: String,
    #[validate(custom(function = "valid_amount"))]
    #[schema(value_type = String, example = "500")]
    pub amount: BigDecimal,
    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,
}

impl CreateDonationRequest {
    pub fn into_new_donation(self) -> NewDonation {
        NewDonation {
            full_name: self.full_name,
            phone_number: self.phone_number,
            amount: self.amount,
            note: self.note.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub id: i32,
    pub full_name: String,
    pub phone_number: String,
    #[schema(value_type = String, example = "500")]
    pub amount: BigDecimal,
    pub note: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: jiff::Timestamp,
}

impl From<Donation> for DonationResponse {
    fn from(d: Donation) -> Self {
        Self {
            id: d.id,
            full_name: d.full_name,
            phone_number: d.phone_number,
            amount: d.amount,
            note: d.note,
            created_at: d.created_at.to_jiff(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> CreateDonationRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_amount_must_be_positive() {
        let zero = parse(serde_json::json!({
            "fullName": "Abebe", "phoneNumber": "251911000001", "amount": "0"
        }));
        assert!(zero.validate().is_err());

        let ok = parse(serde_json::json!({
            "fullName": "Abebe", "phoneNumber": "251911000001", "amount": "250.50", "note": " "
        }));
        assert!(ok.validate().is_ok());
        assert_eq!(ok.into_new_donation().note, None);
    }

    fn amount_error(amount: &str) -> bool {
        let request = parse(serde_json::json!({
            "fullName": "Abebe", "phoneNumber": "251911000001", "amount": amount
        }));
        request
            .validate()
            .is_err_and(|errors| errors.field_errors().contains_key("amount"))
    }

    #[test]
    fn test_amount_fits_column() {
        assert!(amount_error("99999999999"));
        assert!(amount_error("10000000000"));
        assert!(!amount_error("9999999999.99"));
    }

    #[test]
    fn test_amount_rejects_extra_decimals() {
        assert!(amount_error("10.125"));
        assert!(!amount_error("10.10"));
        assert!(!amount_error("10.1"));
    }
}
