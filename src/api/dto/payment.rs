use bigdecimal::BigDecimal;
use jiff::civil::Date;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Payment;

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "January 2024")]
    pub month: String,
    /// Day the payment was made
    #[schema(value_type = String, format = Date, example = "2024-01-05")]
    pub date: Date,
    #[schema(value_type = String, example = "1000")]
    pub amount: BigDecimal,
    #[schema(example = "paid")]
    pub status: String,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            month: p.month,
            date: p.paid_on.to_jiff(),
            amount: p.amount,
            status: p.status,
        }
    }
}
