use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::{Date, Timestamp};

/// A monthly subscription payment made by a member
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    /// Billing period label, e.g. "January 2024"
    pub month: String,
    pub paid_on: Date,
    pub amount: BigDecimal,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
