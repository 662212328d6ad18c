use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;

#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::donations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Donation {
    pub id: i32,
    pub full_name: String,
    pub phone_number: String,
    pub amount: BigDecimal,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::donations)]
pub struct NewDonation {
    pub full_name: String,
    pub phone_number: String,
    pub amount: BigDecimal,
    pub note: Option<String>,
}
