use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::{Date, Timestamp};

#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::memberships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Membership {
    pub id: i32,
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub gender: String,
    pub phone_number: String,
    pub birth_date: Date,
    pub fayda_id: String,
    pub passport_id: String,
    pub kebele_id: String,
    pub tin_number: String,
    pub membership_level_id: i32,
    pub job_title: String,
    pub sectors: Vec<String>,
    pub needs: Vec<String>,
    pub agreed_to_terms: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::memberships)]
pub struct NewMembership {
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub gender: String,
    pub phone_number: String,
    pub birth_date: Date,
    pub fayda_id: String,
    pub passport_id: String,
    pub kebele_id: String,
    pub tin_number: String,
    pub membership_level_id: i32,
    pub job_title: String,
    pub sectors: Vec<String>,
    pub needs: Vec<String>,
    pub agreed_to_terms: bool,
}

/// A tier members can subscribe to. Ids are explicit so clients can
/// reference them before any level was fetched.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::membership_levels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MembershipLevel {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub frequency: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::membership_levels)]
pub struct NewMembershipLevel {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub frequency: String,
}
