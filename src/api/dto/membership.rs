//! Membership DTOs.

use bigdecimal::BigDecimal;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{Membership, MembershipLevel, NewMembership};

const GENDERS: [&str; 2] = ["male", "female"];

fn must_be_true(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("terms_not_accepted")
            .with_message("Terms and conditions must be accepted".into()))
    }
}

fn known_gender(value: &str) -> Result<(), ValidationError> {
    if GENDERS.contains(&value.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("gender").with_message("Gender must be male or female".into()))
    }
}

/// Membership application submitted by an authenticated user.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMembershipRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[schema(example = "jane@example.com", format = "email")]
    pub email: String,
    #[validate(custom(function = "known_gender"))]
    #[schema(example = "female")]
    pub gender: String,
    #[validate(length(min = 7, max = 32, message = "Phone number must be between 7 and 32 characters"))]
    #[schema(example = "251742219814")]
    pub phone_number: String,
    #[schema(value_type = String, format = Date, example = "1995-04-12")]
    pub birth_date: Date,
    #[validate(length(min = 1, max = 64, message = "Fayda id is required"))]
    pub fayda_id: String,
    #[validate(length(min = 1, max = 64, message = "Passport id is required"))]
    pub passport_id: String,
    #[validate(length(min = 1, max = 64, message = "Kebele id is required"))]
    pub kebele_id: String,
    #[validate(length(min = 1, max = 64, message = "TIN number is required"))]
    pub tin_number: String,
    #[schema(example = 1)]
    pub membership_level_id: i32,
    #[validate(length(min = 1, max = 255, message = "Job title is required"))]
    pub job_title: String,
    #[validate(length(min = 1, message = "Select at least one sector"))]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub needs: Vec<String>,
    #[validate(custom(function = "must_be_true"))]
    pub agreed_to_terms: bool,
}

impl RegisterMembershipRequest {
    pub fn into_new_membership(self, user_id: i32) -> NewMembership {
        NewMembership {
            user_id,
            full_name: self.full_name,
            email: self.email,
            gender: self.gender.to_ascii_lowercase(),
            phone_number: self.phone_number,
            birth_date: self.birth_date.into(),
            fayda_id: self.fayda_id,
            passport_id: self.passport_id,
            kebele_id: self.kebele_id,
            tin_number: self.tin_number,
            membership_level_id: self.membership_level_id,
            job_title: self.job_title,
            sectors: self.sectors,
            needs: self.needs,
            agreed_to_terms: self.agreed_to_terms,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: i32,
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub gender: String,
    pub phone_number: String,
    #[schema(value_type = String, format = Date)]
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
    #[schema(value_type = String, format = DateTime)]
    pub created_at: jiff::Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: jiff::Timestamp,
}

impl From<Membership> for MembershipResponse {
    fn from(m: Membership) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            full_name: m.full_name,
            email: m.email,
            gender: m.gender,
            phone_number: m.phone_number,
            birth_date: m.birth_date.to_jiff(),
            fayda_id: m.fayda_id,
            passport_id: m.passport_id,
            kebele_id: m.kebele_id,
            tin_number: m.tin_number,
            membership_level_id: m.membership_level_id,
            job_title: m.job_title,
            sectors: m.sectors,
            needs: m.needs,
            agreed_to_terms: m.agreed_to_terms,
            created_at: m.created_at.to_jiff(),
            updated_at: m.updated_at.to_jiff(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MembershipLevelResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Basic")]
    pub name: String,
    #[schema(value_type = String, example = "1000")]
    pub price: BigDecimal,
    #[schema(example = "monthly")]
    pub frequency: String,
}

impl From<MembershipLevel> for MembershipLevelResponse {
    fn from(level: MembershipLevel) -> Self {
        Self {
            id: level.id,
            name: level.name,
            price: level.price,
            frequency: level.frequency,
        }
    }
}
