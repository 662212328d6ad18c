// Mirrors migrations/2025-01-01-000000_init/up.sql

diesel::table! {
    donations (id) {
        id -> Int4,
        #[max_length = 255]
        full_name -> Varchar,
        #[max_length = 32]
        phone_number -> Varchar,
        amount -> Numeric,
        note -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    membership_levels (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        price -> Numeric,
        #[max_length = 32]
        frequency -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    memberships (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 255]
        full_name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 32]
        gender -> Varchar,
        #[max_length = 32]
        phone_number -> Varchar,
        birth_date -> Date,
        #[max_length = 64]
        fayda_id -> Varchar,
        #[max_length = 64]
        passport_id -> Varchar,
        #[max_length = 64]
        kebele_id -> Varchar,
        #[max_length = 64]
        tin_number -> Varchar,
        membership_level_id -> Int4,
        #[max_length = 255]
        job_title -> Varchar,
        sectors -> Array<Text>,
        needs -> Array<Text>,
        agreed_to_terms -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    payments (id) {
        id -> Int4,
        user_id -> Int4,
        #[max_length = 32]
        month -> Varchar,
        paid_on -> Date,
        amount -> Numeric,
        #[max_length = 32]
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        #[max_length = 255]
        full_name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 32]
        phone -> Varchar,
        #[max_length = 255]
        password -> Varchar,
        #[max_length = 16]
        role -> Varchar,
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(memberships -> membership_levels (membership_level_id));
diesel::joinable!(memberships -> users (user_id));
diesel::joinable!(payments -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    donations,
    membership_levels,
    memberships,
    payments,
    users,
);
