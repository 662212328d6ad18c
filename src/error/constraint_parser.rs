use std::sync::OnceLock;

use regex::Regex;

/// Tables owned by this service, longest first so that `membership_levels_*`
/// wins over `memberships_*` style prefixes.
const KNOWN_TABLES: &[&str] = &[
    "membership_levels",
    "memberships",
    "donations",
    "payments",
    "users",
];

/// Constraint name suffixes produced by PostgreSQL's default naming scheme.
const CONSTRAINT_SUFFIXES: &[&str] = &["_fkey", "_pkey", "_key", "_check", "_idx"];

/// Utility for turning PostgreSQL constraint violation messages into
/// structured `(entity, field, value)` information.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    relation_name: Regex,
}

impl RegexPatterns {
    fn new() -> Option<Self> {
        Some(Self {
            // "Key (field)=(value)" as found in the DETAIL line
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").ok()?,
            column_name: Regex::new(r#"column "([^"]+)""#).ok()?,
            // Both "table" and "relation" appear depending on the violation kind
            relation_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).ok()?,
        })
    }
}

static REGEX_PATTERNS: OnceLock<Option<RegexPatterns>> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> Option<&'static RegexPatterns> {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new).as_ref()
    }

    /// Parses a unique violation into `(entity, field, value)`.
    ///
    /// The constraint name is preferred (`users_phone_key` gives
    /// `("users", "phone")`); the value comes from the `Key (..)=(..)` detail.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let detail = Self::extract_key_value(message);

        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = detail
                .map(|(_, value)| value)
                .unwrap_or_else(|| "duplicate_value".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = detail?;
        let entity = Self::extract_relation(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Parses a not-null violation into `(entity, field)`.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::extract_column(message)?;
        let entity = Self::extract_relation(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Parses a foreign key violation into `(entity, field, referenced_value)`.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let detail = Self::extract_key_value(message);

        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = detail
                .map(|(_, value)| value)
                .unwrap_or_else(|| "invalid_reference".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = detail?;
        let entity = Self::extract_relation(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Parses a check violation into `(entity, field)`.
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(parsed) = constraint_name.and_then(Self::parse_constraint_name) {
            return Some(parsed);
        }
        Self::parse_not_null_violation(message)
    }

    /// Splits a default-named constraint into `(table, column)`.
    ///
    /// - `users_email_key` -> `("users", "email")`
    /// - `memberships_membership_level_id_fkey` -> `("memberships", "membership_level_id")`
    /// - `donations_amount_check` -> `("donations", "amount")`
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let stem = CONSTRAINT_SUFFIXES
            .iter()
            .find_map(|suffix| constraint_name.strip_suffix(suffix))?;

        let (table, column) = match KNOWN_TABLES
            .iter()
            .find_map(|table| Some((*table, stem.strip_prefix(table)?.strip_prefix('_')?)))
        {
            Some(split) => split,
            None => stem.split_once('_')?,
        };

        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    /// Extracts `(field, value)` from a `Key (field)=(value)` detail line.
    pub fn extract_key_value(message: &str) -> Option<(String, String)> {
        let caps = Self::patterns()?.key_value.captures(message)?;
        Some((caps.get(1)?.as_str().to_string(), caps.get(2)?.as_str().to_string()))
    }

    pub fn extract_column(message: &str) -> Option<String> {
        Self::patterns()?
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_relation(message: &str) -> Option<String> {
        Self::patterns()?
            .relation_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_on_phone() {
        let message = "duplicate key value violates unique constraint \"users_phone_key\"\nDETAIL: Key (phone)=(251742219814) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_phone_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "phone".to_string(),
                "251742219814".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (email)=(jane@example.org) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "email".to_string(),
                "jane@example.org".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_constraint_name_handles_underscored_tables_and_columns() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("users_email_key"),
            Some(("users".to_string(), "email".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("memberships_membership_level_id_fkey"),
            Some(("memberships".to_string(), "membership_level_id".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("membership_levels_name_key"),
            Some(("membership_levels".to_string(), "name".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("donations_amount_check"),
            Some(("donations".to_string(), "amount".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_name_falls_back_to_first_segment() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("posts_title_key"),
            Some(("posts".to_string(), "title".to_string()))
        );
        assert_eq!(ConstraintParser::parse_constraint_name("invalid"), None);
        assert_eq!(ConstraintParser::parse_constraint_name("users_key"), None);
    }

    #[test]
    fn test_parse_not_null_violation_with_relation() {
        let message =
            "null value in column \"full_name\" of relation \"donations\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message),
            Some(("donations".to_string(), "full_name".to_string()))
        );
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"memberships\" violates foreign key constraint \"memberships_membership_level_id_fkey\"\nDETAIL: Key (membership_level_id)=(99) is not present in table \"membership_levels\".";
        let result = ConstraintParser::parse_foreign_key_violation(
            message,
            Some("memberships_membership_level_id_fkey"),
        );
        assert_eq!(
            result,
            Some((
                "memberships".to_string(),
                "membership_level_id".to_string(),
                "99".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_check_violation() {
        let message = "new row for relation \"donations\" violates check constraint \"donations_amount_check\"";
        assert_eq!(
            ConstraintParser::parse_check_violation(message, Some("donations_amount_check")),
            Some(("donations".to_string(), "amount".to_string()))
        );
    }

    #[test]
    fn test_unrelated_messages_parse_to_none() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message), None);
        assert_eq!(ConstraintParser::parse_foreign_key_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_check_violation(message, None), None);
    }
}
