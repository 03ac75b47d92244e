//! Field checks shared by the create/update structures.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn person_name(field: &'static str, value: &str) -> AppResult<()> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::invalid(field, "is required"));
    }
    if v.chars().count() < 2 {
        return Err(AppError::invalid(field, "must be at least 2 characters"));
    }
    Ok(())
}

pub fn email(value: &str) -> AppResult<()> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::invalid("email", "is required"));
    }
    if !email_re().is_match(v) {
        return Err(AppError::invalid("email", format!("'{v}' is not an email address")));
    }
    Ok(())
}

pub fn required(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(field, "is required"));
    }
    Ok(())
}

pub fn deal_value(value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid(
            "value",
            format!("{value} is not a non-negative amount"),
        ));
    }
    Ok(())
}

pub fn probability(value: u8) -> AppResult<()> {
    if value > 100 {
        return Err(AppError::invalid(
            "probability",
            format!("{value} is not between 0 and 100"),
        ));
    }
    Ok(())
}

pub fn parse_date(field: &'static str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::invalid(field, format!("'{value}' is not a YYYY-MM-DD date")))
}

/// Trim, and collapse blank strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds() {
        assert!(probability(0).is_ok());
        assert!(probability(100).is_ok());
        assert!(probability(101).is_err());
    }

    #[test]
    fn deal_value_rejects_negative_and_nan() {
        assert!(deal_value(0.0).is_ok());
        assert!(deal_value(-1.0).is_err());
        assert!(deal_value(f64::NAN).is_err());
    }

    #[test]
    fn email_pattern_needs_local_part_domain_and_dot() {
        assert!(email("ada@example.com").is_ok());
        assert!(email("ada@example").is_err());
        assert!(email("ada example@x.io").is_err());
        assert!(email("@example.com").is_err());
    }

    #[test]
    fn non_blank_collapses_whitespace() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" x ".into())), Some("x".into()));
    }
}
