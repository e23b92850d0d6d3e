//! Field-level validation rules.
//!
//! Every rule is synchronous and local; a rule failure never turns
//! into a network call. Messages are the user-facing strings the form
//! attaches to the offending field.

use std::sync::LazyLock;

use regex::Regex;

use backlot_model::parse_wire_date;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // local@domain.tld with no whitespace in any segment.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});

/// Required-field check: non-empty after trimming.
pub fn require(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required."))
    } else {
        None
    }
}

/// Simple `local@domain.tld` email shape.
pub fn check_email(value: &str) -> Option<String> {
    if EMAIL_SHAPE.is_match(value.trim()) {
        None
    } else {
        Some("Invalid email format.".to_string())
    }
}

/// Exactly 10 digits once whitespace is stripped.
pub fn check_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some("Contact number must be a valid 10-digit number.".to_string())
    }
}

/// `DD/MM/YYYY` date shape.
pub fn check_wire_date(value: &str) -> Option<String> {
    match parse_wire_date(value) {
        Ok(_) => None,
        Err(_) => Some("Date must be in DD/MM/YYYY format.".to_string()),
    }
}

/// Membership in a bounded option set.
pub fn check_one_of(value: &str, options: &[&str]) -> Option<String> {
    if options.contains(&value.trim()) {
        None
    } else {
        Some(format!("Must be one of: {}.", options.join(", ")))
    }
}
