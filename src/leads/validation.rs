//! Client-side validation rules

use super::error::ValidationError;
use super::payload::{FormType, LeadFields};
use regex::Regex;
use std::sync::LazyLock;

/// Loose `local@domain.tld` shape meant to catch typos, not to implement RFC 5322
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Exactly ten ASCII digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn is_valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// Run the rules for one form; the first failing rule wins
pub fn validate(form_type: FormType, fields: &LeadFields) -> Result<(), ValidationError> {
    if !is_valid_email(fields.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if form_type == FormType::Inquiry {
        let phone = fields.phone.trim();
        if !phone.is_empty() && !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }
    }
    Ok(())
}
