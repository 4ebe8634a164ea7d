//! Submission payload and the default-filling policy

use serde::Serialize;

/// Which form produced a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormType {
    #[serde(rename = "Launch Notification")]
    LaunchNotification,
    #[serde(rename = "Inquiry")]
    Inquiry,
}

impl FormType {
    pub fn label(self) -> &'static str {
        match self {
            FormType::LaunchNotification => "Launch Notification",
            FormType::Inquiry => "Inquiry",
        }
    }

    /// Message used when the submitter leaves the message empty
    pub fn default_message(self) -> &'static str {
        match self {
            FormType::LaunchNotification => "User requested launch notification.",
            FormType::Inquiry => "No message provided.",
        }
    }
}

/// Who the lead says they are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Farmer,
    Dealer,
}

impl UserRole {
    pub fn toggle(self) -> Self {
        match self {
            UserRole::Farmer => UserRole::Dealer,
            UserRole::Dealer => UserRole::Farmer,
        }
    }
}

/// Raw values as typed into a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub message: String,
    pub user_role: UserRole,
}

pub const DEFAULT_FULL_NAME: &str = "Interested User";
pub const NOT_PROVIDED: &str = "Not provided";

/// Fully populated template parameters sent to both relay templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub form_type: FormType,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub message: String,
    pub user_role: UserRole,
}

impl SubmissionPayload {
    /// Build a payload, substituting defaults for empty optional fields
    pub fn from_fields(form_type: FormType, fields: &LeadFields) -> Self {
        Self {
            form_type,
            full_name: or_default(&fields.full_name, DEFAULT_FULL_NAME),
            email: fields.email.trim().to_string(),
            phone: or_default(&fields.phone, NOT_PROVIDED),
            city: or_default(&fields.city, NOT_PROVIDED),
            message: or_default(&fields.message, form_type.default_message()),
            user_role: fields.user_role,
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
