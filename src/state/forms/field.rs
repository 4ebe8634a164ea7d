//! Form field value objects

use crate::i18n::LocalizationBundle;

/// The inputs a lead can fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    FullName,
    Email,
    Phone,
    City,
    Message,
}

impl FieldKind {
    /// Localized placeholder, used as the field title
    pub fn placeholder(self, bundle: &LocalizationBundle) -> &'static str {
        match self {
            FieldKind::FullName => bundle.placeholders.name,
            FieldKind::Email => bundle.placeholders.email,
            FieldKind::Phone => bundle.placeholders.phone,
            FieldKind::City => bundle.placeholders.city,
            FieldKind::Message => bundle.placeholders.message,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line field
    pub fn text(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            is_multiline: false,
        }
    }

    /// Create a new multiline field
    pub fn multiline(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            is_multiline: true,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
