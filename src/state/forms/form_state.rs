//! Lead-capture forms and their shared behavior

use super::field::{FieldKind, FormField};
use crate::leads::{
    DispatchError, FormType, LeadFields, PendingDispatch, SubmissionController, SubmissionState,
    UserRole,
};

/// One focusable row of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Farmer/Dealer selector
    Role,
    Field(FieldKind),
    Submit,
}

/// Which of the three mutually exclusive views a form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView {
    /// Inputs, with an inline error banner when the last attempt failed
    Input,
    /// Attempt in flight; resubmission disabled
    Pending,
    /// Both emails sent; offers "new inquiry"
    Success,
}

/// Trait for common form operations
pub trait Form {
    fn rows(&self) -> &'static [FormRow];
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, kind: FieldKind) -> Option<&FormField>;
    fn get_field_mut(&mut self, kind: FieldKind) -> Option<&mut FormField>;

    fn field_count(&self) -> usize {
        self.rows().len()
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn active_row(&self) -> FormRow {
        let rows = self.rows();
        rows[self.active_field().min(rows.len() - 1)]
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_row() {
            FormRow::Field(kind) => self.get_field_mut(kind),
            FormRow::Role | FormRow::Submit => None,
        }
    }
    fn is_active_field_multiline(&self) -> bool {
        match self.active_row() {
            FormRow::Field(kind) => self.get_field(kind).is_some_and(|f| f.is_multiline),
            FormRow::Role | FormRow::Submit => false,
        }
    }
}

/// A form that captures a lead through its own submission controller
pub trait LeadForm: Form {
    fn controller(&self) -> &SubmissionController;
    fn controller_mut(&mut self) -> &mut SubmissionController;
    /// Snapshot of the raw input values
    fn lead_fields(&self) -> LeadFields;
    /// Full form reset
    fn clear_inputs(&mut self);

    /// Role selection; forms without a selector report the default
    fn user_role(&self) -> UserRole {
        UserRole::default()
    }
    fn toggle_role(&mut self) {}

    fn state(&self) -> SubmissionState {
        self.controller().state()
    }

    fn view(&self) -> FormView {
        match self.state() {
            SubmissionState::Submitting => FormView::Pending,
            SubmissionState::Success => FormView::Success,
            SubmissionState::Idle | SubmissionState::Error(_) => FormView::Input,
        }
    }

    /// Start an attempt; `None` when nothing is to be dispatched
    fn submit(&mut self) -> Option<PendingDispatch> {
        let fields = self.lead_fields();
        self.controller_mut().begin(&fields)
    }

    /// Apply a settled dispatch; inputs are kept on failure
    fn settle(&mut self, result: Result<(), DispatchError>) {
        if self.controller_mut().finish(result) {
            self.clear_inputs();
        }
    }

    fn new_inquiry(&mut self) {
        self.controller_mut().dismiss();
    }

    /// Type into the active field; ignored unless the input view is showing
    fn input_char(&mut self, c: char) {
        if self.view() != FormView::Input {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    fn backspace(&mut self) {
        if self.view() != FormView::Input {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }
}

// Hero "notify me" form
#[derive(Debug)]
pub struct NotifyForm {
    pub email: FormField,
    pub active_field_index: usize,
    controller: SubmissionController,
}

impl NotifyForm {
    const ROWS: &'static [FormRow] = &[FormRow::Field(FieldKind::Email), FormRow::Submit];

    pub fn new(controller: SubmissionController) -> Self {
        debug_assert_eq!(controller.form_type(), FormType::LaunchNotification);
        Self {
            email: FormField::text(FieldKind::Email),
            active_field_index: 0,
            controller,
        }
    }
}

impl Form for NotifyForm {
    fn rows(&self) -> &'static [FormRow] {
        Self::ROWS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::ROWS.len() - 1);
    }
    fn get_field(&self, kind: FieldKind) -> Option<&FormField> {
        match kind {
            FieldKind::Email => Some(&self.email),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, kind: FieldKind) -> Option<&mut FormField> {
        match kind {
            FieldKind::Email => Some(&mut self.email),
            _ => None,
        }
    }
}

impl LeadForm for NotifyForm {
    fn controller(&self) -> &SubmissionController {
        &self.controller
    }
    fn controller_mut(&mut self) -> &mut SubmissionController {
        &mut self.controller
    }
    fn lead_fields(&self) -> LeadFields {
        LeadFields {
            email: self.email.as_text().to_string(),
            ..Default::default()
        }
    }
    fn clear_inputs(&mut self) {
        self.email.clear();
        self.active_field_index = 0;
    }
}

// Contact section inquiry form
#[derive(Debug)]
pub struct InquiryForm {
    pub user_role: UserRole,
    pub full_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub city: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    controller: SubmissionController,
}

impl InquiryForm {
    const ROWS: &'static [FormRow] = &[
        FormRow::Role,
        FormRow::Field(FieldKind::FullName),
        FormRow::Field(FieldKind::Email),
        FormRow::Field(FieldKind::Phone),
        FormRow::Field(FieldKind::City),
        FormRow::Field(FieldKind::Message),
        FormRow::Submit,
    ];

    pub fn new(controller: SubmissionController) -> Self {
        debug_assert_eq!(controller.form_type(), FormType::Inquiry);
        Self {
            user_role: UserRole::default(),
            full_name: FormField::text(FieldKind::FullName),
            email: FormField::text(FieldKind::Email),
            phone: FormField::text(FieldKind::Phone),
            city: FormField::text(FieldKind::City),
            message: FormField::multiline(FieldKind::Message),
            active_field_index: 1,
            controller,
        }
    }
}

impl Form for InquiryForm {
    fn rows(&self) -> &'static [FormRow] {
        Self::ROWS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::ROWS.len() - 1);
    }
    fn get_field(&self, kind: FieldKind) -> Option<&FormField> {
        Some(match kind {
            FieldKind::FullName => &self.full_name,
            FieldKind::Email => &self.email,
            FieldKind::Phone => &self.phone,
            FieldKind::City => &self.city,
            FieldKind::Message => &self.message,
        })
    }
    fn get_field_mut(&mut self, kind: FieldKind) -> Option<&mut FormField> {
        Some(match kind {
            FieldKind::FullName => &mut self.full_name,
            FieldKind::Email => &mut self.email,
            FieldKind::Phone => &mut self.phone,
            FieldKind::City => &mut self.city,
            FieldKind::Message => &mut self.message,
        })
    }
}

impl LeadForm for InquiryForm {
    fn controller(&self) -> &SubmissionController {
        &self.controller
    }
    fn controller_mut(&mut self) -> &mut SubmissionController {
        &mut self.controller
    }
    fn lead_fields(&self) -> LeadFields {
        LeadFields {
            full_name: self.full_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            city: self.city.as_text().to_string(),
            message: self.message.as_text().to_string(),
            user_role: self.user_role,
        }
    }
    fn clear_inputs(&mut self) {
        for field in [
            &mut self.full_name,
            &mut self.email,
            &mut self.phone,
            &mut self.city,
            &mut self.message,
        ] {
            field.clear();
        }
        self.user_role = UserRole::default();
        self.active_field_index = 1;
    }
    fn user_role(&self) -> UserRole {
        self.user_role
    }
    fn toggle_role(&mut self) {
        if self.view() == FormView::Input {
            self.user_role = self.user_role.toggle();
        }
    }
}
