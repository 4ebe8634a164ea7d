//! Form domain layer
//!
//! The two lead-capture forms, each wrapping its own submission controller.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, FormRow, FormView, InquiryForm, LeadForm, NotifyForm};
