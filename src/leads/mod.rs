//! Lead-capture submission pipeline
//!
//! Validation rules, payload construction and the per-form submission
//! controller. Nothing in here touches the terminal.

mod controller;
mod error;
mod payload;
mod validation;

pub use controller::{PendingDispatch, SubmissionController, SubmissionState};
pub use error::{ConfigurationError, DispatchError, SubmissionFailure, ValidationError};
pub use payload::{FormType, LeadFields, SubmissionPayload, UserRole};
pub use validation::validate;
