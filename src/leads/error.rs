//! Error taxonomy for lead submissions

use crate::i18n::LocalizationBundle;
use crate::relay::RelayError;
use std::time::Duration;
use thiserror::Error;

/// User-correctable input problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email address is not in local@domain.tld form")]
    InvalidEmail,
    #[error("phone number is not exactly 10 digits")]
    InvalidPhone,
}

/// Operator-caused problems detected before dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("relay credential `{0}` is empty or unresolved")]
    MissingRelayCredentials(&'static str),
}

/// Relay failures for one dispatch attempt
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("relay rejected template `{template}`: {source}")]
    Relay {
        template: String,
        #[source]
        source: RelayError,
    },
    #[error("relay did not answer for template `{template}` within {timeout:?}")]
    TimedOut { template: String, timeout: Duration },
    #[error("dispatch task ended before reporting: {0}")]
    TaskFailed(String),
}

/// What the view layer sees when an attempt fails
///
/// Only the kind is stored; the message is resolved against whichever
/// bundle is active when the form is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFailure {
    Validation(ValidationError),
    MissingConfiguration,
    RelayRejected,
}

impl SubmissionFailure {
    pub fn message(self, bundle: &LocalizationBundle) -> &'static str {
        match self {
            SubmissionFailure::Validation(ValidationError::InvalidEmail) => {
                bundle.errors.invalid_email
            }
            SubmissionFailure::Validation(ValidationError::InvalidPhone) => {
                bundle.errors.invalid_phone
            }
            SubmissionFailure::MissingConfiguration => bundle.errors.system_error,
            SubmissionFailure::RelayRejected => bundle.errors.connection_failed,
        }
    }
}

impl From<ValidationError> for SubmissionFailure {
    fn from(err: ValidationError) -> Self {
        SubmissionFailure::Validation(err)
    }
}

impl From<ConfigurationError> for SubmissionFailure {
    fn from(_: ConfigurationError) -> Self {
        SubmissionFailure::MissingConfiguration
    }
}

impl From<&DispatchError> for SubmissionFailure {
    fn from(_: &DispatchError) -> Self {
        SubmissionFailure::RelayRejected
    }
}
