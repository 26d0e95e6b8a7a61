use crate::wizard::WizardStep;
use thiserror::Error;

/// Recoverable failures of the booking core. None of them change state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripError {
    /// A field value is malformed or out of range.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// `advance()` was blocked by the guard of the current step.
    #[error("{} step is incomplete: {field} is required", .step.title())]
    StepIncomplete {
        step: WizardStep,
        field: &'static str,
    },
    /// An operation was invoked out of its allowed order.
    #[error("{0}")]
    Precondition(String),
    /// A history index that does not exist (or no longer exists).
    #[error("no trip at index {index} (history has {len})")]
    Index { index: usize, len: usize },
}

impl TripError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        TripError::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        TripError::Precondition(message.into())
    }
}
