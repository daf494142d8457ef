use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Message shown when the entry does not match the dashed layout.
pub const INVALID_FORMAT_MESSAGE: &str =
    "The NHS number must be in the format 485-777-3456 with dashes.";

/// Message shown when the stripped entry is not a 10-digit number.
pub const INVALID_LENGTH_MESSAGE: &str = "Please enter a valid 10-digit NHS number.";

/// Message shown when the check digit does not match.
pub const INVALID_CHECKSUM_MESSAGE: &str =
    "The NHS number is not valid. Please check and try again.";

/// What the host should do with the notification attached to the field.
///
/// A directive is plain data so host bridges can carry it across a process
/// or FFI boundary instead of calling back into the crate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum NotificationDirective {
    /// Remove any message currently attached to the field.
    Clear,
    /// Attach the given message to the field, replacing any previous one.
    Set { message: Cow<'static, str> },
}

impl NotificationDirective {
    fn set(message: &'static str) -> Self {
        NotificationDirective::Set {
            message: Cow::Borrowed(message),
        }
    }

    /// The message to attach, if this directive attaches one.
    pub fn message(&self) -> Option<&str> {
        match self {
            NotificationDirective::Clear => None,
            NotificationDirective::Set { message } => Some(message),
        }
    }
}

impl From<&ValidationResult> for NotificationDirective {
    fn from(result: &ValidationResult) -> Self {
        match result {
            // An empty field has nothing to complain about; a valid one has
            // nothing left to complain about.
            ValidationResult::Empty | ValidationResult::Valid => NotificationDirective::Clear,
            ValidationResult::InvalidFormat => NotificationDirective::set(INVALID_FORMAT_MESSAGE),
            ValidationResult::InvalidLength => NotificationDirective::set(INVALID_LENGTH_MESSAGE),
            ValidationResult::InvalidChecksum => {
                NotificationDirective::set(INVALID_CHECKSUM_MESSAGE)
            }
        }
    }
}
