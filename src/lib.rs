// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digit;
mod checker;
mod field;
mod metrics;
mod notification;
mod validation;

#[cfg(any(test, feature = "testing"))]
mod simple_form;

// This is the public API of the NHS number validation library
pub use check_digit::has_valid_check_digit;
pub use checker::{CreateCheckerError, FieldCheckConfig, FieldChecker, FieldUnavailable};
pub use field::{FieldHost, FieldState};
pub use notification::{
    NotificationDirective, INVALID_CHECKSUM_MESSAGE, INVALID_FORMAT_MESSAGE,
    INVALID_LENGTH_MESSAGE,
};
pub use validation::{validate, ValidationResult};

#[cfg(feature = "testing")]
pub use crate::simple_form::SimpleForm;
