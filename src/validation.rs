use crate::check_digit::has_valid_check_digit;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of digits in an NHS number once the dashes are stripped.
const NHS_NUMBER_LENGTH: usize = 10;

lazy_static! {
    // Three digits, a dash, three digits, a dash, four digits, nothing else.
    static ref ENTRY_FORMAT: Regex = Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap();
}

/// Outcome of validating one NHS number entry.
///
/// Exactly one variant applies to any given input string; the variants cover
/// every possible input between them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationResult {
    /// The field holds no value. Nothing to validate; any notification
    /// previously shown for the field should be cleared.
    Empty,
    /// A well-formed NHS number with a matching check digit.
    Valid,
    /// The entry does not match the dashed `485-777-3456` layout.
    InvalidFormat,
    /// The layout matched but the stripped entry is not exactly ten ASCII
    /// decimal digits.
    InvalidLength,
    /// Ten digits in the right shape, but the check digit does not match.
    InvalidChecksum,
}

impl ValidationResult {
    /// True for a well-formed number with a matching check digit.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// True when the user has to correct the entry. `Empty` is not a failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ValidationResult::Empty | ValidationResult::Valid)
    }
}

/// Validates a raw NHS number entry as typed by a user.
///
/// Rules are applied in order and the first one to fail decides the result:
/// an empty entry is [`ValidationResult::Empty`], an entry that does not
/// match the dashed layout is [`ValidationResult::InvalidFormat`], an entry
/// whose stripped form is not exactly ten ASCII digits is
/// [`ValidationResult::InvalidLength`], and an entry failing the Modulus 11
/// check digit is [`ValidationResult::InvalidChecksum`].
///
/// This is a pure function: no I/O, no shared state, and the same input
/// always produces the same result.
pub fn validate(raw: &str) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::Empty;
    }

    if !ENTRY_FORMAT.is_match(raw) {
        return ValidationResult::InvalidFormat;
    }

    let normalized = normalize(raw);

    // `\d` is Unicode-aware, so digit lookalikes (Arabic-Indic, fullwidth
    // forms) can pass the layout check. They are rejected here instead of
    // being handed to the checksum, along with anything a lenient numeric
    // parse would tolerate.
    if normalized.len() != NHS_NUMBER_LENGTH || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::InvalidLength;
    }

    if !has_valid_check_digit(&normalized) {
        return ValidationResult::InvalidChecksum;
    }

    ValidationResult::Valid
}

/// Strips the dash separators from an entry that matched the dashed layout.
fn normalize(raw: &str) -> String {
    raw.replace('-', "")
}
