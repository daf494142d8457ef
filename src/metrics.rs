use crate::validation::ValidationResult;
use metrics::{counter, Counter};

/// Counters for a single checked field.
///
/// Handles are registered once when the checker is built, so recording an
/// outcome on the hot path is just an increment.
#[derive(Debug)]
pub struct CheckMetrics {
    empty: Counter,
    valid: Counter,
    invalid_format: Counter,
    invalid_length: Counter,
    invalid_checksum: Counter,
    field_unavailable: Counter,
}

impl CheckMetrics {
    pub fn new(field: &str) -> Self {
        let outcome_counter = |outcome: ValidationResult| {
            counter!(
                "validation.outcome",
                "field" => field.to_owned(),
                "outcome" => <&'static str>::from(outcome)
            )
        };
        CheckMetrics {
            empty: outcome_counter(ValidationResult::Empty),
            valid: outcome_counter(ValidationResult::Valid),
            invalid_format: outcome_counter(ValidationResult::InvalidFormat),
            invalid_length: outcome_counter(ValidationResult::InvalidLength),
            invalid_checksum: outcome_counter(ValidationResult::InvalidChecksum),
            field_unavailable: counter!(
                "validation.field_unavailable",
                "field" => field.to_owned()
            ),
        }
    }

    pub fn record(&self, result: &ValidationResult) {
        match result {
            ValidationResult::Empty => self.empty.increment(1),
            ValidationResult::Valid => self.valid.increment(1),
            ValidationResult::InvalidFormat => self.invalid_format.increment(1),
            ValidationResult::InvalidLength => self.invalid_length.increment(1),
            ValidationResult::InvalidChecksum => self.invalid_checksum.increment(1),
        }
    }

    pub fn record_unavailable(&self) {
        self.field_unavailable.increment(1);
    }
}
