use crate::field::{FieldHost, FieldState};
use crate::metrics::CheckMetrics;
use crate::notification::NotificationDirective;
use crate::validation::{validate, ValidationResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for a [`FieldChecker`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldCheckConfig {
    /// The name of the host field holding the NHS number, `ttd_nhsnumber` by
    /// convention. The checker does not interpret the name.
    pub field: String,
}

impl FieldCheckConfig {
    pub fn new(field: impl Into<String>) -> Self {
        FieldCheckConfig {
            field: field.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CreateCheckerError {
    #[error("Field names must be non-empty")]
    EmptyFieldName,
}

/// The host had no field with the configured name when a check ran.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("The host has no field named \"{field}\"")]
pub struct FieldUnavailable {
    pub field: String,
}

/// Validates one field of a host and keeps its notification in sync.
///
/// A checker is immutable once built and can be shared across threads, so a
/// single instance can serve every check of its field.
#[derive(Debug)]
pub struct FieldChecker {
    field: String,
    metrics: CheckMetrics,
}

impl FieldChecker {
    pub fn new(config: FieldCheckConfig) -> Result<Self, CreateCheckerError> {
        if config.field.is_empty() {
            return Err(CreateCheckerError::EmptyFieldName);
        }
        let metrics = CheckMetrics::new(&config.field);
        Ok(FieldChecker {
            field: config.field,
            metrics,
        })
    }

    /// The name of the field this checker watches.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Validates the field's current entry and updates its notification.
    ///
    /// A missing field leaves the host untouched. Otherwise the notification
    /// always ends up matching the returned result, whatever the host held
    /// before.
    pub fn check(&self, host: &mut impl FieldHost) -> Result<ValidationResult, FieldUnavailable> {
        let entry = match host.field_state(&self.field) {
            FieldState::Missing => {
                tracing::error!(field = %self.field, "Unable to read the checked field");
                self.metrics.record_unavailable();
                return Err(FieldUnavailable {
                    field: self.field.clone(),
                });
            }
            FieldState::Blank => String::new(),
            FieldState::Filled(text) => text,
        };

        let result = validate(&entry);
        self.metrics.record(&result);

        match NotificationDirective::from(&result) {
            NotificationDirective::Clear => host.clear_notification(&self.field),
            NotificationDirective::Set { message } => host.set_notification(&self.field, &message),
        }
        Ok(result)
    }
}
