use crate::field::{FieldHost, FieldState};
use std::collections::BTreeMap;

/// A simple implementation of [`FieldHost`] backed by string maps. This is
/// meant for testing / demonstration purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleForm {
    values: BTreeMap<String, String>,
    notifications: BTreeMap<String, String>,
}

impl SimpleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field holding `value` and returns the form, so fixtures can be
    /// built inline.
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Overwrites the value of `field`, creating the field if it is missing.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// The notification currently attached to `field`, if any.
    pub fn notification(&self, field: &str) -> Option<&str> {
        self.notifications.get(field).map(String::as_str)
    }
}

impl FieldHost for SimpleForm {
    fn field_state(&self, field: &str) -> FieldState {
        match self.values.get(field) {
            None => FieldState::Missing,
            Some(value) if value.is_empty() => FieldState::Blank,
            Some(value) => FieldState::Filled(value.clone()),
        }
    }

    fn set_notification(&mut self, field: &str, message: &str) {
        self.notifications
            .insert(field.to_owned(), message.to_owned());
    }

    fn clear_notification(&mut self, field: &str) {
        self.notifications.remove(field);
    }
}
