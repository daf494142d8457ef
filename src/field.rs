/// The contents of a single named field as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// The host has no field with that name.
    Missing,
    /// The field exists but the user has entered nothing.
    Blank,
    /// The field exists and holds the user's entry.
    Filled(String),
}

/// A form-like surface that owns named fields and per-field notifications.
///
/// Implementations bridge to whatever actually holds the data, such as a UI
/// form, a request payload, or a test double. The crate only ever reads a
/// field's current value and writes its notification, so hosts stay free to
/// store both however they like.
pub trait FieldHost {
    /// The current contents of `field`.
    fn field_state(&self, field: &str) -> FieldState;

    /// Attach `message` to `field`, replacing any previous notification.
    fn set_notification(&mut self, field: &str, message: &str);

    /// Remove the notification attached to `field`, if any.
    fn clear_notification(&mut self, field: &str);
}
