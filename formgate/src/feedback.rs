//! Presentation capability used by the engine.

/// Visual side effects of validation, implemented by the host UI.
///
/// The engine calls these on every (re)validation, so outcomes repeat;
/// implementations must be idempotent. After each pass exactly one of
/// `mark_valid` / `mark_invalid` is in effect for a field, and the message
/// element is shown for invalid fields and hidden otherwise.
pub trait Feedback {
    /// Put the field in its valid presentation state.
    fn mark_valid(&mut self, field: &str);
    /// Put the field in its invalid presentation state.
    fn mark_invalid(&mut self, field: &str);
    /// Show the failure message next to the field.
    fn show_message(&mut self, field: &str, message: &str);
    /// Hide the field's message element.
    fn clear_message(&mut self, field: &str);
    /// Move focus to the field (first invalid one on a blocked submit).
    fn focus(&mut self, field: &str);
    /// Return the field to its neutral state, neither valid nor invalid.
    /// Called on [`FormValidator::reset`](crate::FormValidator::reset).
    fn clear_marks(&mut self, _field: &str) {}
}

/// Feedback sink that does nothing, for headless validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn mark_valid(&mut self, _field: &str) {}
    fn mark_invalid(&mut self, _field: &str) {}
    fn show_message(&mut self, _field: &str, _message: &str) {}
    fn clear_message(&mut self, _field: &str) {}
    fn focus(&mut self, _field: &str) {}
}
