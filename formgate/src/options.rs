//! Engine options.

use serde::{Deserialize, Serialize};

/// Behavior switches for [`FormValidator`](crate::FormValidator).
///
/// Everything defaults to on, the usual inline-feedback setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Re-check a field on every keystroke.
    pub validate_on_input: bool,
    /// Re-check a field when it loses focus.
    pub validate_on_blur: bool,
    /// Emit visual feedback through the [`Feedback`](crate::Feedback) sink.
    pub show_errors: bool,
    /// Focus the first invalid field when a submit is blocked.
    pub scroll_to_error: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            validate_on_input: true,
            validate_on_blur: true,
            show_errors: true,
            scroll_to_error: true,
        }
    }
}
