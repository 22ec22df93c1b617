//! Engine API errors.

use thiserror::Error;

/// Errors from form construction and event entry points.
///
/// Nothing about user input is ever an error; invalid input is a
/// first-class validation result. These only flag API misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field with this name is already registered.
    #[error("field `{0}` is already registered")]
    DuplicateField(String),
    /// No field with this name is registered.
    #[error("no field named `{0}`")]
    UnknownField(String),
}
