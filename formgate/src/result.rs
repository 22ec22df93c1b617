//! Form-level validation results.

/// Information about a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Registered field name (also the focus target).
    pub field: String,
    /// Rendered failure message.
    pub message: String,
}

/// Result of validating a whole form.
///
/// Errors appear in field declaration order, so the first entry is the
/// field a host should focus on a blocked submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every field passed.
    #[default]
    Valid,
    /// One or more fields failed.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All validation errors, in field declaration order.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// The first validation error, if any.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Name of the first invalid field, for focusing.
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|error| error.field.as_str())
    }
}
