//! The form engine: field registry, event entry points, submit gating.

use std::collections::HashMap;

use log::{debug, trace};
use valrule::{EvalContext, Filter, FilterTrigger, Messages, PeerValues, RuleSpec};

use crate::error::FormError;
use crate::feedback::Feedback;
use crate::field::Field;
use crate::infer::infer_spec;
use crate::notice::{Notice, NoticeBoard};
use crate::options::Options;
use crate::result::{FieldError, ValidationResult};

/// Per-field validation outcome, recomputed on every qualifying event and
/// replaced wholesale, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    /// Whether the field passed.
    pub valid: bool,
    /// Rendered failure message when it did not.
    pub message: Option<String>,
}

/// A form bound to a set of declaratively-validated fields.
///
/// All entry points are synchronous `&mut self` methods, serialized by the
/// host's event loop; the engine holds no locks and spawns nothing. The
/// host owns presentation and passes a [`Feedback`] sink into every event.
///
/// Construction takes explicit [`Options`] and [`Messages`] values, so
/// independent validator instances can coexist with different rule sets
/// and wording.
#[derive(Debug, Default)]
pub struct FormValidator {
    fields: Vec<Field>,
    options: Options,
    messages: Messages,
    results: HashMap<String, FieldResult>,
    notices: NoticeBoard,
}

impl FormValidator {
    /// A validator with default options and English messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace the message catalog.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Register a field with a pipe-delimited rule string.
    ///
    /// The spec is parsed permissively, once; unrecognized tokens are
    /// dropped. Field order is declaration order, which also decides which
    /// invalid field gets focused on a blocked submit.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        rules: &str,
    ) -> Result<(), FormError> {
        let name = name.into();
        if self.index_of(&name).is_ok() {
            return Err(FormError::DuplicateField(name));
        }
        let spec = RuleSpec::parse(rules);
        debug!("registered field `{name}` with rules `{rules}`");
        self.fields.push(Field::new(name, spec));
        Ok(())
    }

    /// Register a field, inferring its rules from the field name.
    ///
    /// Names with no inference (see [`infer_spec`]) get an empty spec.
    pub fn add_field_auto(&mut self, name: impl Into<String>) -> Result<(), FormError> {
        let name = name.into();
        match infer_spec(&name) {
            Some(rules) => self.add_field(name, rules),
            None => self.add_field(name, ""),
        }
    }

    /// The registered field, if any.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Registered fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Current value of a field.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.field(name).map(Field::value)
    }

    /// Set a field's value programmatically. No filters run and nothing is
    /// re-validated; the cursor moves to the end.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let idx = self.index_of(name)?;
        self.fields[idx].set_value(value);
        Ok(())
    }

    /// The active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Results of the most recent validation pass, keyed by field name.
    pub fn results(&self) -> &HashMap<String, FieldResult> {
        &self.results
    }

    /// The most recent result for one field.
    pub fn result_of(&self, name: &str) -> Option<&FieldResult> {
        self.results.get(name)
    }

    /// Pending transient notices.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Mutable access to the notice board, for ticking and dismissal.
    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Handle one keystroke's worth of change to a field.
    ///
    /// Applies the field's live filters to `value`, stores the result, and
    /// re-validates when `validate_on_input` is set. Returns the filtered
    /// text and cursor for the host to write back into its input. When a
    /// digit-stripping filter swallows input, a warning notice is posted
    /// for the field.
    pub fn on_input(
        &mut self,
        name: &str,
        value: &str,
        cursor: usize,
        feedback: &mut dyn Feedback,
    ) -> Result<(String, usize), FormError> {
        let idx = self.index_of(name)?;

        let filters: Vec<Filter> = self.fields[idx]
            .spec()
            .filters_for(FilterTrigger::Input)
            .collect();
        let mut text = value.to_string();
        let mut cursor = cursor.min(text.len());
        let mut stripped = false;
        for filter in filters {
            let (next, next_cursor) = filter.apply(&text, cursor);
            if filter == Filter::StripDigits && next.len() < text.len() {
                stripped = true;
            }
            text = next;
            cursor = next_cursor;
        }
        if stripped {
            trace!("stripped digits from `{name}`");
            self.notices
                .post(Notice::warning(name, self.messages.no_numbers.clone()));
        }

        self.fields[idx].set_text(text.clone(), cursor);
        if self.options.validate_on_input {
            self.validate_at(idx, feedback);
        }
        Ok((text, cursor))
    }

    /// Handle a field losing focus: run blur filters (`capitalize`), then
    /// re-validate when `validate_on_blur` is set.
    pub fn on_blur(&mut self, name: &str, feedback: &mut dyn Feedback) -> Result<(), FormError> {
        let idx = self.index_of(name)?;

        let filters: Vec<Filter> = self.fields[idx]
            .spec()
            .filters_for(FilterTrigger::Blur)
            .collect();
        if !filters.is_empty() {
            let mut text = self.fields[idx].value().to_string();
            let mut cursor = self.fields[idx].cursor();
            for filter in filters {
                (text, cursor) = filter.apply(&text, cursor);
            }
            self.fields[idx].set_text(text, cursor);
        }

        if self.options.validate_on_blur {
            self.validate_at(idx, feedback);
        }
        Ok(())
    }

    /// Validate a single field now, regardless of options.
    pub fn validate_field(
        &mut self,
        name: &str,
        feedback: &mut dyn Feedback,
    ) -> Result<FieldResult, FormError> {
        let idx = self.index_of(name)?;
        Ok(self.validate_at(idx, feedback))
    }

    /// Validate every field, applying visual updates; failures are
    /// collected in declaration order.
    pub fn validate_form(&mut self, feedback: &mut dyn Feedback) -> ValidationResult {
        let mut errors = Vec::new();
        for idx in 0..self.fields.len() {
            let result = self.validate_at(idx, feedback);
            if !result.valid {
                errors.push(FieldError {
                    field: self.fields[idx].name().to_string(),
                    message: result.message.unwrap_or_default(),
                });
            }
        }
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Gate a submit attempt.
    ///
    /// Returns `true` when every field passes. On failure the host is
    /// expected to block submission; the first invalid field is focused
    /// when `scroll_to_error` is set.
    pub fn on_submit(&mut self, feedback: &mut dyn Feedback) -> bool {
        let result = self.validate_form(feedback);
        if let Some(field) = result.first_invalid_field() {
            debug!("submit blocked by `{field}`");
            if self.options.scroll_to_error {
                feedback.focus(field);
            }
            return false;
        }
        true
    }

    /// Clear values, results, notices, and presentation.
    pub fn reset(&mut self, feedback: &mut dyn Feedback) {
        for field in &mut self.fields {
            field.clear();
        }
        for field in &self.fields {
            feedback.clear_marks(field.name());
            feedback.clear_message(field.name());
        }
        self.results.clear();
        self.notices.clear();
    }

    fn validate_at(&mut self, idx: usize, feedback: &mut dyn Feedback) -> FieldResult {
        let field = &self.fields[idx];
        let name = field.name().to_string();
        let peers = PeerFields(&self.fields);
        let ctx = EvalContext::new().peers(&peers);
        let result = match field.spec().first_failure(field.value(), &ctx) {
            Some(rule) => {
                trace!("field `{name}` failed `{rule}`");
                FieldResult {
                    valid: false,
                    message: Some(self.messages.render(rule)),
                }
            }
            None => FieldResult {
                valid: true,
                message: None,
            },
        };

        if self.options.show_errors {
            apply_feedback(feedback, &name, &result);
        }
        self.results.insert(name, result.clone());
        result
    }

    fn index_of(&self, name: &str) -> Result<usize, FormError> {
        self.fields
            .iter()
            .position(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

/// Snapshot view of the form's fields for `match` rules.
struct PeerFields<'a>(&'a [Field]);

impl PeerValues for PeerFields<'_> {
    fn peer_value(&self, field: &str) -> Option<String> {
        self.0
            .iter()
            .find(|candidate| candidate.name() == field)
            .map(|candidate| candidate.value().to_string())
    }
}

fn apply_feedback(feedback: &mut dyn Feedback, field: &str, result: &FieldResult) {
    if result.valid {
        feedback.mark_valid(field);
        feedback.clear_message(field);
    } else {
        feedback.mark_invalid(field);
        if let Some(message) = &result.message {
            feedback.show_message(field, message);
        }
    }
}
