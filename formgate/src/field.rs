//! Per-field state: text, cursor, and the parsed rule spec.

use valrule::RuleSpec;

/// State of a single registered field.
///
/// The spec is parsed once at registration and never changes; text and
/// cursor follow the host's input events. The cursor is a byte offset.
#[derive(Debug, Clone, Default)]
pub struct Field {
    name: String,
    spec: RuleSpec,
    value: String,
    cursor: usize,
}

impl Field {
    pub(crate) fn new(name: impl Into<String>, spec: RuleSpec) -> Self {
        Self {
            name: name.into(),
            spec,
            value: String::new(),
            cursor: 0,
        }
    }

    /// The field's registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed rule spec.
    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    /// Current text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) fn set_text(&mut self, value: String, cursor: usize) {
        self.cursor = cursor.min(value.len());
        self.value = value;
    }

    /// Set the value programmatically, placing the cursor at the end.
    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}
