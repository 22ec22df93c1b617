//! Rule parsing errors, surfaced by the strict parser only.

use thiserror::Error;

/// Error from [`Rule::from_str`](crate::Rule) or
/// [`RuleSpec::parse_strict`](crate::RuleSpec::parse_strict).
///
/// The permissive parser never returns these; it drops the offending token
/// and logs it at debug level instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRuleError {
    /// The rule name is not part of the vocabulary.
    #[error("unknown rule `{name}`")]
    UnknownRule { name: String },
    /// A rule that requires a parameter was written without one.
    #[error("rule `{rule}` requires a parameter")]
    MissingParam { rule: String },
    /// The parameter after the colon could not be parsed.
    #[error("invalid parameter `{value}` for rule `{rule}`")]
    BadParam { rule: String, value: String },
}
