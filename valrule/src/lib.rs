//! Declarative field-validation vocabulary.
//!
//! A field declares its checks as a compact pipe-delimited string such as
//! `required|onlyLetters|minLength:3`. [`RuleSpec::parse`] turns that string
//! into an ordered list of [`Rule`]s plus the live [`Filter`]s the same
//! tokens install, once, at field registration time. Evaluation walks the
//! rules in declared order and stops at the first failure.
//!
//! Invalid input is never an error: predicates return a plain pass/fail and
//! the [`Messages`] catalog renders the human-readable side of a failure.
//!
//! ```
//! use valrule::{EvalContext, Messages, RuleSpec};
//!
//! let spec = RuleSpec::parse("required|email");
//! let ctx = EvalContext::new();
//!
//! assert!(spec.first_failure("vet@clinic.com", &ctx).is_none());
//!
//! let failed = spec.first_failure("vet@clinic", &ctx).expect("no dot in domain");
//! assert_eq!(
//!     Messages::default().render(failed),
//!     "Enter a valid email address",
//! );
//! ```

pub mod context;
pub mod error;
pub mod format;
pub mod messages;
pub mod rule;
pub mod spec;

pub use context::{EvalContext, PeerValues};
pub use error::ParseRuleError;
pub use format::{Filter, FilterTrigger};
pub use messages::Messages;
pub use rule::Rule;
pub use spec::RuleSpec;
