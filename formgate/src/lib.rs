//! Declarative form validation engine.
//!
//! `formgate` binds the [`valrule`] vocabulary to a stateful form: fields
//! registered once with pipe-delimited rule strings, synchronous event
//! entry points (`input` / `blur` / `submit`), live auto-formatting with
//! cursor tracking, and presentation pushed through the [`Feedback`]
//! capability so the engine itself never touches a UI.
//!
//! ```
//! use formgate::{FormValidator, NoFeedback};
//!
//! let mut form = FormValidator::new();
//! form.add_field("owner", "required|onlyLetters|minLength:3").unwrap();
//! form.add_field("email", "required|email").unwrap();
//!
//! let mut feedback = NoFeedback;
//! form.on_input("owner", "Maria", 5, &mut feedback).unwrap();
//! form.on_input("email", "maria@example.com", 17, &mut feedback).unwrap();
//!
//! assert!(form.on_submit(&mut feedback));
//! ```

pub mod engine;
pub mod error;
pub mod feedback;
pub mod field;
pub mod infer;
pub mod notice;
pub mod options;
pub mod result;

pub use engine::{FieldResult, FormValidator};
pub use error::FormError;
pub use feedback::{Feedback, NoFeedback};
pub use field::Field;
pub use infer::infer_spec;
pub use notice::{DEFAULT_NOTICE_DURATION, Notice, NoticeBoard, NoticeLevel};
pub use options::Options;
pub use result::{FieldError, ValidationResult};

pub use valrule;
