use std::collections::HashMap;

use formgate::valrule::Rule;
use formgate::{Feedback, FormValidator, NoFeedback, NoticeLevel, Options};

/// What presentation state a field was last put into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Neutral,
    Valid,
    Invalid,
}

/// Test double recording every feedback call the engine makes.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<String>,
    marks: HashMap<String, Mark>,
    messages: HashMap<String, String>,
    focused: Vec<String>,
}

impl Feedback for Recorder {
    fn mark_valid(&mut self, field: &str) {
        self.calls.push(format!("valid:{field}"));
        self.marks.insert(field.to_string(), Mark::Valid);
    }

    fn mark_invalid(&mut self, field: &str) {
        self.calls.push(format!("invalid:{field}"));
        self.marks.insert(field.to_string(), Mark::Invalid);
    }

    fn show_message(&mut self, field: &str, message: &str) {
        self.calls.push(format!("show:{field}"));
        self.messages.insert(field.to_string(), message.to_string());
    }

    fn clear_message(&mut self, field: &str) {
        self.calls.push(format!("clear:{field}"));
        self.messages.remove(field);
    }

    fn focus(&mut self, field: &str) {
        self.focused.push(field.to_string());
    }

    fn clear_marks(&mut self, field: &str) {
        self.marks.insert(field.to_string(), Mark::Neutral);
    }
}

#[test]
fn test_email_field_end_to_end() {
    let mut form = FormValidator::new();
    form.add_field("email", "required|email").unwrap();
    let mut feedback = Recorder::default();

    form.on_input("email", "a@b", 3, &mut feedback).unwrap();
    assert_eq!(feedback.marks.get("email"), Some(&Mark::Invalid));
    assert_eq!(
        feedback.messages.get("email").map(String::as_str),
        Some("Enter a valid email address")
    );
    assert!(!form.result_of("email").unwrap().valid);

    form.on_input("email", "a@b.com", 7, &mut feedback).unwrap();
    assert_eq!(feedback.marks.get("email"), Some(&Mark::Valid));
    assert!(feedback.messages.get("email").is_none());
    assert!(form.result_of("email").unwrap().valid);
}

#[test]
fn test_nit_live_filter_strips_letters() {
    let mut form = FormValidator::new();
    form.add_field("nit", "required|nit").unwrap();
    let mut feedback = NoFeedback;

    let (text, cursor) = form.on_input("nit", "12a34", 5, &mut feedback).unwrap();
    assert_eq!(text, "1234");
    assert_eq!(cursor, 4);
    assert_eq!(form.value_of("nit"), Some("1234"));
    // Formatting happened even though the value is still too short to pass.
    assert!(!form.result_of("nit").unwrap().valid);
}

#[test]
fn test_strip_digits_posts_warning_notice() {
    let mut form = FormValidator::new();
    form.add_field("owner", "required|noNumbers").unwrap();
    let mut feedback = NoFeedback;

    let (text, _) = form.on_input("owner", "Ana1", 4, &mut feedback).unwrap();
    assert_eq!(text, "Ana");

    let notice = form.notices().get("owner").expect("notice posted");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "This field may not contain numbers");

    // Clean keystrokes do not repost.
    form.notices_mut().dismiss("owner");
    form.on_input("owner", "Anab", 4, &mut feedback).unwrap();
    assert!(form.notices().is_empty());
}

#[test]
fn test_submit_blocks_and_focuses_first_invalid() {
    let mut form = FormValidator::new();
    form.add_field("owner", "required").unwrap();
    form.add_field("email", "required|email").unwrap();
    let mut feedback = Recorder::default();

    assert!(!form.on_submit(&mut feedback));
    assert_eq!(feedback.marks.get("owner"), Some(&Mark::Invalid));
    assert_eq!(feedback.marks.get("email"), Some(&Mark::Invalid));
    // Declaration order decides the focus target.
    assert_eq!(feedback.focused, vec!["owner".to_string()]);
}

#[test]
fn test_submit_passes_when_all_fields_valid() {
    let mut form = FormValidator::new();
    form.add_field("owner", "required|onlyLetters").unwrap();
    form.add_field("email", "required|email").unwrap();
    let mut feedback = Recorder::default();

    form.set_value("owner", "Maria").unwrap();
    form.set_value("email", "maria@clinic.com").unwrap();

    assert!(form.on_submit(&mut feedback));
    assert!(feedback.focused.is_empty());
    assert_eq!(feedback.marks.get("owner"), Some(&Mark::Valid));
}

#[test]
fn test_match_gates_password_confirmation() {
    let mut form = FormValidator::new();
    form.add_field("password", "required|password").unwrap();
    form.add_field("password2", "required|match:password").unwrap();
    let mut feedback = Recorder::default();

    form.set_value("password", "Secret1").unwrap();
    form.set_value("password2", "Secret1").unwrap();
    assert!(form.on_submit(&mut feedback));

    form.set_value("password2", "secret1").unwrap();
    assert!(!form.on_submit(&mut feedback));
    assert_eq!(
        feedback.messages.get("password2").map(String::as_str),
        Some("Passwords do not match")
    );
}

#[test]
fn test_show_errors_off_suppresses_feedback() {
    let mut form = FormValidator::new().with_options(Options {
        show_errors: false,
        ..Options::default()
    });
    form.add_field("email", "required|email").unwrap();
    let mut feedback = Recorder::default();

    form.on_input("email", "nope", 4, &mut feedback).unwrap();
    assert!(feedback.calls.is_empty());
    // The result map still tracks the outcome.
    assert!(!form.result_of("email").unwrap().valid);
}

#[test]
fn test_validate_on_input_off_defers_to_blur() {
    let mut form = FormValidator::new().with_options(Options {
        validate_on_input: false,
        ..Options::default()
    });
    form.add_field("email", "required|email").unwrap();
    let mut feedback = Recorder::default();

    form.on_input("email", "nope", 4, &mut feedback).unwrap();
    assert!(form.result_of("email").is_none());

    form.on_blur("email", &mut feedback).unwrap();
    assert!(!form.result_of("email").unwrap().valid);
}

#[test]
fn test_scroll_to_error_off_does_not_focus() {
    let mut form = FormValidator::new().with_options(Options {
        scroll_to_error: false,
        ..Options::default()
    });
    form.add_field("owner", "required").unwrap();
    let mut feedback = Recorder::default();

    assert!(!form.on_submit(&mut feedback));
    assert!(feedback.focused.is_empty());
}

#[test]
fn test_duplicate_field_rejected() {
    let mut form = FormValidator::new();
    form.add_field("email", "required").unwrap();
    let err = form.add_field("email", "email").unwrap_err();
    assert_eq!(err.to_string(), "field `email` is already registered");
}

#[test]
fn test_unknown_field_rejected() {
    let mut form = FormValidator::new();
    let err = form
        .on_input("ghost", "boo", 3, &mut NoFeedback)
        .unwrap_err();
    assert_eq!(err.to_string(), "no field named `ghost`");
}

#[test]
fn test_reset_returns_to_neutral() {
    let mut form = FormValidator::new();
    form.add_field("owner", "required").unwrap();
    let mut feedback = Recorder::default();

    assert!(!form.on_submit(&mut feedback));
    assert_eq!(feedback.marks.get("owner"), Some(&Mark::Invalid));

    form.reset(&mut feedback);
    assert_eq!(form.value_of("owner"), Some(""));
    assert!(form.results().is_empty());
    assert!(form.notices().is_empty());
    assert_eq!(feedback.marks.get("owner"), Some(&Mark::Neutral));
    assert!(feedback.messages.get("owner").is_none());
}

#[test]
fn test_add_field_auto_infers_rules() {
    let mut form = FormValidator::new();
    form.add_field_auto("correo").unwrap();
    form.add_field_auto("notas").unwrap();

    let rules = form.field("correo").unwrap().spec().rules();
    assert_eq!(rules, &[Rule::Email]);
    assert!(form.field("notas").unwrap().spec().is_empty());
}

#[test]
fn test_capitalize_runs_on_blur() {
    let mut form = FormValidator::new();
    form.add_field("owner", "required|noNumbers|capitalize").unwrap();
    let mut feedback = NoFeedback;

    form.on_input("owner", "juan PEREZ", 10, &mut feedback).unwrap();
    assert_eq!(form.value_of("owner"), Some("juan PEREZ"));

    form.on_blur("owner", &mut feedback).unwrap();
    assert_eq!(form.value_of("owner"), Some("Juan Perez"));
    assert!(form.result_of("owner").unwrap().valid);
}

#[test]
fn test_revalidation_with_same_outcome_is_stable() {
    let mut form = FormValidator::new();
    form.add_field("email", "required|email").unwrap();
    let mut feedback = Recorder::default();

    form.set_value("email", "a@b").unwrap();
    form.validate_field("email", &mut feedback).unwrap();
    let marks_after_first = feedback.marks.clone();
    let messages_after_first = feedback.messages.clone();

    form.validate_field("email", &mut feedback).unwrap();
    assert_eq!(feedback.marks, marks_after_first);
    assert_eq!(feedback.messages, messages_after_first);
}

#[test]
fn test_independent_validators_do_not_share_state() {
    let mut booking = FormValidator::new();
    booking.add_field("email", "required|email").unwrap();

    let mut payment = FormValidator::new()
        .with_messages(formgate::valrule::Messages::spanish());
    payment.add_field("email", "required|email").unwrap();

    let mut feedback = Recorder::default();
    booking.set_value("email", "a@b").unwrap();
    payment.set_value("email", "a@b").unwrap();

    booking.validate_field("email", &mut feedback).unwrap();
    assert_eq!(
        feedback.messages.get("email").map(String::as_str),
        Some("Enter a valid email address")
    );

    payment.validate_field("email", &mut feedback).unwrap();
    assert_eq!(
        feedback.messages.get("email").map(String::as_str),
        Some("Ingresa un correo electrónico válido")
    );
}
