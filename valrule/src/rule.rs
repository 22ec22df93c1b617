//! The validation rule vocabulary.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::context::EvalContext;
use crate::error::ParseRuleError;

/// Single `@` with a dotted domain. Deliberately narrower than the full
/// address grammar: `a@b` is rejected, `a@b.com` accepted.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// A single named validation rule, carrying its parameter where one applies.
///
/// Rules are evaluated against a field's trimmed value via [`Rule::check`]
/// and render back to their rule-string form via `Display`
/// (`Rule::MinLength(3)` is `minLength:3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "param", rename_all = "camelCase")]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Single `@` with a dotted domain.
    Email,
    /// Exactly 8 digits.
    Phone,
    /// Unicode letters and spaces only.
    OnlyLetters,
    /// Same check as `onlyLetters`, with its own message.
    NoNumbers,
    /// ASCII digits only.
    OnlyNumbers,
    /// Unicode letters, digits, and spaces.
    Alphanumeric,
    /// Tax number: 7 to 15 digits.
    Nit,
    /// Identity card: 5 to 10 digits.
    Ci,
    /// At least N characters.
    MinLength(usize),
    /// At most N characters.
    MaxLength(usize),
    /// At least 6 characters with one lowercase, one uppercase, one digit.
    Password,
    /// Equality with another field's current value.
    Match(String),
    /// Date today or later.
    FutureDate,
    /// Date today or earlier.
    PastDate,
    /// 13 to 16 digits passing the Luhn checksum; spaces ignored.
    CardNumber,
    /// `MM/YY`, month 01-12, not in a past month.
    CardExpiry,
}

impl Rule {
    /// Evaluate this rule against a trimmed value.
    ///
    /// Callers apply the empty-value skip policy (see
    /// [`RuleSpec::first_failure`](crate::RuleSpec::first_failure));
    /// `check` judges the value as given.
    pub fn check(&self, value: &str, ctx: &EvalContext<'_>) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => EMAIL.is_match(value),
            Rule::Phone => digits_len(value, 8, 8),
            Rule::OnlyLetters | Rule::NoNumbers => value
                .chars()
                .all(|c| c.is_alphabetic() || c.is_whitespace()),
            Rule::OnlyNumbers => value.chars().all(|c| c.is_ascii_digit()),
            Rule::Alphanumeric => value
                .chars()
                .all(|c| c.is_alphanumeric() || c.is_whitespace()),
            Rule::Nit => digits_len(value, 7, 15),
            Rule::Ci => digits_len(value, 5, 10),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Password => check_password(value),
            // A missing target field fails the rule rather than passing it.
            Rule::Match(other) => match ctx.peer_value(other) {
                Some(peer) => value == peer.trim(),
                None => false,
            },
            Rule::FutureDate => match parse_date(value) {
                Some(date) => date >= ctx.today(),
                None => false,
            },
            Rule::PastDate => match parse_date(value) {
                Some(date) => date <= ctx.today(),
                None => false,
            },
            Rule::CardNumber => check_card_number(value),
            Rule::CardExpiry => check_card_expiry(value, ctx.today()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::Email => write!(f, "email"),
            Rule::Phone => write!(f, "phone"),
            Rule::OnlyLetters => write!(f, "onlyLetters"),
            Rule::NoNumbers => write!(f, "noNumbers"),
            Rule::OnlyNumbers => write!(f, "onlyNumbers"),
            Rule::Alphanumeric => write!(f, "alphanumeric"),
            Rule::Nit => write!(f, "nit"),
            Rule::Ci => write!(f, "ci"),
            Rule::MinLength(min) => write!(f, "minLength:{min}"),
            Rule::MaxLength(max) => write!(f, "maxLength:{max}"),
            Rule::Password => write!(f, "password"),
            Rule::Match(other) => write!(f, "match:{other}"),
            Rule::FutureDate => write!(f, "futureDate"),
            Rule::PastDate => write!(f, "pastDate"),
            Rule::CardNumber => write!(f, "cardNumber"),
            Rule::CardExpiry => write!(f, "cardExpiry"),
        }
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    /// Parse one rule token, e.g. `email` or `minLength:3`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, param) = match token.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (token, None),
        };
        let rule = match name {
            "required" => Rule::Required,
            "email" => Rule::Email,
            "phone" => Rule::Phone,
            "onlyLetters" => Rule::OnlyLetters,
            "noNumbers" => Rule::NoNumbers,
            "onlyNumbers" => Rule::OnlyNumbers,
            "alphanumeric" => Rule::Alphanumeric,
            "nit" => Rule::Nit,
            "ci" => Rule::Ci,
            "password" => Rule::Password,
            "futureDate" => Rule::FutureDate,
            "pastDate" => Rule::PastDate,
            "cardNumber" => Rule::CardNumber,
            "cardExpiry" => Rule::CardExpiry,
            "minLength" => Rule::MinLength(length_param("minLength", param)?),
            "maxLength" => Rule::MaxLength(length_param("maxLength", param)?),
            "match" => match param {
                Some(other) if !other.is_empty() => Rule::Match(other.to_string()),
                _ => {
                    return Err(ParseRuleError::MissingParam {
                        rule: "match".to_string(),
                    })
                }
            },
            _ => {
                return Err(ParseRuleError::UnknownRule {
                    name: name.to_string(),
                })
            }
        };
        Ok(rule)
    }
}

fn length_param(rule: &str, param: Option<&str>) -> Result<usize, ParseRuleError> {
    let raw = param.ok_or_else(|| ParseRuleError::MissingParam {
        rule: rule.to_string(),
    })?;
    raw.parse().map_err(|_| ParseRuleError::BadParam {
        rule: rule.to_string(),
        value: raw.to_string(),
    })
}

fn digits_len(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max && value.chars().all(|c| c.is_ascii_digit())
}

fn check_password(value: &str) -> bool {
    value.chars().count() >= 6
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn check_card_number(value: &str) -> bool {
    let mut digits = Vec::new();
    for c in value.chars() {
        if c.is_whitespace() {
            continue;
        }
        match c.to_digit(10) {
            Some(d) => digits.push(d),
            None => return false,
        }
    }
    if digits.len() < 13 || digits.len() > 16 {
        return false;
    }
    // Luhn: double every second digit from the right, fold 10s back in.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

fn check_card_expiry(value: &str, today: NaiveDate) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };
    if month.len() != 2 || year.len() != 2 {
        return false;
    }
    let (Ok(month), Ok(year)) = (month.parse::<u32>(), year.parse::<i32>()) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }
    // A card stays valid through the end of its expiry month.
    (2000 + year, month) >= (today.year(), today.month())
}
