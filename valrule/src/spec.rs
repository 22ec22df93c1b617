//! Pipe-delimited rule spec parsing.

use std::str::FromStr;

use crate::context::EvalContext;
use crate::error::ParseRuleError;
use crate::format::{Filter, FilterTrigger};
use crate::rule::Rule;

/// The parsed rule string of one field: validation rules in declared order,
/// plus the live filters the same tokens install.
///
/// Specs are parsed once at field registration and immutable afterwards.
/// Rule order is significant; evaluation stops at the first failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSpec {
    rules: Vec<Rule>,
    filters: Vec<Filter>,
}

impl RuleSpec {
    /// Parse permissively: tokens that are neither a known rule nor a
    /// format tag (including known rules with a missing or malformed
    /// parameter) are dropped and logged at debug level. Never fails.
    pub fn parse(raw: &str) -> Self {
        let mut spec = Self::default();
        for token in tokens(raw) {
            let rule = Rule::from_str(token).ok();
            let filter = Filter::for_token(rule_name(token));
            if rule.is_none() && filter.is_none() {
                log::debug!("ignoring unrecognized rule token `{}`", token);
            }
            if let Some(rule) = rule {
                spec.rules.push(rule);
            }
            if let Some(filter) = filter {
                spec.push_filter(filter);
            }
        }
        spec
    }

    /// Parse strictly: any unrecognized token or bad parameter is an error.
    ///
    /// Format-only tags (`uppercase`, `capitalize`) are part of the
    /// vocabulary and parse fine.
    pub fn parse_strict(raw: &str) -> Result<Self, ParseRuleError> {
        let mut spec = Self::default();
        for token in tokens(raw) {
            match Rule::from_str(token) {
                Ok(rule) => {
                    if let Some(filter) = Filter::for_token(rule_name(token)) {
                        spec.push_filter(filter);
                    }
                    spec.rules.push(rule);
                }
                Err(ParseRuleError::UnknownRule { name }) => match Filter::for_token(&name) {
                    Some(filter) => spec.push_filter(filter),
                    None => return Err(ParseRuleError::UnknownRule { name }),
                },
                Err(err) => return Err(err),
            }
        }
        Ok(spec)
    }

    /// Validation rules in declared order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Live filters, deduplicated, in first-seen order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Filters that run for the given trigger.
    pub fn filters_for(&self, trigger: FilterTrigger) -> impl Iterator<Item = Filter> + '_ {
        self.filters
            .iter()
            .copied()
            .filter(move |filter| filter.trigger() == trigger)
    }

    /// True when the spec carries no rules and no filters.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.filters.is_empty()
    }

    /// First failing rule for `value`, or `None` when the field passes.
    ///
    /// The value is trimmed first. An empty trimmed value only ever fails
    /// `required`; every other rule treats it as vacuously valid.
    pub fn first_failure(&self, value: &str, ctx: &EvalContext<'_>) -> Option<&Rule> {
        let value = value.trim();
        for rule in &self.rules {
            if value.is_empty() && !matches!(rule, Rule::Required) {
                continue;
            }
            if !rule.check(value, ctx) {
                return Some(rule);
            }
        }
        None
    }

    fn push_filter(&mut self, filter: Filter) {
        if !self.filters.contains(&filter) {
            self.filters.push(filter);
        }
    }
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('|').map(str::trim).filter(|token| !token.is_empty())
}

fn rule_name(token: &str) -> &str {
    token.split_once(':').map(|(name, _)| name).unwrap_or(token)
}
