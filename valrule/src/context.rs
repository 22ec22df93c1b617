//! Evaluation context handed to the rule predicates.

use std::collections::HashMap;

use chrono::NaiveDate;

/// Snapshot access to sibling field values, used by `match:<field>`.
///
/// The lookup happens at evaluation time and reads whatever the other field
/// holds right then; it is not a live binding.
pub trait PeerValues {
    /// Current value of the named field, if such a field exists.
    fn peer_value(&self, field: &str) -> Option<String>;
}

impl PeerValues for HashMap<String, String> {
    fn peer_value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

/// Context for one evaluation pass: the reference date for the date rules
/// and an optional view of the other fields for `match`.
///
/// Without peers, every `match` rule fails; a spec pointing at a field that
/// does not exist degrades to "never valid" rather than raising anything.
pub struct EvalContext<'a> {
    today: NaiveDate,
    peers: Option<&'a dyn PeerValues>,
}

impl<'a> EvalContext<'a> {
    /// Context with today's local date and no peer fields.
    pub fn new() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
            peers: None,
        }
    }

    /// Context with a pinned reference date (tests, replays).
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today, peers: None }
    }

    /// Attach peer-field lookup for `match` rules.
    pub fn peers(mut self, peers: &'a dyn PeerValues) -> Self {
        self.peers = Some(peers);
        self
    }

    /// The reference date, at midnight granularity.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Snapshot read of another field's current value.
    pub fn peer_value(&self, field: &str) -> Option<String> {
        self.peers.and_then(|peers| peers.peer_value(field))
    }
}

impl Default for EvalContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
