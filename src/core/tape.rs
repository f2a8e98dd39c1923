//! The calculator tape.
//!
//! Provides a timestamped record of every token an engine has
//! applied, together with the readout before and after it.

use super::state::{Phase, Readout};
use super::token::Token;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single applied token.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, Readout, TapeEntry, Token};
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     token: Token::Digit(7),
///     before: Readout::zero(),
///     after: Readout::Value("7".to_string()),
///     phase: Phase::Entering,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.token.to_string(), "7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The token that was applied
    pub token: Token,
    /// Readout before the token
    pub before: Readout,
    /// Readout after the token
    pub after: Readout,
    /// Phase the engine ended up in
    pub phase: Phase,
    /// When the token was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered record of applied tokens.
///
/// `record` returns a new tape with the entry appended and leaves the
/// original untouched. A running [`Calculator`](crate::Calculator) appends
/// in place and drops the oldest entries past its limit.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Phase, Readout, Tape, TapeEntry, Token};
/// use chrono::Utc;
///
/// let tape = Tape::new();
/// let tape = tape.record(TapeEntry {
///     token: Token::Digit(4),
///     before: Readout::zero(),
///     after: Readout::Value("4".to_string()),
///     phase: Phase::Entering,
///     timestamp: Utc::now(),
/// });
/// let tape = tape.record(TapeEntry {
///     token: Token::Digit(2),
///     before: Readout::Value("4".to_string()),
///     after: Readout::Value("42".to_string()),
///     phase: Phase::Entering,
///     timestamp: Utc::now(),
/// });
///
/// let readouts = tape.readouts();
/// assert_eq!(readouts.len(), 3); // 0 -> 4 -> 42
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
}

impl Tape {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Record an entry, returning a new tape.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push_back(entry);
        Self { entries }
    }

    /// Append in place, dropping the oldest entries beyond `limit`.
    pub(crate) fn push(&mut self, entry: TapeEntry, limit: Option<usize>) {
        self.entries.push_back(entry);
        if let Some(limit) = limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    /// Keep only the most recent `limit` entries.
    pub fn truncated(&self, limit: usize) -> Self {
        let skip = self.entries.len().saturating_sub(limit);
        Self {
            entries: self.entries.iter().skip(skip).cloned().collect(),
        }
    }

    /// Readouts shown over time: the first entry's `before`, then the
    /// `after` of each entry.
    pub fn readouts(&self) -> Vec<&Readout> {
        let mut readouts = Vec::new();
        if let Some(first) = self.entries.front() {
            readouts.push(&first.before);
        }
        for entry in &self.entries {
            readouts.push(&entry.after);
        }
        readouts
    }

    /// Time between the first and the last entry.
    ///
    /// Returns `None` for an empty tape.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn entries(&self) -> &VecDeque<TapeEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
