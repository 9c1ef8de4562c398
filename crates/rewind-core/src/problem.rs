//! Problem record and proficiency level types.
//!
//! A `Problem` is the sole entity of the engine: a practice item with an
//! opaque numeric id, free-form metadata, a proficiency [`Level`] and a
//! scheduled next-review date. Dates are calendar dates (no time component)
//! so that their natural ordering matches the ISO 8601 wire form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Proficiency level attached to a problem.
///
/// The same closed set doubles as the review outcome submitted when a
/// review session completes. Wire form is uppercase (`"AGAIN"`, `"HARD"`,
/// `"GOOD"`, `"EASY"`), matching the import/export payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Could not recall; review again tomorrow.
    Again,
    /// Recalled with significant effort.
    Hard,
    /// Recalled with some effort (default).
    Good,
    /// Recalled effortlessly.
    Easy,
}

impl Default for Level {
    fn default() -> Self {
        Level::Good
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Again => "AGAIN",
            Level::Hard => "HARD",
            Level::Good => "GOOD",
            Level::Easy => "EASY",
        };
        f.write_str(s)
    }
}

/// Error for a level string outside the recognized set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AGAIN" => Ok(Level::Again),
            "HARD" => Ok(Level::Hard),
            "GOOD" => Ok(Level::Good),
            "EASY" => Ok(Level::Easy),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// A tracked practice problem.
///
/// Every field except `level` and `next_review_at` is fixed at creation.
/// Those two advance together through the scheduling provider's review
/// transition and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Problem {
    /// Epoch-milliseconds at creation. Unique across the store.
    pub id: i64,
    pub name: String,
    /// Absent or non-empty; never an empty string.
    pub url: Option<String>,
    /// Trimmed, non-empty entries. Not deduplicated by the engine.
    pub tags: Vec<String>,
    /// Stored verbatim; markup interpretation is a presentation concern.
    pub memo: String,
    pub level: Level,
    pub created_at: NaiveDate,
    pub next_review_at: NaiveDate,
}

impl Problem {
    /// True when the problem is due on or before `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review_at <= today
    }
}

/// User-supplied registration input, before validation and scheduling.
#[derive(Debug, Clone, Default)]
pub struct NewProblem {
    pub name: String,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub memo: String,
    pub level: Level,
}
