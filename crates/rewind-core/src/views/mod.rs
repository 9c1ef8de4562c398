//! Derived views over the problem list.
//!
//! Three read-only views: due-today selection, free-text filtering and
//! multi-criterion sorting. Each view runs through a primary
//! [`ViewProvider`] when one is configured and falls back to the local
//! computation when the primary fails. The two paths are required to be
//! observably identical; the fallback exists so a primary failure is never
//! visible to the user.

mod batch;
mod local;

pub use batch::BatchViews;
pub use local::LocalViews;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::problem::Problem;

/// Sort criterion for the sorted view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by next review date (soonest first).
    NextReview,
    /// Descending by creation date (newest first).
    CreatedAt,
    /// Ascending by name, case-folded.
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::NextReview => "next_review",
            SortKey::CreatedAt => "created_at",
            SortKey::Name => "name",
        };
        f.write_str(s)
    }
}

/// Error for a sort key string outside the recognized set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next_review" => Ok(SortKey::NextReview),
            "created_at" => Ok(SortKey::CreatedAt),
            "name" => Ok(SortKey::Name),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Failure inside a view provider. Always recovered by the local fallback,
/// never surfaced to the caller of [`ResilientViews`].
#[derive(Error, Debug)]
pub enum ViewError {
    /// Payload codec failure at the batch boundary
    #[error("view codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// A provider of the three derived views.
///
/// Implementations never mutate the input; each view is surfaced as a new
/// ordered list.
pub trait ViewProvider {
    /// Problems with `next_review_at <= today`, input order preserved.
    fn due_today(&self, problems: &[Problem], today: NaiveDate) -> Result<Vec<Problem>, ViewError>;

    /// Problems whose name or any tag contains `term`, case-insensitively.
    /// `term` is expected to be non-empty; the empty-term special case
    /// belongs to the session controller.
    fn filter(&self, problems: &[Problem], term: &str) -> Result<Vec<Problem>, ViewError>;

    /// A new list ordered by `key`. Stable for equal keys.
    fn sorted(&self, problems: &[Problem], key: SortKey) -> Result<Vec<Problem>, ViewError>;
}

/// Primary-with-fallback view composition.
///
/// Tries the primary provider first and falls back to [`LocalViews`] on
/// any error, logging the failure. View results are therefore infallible
/// from the caller's perspective.
pub struct ResilientViews {
    primary: Option<Box<dyn ViewProvider>>,
    fallback: LocalViews,
}

impl ResilientViews {
    /// Compose with a primary provider.
    pub fn with_primary(primary: Box<dyn ViewProvider>) -> Self {
        Self {
            primary: Some(primary),
            fallback: LocalViews,
        }
    }

    /// Local computation only, no primary.
    pub fn local_only() -> Self {
        Self {
            primary: None,
            fallback: LocalViews,
        }
    }

    pub fn due_today(&self, problems: &[Problem], today: NaiveDate) -> Vec<Problem> {
        if let Some(primary) = &self.primary {
            match primary.due_today(problems, today) {
                Ok(due) => return due,
                Err(e) => warn!("primary due-today view failed, using local fallback: {e}"),
            }
        }
        self.fallback.due(problems, today)
    }

    pub fn filter(&self, problems: &[Problem], term: &str) -> Vec<Problem> {
        if let Some(primary) = &self.primary {
            match primary.filter(problems, term) {
                Ok(filtered) => return filtered,
                Err(e) => warn!("primary filter view failed, using local fallback: {e}"),
            }
        }
        self.fallback.filtered(problems, term)
    }

    pub fn sorted(&self, problems: &[Problem], key: SortKey) -> Vec<Problem> {
        if let Some(primary) = &self.primary {
            match primary.sorted(problems, key) {
                Ok(sorted) => return sorted,
                Err(e) => warn!("primary sort view failed, using local fallback: {e}"),
            }
        }
        self.fallback.sorted_by(problems, key)
    }
}

impl Default for ResilientViews {
    fn default() -> Self {
        Self::with_primary(Box::new(BatchViews))
    }
}
