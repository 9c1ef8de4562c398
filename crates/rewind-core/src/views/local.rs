//! Local view computation, the mandatory fallback path.

use chrono::NaiveDate;

use super::{SortKey, ViewError, ViewProvider};
use crate::problem::Problem;

/// Direct in-process view computation. Cannot fail; the inherent methods
/// are infallible and the trait impl wraps them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalViews;

impl LocalViews {
    pub fn due(&self, problems: &[Problem], today: NaiveDate) -> Vec<Problem> {
        problems
            .iter()
            .filter(|p| p.is_due(today))
            .cloned()
            .collect()
    }

    pub fn filtered(&self, problems: &[Problem], term: &str) -> Vec<Problem> {
        let needle = term.to_lowercase();
        problems
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    pub fn sorted_by(&self, problems: &[Problem], key: SortKey) -> Vec<Problem> {
        let mut sorted = problems.to_vec();
        // Vec::sort_by is stable, preserving input order for equal keys.
        match key {
            SortKey::NextReview => sorted.sort_by(|a, b| a.next_review_at.cmp(&b.next_review_at)),
            SortKey::CreatedAt => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Name => {
                sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
        }
        sorted
    }
}

impl ViewProvider for LocalViews {
    fn due_today(&self, problems: &[Problem], today: NaiveDate) -> Result<Vec<Problem>, ViewError> {
        Ok(self.due(problems, today))
    }

    fn filter(&self, problems: &[Problem], term: &str) -> Result<Vec<Problem>, ViewError> {
        Ok(self.filtered(problems, term))
    }

    fn sorted(&self, problems: &[Problem], key: SortKey) -> Result<Vec<Problem>, ViewError> {
        Ok(self.sorted_by(problems, key))
    }
}
