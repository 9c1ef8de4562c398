//! Batch view provider, the primary path.
//!
//! Mirrors the scheduling module's batch-processing contract: the problem
//! list crosses the boundary as a serialized JSON array and comes back the
//! same way. Codec failures at that boundary are the reason the resilient
//! wrapper keeps a local fallback.

use chrono::NaiveDate;

use super::{SortKey, ViewError, ViewProvider};
use crate::problem::Problem;

/// Batch-contract view provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchViews;

impl BatchViews {
    /// Due selection over a serialized problem list.
    pub fn due_payload(&self, problems_json: &str, today: NaiveDate) -> Result<String, ViewError> {
        let problems: Vec<Problem> = serde_json::from_str(problems_json)?;
        let due: Vec<Problem> = problems.into_iter().filter(|p| p.is_due(today)).collect();
        Ok(serde_json::to_string(&due)?)
    }

    /// Free-text filtering over a serialized problem list.
    pub fn filter_payload(&self, problems_json: &str, term: &str) -> Result<String, ViewError> {
        let problems: Vec<Problem> = serde_json::from_str(problems_json)?;
        let needle = term.to_lowercase();
        let hits: Vec<Problem> = problems
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(serde_json::to_string(&hits)?)
    }

    /// Sorting over a serialized problem list.
    pub fn sort_payload(&self, problems_json: &str, key: SortKey) -> Result<String, ViewError> {
        let mut problems: Vec<Problem> = serde_json::from_str(problems_json)?;
        match key {
            SortKey::NextReview => {
                problems.sort_by(|a, b| a.next_review_at.cmp(&b.next_review_at))
            }
            SortKey::CreatedAt => problems.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Name => {
                problems.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
        }
        Ok(serde_json::to_string(&problems)?)
    }

    fn round_trip<F>(&self, problems: &[Problem], op: F) -> Result<Vec<Problem>, ViewError>
    where
        F: FnOnce(&str) -> Result<String, ViewError>,
    {
        let payload = serde_json::to_string(problems)?;
        let result = op(&payload)?;
        Ok(serde_json::from_str(&result)?)
    }
}

impl ViewProvider for BatchViews {
    fn due_today(&self, problems: &[Problem], today: NaiveDate) -> Result<Vec<Problem>, ViewError> {
        self.round_trip(problems, |payload| self.due_payload(payload, today))
    }

    fn filter(&self, problems: &[Problem], term: &str) -> Result<Vec<Problem>, ViewError> {
        self.round_trip(problems, |payload| self.filter_payload(payload, term))
    }

    fn sorted(&self, problems: &[Problem], key: SortKey) -> Result<Vec<Problem>, ViewError> {
        self.round_trip(problems, |payload| self.sort_payload(payload, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_is_a_codec_error() {
        let err = BatchViews
            .due_payload("not json", "2024-06-15".parse().unwrap())
            .unwrap_err();
        assert!(matches!(err, ViewError::Codec(_)));
    }

    #[test]
    fn empty_list_round_trips() {
        let due = BatchViews
            .due_today(&[], "2024-06-15".parse().unwrap())
            .unwrap();
        assert!(due.is_empty());
    }
}
