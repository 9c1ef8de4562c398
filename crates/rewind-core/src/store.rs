//! In-memory problem store.
//!
//! The single source of truth for the running session. Registration order
//! is preserved: new problems append, replacements stay in place. There is
//! intentionally no single-problem removal; the surrounding system only
//! ever clears or wholesale-replaces the collection.

use crate::problem::Problem;

/// Ordered collection of problems, owned exclusively by the session.
#[derive(Debug, Default)]
pub struct ProblemStore {
    problems: Vec<Problem>,
}

impl ProblemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All problems in registration order.
    pub fn all(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Look up a problem by id.
    pub fn get(&self, id: i64) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Replace the whole collection (import, load-from-persistence).
    pub fn replace(&mut self, problems: Vec<Problem>) {
        self.problems = problems;
    }

    /// Insert or update by id.
    ///
    /// An unseen id appends to the end; a known id replaces in place
    /// without reordering.
    pub fn upsert(&mut self, problem: Problem) {
        match self.problems.iter_mut().find(|p| p.id == problem.id) {
            Some(slot) => *slot = problem,
            None => self.problems.push(problem),
        }
    }

    /// Empty the collection. Idempotent.
    pub fn clear(&mut self) {
        self.problems.clear();
    }
}
