//! Review scheduling boundary.
//!
//! Creation and review transitions are owned by a [`SchedulingProvider`].
//! Unlike the derived views there is deliberately no local fallback here:
//! when no provider is available the operations fail outright with
//! [`CoreError::ModuleUnavailable`] instead of approximating due-date math
//! that would drift from the canonical policy.

mod scheduler;

pub use scheduler::SrsScheduler;

use crate::error::Result;
use crate::problem::{Level, NewProblem, Problem};

/// External authority for problem creation and review transitions.
///
/// Both operations are pure with respect to the store: the provider is
/// handed values and returns new values, never retaining a reference.
pub trait SchedulingProvider {
    /// Build a new problem from registration input.
    ///
    /// Fails with [`CoreError::Validation`] when the name is empty after
    /// trimming. On success `created_at` is the current date and
    /// `next_review_at` is computed from the initial level.
    ///
    /// [`CoreError::Validation`]: crate::error::CoreError::Validation
    fn create(&self, input: NewProblem) -> Result<Problem>;

    /// Complete a review: returns a new problem with updated `level` and a
    /// recomputed `next_review_at`; every other field is carried over
    /// unchanged.
    fn transition(&self, problem: &Problem, outcome: Level) -> Result<Problem>;
}
