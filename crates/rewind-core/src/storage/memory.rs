//! In-memory persistence bridge for tests and embedding.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::PersistenceBridge;
use crate::error::PersistenceError;
use crate::problem::Problem;

/// Persistence bridge backed by process memory.
///
/// `handle()` returns a second view onto the same records so a test can
/// hand the store to a session controller and still inspect what was
/// persisted. `fail_writes` makes save/clear fail, for exercising the
/// non-fatal-warning path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<Vec<Problem>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same backing records.
    pub fn handle(&self) -> Self {
        Self {
            records: Rc::clone(&self.records),
            fail_writes: Rc::clone(&self.fail_writes),
        }
    }

    /// Make subsequent save/clear calls fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Snapshot of the persisted records.
    pub fn records(&self) -> Vec<Problem> {
        self.records.borrow().clone()
    }

    fn write_error(&self) -> PersistenceError {
        PersistenceError::Write {
            path: "<memory>".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "simulated write failure"),
        }
    }
}

impl PersistenceBridge for MemoryStore {
    fn load(&self) -> Vec<Problem> {
        self.records.borrow().clone()
    }

    fn save(&self, problems: &[Problem]) -> Result<(), PersistenceError> {
        if self.fail_writes.get() {
            return Err(self.write_error());
        }
        *self.records.borrow_mut() = problems.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.get() {
            return Err(self.write_error());
        }
        self.records.borrow_mut().clear();
        Ok(())
    }
}
