//! Session orchestration.
//!
//! The [`SessionController`] runs every user operation against the store:
//! registration and review completion go through the scheduling provider,
//! derived views go through the resilient view engine, and every mutation
//! synchronizes to the persistence bridge before results are handed back
//! for rendering.
//!
//! Mutating operations take `&mut self`; the exclusive borrow is the
//! no-overlap guarantee. A second operation cannot start while one is in
//! flight, so rapid double-submission is rejected at the call boundary
//! rather than racing inside the engine.

use chrono::{NaiveDate, Utc};
use log::warn;

use crate::error::{CoreError, Result, ValidationError};
use crate::problem::{Level, NewProblem, Problem};
use crate::srs::SchedulingProvider;
use crate::storage::PersistenceBridge;
use crate::store::ProblemStore;
use crate::views::{ResilientViews, SortKey};

/// Snapshot handed to the presentation layer after each operation.
#[derive(Debug, Clone)]
pub struct ViewUpdate {
    /// Problems due on the reference date, store order.
    pub due_today: Vec<Problem>,
    /// The full problem list, registration order.
    pub all: Vec<Problem>,
    /// Non-fatal warning to surface (persistence failures). The in-memory
    /// state in `all` is still authoritative when this is set.
    pub warning: Option<String>,
}

/// Orchestrates register / review / import / export / clear / search / sort
/// against the store.
pub struct SessionController {
    store: ProblemStore,
    scheduler: Option<Box<dyn SchedulingProvider>>,
    views: ResilientViews,
    persistence: Box<dyn PersistenceBridge>,
}

impl SessionController {
    pub fn new(
        scheduler: Option<Box<dyn SchedulingProvider>>,
        views: ResilientViews,
        persistence: Box<dyn PersistenceBridge>,
    ) -> Self {
        Self {
            store: ProblemStore::new(),
            scheduler,
            views,
            persistence,
        }
    }

    /// Controller with the canonical scheduler and the default view
    /// composition over the given bridge.
    pub fn with_defaults(persistence: Box<dyn PersistenceBridge>) -> Self {
        Self::new(
            Some(Box::new(crate::srs::SrsScheduler::new())),
            ResilientViews::default(),
            persistence,
        )
    }

    /// One-shot load from the persistence bridge at startup.
    pub fn start(&mut self) -> ViewUpdate {
        let problems = self.persistence.load();
        self.store.replace(problems);
        self.refresh(None)
    }

    pub fn problems(&self) -> &[Problem] {
        self.store.all()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Register a new problem.
    ///
    /// Fails without touching the store or the durable copy when
    /// validation fails or no scheduling module is available.
    pub fn register(&mut self, input: NewProblem) -> Result<ViewUpdate> {
        let problem = self.scheduler()?.create(input)?;
        self.store.upsert(problem);
        let warning = self.sync();
        Ok(self.refresh(warning))
    }

    /// Complete a review for the problem with `id`.
    ///
    /// The transitioned problem replaces the old record in place: the
    /// store's size and the problem's position are unchanged.
    pub fn complete_review(&mut self, id: i64, outcome: Level) -> Result<ViewUpdate> {
        let problem = self
            .store
            .get(id)
            .cloned()
            .ok_or(ValidationError::UnknownProblem(id))?;
        let reviewed = self.scheduler()?.transition(&problem, outcome)?;
        self.store.upsert(reviewed);
        let warning = self.sync();
        Ok(self.refresh(warning))
    }

    /// Replace the store with a parsed import payload.
    ///
    /// A malformed payload aborts the import; neither the store nor the
    /// durable copy changes.
    pub fn import(&mut self, payload: &[u8]) -> Result<ViewUpdate> {
        let problems: Vec<Problem> =
            serde_json::from_slice(payload).map_err(CoreError::ImportParse)?;
        self.store.replace(problems);
        let warning = self.sync();
        Ok(self.refresh(warning))
    }

    /// Serialize the full store for download.
    ///
    /// Returns `Ok(None)` when the store is empty; the presentation layer
    /// shows that as a warning rather than writing an empty file. The
    /// payload is pretty-printed and round-trips through [`import`]
    /// byte-for-byte.
    ///
    /// [`import`]: SessionController::import
    pub fn export(&self) -> Result<Option<String>> {
        if self.store.is_empty() {
            return Ok(None);
        }
        let payload = serde_json::to_string_pretty(self.store.all())
            .map_err(crate::error::PersistenceError::Serialize)?;
        Ok(Some(payload))
    }

    /// Empty the store and the durable record. Idempotent; confirmation is
    /// the presentation layer's responsibility.
    pub fn clear(&mut self) -> ViewUpdate {
        self.store.clear();
        let warning = match self.persistence.clear() {
            Ok(()) => None,
            Err(e) => {
                warn!("failed to clear durable record: {e}");
                Some(format!("failed to clear saved data: {e}"))
            }
        };
        self.refresh(warning)
    }

    /// Free-text filter over the full list. An empty or whitespace-only
    /// term means no filtering.
    pub fn search(&self, term: &str) -> Vec<Problem> {
        let term = term.trim();
        if term.is_empty() {
            return self.store.all().to_vec();
        }
        self.views.filter(self.store.all(), term)
    }

    /// The full list reordered by `key`. The store itself keeps
    /// registration order.
    pub fn sorted(&self, key: SortKey) -> Vec<Problem> {
        self.views.sorted(self.store.all(), key)
    }

    /// Problems due today.
    pub fn due_today(&self) -> Vec<Problem> {
        self.due_on(Utc::now().date_naive())
    }

    /// Problems due on an explicit reference date.
    pub fn due_on(&self, today: NaiveDate) -> Vec<Problem> {
        self.views.due_today(self.store.all(), today)
    }

    fn scheduler(&self) -> Result<&dyn SchedulingProvider> {
        self.scheduler
            .as_deref()
            .ok_or(CoreError::ModuleUnavailable)
    }

    /// Best-effort save after a mutation. A failure becomes a warning; the
    /// in-memory store stays authoritative.
    fn sync(&self) -> Option<String> {
        match self.persistence.save(self.store.all()) {
            Ok(()) => None,
            Err(e) => {
                warn!("auto-save failed: {e}");
                Some(format!("auto-save failed: {e}"))
            }
        }
    }

    fn refresh(&self, warning: Option<String>) -> ViewUpdate {
        ViewUpdate {
            due_today: self.due_today(),
            all: self.store.all().to_vec(),
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn controller() -> (SessionController, MemoryStore) {
        let bridge = MemoryStore::new();
        let handle = bridge.handle();
        let controller = SessionController::with_defaults(Box::new(bridge));
        (controller, handle)
    }

    fn input(name: &str) -> NewProblem {
        NewProblem {
            name: name.to_string(),
            tags: vec!["dp".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn register_appends_and_persists() {
        let (mut controller, persisted) = controller();

        let update = controller.register(input("Two Sum")).unwrap();

        assert_eq!(update.all.len(), 1);
        assert_eq!(update.all[0].name, "Two Sum");
        assert!(update.warning.is_none());
        assert_eq!(persisted.records().len(), 1);
    }

    #[test]
    fn register_failure_leaves_store_and_bridge_untouched() {
        let (mut controller, persisted) = controller();
        controller.register(input("Two Sum")).unwrap();

        let err = controller.register(input("   ")).unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(controller.problems().len(), 1);
        assert_eq!(persisted.records().len(), 1);
    }

    #[test]
    fn operations_fail_without_a_scheduling_module() {
        let mut controller = SessionController::new(
            None,
            ResilientViews::local_only(),
            Box::new(MemoryStore::new()),
        );

        let err = controller.register(input("Two Sum")).unwrap_err();
        assert!(matches!(err, CoreError::ModuleUnavailable));

        // Import does not need the module; review transitions do.
        let payload = br#"[{
            "id": 7, "name": "seeded", "url": null, "tags": [], "memo": "",
            "level": "GOOD", "created_at": "2024-06-01", "next_review_at": "2024-06-08"
        }]"#;
        controller.import(payload).unwrap();

        let err = controller.complete_review(7, Level::Good).unwrap_err();
        assert!(matches!(err, CoreError::ModuleUnavailable));
    }

    #[test]
    fn complete_review_keeps_size_and_position() {
        let (mut controller, _) = controller();
        controller.register(input("first")).unwrap();
        controller.register(input("second")).unwrap();
        controller.register(input("third")).unwrap();

        let id = controller.problems()[1].id;
        let update = controller.complete_review(id, Level::Easy).unwrap();

        assert_eq!(update.all.len(), 3);
        assert_eq!(update.all[1].id, id);
        assert_eq!(update.all[1].level, Level::Easy);
        assert_eq!(update.all[1].name, "second");
    }

    #[test]
    fn complete_review_rejects_unknown_id() {
        let (mut controller, _) = controller();
        controller.register(input("only")).unwrap();

        let err = controller.complete_review(424242, Level::Good).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnknownProblem(424242))
        ));
    }

    #[test]
    fn export_then_import_round_trips() {
        let (mut controller, _) = controller();
        controller.register(input("alpha")).unwrap();
        controller.register(input("beta")).unwrap();
        let before = controller.problems().to_vec();

        let payload = controller.export().unwrap().expect("store is non-empty");
        controller.clear();
        let update = controller.import(payload.as_bytes()).unwrap();

        assert_eq!(update.all, before);
    }

    #[test]
    fn export_on_empty_store_is_a_no_op() {
        let (controller, _) = controller();
        assert!(controller.export().unwrap().is_none());
    }

    #[test]
    fn malformed_import_leaves_state_untouched() {
        let (mut controller, persisted) = controller();
        controller.register(input("keep me")).unwrap();

        let err = controller.import(b"[{ truncated").unwrap_err();

        assert!(matches!(err, CoreError::ImportParse(_)));
        assert_eq!(controller.problems().len(), 1);
        assert_eq!(persisted.records().len(), 1);
    }

    #[test]
    fn clear_twice_is_fine() {
        let (mut controller, persisted) = controller();
        controller.register(input("gone soon")).unwrap();

        let update = controller.clear();
        assert!(update.all.is_empty());
        assert!(persisted.records().is_empty());

        let update = controller.clear();
        assert!(update.all.is_empty());
        assert!(update.warning.is_none());
    }

    #[test]
    fn persistence_failure_is_a_warning_not_an_error() {
        let (mut controller, persisted) = controller();
        persisted.set_fail_writes(true);

        let update = controller.register(input("still here")).unwrap();

        assert_eq!(update.all.len(), 1);
        assert!(update.warning.is_some());
        // In-memory state keeps serving subsequent operations.
        assert_eq!(controller.search("still").len(), 1);
    }

    #[test]
    fn empty_search_term_returns_unfiltered_list() {
        let (mut controller, _) = controller();
        controller.register(input("alpha")).unwrap();
        controller.register(input("beta")).unwrap();

        assert_eq!(controller.search("   ").len(), 2);
        assert_eq!(controller.search("alp").len(), 1);
    }

    #[test]
    fn sorting_does_not_reorder_the_store() {
        let (mut controller, _) = controller();
        controller.register(input("banana")).unwrap();
        controller.register(input("apple")).unwrap();

        let sorted = controller.sorted(SortKey::Name);
        assert_eq!(sorted[0].name, "apple");
        assert_eq!(controller.problems()[0].name, "banana");
    }

    #[test]
    fn start_loads_persisted_problems() {
        let bridge = MemoryStore::new();
        let handle = bridge.handle();

        let mut seeder = SessionController::with_defaults(Box::new(bridge));
        seeder.register(input("persisted")).unwrap();
        drop(seeder);

        let mut controller = SessionController::with_defaults(Box::new(handle));
        let update = controller.start();
        assert_eq!(update.all.len(), 1);
        assert_eq!(update.all[0].name, "persisted");
    }
}
