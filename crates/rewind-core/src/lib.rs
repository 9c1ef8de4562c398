//! # Algo-Rewind Core Library
//!
//! Core business logic for Algo-Rewind, a spaced-repetition tracker for
//! algorithm-practice problems. The library is presentation-agnostic: the
//! CLI binary (and any future GUI) is a thin layer that calls the session
//! controller and renders the views it hands back.
//!
//! ## Architecture
//!
//! - **Problem Store**: the in-memory record set and single source of
//!   truth for a running session
//! - **Scheduling**: a provider boundary for creation and review
//!   transitions, with a fixed-interval canonical implementation and
//!   deliberately no local fallback
//! - **Views**: due-today / filter / sort, each computed through a primary
//!   provider with a mandatory, observably-equivalent local fallback
//! - **Storage**: JSON-file persistence synchronized after every mutation,
//!   plus TOML configuration
//!
//! ## Key Components
//!
//! - [`SessionController`]: orchestrates every user operation
//! - [`SrsScheduler`]: the canonical interval scheduler
//! - [`ResilientViews`]: primary-with-fallback view composition
//! - [`JsonFileStore`]: durable problem storage

pub mod error;
pub mod problem;
pub mod session;
pub mod srs;
pub mod storage;
pub mod store;
pub mod views;

pub use error::{CoreError, PersistenceError, Result, ValidationError};
pub use problem::{Level, NewProblem, Problem};
pub use session::{SessionController, ViewUpdate};
pub use srs::{SchedulingProvider, SrsScheduler};
pub use storage::{Config, JsonFileStore, MemoryStore, PersistenceBridge};
pub use store::ProblemStore;
pub use views::{BatchViews, LocalViews, ResilientViews, SortKey, ViewProvider};
