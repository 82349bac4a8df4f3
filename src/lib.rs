//! Strength-training program tracker.
//!
//! [`WorkoutStore`] owns programs, their exercises and each exercise's set
//! log, and rewrites a single JSON file after every change. It also derives
//! the suggested next weight from the most recent set. The [`ui`] module is a
//! terminal front-end built on the same public operations.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use error::{Entity, StoreError};
pub use models::{Exercise, Program, ProgramSummary, Set, OVERLOAD_INCREMENT};
pub use store::WorkoutStore;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
