//! # Timeblock Core Library
//!
//! This library provides the scheduling engine for Timeblock: it turns a
//! set of pending tasks, fixed calendar commitments and a daily working
//! window into a time-blocked plan for a day or a week. The engine is a
//! pure, single-threaded batch computation -- no I/O, no shared state, no
//! suspension points; each invocation owns its slot grid and ledger and
//! discards both at return.
//!
//! ## Architecture
//!
//! - **Ranking**: urgency scores from importance, due-date proximity,
//!   size and complexity, with configurable tie-breaking
//! - **Grid**: a 15-minute slot grid over the working window, overlaid
//!   with calendar blocks and mandatory breaks
//! - **Placement**: greedy assignment in strict priority order against a
//!   remaining-work ledger that spills across days in weekly runs
//! - **Compaction**: consecutive same-task slots merged into reportable
//!   schedule entries
//!
//! ## Key Components
//!
//! - [`Planner`]: day/week orchestration over the pipeline above
//! - [`TaskCatalog`]: in-memory task collection with lookup and views
//! - [`PriorityRanker`]: scoring and deterministic ordering
//! - [`PlanObserver`]: optional structured progress reporting

pub mod catalog;
pub mod compact;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod placer;
pub mod planner;
pub mod profile;
pub mod ranking;
pub mod schedule;

pub use catalog::{TaskCatalog, TaskSummary};
pub use config::PlannerConfig;
pub use error::{ConfigError, PlanError};
pub use events::{NoopObserver, PlanEvent, PlanObserver, RecordingObserver};
pub use planner::{DayPlan, Planner, UnscheduledWork, WeekPlan};
pub use profile::{DayPart, Productivity, Profile};
pub use ranking::{rank_tasks, PriorityRanker, RankConfig, TieBreakRule};
pub use schedule::{FixedEvent, ScheduleEntry, Task, WorkingWindow, BLOCK_MINUTES};
