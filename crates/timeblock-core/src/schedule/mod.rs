//! Domain types for the scheduling engine.
//!
//! Tasks and fixed events are supplied by the caller; schedule entries are
//! what a run hands back. All times are zoneless wall-clock values
//! (`NaiveDate` / `NaiveTime`) -- the engine performs no time-zone
//! conversion.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minutes in one scheduling block. The grid granularity is fixed.
pub const BLOCK_MINUTES: u32 = 15;

/// A unit of pending work.
///
/// Tasks are owned by the caller and never mutated by the engine; remaining
/// work during a run is tracked in a separate ledger keyed by task id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,
    /// Task name, used as the title of generated entries
    pub name: String,
    /// Due timestamp, if any. Scoring uses only the calendar date.
    pub due: Option<NaiveDateTime>,
    /// Importance on a 1-5 scale
    pub importance: u8,
    /// Estimated work in minutes
    pub estimated_minutes: i32,
    /// Complexity on a 1-5 scale
    pub complexity: u8,
    /// Free-form tags
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Whether the task is finished; done tasks are never scheduled
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a task with a fresh id and no due date.
    pub fn new(
        name: impl Into<String>,
        importance: u8,
        estimated_minutes: i32,
        complexity: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            due: None,
            importance,
            estimated_minutes,
            complexity,
            tags: BTreeSet::new(),
            done: false,
        }
    }

    /// Set the due timestamp.
    pub fn with_due(mut self, due: NaiveDateTime) -> Self {
        self.due = Some(due);
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Whether the task is unfinished and past its due timestamp.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.done && self.due.map(|due| due < now).unwrap_or(false)
    }
}

/// An immovable calendar commitment. Slots it overlaps are never
/// available for task placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEvent {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub title: String,
}

impl FixedEvent {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime, title: impl Into<String>) -> Self {
        Self {
            date,
            start,
            end,
            title: title.into(),
        }
    }

    /// Half-open overlap test against a same-day time range.
    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start < end && start < self.end
    }
}

/// Daily start/end bounds on schedulable hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// An inverted or zero-length window contains no schedulable time.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl Default for WorkingWindow {
    /// The 09:00-17:00 window used when the caller has no preference.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }
}

/// A compacted, reportable interval of one task's assigned slots.
///
/// Entries for a given date are non-overlapping and `work_minutes` is
/// always a positive multiple of [`BLOCK_MINUTES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub task_id: Uuid,
    pub title: String,
    pub work_minutes: u32,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({} min) - {}",
            self.date,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.work_minutes,
            self.title
        )
    }
}
