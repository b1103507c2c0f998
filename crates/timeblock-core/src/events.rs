//! Structured observability for scheduling runs.
//!
//! Every run can narrate itself through a [`PlanObserver`]; the engine
//! emits counts, never prose, and its control flow is identical whether
//! anyone is listening or not.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A progress report from one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlanEvent {
    /// Slots blocked by fixed calendar events on one day.
    SlotsBlocked { date: NaiveDate, count: usize },
    /// Mandatory breaks inserted on one day.
    BreaksInserted { date: NaiveDate, count: usize },
    /// Blocks assigned to tasks on one day.
    BlocksPlaced { date: NaiveDate, count: usize },
    /// Minutes left over for a task after the run.
    WorkUnscheduled { task_id: Uuid, minutes: u32 },
}

/// Observer hook for scheduling runs.
pub trait PlanObserver {
    fn on_event(&mut self, event: PlanEvent);
}

/// Observer that ignores everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PlanObserver for NoopObserver {
    fn on_event(&mut self, _event: PlanEvent) {}
}

/// Observer that keeps every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<PlanEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanObserver for RecordingObserver {
    fn on_event(&mut self, event: PlanEvent) {
        self.events.push(event);
    }
}
