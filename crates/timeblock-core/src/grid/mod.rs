//! The fixed-granularity time-block grid for one day.
//!
//! This module provides:
//! - The [`TimeSlot`] unit and the grid builder for a working window
//! - Calendar overlay marking event-blocked slots
//! - Mandatory break insertion into runs of free slots

mod breaks;
mod overlay;

pub use breaks::insert_breaks;
pub use overlay::apply_fixed_events;

use chrono::{Duration, NaiveTime};
use uuid::Uuid;

use crate::schedule::{WorkingWindow, BLOCK_MINUTES};

/// The atomic 15-minute scheduling unit.
///
/// A slot may carry a task id only while unblocked; once a slot becomes a
/// break it stays blocked for the rest of the day's grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Wall-clock start of the slot; its nominal end is one block later.
    pub start: NaiveTime,
    /// Blocked by a fixed event or designated as a break.
    pub blocked: bool,
    /// Blocked specifically as a rest period.
    pub is_break: bool,
    /// Assigned task, if any.
    pub task_id: Option<Uuid>,
}

impl TimeSlot {
    fn new(start: NaiveTime) -> Self {
        Self {
            start,
            blocked: false,
            is_break: false,
            task_id: None,
        }
    }

    /// Whether the slot can still receive a task.
    pub fn is_available(&self) -> bool {
        !self.blocked && self.task_id.is_none()
    }
}

/// Build the ordered slot sequence spanning a working window.
///
/// Slots start at `window.start` and step by one block while the slot
/// start stays before `window.end`; the final slot's nominal end may land
/// exactly on `window.end`. An inverted or empty window yields no slots.
pub fn build_day_grid(window: WorkingWindow) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    if window.is_empty() {
        return slots;
    }

    let step = Duration::minutes(i64::from(BLOCK_MINUTES));
    let mut start = window.start;
    while start < window.end {
        slots.push(TimeSlot::new(start));
        let (next, wrapped) = start.overflowing_add_signed(step);
        if wrapped != 0 {
            // stepping past midnight; the grid never wraps into the next day
            break;
        }
        start = next;
    }
    slots
}
