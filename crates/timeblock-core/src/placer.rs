//! Greedy task placement against the remaining-work ledger.
//!
//! Tasks are consumed strictly in ranked order: a lower-priority task never
//! receives a slot while a higher-priority task still has unmet minutes
//! that day. Whatever does not fit stays in the ledger and either carries
//! to the next day of a weekly run or surfaces as an unscheduled
//! remainder.

use std::collections::HashMap;

use uuid::Uuid;

use crate::grid::TimeSlot;
use crate::schedule::{Task, BLOCK_MINUTES};

/// Per-task remaining minutes for one scheduling run.
///
/// Seeded from task estimates, decremented as slots are consumed, threaded
/// from day to day in weekly runs. Values never go negative and never
/// increase during a run.
#[derive(Debug, Clone, Default)]
pub struct WorkLedger {
    remaining: HashMap<Uuid, u32>,
}

impl WorkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the ledger from task estimates.
    ///
    /// Zero or negative estimates are recorded as already satisfied.
    pub fn seed<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let remaining = tasks
            .into_iter()
            .map(|task| (task.id, task.estimated_minutes.max(0) as u32))
            .collect();
        Self { remaining }
    }

    /// Minutes still owed to a task; zero for unknown ids.
    pub fn remaining(&self, id: Uuid) -> u32 {
        self.remaining.get(&id).copied().unwrap_or(0)
    }

    /// Whether every entry has reached zero.
    pub fn is_settled(&self) -> bool {
        self.remaining.values().all(|&minutes| minutes == 0)
    }

    /// Tasks that still owe minutes, in arbitrary order.
    pub fn outstanding(&self) -> Vec<(Uuid, u32)> {
        self.remaining
            .iter()
            .filter(|(_, &minutes)| minutes > 0)
            .map(|(&id, &minutes)| (id, minutes))
            .collect()
    }

    fn consume(&mut self, id: Uuid, minutes: u32) {
        if let Some(owed) = self.remaining.get_mut(&id) {
            *owed = owed.saturating_sub(minutes);
        }
    }
}

/// Assign free slots to ranked tasks.
///
/// For each task with ledger minutes outstanding, the remaining minutes are
/// rounded up to whole blocks and the earliest available slots receive the
/// task id, one block of ledger time per slot, until the request is filled
/// or the day runs out.
///
/// # Returns
/// The number of blocks assigned.
pub fn place_tasks(slots: &mut [TimeSlot], ranked: &[Task], ledger: &mut WorkLedger) -> usize {
    let mut placed = 0;

    for task in ranked {
        let remaining = ledger.remaining(task.id);
        if remaining == 0 {
            continue;
        }
        let mut blocks = remaining.div_ceil(BLOCK_MINUTES);

        for slot in slots.iter_mut() {
            if blocks == 0 {
                break;
            }
            if !slot.is_available() {
                continue;
            }
            slot.task_id = Some(task.id);
            ledger.consume(task.id, BLOCK_MINUTES);
            blocks -= 1;
            placed += 1;
        }
    }

    placed
}
