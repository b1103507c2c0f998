//! Compaction of assigned slots into reportable schedule entries.

use chrono::{Duration, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::catalog::TaskCatalog;
use crate::error::PlanError;
use crate::grid::TimeSlot;
use crate::schedule::{ScheduleEntry, BLOCK_MINUTES};

/// Merge consecutive same-task slots into schedule entries.
///
/// Unassigned, event-blocked and break slots produce no entries. Titles
/// come from the catalog; a slot referencing an id the catalog does not
/// know is an invariant violation and fails the run.
pub fn compact_entries(
    date: NaiveDate,
    slots: &[TimeSlot],
    catalog: &TaskCatalog,
) -> Result<Vec<ScheduleEntry>, PlanError> {
    let mut entries = Vec::new();
    let mut open: Option<(Uuid, NaiveTime, u32)> = None;

    for slot in slots {
        match (open, slot.task_id) {
            (Some((id, start, blocks)), Some(next)) if next == id => {
                open = Some((id, start, blocks + 1));
            }
            (current, next) => {
                if let Some(run) = current {
                    entries.push(close_run(date, run, catalog)?);
                }
                open = next.map(|id| (id, slot.start, 1));
            }
        }
    }
    if let Some(run) = open {
        entries.push(close_run(date, run, catalog)?);
    }

    Ok(entries)
}

fn close_run(
    date: NaiveDate,
    (task_id, start, blocks): (Uuid, NaiveTime, u32),
    catalog: &TaskCatalog,
) -> Result<ScheduleEntry, PlanError> {
    let task = catalog
        .get(task_id)
        .ok_or(PlanError::UnknownTask { task_id })?;
    let work_minutes = blocks * BLOCK_MINUTES;

    Ok(ScheduleEntry {
        date,
        start,
        end: start + Duration::minutes(i64::from(work_minutes)),
        task_id,
        title: task.name.clone(),
        work_minutes,
    })
}
