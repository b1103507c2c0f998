//! Mandatory rest insertion.
//!
//! One break per hour of otherwise continuous availability: after a run of
//! `interval` consecutive available slots, the next available slot is
//! forced into a break. Event-blocked slots reset the run, so a break
//! never spans a calendar-event boundary.

use super::TimeSlot;

/// Force break slots into runs of free slots.
///
/// # Returns
/// The number of breaks inserted.
pub fn insert_breaks(slots: &mut [TimeSlot], interval: usize) -> usize {
    if interval == 0 {
        return 0;
    }

    let mut run = 0;
    let mut inserted = 0;

    for slot in slots.iter_mut() {
        if slot.blocked {
            run = 0;
            continue;
        }
        if run == interval {
            slot.blocked = true;
            slot.is_break = true;
            run = 0;
            inserted += 1;
        } else {
            run += 1;
        }
    }

    inserted
}
