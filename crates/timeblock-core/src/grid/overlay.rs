//! Calendar overlay: fixed events block the slots they overlap.

use chrono::{NaiveDate, NaiveTime, Timelike};

use super::TimeSlot;
use crate::schedule::{FixedEvent, BLOCK_MINUTES};

fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// Mark every slot that overlaps a fixed event on `date` as blocked.
///
/// Events on other dates are ignored. The overlap test is half-open and
/// strict on both sides, so an event ending exactly at a slot's start does
/// not block it. Events apply independently and repeated application is
/// idempotent.
///
/// # Returns
/// The number of newly blocked slots.
pub fn apply_fixed_events(date: NaiveDate, slots: &mut [TimeSlot], events: &[FixedEvent]) -> usize {
    let mut blocked = 0;

    for event in events {
        if event.date != date {
            continue;
        }
        let event_start = minute_of_day(event.start);
        let event_end = minute_of_day(event.end);

        for slot in slots.iter_mut() {
            let slot_start = minute_of_day(slot.start);
            let slot_end = slot_start + BLOCK_MINUTES;

            if slot_start < event_end && slot_end > event_start {
                if !slot.blocked {
                    blocked += 1;
                }
                slot.blocked = true;
            }
        }
    }

    blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_day_grid;
    use crate::schedule::WorkingWindow;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn test_event_blocks_overlapping_slots() {
        let mut slots = build_day_grid(WorkingWindow::new(t(9, 0), t(17, 0)));
        let events = vec![FixedEvent::new(date(), t(9, 0), t(10, 0), "Standup")];

        let blocked = apply_fixed_events(date(), &mut slots, &events);
        assert_eq!(blocked, 4);
        assert!(slots[..4].iter().all(|s| s.blocked));
        assert!(!slots[4].blocked, "slot at 10:00 stays free");
    }

    #[test]
    fn test_partial_overlap_blocks_whole_slot() {
        let mut slots = build_day_grid(WorkingWindow::new(t(9, 0), t(17, 0)));
        let events = vec![FixedEvent::new(date(), t(9, 20), t(9, 25), "Call")];

        apply_fixed_events(date(), &mut slots, &events);
        assert!(!slots[0].blocked);
        assert!(slots[1].blocked, "09:15 slot contains the call");
        assert!(!slots[2].blocked);
    }

    #[test]
    fn test_touching_boundaries_do_not_block() {
        let mut slots = build_day_grid(WorkingWindow::new(t(9, 0), t(17, 0)));
        let events = vec![FixedEvent::new(date(), t(9, 15), t(9, 30), "Meet")];

        apply_fixed_events(date(), &mut slots, &events);
        assert!(!slots[0].blocked, "event starts at the 09:00 slot's end");
        assert!(slots[1].blocked);
        assert!(!slots[2].blocked, "event ends at the 09:30 slot's start");
    }

    #[test]
    fn test_other_dates_are_ignored() {
        let mut slots = build_day_grid(WorkingWindow::new(t(9, 0), t(17, 0)));
        let other = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let events = vec![FixedEvent::new(other, t(9, 0), t(17, 0), "Elsewhere")];

        assert_eq!(apply_fixed_events(date(), &mut slots, &events), 0);
        assert!(slots.iter().all(|s| !s.blocked));
    }

    #[test]
    fn test_repeated_overlaps_are_idempotent() {
        let mut slots = build_day_grid(WorkingWindow::new(t(9, 0), t(17, 0)));
        let events = vec![
            FixedEvent::new(date(), t(9, 0), t(10, 0), "One"),
            FixedEvent::new(date(), t(9, 30), t(10, 30), "Two"),
        ];

        let blocked = apply_fixed_events(date(), &mut slots, &events);
        assert_eq!(blocked, 6, "overlapping events block each slot once");

        let again = apply_fixed_events(date(), &mut slots, &events);
        assert_eq!(again, 0);
    }
}
