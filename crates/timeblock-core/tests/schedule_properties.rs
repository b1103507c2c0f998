//! Property tests for the scheduling pipeline.

use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;
use timeblock_core::{FixedEvent, Planner, Task, TaskCatalog, WorkingWindow, BLOCK_MINUTES};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn window() -> WorkingWindow {
    WorkingWindow::new(t(9, 0), t(17, 0))
}

prop_compose! {
    fn arb_task()(
        importance in 1u8..=5,
        blocks in 0i32..=16,
        complexity in 1u8..=5,
        due_offset in prop::option::of(0i64..14),
    ) -> Task {
        let mut task = Task::new("Generated", importance, blocks * 15, complexity);
        if let Some(offset) = due_offset {
            task.due = Some(
                (base_date() + Duration::days(offset))
                    .and_hms_opt(17, 0, 0)
                    .unwrap(),
            );
        }
        task
    }
}

prop_compose! {
    fn arb_event()(
        start_slot in 0u32..30,
        len_slots in 1u32..=6,
    ) -> FixedEvent {
        let start_minute = 9 * 60 + start_slot * BLOCK_MINUTES;
        let end_minute = (start_minute + len_slots * BLOCK_MINUTES).min(17 * 60);
        FixedEvent::new(
            base_date(),
            NaiveTime::from_hms_opt(start_minute / 60, start_minute % 60, 0).unwrap(),
            NaiveTime::from_hms_opt(end_minute / 60, end_minute % 60, 0).unwrap(),
            "Busy",
        )
    }
}

proptest! {
    /// Entries for a day are sorted, non-overlapping and block-aligned.
    #[test]
    fn prop_day_entries_are_disjoint_and_aligned(
        tasks in prop::collection::vec(arb_task(), 0..6),
        events in prop::collection::vec(arb_event(), 0..3),
    ) {
        let catalog = TaskCatalog::from_tasks(tasks);
        let plan = Planner::new()
            .plan_day(base_date(), window(), &catalog, &events)
            .unwrap();

        for pair in plan.entries.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for entry in &plan.entries {
            prop_assert!(entry.work_minutes > 0);
            prop_assert_eq!(entry.work_minutes % BLOCK_MINUTES, 0);
            prop_assert_eq!(entry.start.signed_duration_since(t(9, 0)).num_minutes() % 15, 0);
        }
    }

    /// No entry ever overlaps a fixed event on its date.
    #[test]
    fn prop_entries_respect_calendar(
        tasks in prop::collection::vec(arb_task(), 1..6),
        events in prop::collection::vec(arb_event(), 1..4),
    ) {
        let catalog = TaskCatalog::from_tasks(tasks);
        let plan = Planner::new()
            .plan_day(base_date(), window(), &catalog, &events)
            .unwrap();

        for entry in &plan.entries {
            for event in events.iter().filter(|e| e.date == entry.date) {
                prop_assert!(!event.overlaps(entry.start, entry.end));
            }
        }
    }

    /// Weekly runs account for every estimated minute: placed + leftover.
    #[test]
    fn prop_week_conserves_ledger_minutes(
        tasks in prop::collection::vec(arb_task(), 1..8),
        events in prop::collection::vec(arb_event(), 0..3),
    ) {
        let catalog = TaskCatalog::from_tasks(tasks.clone());
        let week = Planner::new()
            .plan_week(base_date(), window(), &catalog, &events)
            .unwrap();

        for task in &tasks {
            let placed: u32 = week
                .entries
                .iter()
                .filter(|e| e.task_id == task.id)
                .map(|e| e.work_minutes)
                .sum();
            let leftover: u32 = week
                .unscheduled
                .iter()
                .filter(|u| u.task_id == task.id)
                .map(|u| u.minutes)
                .sum();
            prop_assert_eq!(placed + leftover, task.estimated_minutes as u32);
        }
    }

    /// Ranking the same snapshot twice gives the same order.
    #[test]
    fn prop_ranking_is_idempotent(
        tasks in prop::collection::vec(arb_task(), 0..8),
    ) {
        let ranked = timeblock_core::rank_tasks(&tasks, base_date());
        let again = timeblock_core::rank_tasks(&ranked, base_date());
        let first: Vec<_> = ranked.iter().map(|t| t.id).collect();
        let second: Vec<_> = again.iter().map(|t| t.id).collect();
        prop_assert_eq!(first, second);
    }
}
