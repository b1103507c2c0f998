//! Day and week plan orchestration.
//!
//! A run is a pure batch computation: grid construction, calendar overlay,
//! break insertion, ranked placement and compaction composed over one date
//! or a week of consecutive dates. Weekly runs thread the remaining-work
//! ledger from day to day and stop as soon as it settles. The engine never
//! mutates the caller's tasks; what does not fit is reported back as data.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::TaskCatalog;
use crate::compact::compact_entries;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::events::{NoopObserver, PlanEvent, PlanObserver};
use crate::grid::{apply_fixed_events, build_day_grid, insert_breaks};
use crate::placer::{place_tasks, WorkLedger};
use crate::profile::Productivity;
use crate::ranking::{PriorityRanker, RankConfig};
use crate::schedule::{FixedEvent, ScheduleEntry, Task, WorkingWindow};

/// Work that did not fit within the scheduled horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledWork {
    pub task_id: Uuid,
    pub name: String,
    pub minutes: u32,
}

/// Result of scheduling a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    /// Entries in chronological order.
    pub entries: Vec<ScheduleEntry>,
    /// Tasks with minutes that found no slot, in ranked order.
    /// A single-day run carries nothing forward; this is the whole story.
    pub unscheduled: Vec<UnscheduledWork>,
}

impl DayPlan {
    /// Productivity-weighted focus minutes for the day.
    pub fn weighted_focus_minutes(&self, productivity: &Productivity) -> f64 {
        weighted_minutes(&self.entries, productivity)
    }
}

/// Result of scheduling a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week_start: NaiveDate,
    /// Entries for all scheduled days, in date then start order.
    pub entries: Vec<ScheduleEntry>,
    /// Tasks with minutes that found no slot across the horizon.
    pub unscheduled: Vec<UnscheduledWork>,
}

impl WeekPlan {
    /// Entries for one date, in start order.
    pub fn entries_for(&self, date: NaiveDate) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Entries grouped by date, dates in order.
    pub fn entries_by_date(&self) -> BTreeMap<NaiveDate, Vec<&ScheduleEntry>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&ScheduleEntry>> = BTreeMap::new();
        for entry in &self.entries {
            grouped.entry(entry.date).or_default().push(entry);
        }
        grouped
    }

    /// Productivity-weighted focus minutes across the week.
    pub fn weighted_focus_minutes(&self, productivity: &Productivity) -> f64 {
        weighted_minutes(&self.entries, productivity)
    }
}

fn weighted_minutes(entries: &[ScheduleEntry], productivity: &Productivity) -> f64 {
    entries
        .iter()
        .map(|e| f64::from(e.work_minutes) * productivity.weight_at(e.start))
        .sum()
}

/// The scheduling engine.
///
/// One planner value is cheap and stateless between calls; each run owns
/// its slot grid and ledger and discards them at return, so independent
/// invocations can proceed in parallel on separate snapshots.
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the default configuration.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Schedule one day.
    ///
    /// Tasks are ranked with the given date as the reference, a fresh
    /// ledger is seeded from the incomplete tasks' estimates, and whatever
    /// does not fit is reported as unscheduled.
    pub fn plan_day(
        &self,
        date: NaiveDate,
        window: WorkingWindow,
        catalog: &TaskCatalog,
        events: &[FixedEvent],
    ) -> Result<DayPlan, PlanError> {
        self.plan_day_with(date, window, catalog, events, &mut NoopObserver)
    }

    /// Schedule one day, narrating progress to an observer.
    pub fn plan_day_with(
        &self,
        date: NaiveDate,
        window: WorkingWindow,
        catalog: &TaskCatalog,
        events: &[FixedEvent],
        observer: &mut dyn PlanObserver,
    ) -> Result<DayPlan, PlanError> {
        let ranked = self.ranked_incomplete(catalog, date);
        let mut ledger = WorkLedger::seed(&ranked);

        let entries = self.schedule_day(date, window, &ranked, events, catalog, &mut ledger, observer)?;
        let unscheduled = drain_outstanding(&ranked, &ledger, observer);

        Ok(DayPlan {
            date,
            entries,
            unscheduled,
        })
    }

    /// Schedule a week of consecutive days starting at `week_start`.
    ///
    /// Tasks are ranked once with the week start as the reference date and
    /// the ledger is threaded across days, so unfinished time spills
    /// forward. The run stops early once every task is fully placed.
    pub fn plan_week(
        &self,
        week_start: NaiveDate,
        window: WorkingWindow,
        catalog: &TaskCatalog,
        events: &[FixedEvent],
    ) -> Result<WeekPlan, PlanError> {
        self.plan_week_with(week_start, window, catalog, events, &mut NoopObserver)
    }

    /// Schedule a week, narrating progress to an observer.
    pub fn plan_week_with(
        &self,
        week_start: NaiveDate,
        window: WorkingWindow,
        catalog: &TaskCatalog,
        events: &[FixedEvent],
        observer: &mut dyn PlanObserver,
    ) -> Result<WeekPlan, PlanError> {
        let ranked = self.ranked_incomplete(catalog, week_start);
        let mut ledger = WorkLedger::seed(&ranked);
        let mut entries = Vec::new();

        for offset in 0..self.config.horizon_days {
            if ledger.is_settled() {
                break;
            }
            let date = week_start + Duration::days(i64::from(offset));
            let day_entries =
                self.schedule_day(date, window, &ranked, events, catalog, &mut ledger, observer)?;
            entries.extend(day_entries);
        }

        let unscheduled = drain_outstanding(&ranked, &ledger, observer);

        Ok(WeekPlan {
            week_start,
            entries,
            unscheduled,
        })
    }

    fn ranked_incomplete(&self, catalog: &TaskCatalog, today: NaiveDate) -> Vec<Task> {
        let ranker = PriorityRanker::with_config(RankConfig {
            today,
            tie_break: self.config.tie_break,
        });
        let mut tasks: Vec<Task> = catalog.incomplete().into_iter().cloned().collect();
        ranker.sort_by_priority(&mut tasks);
        tasks
    }

    #[allow(clippy::too_many_arguments)]
    fn schedule_day(
        &self,
        date: NaiveDate,
        window: WorkingWindow,
        ranked: &[Task],
        events: &[FixedEvent],
        catalog: &TaskCatalog,
        ledger: &mut WorkLedger,
        observer: &mut dyn PlanObserver,
    ) -> Result<Vec<ScheduleEntry>, PlanError> {
        let mut slots = build_day_grid(window);

        let blocked = apply_fixed_events(date, &mut slots, events);
        observer.on_event(PlanEvent::SlotsBlocked {
            date,
            count: blocked,
        });

        let breaks = insert_breaks(&mut slots, self.config.break_interval);
        observer.on_event(PlanEvent::BreaksInserted {
            date,
            count: breaks,
        });

        let placed = place_tasks(&mut slots, ranked, ledger);
        observer.on_event(PlanEvent::BlocksPlaced {
            date,
            count: placed,
        });

        compact_entries(date, &slots, catalog)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Report ledger leftovers in ranked order.
fn drain_outstanding(
    ranked: &[Task],
    ledger: &WorkLedger,
    observer: &mut dyn PlanObserver,
) -> Vec<UnscheduledWork> {
    let mut unscheduled = Vec::new();
    for task in ranked {
        let minutes = ledger.remaining(task.id);
        if minutes == 0 {
            continue;
        }
        observer.on_event(PlanEvent::WorkUnscheduled {
            task_id: task.id,
            minutes,
        });
        unscheduled.push(UnscheduledWork {
            task_id: task.id,
            name: task.name.clone(),
            minutes,
        });
    }
    unscheduled
}
