//! Task priority scoring and ordering.
//!
//! Urgency combines four factors into one score:
//!
//! `score = 3*importance + 10/(days_until_due + 1) + estimated_hours + complexity`
//!
//! Days until due count whole calendar days from the reference date to the
//! due date, clamped to zero for overdue tasks; tasks without a due date
//! score as if due in a week. Higher score = more urgent. Ties are resolved
//! by a configurable secondary rule, applied only when two scores are
//! numerically equal; the resulting order is total and stable.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::Task;

/// Due-date horizon assumed for tasks without one, in days.
const DEFAULT_DUE_HORIZON_DAYS: f64 = 7.0;

/// Secondary ordering applied when two tasks have equal priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakRule {
    /// Earlier due timestamp first; a missing due date sorts last.
    EarliestDue,
    /// Higher importance first.
    HighestImportance,
    /// Smaller estimate first.
    ShortestTask,
    /// Larger estimate first.
    LongestTask,
}

impl Default for TieBreakRule {
    fn default() -> Self {
        TieBreakRule::EarliestDue
    }
}

impl TieBreakRule {
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            TieBreakRule::EarliestDue => match (a.due, b.due) {
                (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            TieBreakRule::HighestImportance => b.importance.cmp(&a.importance),
            TieBreakRule::ShortestTask => a.estimated_minutes.cmp(&b.estimated_minutes),
            TieBreakRule::LongestTask => b.estimated_minutes.cmp(&a.estimated_minutes),
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Reference date for due-date proximity.
    pub today: NaiveDate,
    /// Secondary ordering for equal scores.
    pub tie_break: TieBreakRule,
}

/// Priority ranker for tasks.
pub struct PriorityRanker {
    config: RankConfig,
}

impl PriorityRanker {
    /// Create a ranker with the default tie-break rule.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            config: RankConfig {
                today,
                tie_break: TieBreakRule::default(),
            },
        }
    }

    /// Create with custom config.
    pub fn with_config(config: RankConfig) -> Self {
        Self { config }
    }

    /// Calculate the priority score for one task.
    pub fn score(&self, task: &Task) -> f64 {
        let importance = f64::from(task.importance);
        let complexity = f64::from(task.complexity);
        let estimated_hours = f64::from(task.estimated_minutes) / 60.0;

        let days_until_due = match task.due {
            Some(due) => {
                let days = (due.date() - self.config.today).num_days();
                days.max(0) as f64
            }
            None => DEFAULT_DUE_HORIZON_DAYS,
        };

        3.0 * importance + 10.0 / (days_until_due + 1.0) + estimated_hours + complexity
    }

    /// Calculate scores for multiple tasks.
    ///
    /// # Returns
    /// Vector of (task_id, score) tuples in input order.
    pub fn scores(&self, tasks: &[Task]) -> Vec<(Uuid, f64)> {
        tasks.iter().map(|t| (t.id, self.score(t))).collect()
    }

    /// Sort tasks by descending score, tie-break second.
    ///
    /// The sort is stable: tasks equal under both keys retain their
    /// input relative order.
    pub fn sort_by_priority(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }

    /// Return a ranked copy of the given tasks.
    pub fn rank(&self, tasks: &[Task]) -> Vec<Task> {
        let mut ranked = tasks.to_vec();
        self.sort_by_priority(&mut ranked);
        ranked
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let by_score = self
            .score(b)
            .partial_cmp(&self.score(a))
            .unwrap_or(Ordering::Equal);
        if by_score != Ordering::Equal {
            return by_score;
        }
        self.config.tie_break.compare(a, b)
    }
}

/// Convenience function to rank tasks with the default tie-break rule.
pub fn rank_tasks(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    PriorityRanker::new(today).rank(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_score_without_due_date() {
        // importance 5, 120 min, complexity 3: 15 + 10/8 + 2 + 3
        let task = Task::new("Write report", 5, 120, 3);
        let ranker = PriorityRanker::new(day(2026, 3, 2));
        assert_eq!(ranker.score(&task), 21.25);
    }

    #[test]
    fn test_score_with_due_date() {
        let today = day(2026, 3, 2);
        let due = day(2026, 3, 4).and_hms_opt(17, 0, 0).unwrap();
        // importance 2, 60 min, complexity 1, due in 2 days:
        // 6 + 10/3 + 1 + 1
        let task = Task::new("Essay", 2, 60, 1).with_due(due);
        let ranker = PriorityRanker::new(today);
        let score = ranker.score(&task);
        assert!((score - (8.0 + 10.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_overdue_clamps_to_zero_days() {
        let today = day(2026, 3, 2);
        let due = day(2026, 2, 20).and_hms_opt(9, 0, 0).unwrap();
        let task = Task::new("Late", 1, 0, 1).with_due(due);
        let ranker = PriorityRanker::new(today);
        // 3 + 10/1 + 0 + 1
        assert_eq!(ranker.score(&task), 14.0);
    }

    #[test]
    fn test_higher_score_ranks_first() {
        let today = day(2026, 3, 2);
        let low = Task::new("Low", 1, 15, 1);
        let high = Task::new("High", 5, 15, 1);
        let ranked = rank_tasks(&[low, high], today);
        assert_eq!(ranked[0].name, "High");
    }

    /// Two tasks whose factors cancel out to the same score.
    fn equal_score_pair(today: NaiveDate) -> (Task, Task) {
        // a: 9 + 10/2 + 1 + 2 = 17; b: 9 + 10/4 + 3.5 + 2 = 17
        let a = Task::new("A", 3, 60, 2).with_due(day(2026, 3, 3).and_hms_opt(12, 0, 0).unwrap());
        let b = Task::new("B", 3, 210, 2).with_due(day(2026, 3, 5).and_hms_opt(12, 0, 0).unwrap());
        let ranker = PriorityRanker::new(today);
        assert_eq!(ranker.score(&a), ranker.score(&b));
        (a, b)
    }

    #[test]
    fn test_tie_break_earliest_due() {
        let today = day(2026, 3, 2);
        let (a, b) = equal_score_pair(today);
        let ranked = PriorityRanker::new(today).rank(&[b, a]);
        assert_eq!(ranked[0].name, "A");
    }

    #[test]
    fn test_tie_break_missing_due_sorts_last() {
        let today = day(2026, 3, 2);
        let with_due =
            Task::new("Due", 3, 0, 2).with_due(day(2026, 3, 9).and_hms_opt(9, 0, 0).unwrap());
        let without_due = Task::new("NoDue", 3, 0, 2);
        let ranker = PriorityRanker::new(today);
        // due in 7 days matches the default horizon, so scores are equal
        assert_eq!(ranker.score(&with_due), ranker.score(&without_due));

        let ranked = ranker.rank(&[without_due, with_due]);
        assert_eq!(ranked[0].name, "Due");
    }

    #[test]
    fn test_tie_break_shortest_and_longest() {
        let today = day(2026, 3, 2);
        // equal scores: 9 + 10/8 + 1 + 2 = 13.25 and 9 + 10/8 + 2 + 1 = 13.25
        let short = Task::new("Short", 3, 60, 2);
        let long = Task::new("Long", 3, 120, 1);
        let shortest = PriorityRanker::with_config(RankConfig {
            today,
            tie_break: TieBreakRule::ShortestTask,
        });
        assert_eq!(shortest.score(&short), shortest.score(&long));
        assert_eq!(shortest.rank(&[long.clone(), short.clone()])[0].name, "Short");

        let longest = PriorityRanker::with_config(RankConfig {
            today,
            tie_break: TieBreakRule::LongestTask,
        });
        assert_eq!(longest.rank(&[short, long])[0].name, "Long");
    }

    #[test]
    fn test_tie_break_highest_importance() {
        let today = day(2026, 3, 2);
        // equal scores: 3*4 + x + 1 + 1 vs 3*3 + x + 4 + 1
        let important = Task::new("Important", 4, 60, 1);
        let big = Task::new("Big", 3, 240, 1);
        let ranker = PriorityRanker::with_config(RankConfig {
            today,
            tie_break: TieBreakRule::HighestImportance,
        });
        assert_eq!(ranker.score(&important), ranker.score(&big));
        assert_eq!(ranker.rank(&[big, important])[0].name, "Important");
    }

    #[test]
    fn test_ranking_is_stable_and_idempotent() {
        let today = day(2026, 3, 2);
        let first = Task::new("First", 3, 60, 2);
        let second = Task::new("Second", 3, 60, 2);
        let ranker = PriorityRanker::new(today);

        let ranked = ranker.rank(&[first, second]);
        assert_eq!(ranked[0].name, "First");
        assert_eq!(ranked[1].name, "Second");

        let again = ranker.rank(&ranked);
        let ids: Vec<_> = ranked.iter().map(|t| t.id).collect();
        let ids_again: Vec<_> = again.iter().map(|t| t.id).collect();
        assert_eq!(ids, ids_again);
    }
}
