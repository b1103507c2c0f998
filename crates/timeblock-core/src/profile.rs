//! User scheduling preferences as plain values.
//!
//! A profile travels with the plan inputs: preferred working window,
//! tie-break rule, and relative productivity per part of day. There is no
//! profile storage here; the caller supplies one (or none) per run.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::ranking::TieBreakRule;
use crate::schedule::WorkingWindow;

/// Part of day for productivity weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    /// Classify a wall-clock time.
    pub fn of(time: NaiveTime) -> Self {
        match time.hour() {
            5..=11 => DayPart::Morning,
            12..=16 => DayPart::Afternoon,
            17..=20 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }
}

/// Relative productivity per part of day. Neutral weight is 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Productivity {
    #[serde(default = "neutral")]
    pub morning: f64,
    #[serde(default = "neutral")]
    pub afternoon: f64,
    #[serde(default = "neutral")]
    pub evening: f64,
    #[serde(default = "neutral")]
    pub night: f64,
}

fn neutral() -> f64 {
    1.0
}

impl Default for Productivity {
    fn default() -> Self {
        Self {
            morning: 1.0,
            afternoon: 1.0,
            evening: 1.0,
            night: 1.0,
        }
    }
}

impl Productivity {
    /// Weight for the part of day containing `time`.
    pub fn weight_at(&self, time: NaiveTime) -> f64 {
        match DayPart::of(time) {
            DayPart::Morning => self.morning,
            DayPart::Afternoon => self.afternoon,
            DayPart::Evening => self.evening,
            DayPart::Night => self.night,
        }
    }
}

/// Scheduling preferences supplied by the caller.
///
/// Absent fields fall back to planner defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Preferred daily working window.
    #[serde(default)]
    pub window: Option<WorkingWindow>,
    /// Preferred tie-break rule for equal priority scores.
    #[serde(default)]
    pub tie_break: Option<TieBreakRule>,
    /// Productivity weights per part of day.
    #[serde(default)]
    pub productivity: Productivity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_day_part_boundaries() {
        assert_eq!(DayPart::of(t(4, 59)), DayPart::Night);
        assert_eq!(DayPart::of(t(5, 0)), DayPart::Morning);
        assert_eq!(DayPart::of(t(11, 59)), DayPart::Morning);
        assert_eq!(DayPart::of(t(12, 0)), DayPart::Afternoon);
        assert_eq!(DayPart::of(t(17, 0)), DayPart::Evening);
        assert_eq!(DayPart::of(t(21, 0)), DayPart::Night);
        assert_eq!(DayPart::of(t(0, 30)), DayPart::Night);
    }

    #[test]
    fn test_weight_lookup() {
        let productivity = Productivity {
            morning: 1.4,
            afternoon: 1.0,
            evening: 0.7,
            night: 0.3,
        };
        assert_eq!(productivity.weight_at(t(9, 0)), 1.4);
        assert_eq!(productivity.weight_at(t(18, 30)), 0.7);
        assert_eq!(productivity.weight_at(t(2, 0)), 0.3);
    }

    #[test]
    fn test_profile_defaults_from_empty_json() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.window.is_none());
        assert!(profile.tie_break.is_none());
        assert_eq!(profile.productivity, Productivity::default());
    }
}
