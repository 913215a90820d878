//! Daily goals and their completion accounting.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    StudyTime,
    Lessons,
    Exercises,
    Xp,
}

/// One learner's target for one day.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyGoal {
    pub learner_id: i64,
    pub date: NaiveDate,
    pub kind: GoalKind,
    pub target_value: u32,
    pub current_value: u32,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl DailyGoal {
    pub fn new(learner_id: i64, date: NaiveDate, kind: GoalKind, target_value: u32) -> Self {
        Self {
            learner_id,
            date,
            kind,
            target_value,
            current_value: 0,
            is_completed: false,
            completed_at: None,
        }
    }

    /// Adds to the day's tally. Returns true exactly once, when the goal
    /// first reaches its target.
    pub fn update_progress(&mut self, value: u32, now: DateTime<Utc>) -> bool {
        self.current_value += value;
        if self.current_value >= self.target_value && !self.is_completed {
            self.is_completed = true;
            self.completed_at = Some(now);
            return true;
        }
        false
    }

    /// How far along the goal is, capped at 100. A zero target reads as 0.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_value == 0 {
            return 0.0;
        }
        (f64::from(self.current_value) / f64::from(self.target_value) * 100.0).min(100.0)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.date < today
    }
}

/// Share of the given goals that were met, as a percentage.
pub fn completion_rate(goals: &[DailyGoal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    let met = goals.iter().filter(|goal| goal.is_completed).count();
    met as f64 / goals.len() as f64 * 100.0
}
