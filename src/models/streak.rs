//! Daily learning streaks with milestone tracking.
//!
//! A streak extends when the learner studies on consecutive calendar days,
//! survives repeat study on the same day, and breaks on any gap. Milestones
//! at 7, 30, 100, and 365 days are recorded once and never un-set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Streak lengths that unlock a named milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakMilestone {
    SevenDays,
    ThirtyDays,
    HundredDays,
    Year,
}

impl StreakMilestone {
    pub const ALL: [StreakMilestone; 4] = [
        StreakMilestone::SevenDays,
        StreakMilestone::ThirtyDays,
        StreakMilestone::HundredDays,
        StreakMilestone::Year,
    ];

    pub fn threshold(self) -> u32 {
        match self {
            StreakMilestone::SevenDays => 7,
            StreakMilestone::ThirtyDays => 30,
            StreakMilestone::HundredDays => 100,
            StreakMilestone::Year => 365,
        }
    }

    /// Achievement name associated with this milestone.
    pub fn achievement_name(self) -> &'static str {
        match self {
            StreakMilestone::SevenDays => "7_day_streak",
            StreakMilestone::ThirtyDays => "30_day_streak",
            StreakMilestone::HundredDays => "100_day_streak",
            StreakMilestone::Year => "365_day_streak",
        }
    }
}

/// A learner's streak record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StreakState {
    pub learner_id: i64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed_streaks: u32,
    pub last_study_date: Option<DateTime<Utc>>,
    pub study_dates: Vec<NaiveDate>,
    pub milestone_7_days: bool,
    pub milestone_30_days: bool,
    pub milestone_100_days: bool,
    pub milestone_365_days: bool,
}

/// What a single update did to the streak.
#[derive(Clone, Debug, PartialEq)]
pub struct StreakUpdate {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub milestones: Vec<StreakMilestone>,
}

/// Summary view over the streak record.
#[derive(Clone, Debug, Serialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed_streaks: u32,
    pub study_days: usize,
    pub milestones_reached: Vec<StreakMilestone>,
}

impl StreakState {
    pub fn new(learner_id: i64) -> Self {
        Self {
            learner_id,
            current_streak: 0,
            longest_streak: 0,
            total_completed_streaks: 0,
            last_study_date: None,
            study_dates: Vec::new(),
            milestone_7_days: false,
            milestone_30_days: false,
            milestone_100_days: false,
            milestone_365_days: false,
        }
    }

    /// Folds one study event into the streak. Consecutive calendar days
    /// extend it, a second session on the same day changes nothing, and any
    /// other gap finishes the current run and starts a new one-day run.
    pub fn update(&mut self, studied_at: DateTime<Utc>) -> StreakUpdate {
        let day = studied_at.date_naive();

        match self.last_study_date {
            None => {
                self.current_streak = 1;
                self.study_dates = vec![day];
            }
            Some(last) => {
                let days_diff = (day - last.date_naive()).num_days();
                if days_diff == 1 {
                    self.current_streak += 1;
                    self.study_dates.push(day);
                } else if days_diff != 0 {
                    // Gap day or an out-of-order date: the run is over
                    if self.current_streak > 0 {
                        self.total_completed_streaks += 1;
                    }
                    self.current_streak = 1;
                    self.study_dates = vec![day];
                }
            }
        }

        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }

        let milestones = self.record_milestones();
        self.last_study_date = Some(studied_at);

        tracing::info!(
            learner_id = self.learner_id,
            current_streak = self.current_streak,
            longest_streak = self.longest_streak,
            new_milestones = milestones.len(),
            "streak updated"
        );

        StreakUpdate {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            milestones,
        }
    }

    /// Marks every milestone the current streak reaches for the first time,
    /// returning the newly crossed ones.
    fn record_milestones(&mut self) -> Vec<StreakMilestone> {
        let mut crossed = Vec::new();
        for milestone in StreakMilestone::ALL {
            if self.current_streak < milestone.threshold() {
                continue;
            }
            let flag = match milestone {
                StreakMilestone::SevenDays => &mut self.milestone_7_days,
                StreakMilestone::ThirtyDays => &mut self.milestone_30_days,
                StreakMilestone::HundredDays => &mut self.milestone_100_days,
                StreakMilestone::Year => &mut self.milestone_365_days,
            };
            if !*flag {
                *flag = true;
                crossed.push(milestone);
            }
        }
        crossed
    }

    pub fn stats(&self) -> StreakStats {
        StreakStats {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            total_completed_streaks: self.total_completed_streaks,
            study_days: self.study_dates.len(),
            milestones_reached: StreakMilestone::ALL
                .into_iter()
                .filter(|&m| self.milestone_reached(m))
                .collect(),
        }
    }

    fn milestone_reached(&self, milestone: StreakMilestone) -> bool {
        match milestone {
            StreakMilestone::SevenDays => self.milestone_7_days,
            StreakMilestone::ThirtyDays => self.milestone_30_days,
            StreakMilestone::HundredDays => self.milestone_100_days,
            StreakMilestone::Year => self.milestone_365_days,
        }
    }
}
