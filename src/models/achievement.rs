//! Achievement catalog entries and eligibility checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LearnerStats;

/// Which learner statistic an achievement is judged against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    Streak,
    Xp,
    Lessons,
    Exercises,
    Time,
    /// Kinds this build does not know about; never eligible.
    #[serde(other)]
    Unknown,
}

/// Unlock requirement. The timeframe is carried through serialization for
/// future windowed checks; evaluation today is against lifetime totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub threshold: u32,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

fn default_timeframe() -> String {
    "lifetime".to_string()
}

impl Criteria {
    pub fn lifetime(threshold: u32) -> Self {
        Self {
            threshold,
            timeframe: default_timeframe(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A catalog entry a learner can unlock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "achievement_type")]
    pub kind: AchievementKind,
    pub criteria: Criteria,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub rarity: Rarity,
}

fn default_true() -> bool {
    true
}

impl Achievement {
    /// True when the stats clear this achievement's bar. Inactive entries
    /// and unknown kinds never qualify.
    pub fn is_eligible(&self, stats: &LearnerStats) -> bool {
        if !self.is_active {
            return false;
        }

        let threshold = self.criteria.threshold;
        match self.kind {
            AchievementKind::Streak => stats.current_streak >= threshold,
            AchievementKind::Xp => stats.total_xp >= threshold,
            AchievementKind::Lessons => stats.lessons_completed >= threshold,
            AchievementKind::Exercises => stats.exercises_completed >= threshold,
            AchievementKind::Time => stats.total_study_time >= threshold,
            AchievementKind::Unknown => false,
        }
    }
}

/// A learner's unlock of one achievement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    pub learner_id: i64,
    pub achievement_id: i64,
    pub unlocked_at: DateTime<Utc>,
}
