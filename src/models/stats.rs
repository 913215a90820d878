use serde::{Deserialize, Serialize};

use super::LevelInfo;

/// Lifetime totals for one learner. Assembled by the caller from its own
/// user records and passed in alongside each attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerStats {
    pub total_xp: u32,
    pub current_streak: u32,
    pub lessons_completed: u32,
    pub exercises_completed: u32,
    /// Minutes of study across all sessions.
    pub total_study_time: u32,
}

impl LearnerStats {
    pub fn level(&self) -> LevelInfo {
        LevelInfo::for_xp(self.total_xp)
    }
}
