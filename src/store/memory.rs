//! In-memory store for tests and the demo binary.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::ProgressStore;
use crate::error::StoreError;
use crate::models::{Achievement, LessonProgress, StreakState, UserAchievement};

/// HashMap-backed `ProgressStore`. Nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    progress: HashMap<(i64, i64), LessonProgress>,
    streaks: HashMap<i64, StreakState>,
    achievements: Vec<Achievement>,
    unlocks: Vec<UserAchievement>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the achievement catalog.
    pub fn seed_achievements(&mut self, achievements: Vec<Achievement>) {
        self.achievements = achievements;
    }

    /// Unlocks recorded so far, in insertion order.
    pub fn unlocks(&self) -> &[UserAchievement] {
        &self.unlocks
    }

    /// Progress records for one learner, in no particular order.
    pub fn progress_for(&self, learner_id: i64) -> Vec<LessonProgress> {
        self.progress
            .values()
            .filter(|progress| progress.learner_id == learner_id)
            .cloned()
            .collect()
    }
}

impl ProgressStore for MemoryStore {
    fn load_progress(
        &self,
        learner_id: i64,
        lesson_id: i64,
    ) -> Result<Option<LessonProgress>, StoreError> {
        Ok(self.progress.get(&(learner_id, lesson_id)).cloned())
    }

    fn save_progress(&mut self, progress: &LessonProgress) -> Result<(), StoreError> {
        self.progress
            .insert((progress.learner_id, progress.lesson_id), progress.clone());
        Ok(())
    }

    fn load_streak(&self, learner_id: i64) -> Result<Option<StreakState>, StoreError> {
        Ok(self.streaks.get(&learner_id).cloned())
    }

    fn save_streak(&mut self, streak: &StreakState) -> Result<(), StoreError> {
        self.streaks.insert(streak.learner_id, streak.clone());
        Ok(())
    }

    fn list_active_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        Ok(self
            .achievements
            .iter()
            .filter(|achievement| achievement.is_active)
            .cloned()
            .collect())
    }

    fn record_unlock(
        &mut self,
        learner_id: i64,
        achievement_id: i64,
        at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let already_held = self
            .unlocks
            .iter()
            .any(|unlock| unlock.learner_id == learner_id && unlock.achievement_id == achievement_id);
        if already_held {
            return Ok(false);
        }

        self.unlocks.push(UserAchievement {
            learner_id,
            achievement_id,
            unlocked_at: at,
        });
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AchievementKind, Criteria, Rarity};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_progress_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.load_progress(1, 10).unwrap().is_none());

        let progress = LessonProgress::new(1, 10, at());
        store.save_progress(&progress).unwrap();

        let loaded = store.load_progress(1, 10).unwrap().unwrap();
        assert_eq!(loaded.learner_id, 1);
        assert_eq!(loaded.lesson_id, 10);
        assert!(store.load_progress(1, 11).unwrap().is_none());
    }

    #[test]
    fn test_streak_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.load_streak(1).unwrap().is_none());

        let mut streak = StreakState::new(1);
        streak.update(at());
        store.save_streak(&streak).unwrap();

        let loaded = store.load_streak(1).unwrap().unwrap();
        assert_eq!(loaded.current_streak, 1);
    }

    #[test]
    fn test_only_active_achievements_are_listed() {
        let mut store = MemoryStore::new();
        store.seed_achievements(vec![
            Achievement {
                id: 1,
                name: "Live".to_string(),
                description: None,
                kind: AchievementKind::Xp,
                criteria: Criteria::lifetime(100),
                xp_reward: 10,
                is_active: true,
                rarity: Rarity::Common,
            },
            Achievement {
                id: 2,
                name: "Retired".to_string(),
                description: None,
                kind: AchievementKind::Xp,
                criteria: Criteria::lifetime(100),
                xp_reward: 10,
                is_active: false,
                rarity: Rarity::Common,
            },
        ]);

        let listed = store.list_active_achievements().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
    }

    #[test]
    fn test_record_unlock_is_idempotent() {
        let mut store = MemoryStore::new();

        assert!(store.record_unlock(1, 7, at()).unwrap());
        assert!(!store.record_unlock(1, 7, at()).unwrap());
        // Another learner still unlocks independently
        assert!(store.record_unlock(2, 7, at()).unwrap());
        assert_eq!(store.unlocks().len(), 2);
    }
}
