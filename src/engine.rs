//! The write path for study events.
//!
//! One scored attempt goes in; XP, lesson progress, the streak, achievement
//! unlocks, and level standing all come back out in a single outcome. The
//! engine owns its store, so a store has exactly one writer.

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::models::scoring::{categorize_performance, compute_xp};
use crate::models::{
    Achievement, LearnerStats, LessonProgress, LevelInfo, PerformanceCategory, StreakState,
    StreakUpdate,
};
use crate::store::ProgressStore;

/// One scored attempt at a lesson, as reported by the caller.
#[derive(Clone, Debug)]
pub struct AttemptInput {
    pub score: f64,
    pub time_spent_minutes: u32,
    pub time_taken_seconds: Option<u32>,
    pub base_xp: u32,
    pub time_limit_seconds: Option<u32>,
}

/// Level crossing caused by one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
}

/// Everything one attempt changed.
#[derive(Clone, Debug)]
pub struct AttemptOutcome {
    pub xp_awarded: u32,
    pub achievement_xp: u32,
    pub performance: PerformanceCategory,
    pub progress: LessonProgress,
    pub streak: StreakUpdate,
    pub unlocked: Vec<Achievement>,
    pub stats: LearnerStats,
    pub level: LevelInfo,
    pub level_up: Option<LevelUp>,
}

/// Drives the full attempt pipeline against one store.
pub struct ProgressEngine<S> {
    store: S,
}

impl<S: ProgressStore> ProgressEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Records one scored lesson attempt for a learner.
    ///
    /// `stats` is the learner's standing before this event, assembled by the
    /// caller; the returned outcome carries the post-event view. XP comes
    /// first, then the progress and streak records are updated and saved,
    /// and achievements are judged against the post-event stats. Unlock
    /// rewards are only granted when the store reports the unlock as new.
    pub fn record_lesson_attempt(
        &mut self,
        learner_id: i64,
        lesson_id: i64,
        attempt: &AttemptInput,
        stats: &LearnerStats,
        at: DateTime<Utc>,
    ) -> Result<AttemptOutcome, EngineError> {
        let score = attempt.score.clamp(0.0, 1.0);
        let xp_awarded = compute_xp(
            attempt.base_xp,
            score,
            attempt.time_taken_seconds,
            attempt.time_limit_seconds,
        );

        let mut progress = self
            .store
            .load_progress(learner_id, lesson_id)?
            .unwrap_or_else(|| LessonProgress::new(learner_id, lesson_id, at));
        let was_complete = progress.is_complete();
        progress.record_attempt(score, attempt.time_spent_minutes, at);
        let newly_completed = !was_complete && progress.is_complete();
        self.store.save_progress(&progress)?;

        let mut streak = self
            .store
            .load_streak(learner_id)?
            .unwrap_or_else(|| StreakState::new(learner_id));
        let streak_update = streak.update(at);
        self.store.save_streak(&streak)?;

        let mut updated = stats.clone();
        updated.total_xp += xp_awarded;
        updated.current_streak = streak_update.current_streak;
        updated.total_study_time += attempt.time_spent_minutes;
        if newly_completed {
            updated.lessons_completed += 1;
        }

        let mut unlocked = Vec::new();
        let mut achievement_xp = 0u32;
        for achievement in self.store.list_active_achievements()? {
            if !achievement.is_eligible(&updated) {
                continue;
            }
            if self.store.record_unlock(learner_id, achievement.id, at)? {
                achievement_xp += achievement.xp_reward;
                tracing::info!(
                    learner_id,
                    achievement_id = achievement.id,
                    name = %achievement.name,
                    xp_reward = achievement.xp_reward,
                    "achievement unlocked"
                );
                unlocked.push(achievement);
            }
        }
        updated.total_xp += achievement_xp;

        let level_before = stats.level().level;
        let level = LevelInfo::for_xp(updated.total_xp);
        let level_up = (level.level > level_before).then_some(LevelUp {
            from: level_before,
            to: level.level,
        });

        if let Some(crossed) = level_up {
            tracing::info!(learner_id, from = crossed.from, to = crossed.to, "level up");
        }

        tracing::info!(
            learner_id,
            lesson_id,
            xp_awarded,
            achievement_xp,
            total_xp = updated.total_xp,
            current_streak = updated.current_streak,
            "attempt recorded"
        );

        Ok(AttemptOutcome {
            xp_awarded,
            achievement_xp,
            performance: categorize_performance(Some(score)),
            progress,
            streak: streak_update,
            unlocked,
            stats: updated,
            level,
            level_up,
        })
    }
}
