//! Persistence seam for progress, streaks, and achievement unlocks.
//!
//! The engine talks to storage only through `ProgressStore`. Mutating calls
//! take `&mut self`, so one store value has exactly one writer at a time;
//! implementations backed by shared storage must additionally keep all
//! writes of a single event in one transactional boundary.

pub mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{Achievement, LessonProgress, StreakState};

pub trait ProgressStore {
    /// Loads the progress record for one learner and lesson, if any.
    fn load_progress(
        &self,
        learner_id: i64,
        lesson_id: i64,
    ) -> Result<Option<LessonProgress>, StoreError>;

    fn save_progress(&mut self, progress: &LessonProgress) -> Result<(), StoreError>;

    /// Loads a learner's streak record, if any.
    fn load_streak(&self, learner_id: i64) -> Result<Option<StreakState>, StoreError>;

    fn save_streak(&mut self, streak: &StreakState) -> Result<(), StoreError>;

    /// All achievements currently open for unlocking.
    fn list_active_achievements(&self) -> Result<Vec<Achievement>, StoreError>;

    /// Records an unlock. Returns false when the learner already holds the
    /// achievement, which makes replays harmless.
    fn record_unlock(
        &mut self,
        learner_id: i64,
        achievement_id: i64,
        at: DateTime<Utc>,
    ) -> Result<bool, StoreError>;
}
