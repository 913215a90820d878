pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use engine::{AttemptInput, AttemptOutcome, LevelUp, ProgressEngine};
pub use error::{EngineError, SnapshotError, StoreError};
pub use models::{Achievement, LearnerStats, LessonProgress, StreakState};
pub use store::{MemoryStore, ProgressStore};
