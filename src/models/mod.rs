pub mod achievement;
pub mod attempt;
pub mod daily_goal;
pub mod lesson_progress;
pub mod level;
pub mod review;
pub mod scoring;
pub mod session;
pub mod sm2;
pub mod stats;
pub mod streak;

pub use achievement::{Achievement, AchievementKind, Criteria, Rarity, UserAchievement};
pub use attempt::{AttemptMetrics, ExerciseAttempt};
pub use daily_goal::{DailyGoal, GoalKind};
pub use lesson_progress::{LessonProgress, LessonStatus};
pub use level::LevelInfo;
pub use review::ReviewState;
pub use scoring::PerformanceCategory;
pub use session::{SessionKind, StudySession};
pub use stats::LearnerStats;
pub use streak::{StreakMilestone, StreakState, StreakStats, StreakUpdate};
