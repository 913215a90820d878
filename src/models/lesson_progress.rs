//! Per-lesson progress: attempt aggregation, completion tracking, and
//! hand-off to the spaced-repetition scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ReviewState, sm2};

/// Score that counts an attempt toward lesson completion.
pub const QUALIFYING_SCORE: f64 = 0.8;

/// Completion percentage gained per qualifying attempt.
pub const COMPLETION_STEP: f64 = 20.0;

/// Lesson lifecycle. Ordered so progress can only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    NotStarted,
    InProgress,
    Completed,
    Mastered,
}

impl LessonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::NotStarted => "not_started",
            LessonStatus::InProgress => "in_progress",
            LessonStatus::Completed => "completed",
            LessonStatus::Mastered => "mastered",
        }
    }
}

/// One learner's standing on one lesson.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LessonProgress {
    pub learner_id: i64,
    pub lesson_id: i64,
    pub status: LessonStatus,
    pub completion_percentage: f64,
    pub attempts: u32,
    pub average_score: f64,
    pub best_score: f64,
    pub total_time_spent_minutes: u32,
    pub review: ReviewState,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl LessonProgress {
    pub fn new(learner_id: i64, lesson_id: i64, now: DateTime<Utc>) -> Self {
        Self {
            learner_id,
            lesson_id,
            status: LessonStatus::NotStarted,
            completion_percentage: 0.0,
            attempts: 0,
            average_score: 0.0,
            best_score: 0.0,
            total_time_spent_minutes: 0,
            review: ReviewState::default(),
            started_at: now,
            completed_at: None,
            updated_at: now,
        }
    }

    /// Folds one scored attempt into the aggregates, advances completion and
    /// status, then hands the score to the review scheduler.
    pub fn record_attempt(&mut self, score: f64, time_spent_minutes: u32, now: DateTime<Utc>) {
        let score = score.clamp(0.0, 1.0);

        self.attempts += 1;
        self.total_time_spent_minutes += time_spent_minutes;

        if score > self.best_score {
            self.best_score = score;
        }

        if self.attempts == 1 {
            self.average_score = score;
        } else {
            self.average_score =
                (self.average_score * f64::from(self.attempts - 1) + score) / f64::from(self.attempts);
        }

        if score >= QUALIFYING_SCORE {
            self.completion_percentage = (self.completion_percentage + COMPLETION_STEP).min(100.0);
        }

        if self.completion_percentage >= 100.0 {
            self.advance_status(LessonStatus::Completed);
            self.completed_at = Some(now);
        } else if self.completion_percentage > 0.0 {
            self.advance_status(LessonStatus::InProgress);
        }

        self.updated_at = now;

        self.schedule_next_review(score, now);
    }

    /// Moves the status forward on the lifecycle ladder. Requests to move
    /// backward are ignored.
    pub fn advance_status(&mut self, to: LessonStatus) {
        if to > self.status {
            self.status = to;
        }
    }

    /// Runs the SM-2 scheduler against this lesson's review state.
    pub fn schedule_next_review(&mut self, performance: f64, now: DateTime<Utc>) {
        let scheduled = sm2::schedule_next_review(&self.review, performance, now);
        self.review = scheduled.state;
        self.updated_at = now;

        tracing::info!(
            learner_id = self.learner_id,
            lesson_id = self.lesson_id,
            interval_days = scheduled.interval_days,
            ease_factor = self.review.ease_factor,
            next_review = ?self.review.next_review,
            "next review scheduled"
        );
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, LessonStatus::Completed | LessonStatus::Mastered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 2, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_first_attempt_sets_aggregates() {
        let mut progress = LessonProgress::new(1, 10, at());

        progress.record_attempt(0.7, 15, at());
        assert_eq!(progress.attempts, 1);
        assert_eq!(progress.average_score, 0.7);
        assert_eq!(progress.best_score, 0.7);
        assert_eq!(progress.total_time_spent_minutes, 15);
    }

    #[test]
    fn test_average_is_running_mean() {
        let mut progress = LessonProgress::new(1, 10, at());

        progress.record_attempt(0.5, 10, at());
        progress.record_attempt(0.7, 10, at());
        progress.record_attempt(0.9, 10, at());
        assert!((progress.average_score - 0.7).abs() < 1e-9);
        assert_eq!(progress.best_score, 0.9);
        assert_eq!(progress.total_time_spent_minutes, 30);
    }

    #[test]
    fn test_best_score_never_drops() {
        let mut progress = LessonProgress::new(1, 10, at());

        progress.record_attempt(0.9, 5, at());
        progress.record_attempt(0.4, 5, at());
        assert_eq!(progress.best_score, 0.9);
    }

    #[test]
    fn test_low_score_leaves_lesson_untouched() {
        let mut progress = LessonProgress::new(1, 10, at());

        progress.record_attempt(0.7, 5, at());
        assert_eq!(progress.completion_percentage, 0.0);
        assert_eq!(progress.status, LessonStatus::NotStarted);
        assert_eq!(progress.completed_at, None);
    }

    #[test]
    fn test_qualifying_scores_complete_in_five_steps() {
        let mut progress = LessonProgress::new(1, 10, at());

        // 0.8 is the lowest qualifying score
        for step in 1..=4 {
            progress.record_attempt(0.8, 5, at());
            assert_eq!(progress.completion_percentage, f64::from(step) * 20.0);
            assert_eq!(progress.status, LessonStatus::InProgress);
        }

        let done_at = at() + Duration::hours(1);
        progress.record_attempt(0.8, 5, done_at);
        assert_eq!(progress.completion_percentage, 100.0);
        assert_eq!(progress.status, LessonStatus::Completed);
        assert_eq!(progress.completed_at, Some(done_at));
    }

    #[test]
    fn test_completion_caps_at_one_hundred() {
        let mut progress = LessonProgress::new(1, 10, at());
        for _ in 0..5 {
            progress.record_attempt(0.9, 5, at());
        }

        let again = at() + Duration::days(1);
        progress.record_attempt(0.9, 5, again);
        assert_eq!(progress.completion_percentage, 100.0);
        assert_eq!(progress.status, LessonStatus::Completed);
        // Completion timestamp tracks the most recent completing attempt
        assert_eq!(progress.completed_at, Some(again));
    }

    #[test]
    fn test_status_never_downgrades() {
        let mut progress = LessonProgress::new(1, 10, at());
        for _ in 0..5 {
            progress.record_attempt(0.9, 5, at());
        }
        progress.advance_status(LessonStatus::Mastered);

        progress.record_attempt(0.9, 5, at());
        assert_eq!(progress.status, LessonStatus::Mastered);

        progress.advance_status(LessonStatus::InProgress);
        assert_eq!(progress.status, LessonStatus::Mastered);
    }

    #[test]
    fn test_attempt_advances_review_schedule() {
        let mut progress = LessonProgress::new(1, 10, at());

        progress.record_attempt(0.9, 5, at());
        assert_eq!(progress.review.review_count, 1);
        assert_eq!(progress.review.next_review, Some(at() + Duration::days(1)));

        // A failing score still schedules a retry and costs ease
        progress.record_attempt(0.3, 5, at());
        assert_eq!(progress.review.review_count, 2);
        assert!(progress.review.ease_factor < 2.5);
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let mut progress = LessonProgress::new(1, 10, at());

        progress.record_attempt(1.5, 5, at());
        assert_eq!(progress.best_score, 1.0);
        assert_eq!(progress.average_score, 1.0);
        assert_eq!(progress.completion_percentage, 20.0);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LessonStatus::NotStarted.as_str(), "not_started");
        assert_eq!(LessonStatus::Mastered.as_str(), "mastered");
    }
}
