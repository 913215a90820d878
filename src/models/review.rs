use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Easiness factor assigned before any review has happened.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Spaced-repetition state for a single lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    pub ease_factor: f64,
    pub review_count: u32,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub next_review: Option<DateTime<Utc>>,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE_FACTOR,
            review_count: 0,
            last_reviewed: None,
            next_review: None,
        }
    }
}

impl ReviewState {
    /// A lesson with no scheduled review yet is always due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review {
            Some(next) => next <= now,
            None => true,
        }
    }
}
