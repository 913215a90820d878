//! SM-2 (SuperMemo 2) spaced repetition scheduling.
//!
//! Review intervals stretch out as a lesson keeps being answered well:
//! - Performance is a 0.0-1.0 score; 0.6 and above counts as a pass
//! - Pass intervals progress 1 day → 6 days → ease factor × review count
//! - A failed review schedules a retry in 1 day and costs 0.2 ease
//! - The ease factor is adjusted after each review and never falls below 1.3

use chrono::{DateTime, Duration, Utc};

use super::ReviewState;

/// Performance at or above this threshold counts as a successful review.
pub const SUCCESS_THRESHOLD: f64 = 0.6;

/// Lower bound for the ease factor.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Flat ease penalty applied on a failed review.
const FAILURE_EASE_PENALTY: f64 = 0.2;

/// Updated review state together with the interval that was chosen.
#[derive(Clone, Debug)]
pub struct ScheduledReview {
    pub state: ReviewState,
    pub interval_days: i64,
}

/// Calculates the next review according to the SM-2 algorithm.
/// performance: 0.0-1.0 (values outside the range are clamped)
pub fn schedule_next_review(
    state: &ReviewState,
    performance: f64,
    now: DateTime<Utc>,
) -> ScheduledReview {
    let performance = performance.clamp(0.0, 1.0);

    let (interval_days, new_ease) = if performance >= SUCCESS_THRESHOLD {
        // Interval comes from the ease and count as they stood before this review
        let interval = match state.review_count {
            0 => 1,
            1 => 6,
            count => (state.ease_factor * f64::from(count)) as i64,
        };

        // Map performance onto the classic 0-5 quality scale for the ease update
        let shortfall = 5.0 - performance * 5.0;
        let ease = state.ease_factor + (0.1 - shortfall * (0.08 + shortfall * 0.02));

        (interval, ease.max(MIN_EASE_FACTOR))
    } else {
        (1, (state.ease_factor - FAILURE_EASE_PENALTY).max(MIN_EASE_FACTOR))
    };

    ScheduledReview {
        state: ReviewState {
            ease_factor: new_ease,
            review_count: state.review_count + 1,
            last_reviewed: Some(now),
            next_review: Some(now + Duration::days(interval_days)),
        },
        interval_days,
    }
}
