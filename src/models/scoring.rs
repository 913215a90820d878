//! XP rewards and performance categories for scored attempts.

use serde::{Deserialize, Serialize};

/// Bonus fraction of base XP for finishing in under half the time limit.
const FAST_FINISH_BONUS: f64 = 0.2;

/// Bonus fraction of base XP for finishing within the time limit.
const ON_TIME_BONUS: f64 = 0.1;

/// Qualitative bucket for a 0.0-1.0 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCategory {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
    Unknown,
}

impl PerformanceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceCategory::Excellent => "excellent",
            PerformanceCategory::Good => "good",
            PerformanceCategory::Fair => "fair",
            PerformanceCategory::NeedsImprovement => "needs_improvement",
            PerformanceCategory::Unknown => "unknown",
        }
    }
}

/// Buckets a score: >= 0.9 excellent, >= 0.8 good, >= 0.6 fair, anything
/// lower needs improvement. A missing score is unknown.
pub fn categorize_performance(score: Option<f64>) -> PerformanceCategory {
    match score {
        None => PerformanceCategory::Unknown,
        Some(s) if s >= 0.9 => PerformanceCategory::Excellent,
        Some(s) if s >= 0.8 => PerformanceCategory::Good,
        Some(s) if s >= 0.6 => PerformanceCategory::Fair,
        Some(_) => PerformanceCategory::NeedsImprovement,
    }
}

/// XP for one attempt: base XP scaled by clamped performance, plus a time
/// bonus when both timing figures are known (20% of base under half the
/// limit, 10% within the limit, nothing at or over it). Fractions truncate.
pub fn compute_xp(
    base_xp: u32,
    performance: f64,
    time_taken_seconds: Option<u32>,
    time_limit_seconds: Option<u32>,
) -> u32 {
    let performance = performance.clamp(0.0, 1.0);
    let base = f64::from(base_xp);

    let mut xp = (base * performance) as u32;

    if let (Some(taken), Some(limit)) = (time_taken_seconds, time_limit_seconds) {
        if f64::from(taken) < f64::from(limit) * 0.5 {
            xp += (base * FAST_FINISH_BONUS) as u32;
        } else if taken < limit {
            xp += (base * ON_TIME_BONUS) as u32;
        }
    }

    xp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_scales_with_performance() {
        assert_eq!(compute_xp(100, 1.0, None, None), 100);
        assert_eq!(compute_xp(100, 0.87, None, None), 87);
        // 50 * 0.75 truncates to 37
        assert_eq!(compute_xp(50, 0.75, None, None), 37);
        assert_eq!(compute_xp(100, 0.0, None, None), 0);
    }

    #[test]
    fn test_xp_clamps_performance() {
        assert_eq!(compute_xp(100, 1.5, None, None), 100);
        assert_eq!(compute_xp(100, -0.2, None, None), 0);
    }

    #[test]
    fn test_fast_finish_earns_twenty_percent() {
        assert_eq!(compute_xp(100, 0.8, Some(20), Some(60)), 100);
    }

    #[test]
    fn test_within_limit_earns_ten_percent() {
        assert_eq!(compute_xp(100, 0.8, Some(45), Some(60)), 90);
        // Exactly half the limit is no longer "fast"
        assert_eq!(compute_xp(100, 0.8, Some(30), Some(60)), 90);
    }

    #[test]
    fn test_no_bonus_at_or_over_limit() {
        assert_eq!(compute_xp(100, 0.8, Some(60), Some(60)), 80);
        assert_eq!(compute_xp(100, 0.8, Some(90), Some(60)), 80);
    }

    #[test]
    fn test_no_bonus_without_both_timings() {
        assert_eq!(compute_xp(100, 0.8, Some(20), None), 80);
        assert_eq!(compute_xp(100, 0.8, None, Some(60)), 80);
    }

    #[test]
    fn test_categorize_boundaries() {
        assert_eq!(categorize_performance(Some(0.95)), PerformanceCategory::Excellent);
        assert_eq!(categorize_performance(Some(0.9)), PerformanceCategory::Excellent);
        assert_eq!(categorize_performance(Some(0.8)), PerformanceCategory::Good);
        assert_eq!(categorize_performance(Some(0.6)), PerformanceCategory::Fair);
        assert_eq!(
            categorize_performance(Some(0.59)),
            PerformanceCategory::NeedsImprovement
        );
        assert_eq!(categorize_performance(None), PerformanceCategory::Unknown);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(PerformanceCategory::NeedsImprovement.as_str(), "needs_improvement");
        assert_eq!(PerformanceCategory::Unknown.as_str(), "unknown");
    }
}
