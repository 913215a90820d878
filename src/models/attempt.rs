use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::{PerformanceCategory, categorize_performance};

/// One try at one exercise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseAttempt {
    pub learner_id: i64,
    pub exercise_id: i64,
    pub attempt_number: u32,
    pub answer: Option<String>,
    pub is_correct: Option<bool>,
    pub score: Option<f64>,
    pub time_taken_seconds: Option<u32>,
    pub hints_used: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Derived view over a finished attempt.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttemptMetrics {
    pub accuracy: f64,
    pub speed: Option<f64>,
    pub efficiency: f64,
    pub hints_used: u32,
    pub category: PerformanceCategory,
}

impl ExerciseAttempt {
    /// Accuracy, speed, and efficiency for a scored attempt. Returns `None`
    /// until both the score and the time taken are known.
    pub fn metrics(&self, time_limit_seconds: Option<u32>) -> Option<AttemptMetrics> {
        let score = self.score?;
        let time_taken = self.time_taken_seconds?;

        let speed = match time_limit_seconds {
            Some(limit) if limit > 0 && time_taken > 0 => {
                Some(f64::from(limit) / f64::from(time_taken))
            }
            _ => None,
        };

        let efficiency = if time_taken > 0 {
            score / (f64::from(time_taken) / 60.0)
        } else {
            0.0
        };

        Some(AttemptMetrics {
            accuracy: score,
            speed,
            efficiency,
            hints_used: self.hints_used,
            category: categorize_performance(Some(score)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn attempt(score: Option<f64>, time_taken_seconds: Option<u32>) -> ExerciseAttempt {
        ExerciseAttempt {
            learner_id: 1,
            exercise_id: 42,
            attempt_number: 1,
            answer: Some("la maison".to_string()),
            is_correct: Some(true),
            score,
            time_taken_seconds,
            hints_used: 1,
            started_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn test_metrics_for_timed_attempt() {
        let metrics = attempt(Some(0.9), Some(120)).metrics(Some(180)).unwrap();

        assert_eq!(metrics.accuracy, 0.9);
        assert_eq!(metrics.speed, Some(1.5));
        // 0.9 over two minutes
        assert!((metrics.efficiency - 0.45).abs() < 1e-9);
        assert_eq!(metrics.hints_used, 1);
        assert_eq!(metrics.category, PerformanceCategory::Excellent);
    }

    #[test]
    fn test_metrics_need_score_and_time() {
        assert!(attempt(None, Some(120)).metrics(Some(180)).is_none());
        assert!(attempt(Some(0.9), None).metrics(Some(180)).is_none());
    }

    #[test]
    fn test_speed_needs_a_positive_limit() {
        let no_limit = attempt(Some(0.9), Some(120)).metrics(None).unwrap();
        assert_eq!(no_limit.speed, None);

        let zero_limit = attempt(Some(0.9), Some(120)).metrics(Some(0)).unwrap();
        assert_eq!(zero_limit.speed, None);
    }

    #[test]
    fn test_zero_time_yields_zero_efficiency() {
        let metrics = attempt(Some(0.9), Some(0)).metrics(Some(180)).unwrap();
        assert_eq!(metrics.speed, None);
        assert_eq!(metrics.efficiency, 0.0);
    }
}
