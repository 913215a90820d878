//! Study sessions: bounded sittings of activity with their own accounting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Lesson,
    Exercise,
    Review,
    Practice,
}

/// A single sitting of study.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudySession {
    pub learner_id: i64,
    pub kind: SessionKind,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub lessons_covered: Vec<i64>,
    pub exercises_attempted: Vec<i64>,
    pub xp_earned: u32,
    pub is_completed: bool,
}

impl StudySession {
    pub fn start(learner_id: i64, kind: SessionKind, now: DateTime<Utc>) -> Self {
        Self {
            learner_id,
            kind,
            started_at: now,
            ended_at: None,
            duration_minutes: None,
            lessons_covered: Vec::new(),
            exercises_attempted: Vec::new(),
            xp_earned: 0,
            is_completed: false,
        }
    }

    pub fn add_lesson(&mut self, lesson_id: i64) {
        self.lessons_covered.push(lesson_id);
    }

    pub fn add_exercise(&mut self, exercise_id: i64) {
        self.exercises_attempted.push(exercise_id);
    }

    pub fn add_xp(&mut self, amount: u32) {
        self.xp_earned += amount;
    }

    /// Closes the session and fixes its duration in whole minutes.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.ended_at = Some(now);
        self.is_completed = true;
        self.duration_minutes = Some((now - self.started_at).num_minutes().max(0) as u32);
    }

    /// XP earned per minute of a completed session; 0 while the session is
    /// open or when it lasted under a minute.
    pub fn xp_per_minute(&self) -> f64 {
        match self.duration_minutes {
            Some(minutes) if minutes > 0 => f64::from(self.xp_earned) / f64::from(minutes),
            _ => 0.0,
        }
    }
}
