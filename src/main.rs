use chrono::{Duration, TimeZone, Utc};

use lingua_progress::engine::{AttemptInput, ProgressEngine};
use lingua_progress::export::{LearnerSnapshot, export_snapshot_to_path};
use lingua_progress::models::{Achievement, AchievementKind, Criteria, LearnerStats, Rarity};
use lingua_progress::store::{MemoryStore, ProgressStore};

fn stock_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            name: "First Steps".to_string(),
            description: Some("Complete your first lesson".to_string()),
            kind: AchievementKind::Lessons,
            criteria: Criteria::lifetime(1),
            xp_reward: 50,
            is_active: true,
            rarity: Rarity::Common,
        },
        Achievement {
            id: 2,
            name: "Streak Master".to_string(),
            description: Some("Maintain a 7-day learning streak".to_string()),
            kind: AchievementKind::Streak,
            criteria: Criteria::lifetime(7),
            xp_reward: 200,
            is_active: true,
            rarity: Rarity::Rare,
        },
        Achievement {
            id: 3,
            name: "Language Explorer".to_string(),
            description: Some("Complete 10 lessons".to_string()),
            kind: AchievementKind::Lessons,
            criteria: Criteria::lifetime(10),
            xp_reward: 500,
            is_active: true,
            rarity: Rarity::Epic,
        },
        Achievement {
            id: 4,
            name: "Dedicated Learner".to_string(),
            description: Some("Study for 30 days in a row".to_string()),
            kind: AchievementKind::Streak,
            criteria: Criteria::lifetime(30),
            xp_reward: 1000,
            is_active: true,
            rarity: Rarity::Legendary,
        },
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut store = MemoryStore::new();
    store.seed_achievements(stock_achievements());
    let mut engine = ProgressEngine::new(store);

    let learner_id = 1;
    let lesson_id = 101;
    let mut stats = LearnerStats::default();
    let start = Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap();

    println!("Simulating a week of study for learner {learner_id}...");

    for day in 0..7i64 {
        let when = start + Duration::days(day);
        let input = AttemptInput {
            score: (0.75 + 0.05 * day as f64).min(1.0),
            time_spent_minutes: 15,
            time_taken_seconds: Some((40 + 5 * day) as u32),
            base_xp: 150,
            time_limit_seconds: Some(120),
        };

        let outcome = engine
            .record_lesson_attempt(learner_id, lesson_id, &input, &stats, when)
            .expect("Failed to record attempt");

        println!(
            "Day {}: score {:.2} -> {} XP, lesson at {:.0}%, streak {} ({})",
            day + 1,
            input.score,
            outcome.xp_awarded,
            outcome.progress.completion_percentage,
            outcome.streak.current_streak,
            outcome.performance.as_str(),
        );
        for unlocked in &outcome.unlocked {
            println!(
                "  Achievement unlocked: {} (+{} XP)",
                unlocked.name, unlocked.xp_reward
            );
        }
        if let Some(up) = outcome.level_up {
            println!("  Reached level {}!", up.to);
        }

        stats = outcome.stats;
    }

    let store = engine.store();
    let streak = store
        .load_streak(learner_id)
        .expect("Failed to load streak")
        .expect("Streak was recorded during the week");

    let level = stats.level();
    println!("\nWeek complete for learner {learner_id}:");
    println!(
        "  Total XP: {} (level {}, {} XP to next)",
        stats.total_xp, level.level, level.xp_to_next_level
    );
    println!(
        "  Streak: {} days (longest {})",
        streak.current_streak, streak.longest_streak
    );
    println!("  Lessons completed: {}", stats.lessons_completed);
    println!("  Achievements unlocked: {}", store.unlocks().len());

    let snapshot = LearnerSnapshot {
        learner_id,
        streak,
        progress: store.progress_for(learner_id),
    };
    export_snapshot_to_path(&snapshot, "learner_progress.json")
        .expect("Failed to export snapshot");
    println!("  Snapshot written to learner_progress.json");
}
