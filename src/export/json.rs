//! JSON snapshot export and import for learner state.
//! A snapshot bundles a learner's streak with all of their lesson progress.

use std::fs::File;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::models::{LessonProgress, StreakState};

/// Portable bundle of one learner's progress state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LearnerSnapshot {
    pub learner_id: i64,
    pub streak: StreakState,
    pub progress: Vec<LessonProgress>,
}

/// Writes a snapshot as pretty-printed JSON at the given path.
/// Returns an error if file creation or writing fails.
pub fn export_snapshot_to_path(
    snapshot: &LearnerSnapshot,
    path: &str,
) -> Result<(), SnapshotError> {
    let json_string = serde_json::to_string_pretty(snapshot)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Reads a snapshot back from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_snapshot(path: &str) -> Result<LearnerSnapshot, SnapshotError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let snapshot: LearnerSnapshot = serde_json::from_str(&contents)?;

    tracing::debug!(learner_id = snapshot.learner_id, path, "snapshot imported");
    Ok(snapshot)
}
