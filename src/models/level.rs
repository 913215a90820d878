//! XP-to-level mapping. Levels start at 0 and take 1000 XP each.

use serde::{Deserialize, Serialize};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: u32 = 1000;

/// Level standing derived from lifetime XP.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    pub xp_to_next_level: u32,
    pub progress_to_next_level: f64,
}

impl LevelInfo {
    pub fn for_xp(total_xp: u32) -> Self {
        let level = total_xp / XP_PER_LEVEL;
        let next_threshold = (u64::from(level) + 1) * u64::from(XP_PER_LEVEL);
        let xp_to_next_level = (next_threshold - u64::from(total_xp)) as u32;
        let progress = 1.0 - f64::from(xp_to_next_level) / f64::from(XP_PER_LEVEL);

        Self {
            level,
            xp_to_next_level,
            progress_to_next_level: progress.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_learner_is_level_zero() {
        let info = LevelInfo::for_xp(0);
        assert_eq!(info.level, 0);
        assert_eq!(info.xp_to_next_level, 1000);
        assert_eq!(info.progress_to_next_level, 0.0);
    }

    #[test]
    fn test_level_boundary() {
        let below = LevelInfo::for_xp(999);
        assert_eq!(below.level, 0);
        assert_eq!(below.xp_to_next_level, 1);
        assert!((below.progress_to_next_level - 0.999).abs() < 1e-9);

        let at = LevelInfo::for_xp(1000);
        assert_eq!(at.level, 1);
        assert_eq!(at.xp_to_next_level, 1000);
        assert_eq!(at.progress_to_next_level, 0.0);
    }

    #[test]
    fn test_mid_level_progress() {
        let info = LevelInfo::for_xp(2500);
        assert_eq!(info.level, 2);
        assert_eq!(info.xp_to_next_level, 500);
        assert_eq!(info.progress_to_next_level, 0.5);
    }
}
