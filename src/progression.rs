//! Experience table lookups and level resolution.

use crate::constants::{EXPERIENCE_TABLE, EXP_PER_LEVEL_BEYOND_TABLE, MAX_TABLE_LEVEL, MIN_LEVEL};

/// Returns the cumulative EXP required to reach `level`, or `None` outside 1-40.
pub fn experience_for_level(level: u32) -> Option<u64> {
    if !(MIN_LEVEL..=MAX_TABLE_LEVEL).contains(&level) {
        return None;
    }
    Some(EXPERIENCE_TABLE[(level - 1) as usize])
}

/// Resolves the level for an accumulated amount of experience.
///
/// Scans from level 40 down and returns the first level whose threshold is
/// met. Level 1 is the floor even when `exp` is below the level 1 threshold.
pub fn level_from_experience(exp: u64) -> u32 {
    for level in (MIN_LEVEL..=MAX_TABLE_LEVEL).rev() {
        if exp >= EXPERIENCE_TABLE[(level - 1) as usize] {
            return level;
        }
    }
    MIN_LEVEL
}

/// EXP needed for the level after `current_level`.
///
/// Past the table, each level costs a flat 200,000 on top of level 40,
/// which is steeper than the 150,000 step used inside levels 31-40.
pub fn next_level_threshold(current_level: u32) -> u64 {
    let level = current_level.max(MIN_LEVEL);
    let top = EXPERIENCE_TABLE[(MAX_TABLE_LEVEL - 1) as usize];

    if level >= MAX_TABLE_LEVEL {
        return top + (level - (MAX_TABLE_LEVEL - 1)) as u64 * EXP_PER_LEVEL_BEYOND_TABLE;
    }
    EXPERIENCE_TABLE[level as usize]
}

/// Progress towards the next level as a percentage in [0, 100].
pub fn level_progress_percent(exp: u64, current_level: u32) -> f64 {
    let threshold = next_level_threshold(current_level);
    (exp as f64 / threshold as f64 * 100.0).clamp(0.0, 100.0)
}

/// Unspent skill points for a character of `level` that has invested `used`.
pub fn available_skill_points(level: u32, used: u32) -> u32 {
    level.saturating_sub(used)
}

/// Level bands shown on the experience reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    Beginner,
    Intermediate,
    Advanced,
    Veteran,
}

impl LevelBand {
    pub fn all() -> [LevelBand; 4] {
        [
            LevelBand::Beginner,
            LevelBand::Intermediate,
            LevelBand::Advanced,
            LevelBand::Veteran,
        ]
    }

    pub fn for_level(level: u32) -> LevelBand {
        match level {
            0..=10 => LevelBand::Beginner,
            11..=20 => LevelBand::Intermediate,
            21..=30 => LevelBand::Advanced,
            _ => LevelBand::Veteran,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelBand::Beginner => "Níveis 1-10",
            LevelBand::Intermediate => "Níveis 11-20",
            LevelBand::Advanced => "Níveis 21-30",
            LevelBand::Veteran => "Níveis 31-40+",
        }
    }

    /// Nominal EXP step between consecutive levels inside the band.
    pub fn nominal_step(&self) -> u64 {
        match self {
            LevelBand::Beginner => 25_000,
            LevelBand::Intermediate => 50_000,
            LevelBand::Advanced => 100_000,
            LevelBand::Veteran => 150_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_strictly_increasing() {
        for pair in EXPERIENCE_TABLE.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_band_steps_match_table() {
        for level in 2..=MAX_TABLE_LEVEL {
            if level == 19 {
                continue;
            }
            let band = LevelBand::for_level(level);
            // First level of a band steps by the band's own size
            let step = experience_for_level(level).unwrap()
                - experience_for_level(level - 1).unwrap();
            assert_eq!(step, band.nominal_step(), "level {}", level);
        }
    }

    #[test]
    fn test_irregular_jump_at_19() {
        assert_eq!(experience_for_level(18), Some(650_000));
        assert_eq!(experience_for_level(19), Some(750_000));
        assert_eq!(experience_for_level(20), Some(800_000));
    }

    #[test]
    fn test_experience_for_level_out_of_range() {
        assert_eq!(experience_for_level(0), None);
        assert_eq!(experience_for_level(41), None);
        assert_eq!(experience_for_level(1), Some(25_000));
        assert_eq!(experience_for_level(40), Some(3_300_000));
    }

    #[test]
    fn test_level_from_experience_floor() {
        assert_eq!(level_from_experience(0), 1);
        assert_eq!(level_from_experience(24_999), 1);
        assert_eq!(level_from_experience(25_000), 1);
        assert_eq!(level_from_experience(49_999), 1);
        assert_eq!(level_from_experience(50_000), 2);
    }

    #[test]
    fn test_level_from_experience_caps_at_40() {
        assert_eq!(level_from_experience(3_300_000), 40);
        assert_eq!(level_from_experience(u64::MAX), 40);
    }

    #[test]
    fn test_next_level_threshold() {
        assert_eq!(next_level_threshold(1), 50_000);
        assert_eq!(next_level_threshold(18), 750_000);
        assert_eq!(next_level_threshold(39), 3_300_000);
        assert_eq!(next_level_threshold(40), 3_500_000);
        assert_eq!(next_level_threshold(41), 3_700_000);
    }

    #[test]
    fn test_next_level_threshold_treats_zero_as_one() {
        assert_eq!(next_level_threshold(0), next_level_threshold(1));
    }

    #[test]
    fn test_level_progress_percent() {
        assert_eq!(level_progress_percent(0, 1), 0.0);
        assert_eq!(level_progress_percent(25_000, 1), 50.0);
        // Stored EXP is cumulative, so high-level characters can exceed the bar
        assert_eq!(level_progress_percent(10_000_000, 40), 100.0);
    }

    #[test]
    fn test_available_skill_points() {
        assert_eq!(available_skill_points(40, 33), 7);
        assert_eq!(available_skill_points(5, 9), 0);
    }

    #[test]
    fn test_level_band_labels() {
        assert_eq!(LevelBand::for_level(1), LevelBand::Beginner);
        assert_eq!(LevelBand::for_level(20), LevelBand::Intermediate);
        assert_eq!(LevelBand::for_level(21), LevelBand::Advanced);
        assert_eq!(LevelBand::for_level(45), LevelBand::Veteran);
        assert_eq!(LevelBand::Veteran.label(), "Níveis 31-40+");
    }
}
