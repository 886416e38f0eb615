//! Per-character XP budget thresholds
//!
//! One row per party level 1..=20, one column per difficulty tier. The easy,
//! medium, hard and deadly columns are the published DMG constants; the
//! veryhard column sits at the floored hard/deadly midpoint (see DESIGN.md for
//! the table provenance decision).

use crate::domain::value_objects::EncounterDifficulty;

const THRESHOLDS: [[u32; 5]; 20] = [
    // easy, medium, hard, veryhard, deadly
    [25, 50, 75, 87, 100],
    [50, 100, 150, 175, 200],
    [75, 150, 225, 312, 400],
    [125, 250, 375, 437, 500],
    [250, 500, 750, 925, 1100],
    [300, 600, 900, 1150, 1400],
    [350, 750, 1100, 1400, 1700],
    [450, 900, 1400, 1750, 2100],
    [550, 1100, 1600, 2000, 2400],
    [600, 1200, 1900, 2350, 2800],
    [800, 1600, 2400, 3000, 3600],
    [1000, 2000, 3000, 3750, 4500],
    [1100, 2200, 3400, 4250, 5100],
    [1250, 2500, 3800, 4750, 5700],
    [1400, 2800, 4300, 5350, 6400],
    [1600, 3200, 4800, 6000, 7200],
    [2000, 3900, 5900, 7350, 8800],
    [2100, 4200, 6300, 7900, 9500],
    [2400, 4900, 7300, 9100, 10900],
    [2800, 5700, 8500, 10600, 12700],
];

/// XP allowance for one party member at the given level and difficulty
///
/// Levels outside 1..=20 are clamped to the table edge; the request layer
/// rejects them before they get here.
pub fn per_character_threshold(level: u8, difficulty: EncounterDifficulty) -> u32 {
    let row = usize::from(level.clamp(1, 20)) - 1;
    let column = match difficulty {
        EncounterDifficulty::Easy => 0,
        EncounterDifficulty::Medium => 1,
        EncounterDifficulty::Hard => 2,
        EncounterDifficulty::VeryHard => 3,
        EncounterDifficulty::Deadly => 4,
    };
    THRESHOLDS[row][column]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_thresholds() {
        assert_eq!(per_character_threshold(1, EncounterDifficulty::Easy), 25);
        assert_eq!(per_character_threshold(5, EncounterDifficulty::Medium), 500);
        assert_eq!(per_character_threshold(5, EncounterDifficulty::Hard), 750);
        assert_eq!(per_character_threshold(17, EncounterDifficulty::Medium), 3900);
        assert_eq!(per_character_threshold(20, EncounterDifficulty::Deadly), 12700);
    }

    #[test]
    fn test_rows_increase_with_difficulty() {
        for level in 1..=20u8 {
            let row: Vec<u32> = EncounterDifficulty::ALL
                .iter()
                .map(|d| per_character_threshold(level, *d))
                .collect();
            for pair in row.windows(2) {
                assert!(pair[0] < pair[1], "level {} row not increasing: {:?}", level, row);
            }
        }
    }

    #[test]
    fn test_columns_increase_with_level() {
        for difficulty in EncounterDifficulty::ALL {
            for level in 1..20u8 {
                assert!(
                    per_character_threshold(level, difficulty)
                        <= per_character_threshold(level + 1, difficulty)
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_levels_clamp() {
        assert_eq!(
            per_character_threshold(0, EncounterDifficulty::Medium),
            per_character_threshold(1, EncounterDifficulty::Medium)
        );
        assert_eq!(
            per_character_threshold(25, EncounterDifficulty::Medium),
            per_character_threshold(20, EncounterDifficulty::Medium)
        );
    }
}
