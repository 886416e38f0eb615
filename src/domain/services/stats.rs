//! Stat engine - every derived value on a character sheet
//!
//! All functions here are pure and total over their documented domains.
//! Range enforcement (scores 1..=30, levels 1..=20) happens where character
//! data enters the system, not here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::PlayerCharacter;
use crate::domain::value_objects::{Ability, CharacterClass, Skill};

/// Modifier for a raw ability score: floor((score - 10) / 2)
pub fn ability_modifier(score: u8) -> i32 {
    (i32::from(score) - 10).div_euclid(2)
}

/// Proficiency bonus for a level: ceil(level / 4) + 1
///
/// Steps +2 at levels 1-4 up to +6 at 17-20. Defined for levels 1..=20.
pub fn proficiency_bonus(level: u8) -> i32 {
    (i32::from(level) + 3) / 4 + 1
}

/// Maximum hit points using the fixed average-roll convention
///
/// Level 1 grants the full die plus the Constitution modifier, with no
/// minimum-1 floor; every later level grants floor(die/2) + 1 plus the
/// modifier. A deeply negative modifier can therefore drive the total to
/// zero or below, matching the companion's arithmetic.
pub fn hit_points(class: CharacterClass, level: u8, con_modifier: i32) -> i32 {
    let die = class.hit_die();
    let first_level = die + con_modifier;
    let per_level = die / 2 + 1 + con_modifier;
    first_level + (i32::from(level) - 1) * per_level
}

pub fn initiative(dex_modifier: i32) -> i32 {
    dex_modifier
}

/// Skill check bonus; the same formula governs saving throws
pub fn skill_bonus(ability_modifier: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    ability_modifier + if proficient { proficiency_bonus } else { 0 }
}

pub fn save_bonus(ability_modifier: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    skill_bonus(ability_modifier, proficient, proficiency_bonus)
}

pub fn spell_save_dc(proficiency_bonus: i32, spellcasting_modifier: i32) -> i32 {
    8 + proficiency_bonus + spellcasting_modifier
}

pub fn spell_attack_bonus(proficiency_bonus: i32, spellcasting_modifier: i32) -> i32 {
    proficiency_bonus + spellcasting_modifier
}

/// DC to maintain concentration after taking damage: max(10, floor(damage / 2))
pub fn concentration_dc(damage: u32) -> u32 {
    (damage / 2).max(10)
}

/// Attack bonus for a weapon keyed to one ability (Str melee, Dex ranged)
pub fn attack_bonus(proficiency_bonus: i32, ability_modifier: i32) -> i32 {
    proficiency_bonus + ability_modifier
}

/// Finesse weapons use the better of Strength and Dexterity
pub fn finesse_attack_bonus(proficiency_bonus: i32, str_modifier: i32, dex_modifier: i32) -> i32 {
    proficiency_bonus + str_modifier.max(dex_modifier)
}

/// Unarmored Defense AC; the secondary modifier is Constitution for
/// Barbarians and Wisdom for Monks (class policy, not decided here)
pub fn unarmored_defense_ac(dex_modifier: i32, secondary_modifier: i32) -> i32 {
    10 + dex_modifier + secondary_modifier
}

/// The full derived block for one character sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedStats {
    pub ability_modifiers: BTreeMap<Ability, i32>,
    pub proficiency_bonus: i32,
    pub initiative: i32,
    pub max_hit_points: i32,
    /// Unarmored Defense AC; only present for classes carrying the trait
    pub armor_class: Option<i32>,
    pub melee_attack_bonus: i32,
    pub ranged_attack_bonus: i32,
    pub finesse_attack_bonus: i32,
    pub spell_save_dc: Option<i32>,
    pub spell_attack_bonus: Option<i32>,
    pub saving_throws: BTreeMap<Ability, i32>,
    pub skills: BTreeMap<Skill, i32>,
}

impl DerivedStats {
    pub fn for_character(character: &PlayerCharacter) -> Self {
        let modifier = |ability: Ability| ability_modifier(character.abilities.score(ability));

        let prof = proficiency_bonus(character.level);
        let str_mod = modifier(Ability::Strength);
        let dex_mod = modifier(Ability::Dexterity);
        let con_mod = modifier(Ability::Constitution);

        let ability_modifiers: BTreeMap<Ability, i32> = Ability::ALL
            .into_iter()
            .map(|a| (a, modifier(a)))
            .collect();

        let armor_class = character
            .class
            .unarmored_defense_secondary()
            .map(|secondary| unarmored_defense_ac(dex_mod, modifier(secondary)));

        let casting_mod = character
            .effective_spellcasting_ability()
            .map(modifier);

        let saving_throws = Ability::ALL
            .into_iter()
            .map(|a| {
                (
                    a,
                    save_bonus(modifier(a), character.is_save_proficient(a), prof),
                )
            })
            .collect();

        let skills = Skill::ALL
            .into_iter()
            .map(|s| {
                (
                    s,
                    skill_bonus(
                        modifier(s.governing_ability()),
                        character.is_skill_proficient(s),
                        prof,
                    ),
                )
            })
            .collect();

        Self {
            ability_modifiers,
            proficiency_bonus: prof,
            initiative: initiative(dex_mod),
            max_hit_points: hit_points(character.class, character.level, con_mod),
            armor_class,
            melee_attack_bonus: attack_bonus(prof, str_mod),
            ranged_attack_bonus: attack_bonus(prof, dex_mod),
            finesse_attack_bonus: finesse_attack_bonus(prof, str_mod, dex_mod),
            spell_save_dc: casting_mod.map(|m| spell_save_dc(prof, m)),
            spell_attack_bonus: casting_mod.map(|m| spell_attack_bonus(prof, m)),
            saving_throws,
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AbilityScores;

    #[test]
    fn test_ability_modifier_spot_checks() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(16), 3);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn test_ability_modifier_is_floored_over_full_range() {
        for score in 1..=30u8 {
            let expected = ((f64::from(score) - 10.0) / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_proficiency_bonus_steps() {
        for level in 1..=20u8 {
            let expected = match level {
                1..=4 => 2,
                5..=8 => 3,
                9..=12 => 4,
                13..=16 => 5,
                _ => 6,
            };
            assert_eq!(proficiency_bonus(level), expected, "level {}", level);
        }
    }

    #[test]
    fn test_hit_points() {
        assert_eq!(hit_points(CharacterClass::Fighter, 5, 2), 44);
        assert_eq!(hit_points(CharacterClass::Barbarian, 1, 3), 15);
        assert_eq!(hit_points(CharacterClass::Wizard, 10, 2), 62);
    }

    #[test]
    fn test_hit_points_apply_no_floor() {
        // The level-up contribution of a d6 class with a -5 Constitution
        // modifier is negative, and no clamp is applied anywhere. This pins
        // the companion's unguarded arithmetic rather than endorsing it.
        assert_eq!(hit_points(CharacterClass::Wizard, 1, -5), 1);
        assert_eq!(hit_points(CharacterClass::Wizard, 20, -5), -18);
    }

    #[test]
    fn test_concentration_dc_law() {
        for damage in 0..=19 {
            assert_eq!(concentration_dc(damage), 10, "damage {}", damage);
        }
        assert_eq!(concentration_dc(20), 10);
        assert_eq!(concentration_dc(22), 11);
        assert_eq!(concentration_dc(40), 20);
        assert_eq!(concentration_dc(100), 50);
    }

    #[test]
    fn test_spellcasting_numbers() {
        assert_eq!(spell_save_dc(3, 4), 15);
        assert_eq!(spell_attack_bonus(4, 5), 9);
    }

    #[test]
    fn test_attack_bonuses() {
        assert_eq!(attack_bonus(2, 3), 5);
        assert_eq!(finesse_attack_bonus(3, 2, 4), 7);
        assert_eq!(finesse_attack_bonus(3, 4, 2), 7);
    }

    #[test]
    fn test_unarmored_defense() {
        assert_eq!(unarmored_defense_ac(2, 3), 15);
        assert_eq!(unarmored_defense_ac(-1, 0), 9);
    }

    #[test]
    fn test_derived_stats_for_monk() {
        let monk = PlayerCharacter::new(
            "Kirin",
            CharacterClass::Monk,
            5,
            AbilityScores::new(10, 16, 12, 8, 14, 10),
        )
        .with_skill_proficiency(Skill::Acrobatics);

        let stats = DerivedStats::for_character(&monk);
        assert_eq!(stats.proficiency_bonus, 3);
        assert_eq!(stats.initiative, 3);
        // Monk Unarmored Defense: 10 + Dex + Wis
        assert_eq!(stats.armor_class, Some(15));
        // d8 class: 8 + 1 at level 1, 4 * (5 + 1) after
        assert_eq!(stats.max_hit_points, 33);
        assert_eq!(stats.spell_save_dc, None);
        assert_eq!(stats.finesse_attack_bonus, 6);
        // Proficient Acrobatics: +3 Dex +3 proficiency
        assert_eq!(stats.skills[&Skill::Acrobatics], 6);
        // Untrained Athletics: bare Str modifier
        assert_eq!(stats.skills[&Skill::Athletics], 0);
        // Monk saves: Str and Dex
        assert_eq!(stats.saving_throws[&Ability::Strength], 3);
        assert_eq!(stats.saving_throws[&Ability::Dexterity], 6);
        assert_eq!(stats.saving_throws[&Ability::Wisdom], 2);
    }

    #[test]
    fn test_derived_stats_for_wizard() {
        let wizard = PlayerCharacter::new(
            "Imra",
            CharacterClass::Wizard,
            9,
            AbilityScores::new(8, 14, 14, 18, 12, 10),
        );

        let stats = DerivedStats::for_character(&wizard);
        assert_eq!(stats.proficiency_bonus, 4);
        assert_eq!(stats.spell_save_dc, Some(16));
        assert_eq!(stats.spell_attack_bonus, Some(8));
        // No Unarmored Defense trait on wizards
        assert_eq!(stats.armor_class, None);
        assert_eq!(stats.melee_attack_bonus, 3);
        assert_eq!(stats.ranged_attack_bonus, 6);
    }
}
