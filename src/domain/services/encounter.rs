//! Encounter builder - XP-budget-driven monster selection
//!
//! A single deterministic pipeline: budget lookup, challenge-rating filter,
//! greedy fill. No randomness anywhere; identical inputs over an unchanged
//! catalog always produce an identical roster.

use serde::Serialize;

use crate::domain::entities::Monster;
use crate::domain::services::thresholds::per_character_threshold;
use crate::domain::value_objects::{ChallengeRating, EncounterDifficulty};

/// Per-slot acceptance tolerance when filling an explicit monster count
const SLOT_TOLERANCE: f64 = 1.5;
/// Acceptance tolerance for the descending greedy fill
const FILL_TOLERANCE: f64 = 1.3;
/// How far a lone boss may stray from the full budget, as a budget fraction
const BOSS_TOLERANCE: f64 = 0.5;
/// Remaining-budget fraction below which the fill stops adding monsters
const BUDGET_CUTOFF: f64 = 0.15;
/// Hard bound on fill iterations
const MAX_FILL_ATTEMPTS: usize = 100;
/// Roster size cap in auto mode
const MAX_AUTO_ROSTER: usize = 5;

/// How many monsters the DM asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonsterCount {
    #[default]
    Auto,
    Exactly(u32),
}

#[derive(Debug, Clone)]
pub struct EncounterRequest {
    /// Party level, 1..=20
    pub party_level: u8,
    /// Number of party members, at least 1
    pub party_size: u32,
    pub difficulty: EncounterDifficulty,
    pub monster_count: MonsterCount,
}

/// Inclusive challenge-rating window for a party level and difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrRange {
    pub min: u8,
    pub max: u8,
}

impl CrRange {
    pub fn contains(&self, cr: ChallengeRating) -> bool {
        let eighths = cr.in_eighths();
        u32::from(self.min) * 8 <= eighths && eighths <= u32::from(self.max) * 8
    }
}

impl std::fmt::Display for CrRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Challenge-rating window as level offsets per difficulty tier
pub fn cr_range(party_level: u8, difficulty: EncounterDifficulty) -> CrRange {
    let level = i32::from(party_level);
    let (min, max) = match difficulty {
        EncounterDifficulty::Easy => ((level - 3).max(0), (level - 1).max(1)),
        EncounterDifficulty::Medium => ((level - 2).max(0), level),
        EncounterDifficulty::Hard => ((level - 1).max(0), level + 1),
        EncounterDifficulty::VeryHard => (level, level + 2),
        EncounterDifficulty::Deadly => (level, level + 3),
    };
    CrRange {
        min: min as u8,
        max: max as u8,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("no monsters available in challenge rating range {min_cr}-{max_cr}")]
    NoEligibleMonsters { min_cr: u8, max_cr: u8 },
}

/// One roster line: a monster and how many of it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterEntry {
    pub monster: Monster,
    pub count: u32,
}

impl EncounterEntry {
    pub fn xp_subtotal(&self) -> u32 {
        self.monster.xp() * self.count
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterResult {
    pub entries: Vec<EncounterEntry>,
    pub total_xp: u32,
    pub xp_budget: u32,
    pub budget_utilization: f64,
    pub win_chance_percent: u8,
}

/// Assembles encounters from a caller-supplied catalog
pub struct EncounterBuilder<'a> {
    catalog: &'a [Monster],
}

impl<'a> EncounterBuilder<'a> {
    pub fn new(catalog: &'a [Monster]) -> Self {
        Self { catalog }
    }

    pub fn build(&self, request: &EncounterRequest) -> Result<EncounterResult, EncounterError> {
        let per_character = per_character_threshold(request.party_level, request.difficulty);
        let budget = per_character.saturating_mul(request.party_size);
        let range = cr_range(request.party_level, request.difficulty);

        let eligible: Vec<&Monster> = self
            .catalog
            .iter()
            .filter(|m| range.contains(m.challenge_rating))
            .collect();
        if eligible.is_empty() {
            return Err(EncounterError::NoEligibleMonsters {
                min_cr: range.min,
                max_cr: range.max,
            });
        }

        let entries = match request.monster_count {
            MonsterCount::Exactly(count) => {
                let picked = fill_exact_count(&eligible, budget, count);
                if picked.is_empty() {
                    // Nothing fit the per-slot window; fall back to the
                    // descending fill with the requested count as the cap
                    fill_descending(&eligible, budget, count as usize)
                } else {
                    picked
                }
            }
            MonsterCount::Auto => {
                let boss = if request.party_size <= 2 {
                    pick_boss(&eligible, budget)
                } else {
                    None
                };
                match boss {
                    Some(entry) => vec![entry],
                    None => {
                        let cap = (request.party_size as usize + 1).min(MAX_AUTO_ROSTER);
                        fill_descending(&eligible, budget, cap)
                    }
                }
            }
        };

        let total_xp: u32 = entries.iter().map(EncounterEntry::xp_subtotal).sum();
        Ok(EncounterResult {
            entries,
            total_xp,
            xp_budget: budget,
            budget_utilization: if budget > 0 {
                f64::from(total_xp) / f64::from(budget)
            } else {
                0.0
            },
            win_chance_percent: request.difficulty.win_chance_percent(),
        })
    }
}

fn push_or_increment(entries: &mut Vec<EncounterEntry>, monster: &Monster) {
    if let Some(entry) = entries.iter_mut().find(|e| e.monster.name == monster.name) {
        entry.count += 1;
    } else {
        entries.push(EncounterEntry {
            monster: monster.clone(),
            count: 1,
        });
    }
}

/// Fill exactly `count` slots, preferring monsters closest to the per-slot
/// XP target. Each round accepts the first candidate whose XP stays inside
/// the per-slot tolerance of the budget still to spend; a round with no
/// acceptable candidate ends the fill.
fn fill_exact_count(eligible: &[&Monster], budget: u32, count: u32) -> Vec<EncounterEntry> {
    if count == 0 {
        return Vec::new();
    }
    let target = f64::from(budget) / f64::from(count);

    let mut pool = eligible.to_vec();
    // Stable sort: catalog order breaks ties, keeping the fill deterministic
    pool.sort_by(|a, b| {
        let da = (f64::from(a.xp()) - target).abs();
        let db = (f64::from(b.xp()) - target).abs();
        da.total_cmp(&db)
    });

    let mut entries = Vec::new();
    let mut remaining_count = count;
    let mut remaining_budget = f64::from(budget);
    while remaining_count > 0 {
        let slot_cap = remaining_budget / f64::from(remaining_count) * SLOT_TOLERANCE;
        let Some(&pick) = pool.iter().find(|m| f64::from(m.xp()) <= slot_cap) else {
            break;
        };
        push_or_increment(&mut entries, pick);
        remaining_budget -= f64::from(pick.xp());
        remaining_count -= 1;
    }
    entries
}

/// Single "boss" whose XP lands closest to the whole budget, if it lands
/// close enough. Ties keep the earliest catalog entry.
fn pick_boss(eligible: &[&Monster], budget: u32) -> Option<EncounterEntry> {
    let budget_f = f64::from(budget);
    let mut best: Option<(&Monster, f64)> = None;
    for &monster in eligible {
        let distance = (f64::from(monster.xp()) - budget_f).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((monster, distance));
        }
    }
    let (monster, distance) = best?;
    if distance <= budget_f * BOSS_TOLERANCE {
        Some(EncounterEntry {
            monster: monster.clone(),
            count: 1,
        })
    } else {
        None
    }
}

/// Greedy fill from the biggest eligible monster down: each pass takes the
/// first monster still inside the tolerance of the remaining budget, until
/// the roster cap, the diminishing-returns cutoff, a pass with no fit, or
/// the attempt bound stops it. A partial or empty roster is a valid result.
fn fill_descending(eligible: &[&Monster], budget: u32, max_monsters: usize) -> Vec<EncounterEntry> {
    let mut pool = eligible.to_vec();
    pool.sort_by(|a, b| b.xp().cmp(&a.xp()));

    let budget_f = f64::from(budget);
    let mut remaining = budget_f;
    let mut entries: Vec<EncounterEntry> = Vec::new();
    for _ in 0..MAX_FILL_ATTEMPTS {
        if entries.len() >= max_monsters || remaining < budget_f * BUDGET_CUTOFF {
            break;
        }
        let Some(&pick) = pool.iter().find(|m| f64::from(m.xp()) <= remaining * FILL_TOLERANCE)
        else {
            break;
        };
        push_or_increment(&mut entries, pick);
        remaining -= f64::from(pick.xp());
    }
    entries
}
