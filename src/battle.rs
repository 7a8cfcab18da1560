//! Pure battle formulas and the tri-state outcome

use crate::character::Character;
use crate::config::BattleRules;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result of comparing two characters' damage output.
///
/// Deliberately tri-state: a near-tie inside the decisive margin is a
/// no-result, not a coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    AttackerWins,
    DefenderWins,
    Indecisive,
}

impl Outcome {
    /// The same outcome as seen from the other side of the match.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::AttackerWins => Outcome::DefenderWins,
            Outcome::DefenderWins => Outcome::AttackerWins,
            Outcome::Indecisive => Outcome::Indecisive,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::AttackerWins => "attacker wins",
            Outcome::DefenderWins => "defender wins",
            Outcome::Indecisive => "indecisive",
        };
        f.write_str(label)
    }
}

/// Stat combinations the formulas are not defined over.
///
/// Generator-produced characters never hit these; hand-built ones can.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BattleError {
    #[error("degenerate stats: strength {strength} vs defense {defense} zeroes a denominator")]
    DegenerateStats { strength: u32, defense: u32 },
    #[error("degenerate stats: dexterity {dexterity} vs defense {defense} zeroes a denominator")]
    DegenerateCrit { dexterity: u32, defense: u32 },
}

/// Fraction of damage that lands, `s / (s + d)`.
///
/// Strictly increasing in `s`, strictly decreasing in `d`; in (0, 1) for
/// positive inputs. Callers guarantee `s + d > 0` (checked by [`dps`]).
pub fn damage_bonus(strength: u32, defense: u32) -> f64 {
    strength as f64 / (strength + defense) as f64
}

/// Chance of a critical hit, `dex / (dex + 3d)`. In (0, 1) for positive inputs.
pub fn crit_chance(dexterity: u32, defense: u32) -> f64 {
    dexterity as f64 / (dexterity as f64 + 3.0 * defense as f64)
}

/// Expected damage multiplier from crits, `1 + crit_chance * crit_multiplier`.
pub fn crit_bonus(rules: &BattleRules, dexterity: u32, defense: u32) -> f64 {
    1.0 + crit_chance(dexterity, defense) * rules.crit_multiplier
}

/// Damage-output score of `attacker` against `defender`.
///
/// A relative comparison score, not an absolute damage-per-second unit.
pub fn dps(
    rules: &BattleRules,
    attacker: &Character,
    defender: &Character,
) -> Result<f64, BattleError> {
    if attacker.strength + defender.defense == 0 {
        return Err(BattleError::DegenerateStats {
            strength: attacker.strength,
            defense: defender.defense,
        });
    }
    if attacker.dexterity + defender.defense == 0 {
        return Err(BattleError::DegenerateCrit {
            dexterity: attacker.dexterity,
            defense: defender.defense,
        });
    }

    Ok(damage_bonus(attacker.strength, defender.defense)
        * crit_bonus(rules, attacker.dexterity, defender.defense))
}

/// Decide a match between two characters.
///
/// Decisive only when one side's score clears `decisive_margin` times the
/// other's; otherwise [`Outcome::Indecisive`].
pub fn battle(rules: &BattleRules, a: &Character, b: &Character) -> Result<Outcome, BattleError> {
    let dps_a = dps(rules, a, b)?;
    let dps_b = dps(rules, b, a)?;

    if dps_a > rules.decisive_margin * dps_b {
        Ok(Outcome::AttackerWins)
    } else if dps_b > rules.decisive_margin * dps_a {
        Ok(Outcome::DefenderWins)
    } else {
        Ok(Outcome::Indecisive)
    }
}
