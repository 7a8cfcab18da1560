//! Win tallies, standings, and report rendering

use crate::battle::Outcome;
use crate::character::Character;
use crate::tournament::PairOutcome;
use serde::Serialize;

/// One roster entry with its final win count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// Index of the character in generation order
    pub index: usize,
    pub character: Character,
    pub wins: u32,
}

/// Aggregated results of a full tournament.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentReport {
    pub seed: u64,
    pub population: usize,
    pub battles: usize,
    pub decisive: usize,
    pub indecisive: usize,

    pub mean_strength: f64,
    pub mean_dexterity: f64,
    pub mean_defense: f64,

    /// Sorted by wins descending, generation index as tiebreak
    pub standings: Vec<Standing>,
}

impl TournamentReport {
    /// Tally pair outcomes into per-character win counts and rank them.
    pub fn from_outcomes(seed: u64, roster: &[Character], outcomes: &[PairOutcome]) -> Self {
        let mut wins = vec![0u32; roster.len()];
        let mut decisive = 0usize;

        for pair in outcomes {
            match pair.outcome {
                Outcome::AttackerWins => {
                    wins[pair.a] += 1;
                    decisive += 1;
                }
                Outcome::DefenderWins => {
                    wins[pair.b] += 1;
                    decisive += 1;
                }
                Outcome::Indecisive => {}
            }
        }

        let mut standings: Vec<Standing> = roster
            .iter()
            .zip(&wins)
            .enumerate()
            .map(|(index, (character, &wins))| Standing {
                index,
                character: *character,
                wins,
            })
            .collect();
        standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.index.cmp(&b.index)));

        let count = roster.len().max(1) as f64;
        let mean_strength = roster.iter().map(|c| c.strength as f64).sum::<f64>() / count;
        let mean_dexterity = roster.iter().map(|c| c.dexterity as f64).sum::<f64>() / count;
        let mean_defense = roster.iter().map(|c| c.defense as f64).sum::<f64>() / count;

        Self {
            seed,
            population: roster.len(),
            battles: outcomes.len(),
            decisive,
            indecisive: outcomes.len() - decisive,
            mean_strength,
            mean_dexterity,
            mean_defense,
            standings,
        }
    }

    /// Render the ranked table plus summary lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("=== Arena Tournament Results ===\n");
        out.push_str(&format!("Population:  {}\n", self.population));
        out.push_str(&format!("Seed:        {}\n", self.seed));
        out.push_str(&format!(
            "Battles:     {} ({} decisive, {} indecisive)\n",
            self.battles, self.decisive, self.indecisive
        ));
        out.push_str(&format!(
            "Mean stats:  str {:.1} / dex {:.1} / def {:.1}\n",
            self.mean_strength, self.mean_dexterity, self.mean_defense
        ));
        out.push('\n');

        out.push_str(&format!(
            "{:>5}  {:>5}  {:>5}  {:>5}  {:>5}\n",
            "#", "str", "dex", "def", "wins"
        ));
        for s in &self.standings {
            out.push_str(&format!(
                "{:>5}  {:>5}  {:>5}  {:>5}  {:>5}\n",
                s.index, s.character.strength, s.character.dexterity, s.character.defense, s.wins
            ));
        }

        out
    }
}
