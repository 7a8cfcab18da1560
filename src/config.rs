//! Configuration structures for loading tournament YAML/JSON files

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default roster size for a tournament run.
pub const DEFAULT_POPULATION: usize = 200;
/// Attribute points distributed across a character at creation, floors excluded.
pub const DEFAULT_POINT_BUDGET: u32 = 500;
/// Minimum value every attribute receives on top of its budget share.
pub const DEFAULT_ATTRIBUTE_FLOOR: u32 = 10;
/// Multiplier applied to crit chance in the crit bonus term.
pub const DEFAULT_CRIT_MULTIPLIER: f64 = 5.0;
/// A battle is decisive when one side's DPS exceeds this multiple of the other's.
pub const DEFAULT_DECISIVE_MARGIN: f64 = 1.5;

/// Named formula constants shared by every battle in a tournament.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BattleRules {
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    #[serde(default = "default_decisive_margin")]
    pub decisive_margin: f64,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            crit_multiplier: DEFAULT_CRIT_MULTIPLIER,
            decisive_margin: DEFAULT_DECISIVE_MARGIN,
        }
    }
}

/// Full tournament configuration loaded from YAML or JSON.
///
/// Every field is optional in the file; an absent file means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of characters to generate
    #[serde(default = "default_population")]
    pub population: usize,

    /// Attribute points split across strength/dexterity/defense
    #[serde(default = "default_budget")]
    pub budget: u32,

    /// Per-attribute floor added after the budget split
    #[serde(default = "default_floor")]
    pub floor: u32,

    #[serde(flatten)]
    pub rules: BattleRules,

    /// Random seed for reproducible rosters (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_population() -> usize {
    DEFAULT_POPULATION
}

fn default_budget() -> u32 {
    DEFAULT_POINT_BUDGET
}

fn default_floor() -> u32 {
    DEFAULT_ATTRIBUTE_FLOOR
}

fn default_crit_multiplier() -> f64 {
    DEFAULT_CRIT_MULTIPLIER
}

fn default_decisive_margin() -> f64 {
    DEFAULT_DECISIVE_MARGIN
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            budget: DEFAULT_POINT_BUDGET,
            floor: DEFAULT_ATTRIBUTE_FLOOR,
            rules: BattleRules::default(),
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Load a tournament configuration from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(&path)?;
        let path_str = path.as_ref().to_string_lossy().to_lowercase();

        if path_str.ends_with(".json") {
            let config: TournamentConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: TournamentConfig = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}
