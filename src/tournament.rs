//! All-pairs tournament engine

use crate::battle::{battle, BattleError, Outcome};
use crate::character::Character;
use crate::config::TournamentConfig;
use crate::stats::TournamentReport;
use rayon::prelude::*;

/// Fast RNG wrapper for better performance
#[derive(Clone)]
pub struct FastRng {
    inner: fastrand::Rng,
}

impl FastRng {
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: fastrand::Rng::with_seed(seed),
        }
    }

    #[inline(always)]
    pub fn f64(&mut self) -> f64 {
        self.inner.f64()
    }

    #[inline(always)]
    pub fn gen_range(&mut self, low: u32, high: u32) -> u32 {
        self.inner.u32(low..high)
    }
}

/// Outcome of one evaluated pair, indices into the roster with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairOutcome {
    pub a: usize,
    pub b: usize,
    pub outcome: Outcome,
}

/// Generate a full roster from one RNG stream.
pub fn generate_population(config: &TournamentConfig, rng: &mut FastRng) -> Vec<Character> {
    (0..config.population)
        .map(|_| Character::generate(config.budget, config.floor, rng))
        .collect()
}

/// All unordered index pairs `(a, b)` with `a < b`.
fn index_pairs(count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .flat_map(|a| (a + 1..count).map(move |b| (a, b)))
        .collect()
}

/// Evaluate every pair sequentially.
pub fn evaluate_pairs_sequential(
    config: &TournamentConfig,
    roster: &[Character],
) -> Result<Vec<PairOutcome>, BattleError> {
    index_pairs(roster.len())
        .into_iter()
        .map(|(a, b)| {
            let outcome = battle(&config.rules, &roster[a], &roster[b])?;
            Ok(PairOutcome { a, b, outcome })
        })
        .collect()
}

/// Evaluate every pair on the rayon pool.
///
/// Battles are pure, so the result is identical to the sequential path.
pub fn evaluate_pairs_parallel(
    config: &TournamentConfig,
    roster: &[Character],
) -> Result<Vec<PairOutcome>, BattleError> {
    index_pairs(roster.len())
        .into_par_iter()
        .map(|(a, b)| {
            let outcome = battle(&config.rules, &roster[a], &roster[b])?;
            Ok(PairOutcome { a, b, outcome })
        })
        .collect()
}

/// Generate a roster, run the all-pairs tournament, and aggregate standings.
pub fn run_tournament(
    config: &TournamentConfig,
    parallel: bool,
) -> Result<TournamentReport, BattleError> {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = FastRng::new(seed);

    let roster = generate_population(config, &mut rng);
    let outcomes = if parallel {
        evaluate_pairs_parallel(config, &roster)?
    } else {
        evaluate_pairs_sequential(config, &roster)?
    };

    Ok(TournamentReport::from_outcomes(seed, &roster, &outcomes))
}
