//! End-to-end invariants over full seeded tournament runs.

use arena_sim::battle::{battle, Outcome};
use arena_sim::config::TournamentConfig;
use arena_sim::stats::TournamentReport;
use arena_sim::tournament::{
    evaluate_pairs_parallel, evaluate_pairs_sequential, generate_population, run_tournament,
    FastRng,
};

fn seeded_config(population: usize, seed: u64) -> TournamentConfig {
    TournamentConfig {
        population,
        seed: Some(seed),
        ..TournamentConfig::default()
    }
}

#[test]
fn roster_honors_budget_and_floor() {
    let config = seeded_config(200, 4242);
    let mut rng = FastRng::new(4242);
    let roster = generate_population(&config, &mut rng);

    assert_eq!(roster.len(), 200);
    for c in &roster {
        assert_eq!(c.total(), 530, "budget violated for {}", c);
        assert!(c.strength >= 10 && c.dexterity >= 10 && c.defense >= 10);
    }
}

#[test]
fn full_run_tallies_are_consistent() {
    let config = seeded_config(200, 1);
    let report = run_tournament(&config, false).unwrap();

    assert_eq!(report.population, 200);
    assert_eq!(report.battles, 200 * 199 / 2);
    assert_eq!(report.decisive + report.indecisive, report.battles);

    let total_wins: u32 = report.standings.iter().map(|s| s.wins).sum();
    assert_eq!(total_wins as usize, report.decisive);

    // no character can win more matches than it played
    for s in &report.standings {
        assert!(s.wins <= 199);
    }
}

#[test]
fn standings_are_ranked_and_complete() {
    let config = seeded_config(120, 8);
    let report = run_tournament(&config, false).unwrap();

    assert_eq!(report.standings.len(), 120);
    for pair in report.standings.windows(2) {
        assert!(pair[0].wins >= pair[1].wins);
    }

    let mut indices: Vec<usize> = report.standings.iter().map(|s| s.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..120).collect::<Vec<_>>());
}

#[test]
fn parallel_and_sequential_agree_end_to_end() {
    let config = seeded_config(80, 555);
    let mut rng = FastRng::new(555);
    let roster = generate_population(&config, &mut rng);

    let seq = evaluate_pairs_sequential(&config, &roster).unwrap();
    let par = evaluate_pairs_parallel(&config, &roster).unwrap();
    assert_eq!(seq, par);

    let seq_report = TournamentReport::from_outcomes(555, &roster, &seq);
    let par_report = TournamentReport::from_outcomes(555, &roster, &par);
    assert_eq!(seq_report.standings, par_report.standings);
}

#[test]
fn pair_outcomes_match_direct_battle_calls() {
    let config = seeded_config(40, 90210);
    let mut rng = FastRng::new(90210);
    let roster = generate_population(&config, &mut rng);

    let outcomes = evaluate_pairs_sequential(&config, &roster).unwrap();
    for pair in &outcomes {
        let direct = battle(&config.rules, &roster[pair.a], &roster[pair.b]).unwrap();
        assert_eq!(pair.outcome, direct);

        let reversed = battle(&config.rules, &roster[pair.b], &roster[pair.a]).unwrap();
        match pair.outcome {
            Outcome::AttackerWins => assert_eq!(reversed, Outcome::DefenderWins),
            Outcome::DefenderWins => assert_eq!(reversed, Outcome::AttackerWins),
            Outcome::Indecisive => assert_eq!(reversed, Outcome::Indecisive),
        }
    }
}

#[test]
fn mean_attributes_hover_around_uniform_share() {
    let config = seeded_config(2000, 77);
    let report = run_tournament(&config, false).unwrap();

    // budget/3 + floor = 176.67
    for mean in [
        report.mean_strength,
        report.mean_dexterity,
        report.mean_defense,
    ] {
        assert!(
            (mean - 176.67).abs() < 10.0,
            "population mean {} strayed from the uniform share",
            mean
        );
    }
}
