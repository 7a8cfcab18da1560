//! CLI entry point for the arena tournament simulator

use arena_sim::{config::TournamentConfig, tournament::run_tournament};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "arena-sim")]
#[command(version)]
#[command(about = "All-pairs battle tournament over randomly generated characters", long_about = None)]
struct Args {
    /// Path to a tournament configuration file (YAML or JSON); defaults apply without one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of characters to generate (overrides config)
    #[arg(short = 'n', long)]
    population: Option<usize>,

    /// Random seed for a reproducible roster (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate pairs on a rayon thread pool
    #[arg(short, long, default_value = "false")]
    parallel: bool,

    /// Worker threads for --parallel (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Show timing information
    #[arg(short, long, default_value = "false")]
    timing: bool,

    /// Debug: print the generated roster and exit without running battles
    #[arg(long, default_value = "false")]
    debug_roster: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match TournamentConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        },
        None => TournamentConfig::default(),
    };

    if let Some(population) = args.population {
        config.population = population;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if args.parallel {
        let threads = args.threads.unwrap_or_else(num_cpus::get);
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            eprintln!("Error building thread pool: {}", e);
            std::process::exit(1);
        }
    }

    if args.debug_roster {
        use arena_sim::tournament::{generate_population, FastRng};

        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = FastRng::new(seed);
        let roster = generate_population(&config, &mut rng);

        println!("ROSTER (seed {})", seed);
        for (i, c) in roster.iter().enumerate() {
            println!("{:>5}  {}", i, c);
        }
        return;
    }

    let start = Instant::now();
    let report = match run_tournament(&config, args.parallel) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error running tournament: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    match args.output {
        OutputFormat::Text => {
            print!("{}", report.to_text());

            if args.timing {
                println!();
                println!("--- Performance ---");
                println!("Total time: {:.3}s", elapsed.as_secs_f64());
                if report.battles > 0 {
                    println!(
                        "Per battle: {:.3}us",
                        elapsed.as_secs_f64() * 1_000_000.0 / report.battles as f64
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "parallel": args.parallel,
                "elapsed_seconds": elapsed.as_secs_f64(),
                "report": report,
            });
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing report: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
