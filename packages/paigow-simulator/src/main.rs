//! Pai Gow simulator CLI: plays whole games in memory to compare tile setters.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use paigow::ai::{create_setter, TileSetter};
use paigow::domain::derive_dealing_seed;
use paigow::GameRules;
use rand::Rng;
use tracing::{info, warn};

use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use types::{OutputFormat, SetterType};

#[derive(Parser)]
#[command(name = "paigow-simulator")]
#[command(about = "Fast in-memory Pai Gow simulator for comparing tile setters")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Tile setter for seat 0
    #[arg(long, value_enum, default_value = "house-way")]
    seat0: SetterType,

    /// Tile setter for seat 1
    #[arg(long, value_enum, default_value = "random")]
    seat1: SetterType,

    /// Base seed; game N plays with a seed derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on a game after this many deals
    #[arg(long, default_value = "500")]
    max_deals: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seats = [args.seat0, args.seat1];
    let setter_names: Vec<&str> = seats.iter().map(SetterType::name).collect();
    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let rules = GameRules {
        player_count: seats.len(),
        ..GameRules::default()
    }
    .validated()?;

    if args.show_output {
        info!(
            games = args.games,
            base_seed,
            setters = ?setter_names,
            "Starting simulator"
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format)?;
    let mut results = Vec::with_capacity(args.games as usize);
    let mut errors = 0u32;
    let start = Instant::now();

    for game_num in 1..=args.games {
        let game_seed = derive_dealing_seed(base_seed, game_num);
        let game_start = Instant::now();
        let outcome = create_setters(&setter_names, game_seed).and_then(|setters| {
            Simulator::new(
                i64::from(game_num),
                game_seed,
                rules,
                &setter_names,
                args.max_deals,
            )?
            .simulate_game(&setters)
            .map_err(Into::into)
        });
        match outcome {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    setter_names.iter().map(|s| s.to_string()).collect(),
                    args.games,
                    &result,
                    duration_ms,
                );
                output_writer.write_game(&metrics)?;
                if result.winner.is_none() {
                    warn!(game_num, max_deals = args.max_deals, "Game hit the deal cap");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &setter_names, errors, elapsed, args.games);
    }

    Ok(())
}

/// One setter per seat; random setters get their own seed from the game seed.
fn create_setters(
    names: &[&str],
    game_seed: u64,
) -> Result<Vec<Box<dyn TileSetter>>, Box<dyn std::error::Error>> {
    names
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            let seed = game_seed.wrapping_add(seat as u64 + 1);
            create_setter(name, Some(&serde_json::json!({ "seed": seed }))).map_err(Into::into)
        })
        .collect()
}

fn print_summary(
    results: &[GameResult],
    setters: &[&str],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let undecided = results.iter().filter(|r| r.winner.is_none()).count();
    let deals: usize = results.iter().map(|r| r.deals.len()).sum();
    println!(
        "Average deals per game: {:.1}",
        deals as f64 / results.len() as f64
    );
    if undecided > 0 {
        println!("Undecided (deal cap): {}", undecided);
    }

    println!("\n=== Results by Seat ===");
    for (seat, setter) in setters.iter().enumerate() {
        let wins = results
            .iter()
            .filter(|r| r.winner.is_some_and(|w| usize::from(w) == seat))
            .count();
        let total_score: u64 = results
            .iter()
            .map(|r| u64::from(r.final_scores.get(seat).copied().unwrap_or(0)))
            .sum();
        println!(
            "Seat {} ({}): avg={:.1}, wins={} ({:.1}%)",
            seat,
            setter,
            total_score as f64 / results.len() as f64,
            wins,
            wins as f64 / results.len() as f64 * 100.0
        );
    }
}
