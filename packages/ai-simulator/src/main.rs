//! AI Simulator CLI - headless bot-vs-bot games with metrics output.
//!
//! Games run entirely in memory through the engine's round driver. Each game
//! is reproducible from its seed.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::{build_game_metrics, winner, RunInfo};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiKind, OutputFormat};
use wizard_engine::{AiConfig, GameConfig};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Headless bot-vs-bot game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of seats (3-6); every seat plays Monte Carlo unless --seats is given
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// AI kind per seat, comma separated (e.g. monte-carlo,random,random)
    #[arg(long, value_delimiter = ',')]
    seats: Vec<AiKind>,

    /// Cards dealt in each round, comma separated (default 1..=10)
    #[arg(long, value_delimiter = ',')]
    rounds: Vec<u8>,

    /// Play the first round with open hands during bidding
    #[arg(long)]
    open_first_round: bool,

    /// Base seed; game N plays with seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Monte Carlo simulations per candidate card
    #[arg(long)]
    simulations: Option<u32>,

    /// Monte Carlo worker threads (0 = rayon default)
    #[arg(long)]
    workers: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the per-game output file
    #[arg(long)]
    compress: bool,
}

impl Args {
    fn seat_kinds(&self) -> Result<Vec<AiKind>, String> {
        if self.seats.is_empty() {
            return Ok(vec![AiKind::MonteCarlo; self.players]);
        }
        if self.seats.len() != self.players {
            return Err(format!(
                "--seats lists {} AIs but --players is {}",
                self.seats.len(),
                self.players
            ));
        }
        Ok(self.seats.clone())
    }

    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig {
            first_round_open_cards: self.open_first_round,
            ..GameConfig::default()
        };
        if !self.rounds.is_empty() {
            config.selected_rounds = self.rounds.clone();
        }
        config
    }

    fn ai_config(&self) -> AiConfig {
        AiConfig {
            simulations: self.simulations,
            workers: self.workers,
            ..AiConfig::default()
        }
    }
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
    if args.json_logs {
        wizard_engine::telemetry::init_tracing(filter);
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let kinds = args.seat_kinds()?;
    let game_config = args.game_config();
    game_config.validate_for(kinds.len())?;
    let ai_types: Vec<String> = kinds.iter().map(|k| k.as_str().to_string()).collect();

    if args.show_output {
        info!(games = args.games, seats = ?ai_types, "starting AI simulator");
    }

    let mut output_writer = OutputWriter::new(
        &args.output_dir,
        &args.output_format,
        args.compress,
        kinds.len(),
    )?;
    let run = RunInfo {
        ai_types: &ai_types,
        total_games: args.games,
        selected_rounds: &game_config.selected_rounds,
        open_first_round: game_config.first_round_open_cards,
    };
    let simulator = Simulator::new(kinds.clone(), game_config.clone(), args.ai_config());

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };

        match simulator.simulate_game(game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(game_num, &run, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(
                        game = game_num,
                        seed = game_seed,
                        scores = ?result.final_scores,
                        "game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, seed = game_seed, error = %e, "game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (games_path, csv_path) = {
        let (g, c) = output_writer.output_paths();
        (g.to_path_buf(), c.to_path_buf())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", games_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &ai_types, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    ai_types: &[String],
    errors: u32,
    elapsed: std::time::Duration,
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

    let seats = ai_types.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0i64; seats];
    let mut max_scores = vec![i32::MIN; seats];
    let mut min_scores = vec![i32::MAX; seats];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        wins[winner(&result.final_scores) as usize] += 1;
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat,
            ai_types[seat],
            avg_score,
            min_scores[seat],
            max_scores[seat],
            wins[seat],
            win_rate
        );
    }
}
