//! Arena CLI
//!
//! Run matches between engines and track Elo ratings.

use std::env;
use std::path::Path;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use xiangqi_core::Engine;

use arena::{quick_match, ArenaConfig, ArenaResults, EloTracker, MatchRunner};

const ELO_FILE: &str = "arena_elo.json";

fn print_usage() {
    println!("Xiangqi Arena");
    println!();
    println!("Usage:");
    println!("  arena match <engine1> <engine2> [--games N] [--depth D] [--config FILE]");
    println!("  arena gauntlet <challenger> [--games N] [--depth D] [--config FILE]");
    println!("  arena leaderboard");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta search with drifting material eval");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  arena match minimax random --games 20 --depth 4");
    println!("  arena gauntlet minimax --games 10");
}

fn create_engine(name: &str) -> Box<dyn Engine> {
    match name.to_lowercase().as_str() {
        "minimax" | "ab" => Box::new(MinimaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            warn!("unknown engine {name}, falling back to minimax");
            Box::new(MinimaxEngine::new())
        }
    }
}

/// Apply `--config`, `--games` and `--depth` flags on top of the defaults.
/// A config file is read first so explicit flags win over it.
fn parse_overrides(args: &[String], start: usize) -> anyhow::Result<ArenaConfig> {
    let mut config = ArenaConfig::default();

    let mut i = start;
    while i < args.len() {
        if args[i].as_str() == "--config" || args[i].as_str() == "-c" {
            if i + 1 < args.len() {
                config = ArenaConfig::load(Path::new(&args[i + 1]))?;
                i += 1;
            }
        }
        i += 1;
    }

    let mut i = start;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games_per_match = args[i + 1].parse().unwrap_or(config.games_per_match);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.search_depth = args[i + 1].parse().unwrap_or(config.search_depth);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    Ok(config)
}

fn run_match(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine names");
        print_usage();
        return Ok(());
    }

    let engine1_name = &args[0];
    let engine2_name = &args[1];
    let config = parse_overrides(args, 2)?;

    println!("=== Match: {} vs {} ===", engine1_name, engine2_name);
    println!(
        "Games: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );
    println!();

    let mut engine1 = create_engine(engine1_name);
    let mut engine2 = create_engine(engine2_name);

    let runner = MatchRunner::new(config.match_config(true));
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_name, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(Path::new(ELO_FILE)).unwrap_or_default();
    tracker.update_ratings(engine1_name, engine2_name, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(Path::new(ELO_FILE)) {
        warn!("failed to save Elo tracker: {e}");
    }

    Ok(())
}

fn run_gauntlet(args: &[String]) -> anyhow::Result<()> {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return Ok(());
    }

    let challenger_name = &args[0];
    let config = parse_overrides(args, 1)?;

    let opponents: Vec<&str> = ["minimax", "random"]
        .into_iter()
        .filter(|&name| name != challenger_name.as_str())
        .collect();

    println!("=== Gauntlet: {} vs all ===", challenger_name);
    println!("Opponents: {:?}", opponents);
    println!(
        "Games per match: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );
    println!();

    let mut tracker = EloTracker::load(Path::new(ELO_FILE)).unwrap_or_default();
    let mut results = ArenaResults::new(
        &format!("Gauntlet: {}", challenger_name),
        std::iter::once(challenger_name.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        config.clone(),
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_name, opponent);

        let mut challenger = create_engine(challenger_name);
        let mut opp_engine = create_engine(opponent);

        let result = quick_match(
            challenger.as_mut(),
            opp_engine.as_mut(),
            config.games_per_match,
            config.search_depth,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_name, opponent, &result);
        results.add_match(challenger_name, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(Path::new(ELO_FILE)) {
        warn!("failed to save Elo tracker: {e}");
    }

    Ok(())
}

fn show_leaderboard() {
    match EloTracker::load(Path::new(ELO_FILE)) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No arena data found. Run some matches first!");
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..])?,
        "gauntlet" => run_gauntlet(&args[2..])?,
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }

    Ok(())
}
