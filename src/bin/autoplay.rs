use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::Rng;
use serde::Serialize;

use sliderule::{rng_for_game, GameState, RuleSet, DEFAULT_SIZE, RULE_COUNT};

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Seeded random self-play driver for the sliderule engine")]
struct Args {
    /// Base RNG seed; each game derives its own stream from (seed, game index)
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Grid side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Ratio rules: 'all', 'none', or a comma-separated list like '1,2,5'
    #[arg(long, default_value = "all")]
    rules: String,

    /// Stop a game after this many successful moves (0 = unlimited)
    #[arg(long, default_value_t = 10_000)]
    max_moves: u64,

    /// Write a JSON report of all games to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the final board of each game
    #[arg(long)]
    print_final: bool,
}

#[derive(Debug, Serialize)]
struct GameReport {
    game: u64,
    moves: u64,
    score: u64,
    highest_tile: u64,
    terminal: bool,
}

fn parse_rules(s: &str) -> Result<RuleSet, String> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") {
        return Ok(RuleSet::all_enabled());
    }
    if s.eq_ignore_ascii_case("none") {
        return Ok(RuleSet::none());
    }
    let mut rules = RuleSet::none();
    for tok in s.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            continue;
        }
        let ratio: u64 = tok
            .parse()
            .map_err(|e| format!("Invalid ratio '{tok}': {e}"))?;
        if !rules.set(ratio, true) {
            return Err(format!("Ratio {ratio} out of range 1..={RULE_COUNT}"));
        }
    }
    Ok(rules)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.size == 0 {
        return Err("Grid size must be at least 1".into());
    }
    let rules = parse_rules(&args.rules)?;

    let mut reports: Vec<GameReport> = Vec::with_capacity(args.games as usize);

    for game in 0..args.games {
        let mut rng = rng_for_game(args.seed, game);
        let mut state = GameState::new(args.size, rules);
        state.start(&mut rng);

        let mut moves = 0u64;
        let mut terminal = state.is_terminal();
        while !terminal && (args.max_moves == 0 || moves < args.max_moves) {
            let candidates = state.legal_moves();
            if candidates.is_empty() {
                break;
            }
            let direction = candidates[rng.gen_range(0..candidates.len())];
            let outcome = state.step(direction, &mut rng);
            if outcome.changed {
                moves += 1;
            }
            terminal = outcome.terminal;
        }

        println!(
            "[autoplay] game={} moves={} score={} highest={} terminal={}",
            game,
            moves,
            state.score,
            state.grid.highest_tile(),
            terminal
        );
        if args.print_final {
            print!("{}", state.grid);
        }

        reports.push(GameReport {
            game,
            moves,
            score: state.score,
            highest_tile: state.grid.highest_tile(),
            terminal,
        });
    }

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write report: {e}"))?;
        eprintln!("[autoplay] report written to {}", path.display());
    }

    Ok(())
}
