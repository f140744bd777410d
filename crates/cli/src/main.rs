//! N-Queens Duel CLI
//!
//! Interactive frontend over the core: the human and the engine alternate
//! queen placements over stdin/stdout until the board is full or no safe
//! square remains.

mod session;
mod settings;

use std::io::{self, BufRead, Write};

use alphabeta_engine::AlphaBetaEngine;
use minimax_engine::MinimaxEngine;
use queens_core::{parse_pos, Engine, Heuristic, SearchResult};
use random_engine::RandomEngine;

use session::{GameOutcome, GameSession};
use settings::Settings;

const SETTINGS_PATH: &str = "queens.json";
// Board-size policy lives here in the frontend; the core accepts any
// positive size.
const MIN_SIZE: usize = 4;
const MAX_SIZE: usize = 12;

fn create_engine(spec: &str, heuristic: Heuristic) -> Option<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "alphabeta" | "ab" => Some(Box::new(AlphaBetaEngine::with_heuristic(heuristic))),
        "minimax" | "mm" => Some(Box::new(MinimaxEngine::with_heuristic(heuristic))),
        "random" => Some(Box::new(RandomEngine::new())),
        _ => None,
    }
}

fn parse_heuristic(spec: &str) -> Option<Heuristic> {
    match spec.to_lowercase().as_str() {
        "constructive" => Some(Heuristic::Constructive),
        "conflicts" | "conflict-count" => Some(Heuristic::ConflictCount),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  new <n>                  start a fresh game on an n x n board ({MIN_SIZE}..={MAX_SIZE})");
    println!("  place <row> <col>        place your queen; the engine replies");
    println!("  hint                     show the engine's suggestion without placing");
    println!("  show                     print the board");
    println!("  eval                     print the current evaluation");
    println!("  depth <d>                set search depth (1..=8)");
    println!("  engine <name>            alphabeta | minimax | random");
    println!("  heuristic <name>         constructive | conflicts");
    println!("  save                     write settings to {SETTINGS_PATH}");
    println!("  help                     this list");
    println!("  quit                     exit");
}

fn print_stats(result: &SearchResult) {
    println!("Nodes evaluated: {}", result.stats.nodes);
    println!("Search time: {:.2?}", result.stats.elapsed);
    println!("Nodes/second: {:.0}", result.stats.nodes_per_second());
}

fn announce(outcome: GameOutcome) {
    match outcome {
        GameOutcome::Solved => println!("All queens placed successfully!"),
        GameOutcome::DeadEnd => println!("No safe positions left!"),
        GameOutcome::InProgress => {}
    }
}

fn main() {
    let mut settings = match Settings::load(SETTINGS_PATH) {
        Ok(s) => s,
        Err(_) => Settings::default(),
    };

    let heuristic = parse_heuristic(&settings.heuristic).unwrap_or_default();
    let engine = create_engine(&settings.engine, heuristic)
        .unwrap_or_else(|| Box::new(AlphaBetaEngine::with_heuristic(heuristic)));
    let mut game = GameSession::new(
        settings.size.clamp(MIN_SIZE, MAX_SIZE),
        engine,
        settings.depth,
        heuristic,
    );

    println!(
        "N-Queens duel on a {0}x{0} board — engine {1}, depth {2}.",
        game.board.size(),
        game.engine_name(),
        game.depth
    );
    println!("Place queens on the board. Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "new" => {
                let size = parts.get(1).and_then(|s| s.parse::<usize>().ok());
                match size {
                    Some(n) if (MIN_SIZE..=MAX_SIZE).contains(&n) => {
                        game.reset_to(n);
                        settings.size = n;
                        println!("New {0}x{0} game.", n);
                    }
                    _ => println!("Board size must be between {MIN_SIZE} and {MAX_SIZE}."),
                }
            }
            "place" => {
                if game.outcome != GameOutcome::InProgress {
                    println!("Game is already finished! Start a new one to play again.");
                    continue;
                }
                let at = match (parts.get(1), parts.get(2)) {
                    (Some(r), Some(c)) => parse_pos(r, c),
                    _ => None,
                };
                let at = match at {
                    Some(at) => at,
                    None => {
                        println!("Usage: place <row> <col>");
                        continue;
                    }
                };

                match game.place_human(at) {
                    Ok(()) => {
                        println!("Queen placed at position {}.", at);
                        print!("{}", game.board);
                        if game.outcome != GameOutcome::InProgress {
                            announce(game.outcome);
                            continue;
                        }

                        let reply = game.engine_move();
                        if let Some(mv) = reply.best_move {
                            println!("AI placed a queen at position {}.", mv);
                            print!("{}", game.board);
                            print_stats(&reply);
                        }
                        announce(game.outcome);
                    }
                    Err(e) => println!("Invalid move! {}.", e),
                }
            }
            "hint" => {
                if game.outcome != GameOutcome::InProgress {
                    println!("Game is already finished!");
                    continue;
                }
                let result = game.hint();
                match result.best_move {
                    Some(mv) => {
                        println!("Hint: Try placing a queen at position {}.", mv)
                    }
                    None => println!("No safe moves available!"),
                }
                print_stats(&result);
            }
            "show" => {
                print!("{}", game.board);
                println!(
                    "Queens left: {} ({} placed)",
                    game.board.queens_remaining(),
                    game.board.queens_placed()
                );
            }
            "eval" => println!("Evaluation: {}", game.evaluation()),
            "depth" => match parts.get(1).and_then(|s| s.parse::<u8>().ok()) {
                Some(d) => {
                    game.depth = d.clamp(1, 8);
                    settings.depth = game.depth;
                    println!("AI search depth set to {}.", game.depth);
                }
                None => println!("Usage: depth <d>"),
            },
            "engine" => {
                let spec = parts.get(1).copied().unwrap_or("");
                match create_engine(spec, game.heuristic) {
                    Some(engine) => {
                        game.set_engine(engine);
                        settings.engine = spec.to_lowercase();
                        println!("Engine set to {}.", game.engine_name());
                    }
                    None => println!("Unknown engine: {spec} (alphabeta | minimax | random)"),
                }
            }
            "heuristic" => {
                let spec = parts.get(1).copied().unwrap_or("");
                match parse_heuristic(spec) {
                    Some(h) => {
                        game.heuristic = h;
                        // Engines carry the heuristic themselves; rebuild the
                        // current one with the new policy.
                        if let Some(engine) = create_engine(&settings.engine, h) {
                            game.set_engine(engine);
                        }
                        settings.heuristic = spec.to_lowercase();
                        println!("Heuristic set to {spec}.");
                    }
                    None => println!("Unknown heuristic: {spec} (constructive | conflicts)"),
                }
            }
            "save" => match settings.save(SETTINGS_PATH) {
                Ok(()) => println!("Settings saved to {SETTINGS_PATH}."),
                Err(e) => println!("{e}"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command: {other} (type 'help')"),
        }

        stdout.flush().ok();
    }
}
