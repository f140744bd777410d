//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p alphabeta_engine -- [depth] [size]
//!
//! Examples:
//!   # Default: depth 4 across the standard board sizes
//!   cargo flamegraph --example search_bench -p alphabeta_engine
//!
//!   # Custom depth
//!   cargo flamegraph --example search_bench -p alphabeta_engine -- 5
//!
//!   # Custom depth and a single board size
//!   cargo flamegraph --example search_bench -p alphabeta_engine -- 4 10

use std::env;
use std::time::Instant;

use alphabeta_engine::pick_best_move;
use queens_core::{Board, Heuristic};

/// Standard board sizes for comprehensive profiling
const TEST_SIZES: &[usize] = &[6, 8, 10];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    // If a size is provided, use single-board mode
    if let Some(size) = args.get(2).and_then(|s| s.parse().ok()) {
        run_single_size(size, depth);
    } else {
        run_all_sizes(depth);
    }
}

/// Plays a whole game against itself, timing every search call.
fn run_single_size(size: usize, depth: u8) {
    let mut board = Board::new(size);

    println!("Board: {size}x{size}");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let start = Instant::now();

    loop {
        let mut nodes = 0u64;
        match pick_best_move(&mut board, depth, Heuristic::Constructive, &mut nodes) {
            Some((mv, score)) => {
                total_nodes += nodes;
                println!("{mv} score {score:>5} ({nodes} nodes)");
                board
                    .place_queen(mv)
                    .expect("search proposed an unsafe cell");
            }
            None => break,
        }
    }

    let elapsed = start.elapsed();
    let nps = if elapsed.as_secs_f64() > 0.0 {
        total_nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!();
    println!("Placed: {}/{}", board.queens_placed(), size);
    println!("Nodes: {total_nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_sizes(depth: u8) {
    println!("=== Search Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for &size in TEST_SIZES {
        let mut board = Board::new(size);
        let mut nodes = 0u64;

        print!("{size:>2}x{size:<2} opening move ........");

        let start = Instant::now();
        let picked = pick_best_move(&mut board, depth, Heuristic::Constructive, &mut nodes);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        let mv = picked.map(|(mv, _)| mv.to_string()).unwrap_or_default();
        println!(" {mv:>8} {nodes:>10} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
