//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! This benchmark focuses specifically on move generation performance,
//! running many iterations of legal_moves_into on various positions.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p xiangqi_core

use std::time::Instant;
use xiangqi_core::{board::Board, movegen::legal_moves_into};

/// Positions covering different game phases and complexity levels
const TEST_POSITIONS: &[(&str, &str)] = &[
    // Opening positions
    (
        "Start",
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w",
    ),
    (
        "Central cannon",
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/4C2C1/9/RNBAKABNR b",
    ),
    (
        "Screen horse reply",
        "rnbakab1r/9/1c4nc1/p1p1p1p1p/9/9/P1P1P1P1P/4C2C1/9/RNBAKABNR w",
    ),
    // Developed middlegame
    (
        "Developed",
        "r1bakabr1/9/1cn3nc1/p1p1p1p1p/9/2P6/P3P1P1P/1CN3NC1/9/R1BAKABR1 w",
    ),
    // Sparse endgame
    (
        "Endgame",
        "2bak4/9/4b4/4p4/9/9/4P4/4B4/4A4/2B1KA3 w",
    ),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(128);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let mut board = Board::from_fen(fen);

        print!("{name:.<24}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            legal_moves_into(&mut board, &mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let mps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {mps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_mps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_mps:.0} positions/sec)");
}
