//! Piece values: dynamic material, mobility caps, and positional tables.

use crate::types::{PieceKind, Side, col_of, row_of};

/// Material value of a piece kind after `moves_played` committed plies.
///
/// Horses gain and Cannons lose a point for every three plies: horses
/// strengthen as the board opens up while cannons run out of screens.
pub fn material(kind: PieceKind, moves_played: u32) -> i32 {
    match kind {
        PieceKind::Soldier => 60,
        PieceKind::Cannon => 290 - (moves_played / 3) as i32,
        PieceKind::Chariot => 600,
        PieceKind::Horse => 280 + (moves_played / 3) as i32,
        PieceKind::Elephant => 130,
        PieceKind::Advisor => 120,
        PieceKind::General => 6000,
    }
}

/// Most legal moves a piece of this kind can ever have.
pub fn max_moves(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Soldier => 3,
        PieceKind::Cannon => 17,
        PieceKind::Chariot => 17,
        PieceKind::Horse => 8,
        PieceKind::Elephant => 4,
        PieceKind::Advisor => 4,
        PieceKind::General => 4,
    }
}

/// Positional value of `kind` for `side` standing on `sq`.
///
/// Tables are written from Red's orientation (row 9 = Red's back rank);
/// Black reads the row-mirrored entry.
pub fn positional(kind: PieceKind, side: Side, sq: u8) -> i32 {
    let row = match side {
        Side::Red => row_of(sq),
        Side::Black => 9 - row_of(sq),
    };
    table_for(kind)[row as usize][col_of(sq) as usize]
}

fn table_for(kind: PieceKind) -> &'static [[i32; 9]; 10] {
    match kind {
        PieceKind::Soldier => &SOLDIER_TABLE,
        PieceKind::Cannon => &CANNON_TABLE,
        PieceKind::Chariot => &CHARIOT_TABLE,
        PieceKind::Horse => &HORSE_TABLE,
        PieceKind::Elephant => &ELEPHANT_TABLE,
        PieceKind::Advisor => &ADVISOR_TABLE,
        PieceKind::General => &GENERAL_TABLE,
    }
}

const SOLDIER_TABLE: [[i32; 9]; 10] = [
    [0, 3, 6, 9, 12, 9, 6, 3, 0],
    [18, 36, 56, 80, 120, 80, 56, 36, 18],
    [14, 26, 42, 60, 80, 60, 42, 26, 14],
    [10, 20, 30, 34, 40, 34, 30, 20, 10],
    [6, 12, 18, 18, 20, 18, 18, 12, 6],
    [2, 0, 8, 0, 8, 0, 8, 0, 2],
    [0, 0, -2, 0, 4, 0, -2, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
];

const CANNON_TABLE: [[i32; 9]; 10] = [
    [6, 4, 0, -10, -12, -10, 0, 4, 6],
    [2, 2, 0, -4, -14, -4, 0, 2, 2],
    [2, 2, 0, -10, -8, -10, 0, 2, 2],
    [0, 0, -2, 4, 10, 4, -2, 0, 0],
    [0, 0, 0, 2, 8, 2, 0, 0, 0],
    [-2, 0, 4, 2, 6, 2, 4, 0, -2],
    [0, 0, 0, 2, 4, 2, 0, 0, 0],
    [4, 0, 8, 6, 10, 6, 8, 0, 4],
    [0, 2, 4, 6, 6, 6, 4, 2, 0],
    [0, 0, 2, 6, 6, 6, 2, 0, 0],
];

const CHARIOT_TABLE: [[i32; 9]; 10] = [
    [14, 14, 12, 18, 16, 18, 12, 14, 14],
    [16, 20, 18, 24, 26, 24, 18, 20, 16],
    [12, 12, 12, 18, 18, 18, 12, 12, 12],
    [12, 18, 16, 22, 22, 22, 16, 18, 12],
    [12, 14, 12, 18, 18, 18, 12, 14, 12],
    [12, 16, 14, 20, 20, 20, 14, 16, 12],
    [6, 10, 8, 14, 14, 14, 8, 10, 6],
    [4, 8, 6, 14, 12, 14, 6, 8, 4],
    [8, 4, 8, 16, 8, 16, 8, 4, 8],
    [-2, 10, 6, 14, 12, 14, 6, 10, -2],
];

const HORSE_TABLE: [[i32; 9]; 10] = [
    [4, 8, 16, 12, 4, 12, 16, 8, 4],
    [4, 10, 28, 16, 8, 16, 28, 10, 4],
    [12, 14, 16, 20, 18, 20, 16, 14, 12],
    [8, 24, 18, 24, 20, 24, 18, 24, 8],
    [6, 16, 14, 18, 16, 18, 14, 16, 6],
    [4, 12, 16, 14, 12, 14, 16, 12, 4],
    [2, 6, 8, 6, 10, 6, 8, 6, 2],
    [4, 2, 8, 8, 4, 8, 8, 2, 4],
    [0, 2, 4, 4, -2, 4, 4, 2, 0],
    [0, -4, 0, 0, 0, 0, 0, -4, 0],
];

const ELEPHANT_TABLE: [[i32; 9]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, -1, 0, 0, 0, -1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [-2, 0, 0, 0, 3, 0, 0, 0, -2],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0],
];

const ADVISOR_TABLE: [[i32; 9]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, -1, 0, -1, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 1, 0, 0, 0],
];

const GENERAL_TABLE: [[i32; 9]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, -2, -2, -2, 0, 0, 0],
    [0, 0, 0, -2, -2, -2, 0, 0, 0],
    [0, 0, 0, -2, 2, -2, 0, 0, 0],
];

#[cfg(test)]
#[path = "values_tests.rs"]
mod values_tests;
