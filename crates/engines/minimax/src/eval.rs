//! Board evaluation: drifting material, positional tables, mobility and
//! central control.

use xiangqi_core::{
    col_of, legal_moves_from_into, material, max_moves, positional, row_of, Board, Move, PieceKind,
    Side,
};

/// Evaluates the position from the perspective of `ai`.
///
/// Each side scores material, a positional table bonus and a mobility bonus
/// per piece; the enemy's total is subtracted. On top of that, every
/// non-General piece standing in the central zone (rows 2 to 7, columns 2
/// to 6) earns a tenth of its material value for its owner.
///
/// Needs `&mut Board` because the mobility term plays moves out and takes
/// them back; the board is unchanged when this returns.
pub fn evaluate(board: &mut Board, ai: Side) -> i32 {
    let mut value = 0;
    let mut buf: Vec<Move> = Vec::with_capacity(17);

    for side in [ai, ai.other()] {
        let mut side_value = 0;
        for sq in 0..90u8 {
            let piece = match board.piece_at(sq) {
                Some(pc) if pc.side == side => pc,
                _ => continue,
            };
            side_value += material(piece.kind, board.moves_played)
                + positional(piece.kind, piece.side, sq)
                + mobility_with_buf(board, sq, piece.kind, &mut buf);
        }
        if side == ai {
            value += side_value;
        } else {
            value -= side_value;
        }
    }

    for sq in 0..90u8 {
        if !(2..=7).contains(&row_of(sq)) || !(2..=6).contains(&col_of(sq)) {
            continue;
        }
        let piece = match board.piece_at(sq) {
            Some(pc) if pc.kind != PieceKind::General => pc,
            _ => continue,
        };
        let bonus = material(piece.kind, board.moves_played) / 10;
        if piece.side == ai {
            value += bonus;
        } else {
            value -= bonus;
        }
    }

    value
}

/// Mobility bonus of the piece on `sq`.
///
/// Chariots, Cannons and Horses earn up to a quarter of their material
/// value, scaled by legal move count against the kind's maximum in integer
/// steps. Every other kind, and an empty square, scores 0.
pub fn mobility(board: &mut Board, sq: u8) -> i32 {
    let kind = match board.piece_at(sq) {
        Some(pc) => pc.kind,
        None => return 0,
    };
    let mut buf = Vec::with_capacity(17);
    mobility_with_buf(board, sq, kind, &mut buf)
}

fn mobility_with_buf(board: &mut Board, sq: u8, kind: PieceKind, buf: &mut Vec<Move>) -> i32 {
    match kind {
        PieceKind::Chariot | PieceKind::Cannon | PieceKind::Horse => {}
        _ => return 0,
    }
    legal_moves_from_into(board, sq, buf);
    buf.len() as i32 / max_moves(kind) * material(kind, board.moves_played) / 4
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
