use crate::{board::Board, types::*, values};

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector. Internally delegates to `legal_moves_into`, cloning the
/// board only once.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    out.clear();
    raw_moves_side(board, out);

    let mover = board.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable board.
    out.retain(|&mv| {
        board.make_move(mv);
        let illegal = board.in_check(mover);
        board.unmake_move(mv);
        !illegal
    });
}

/// Legal moves of the piece standing on `from` (empty cell: empty list).
/// Works for either side regardless of whose turn it is.
pub fn legal_moves_from(board: &Board, from: u8) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(17);
    legal_moves_from_into(&mut tmp, from, &mut out);
    out
}

/// Buffer-reusing form of `legal_moves_from`.
pub fn legal_moves_from_into(board: &mut Board, from: u8, out: &mut Vec<Move>) {
    out.clear();
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    raw_moves_into(board, from, out);
    out.retain(|&mv| {
        board.make_move(mv);
        let illegal = board.in_check(pc.side);
        board.unmake_move(mv);
        !illegal
    });
}

/// True when `side` has no legal move at all. That side has lost: there is
/// no stalemate, a trapped General loses even when not in check.
pub fn has_no_legal_moves(board: &Board, side: Side) -> bool {
    let mut tmp = board.clone();
    tmp.side_to_move = side;
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out.is_empty()
}

/// Whether any piece of `by` attacks `target`, by raw-move scan. Raw moves
/// only, never the legality filter: check testing must not recurse into it.
pub fn attacked(board: &Board, target: u8, by: Side) -> bool {
    let mut buf = Vec::with_capacity(17);
    for s in 0..90u8 {
        let pc = match board.piece_at(s) {
            Some(p) => p,
            None => continue,
        };
        if pc.side != by {
            continue;
        }
        // Elephants and Advisors never leave their own half/palace, so they
        // can never give check; skipping them keeps the scan cheap.
        if matches!(pc.kind, PieceKind::Elephant | PieceKind::Advisor) {
            continue;
        }
        buf.clear();
        gen_piece(board, s, pc, &mut buf);
        if buf.iter().any(|mv| mv.to == target) {
            return true;
        }
    }
    false
}

/// Raw (pseudo-legal) moves of the piece on `from`, before the self-check
/// filter. Returns a fresh vector; empty cell yields an empty list.
pub fn raw_moves(board: &Board, from: u8) -> Vec<Move> {
    let mut out = Vec::with_capacity(17);
    raw_moves_into(board, from, &mut out);
    out
}

/// Appends the raw moves of the piece on `from`, if any, to the buffer.
pub fn raw_moves_into(board: &Board, from: u8, out: &mut Vec<Move>) {
    if let Some(pc) = board.piece_at(from) {
        gen_piece(board, from, pc, out);
    }
}

fn raw_moves_side(board: &Board, out: &mut Vec<Move>) {
    for s in 0..90u8 {
        let pc = match board.piece_at(s) {
            Some(p) => p,
            None => continue,
        };
        if pc.side != board.side_to_move {
            continue;
        }
        gen_piece(board, s, pc, out);
    }
}

fn gen_piece(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Soldier => gen_soldier(board, from, pc, out),
        PieceKind::Cannon => gen_cannon(board, from, pc, out),
        PieceKind::Chariot => gen_chariot(board, from, pc, out),
        PieceKind::Horse => gen_horse(board, from, pc, out),
        PieceKind::Elephant => gen_elephant(board, from, pc, out),
        PieceKind::Advisor => gen_advisor(board, from, pc, out),
        PieceKind::General => gen_general(board, from, pc, out),
    }
}

fn gen_soldier(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c = col_of(from);
    let r = row_of(from);

    let dir: i8 = match pc.side {
        Side::Red => -1,
        Side::Black => 1,
    };

    // forward 1, never backward
    if let Some(to) = sq(c, r + dir) {
        match board.piece_at(to) {
            None => out.push(Move::new(from, to, pc, None)),
            Some(tpc) if tpc.side != pc.side => out.push(Move::new(from, to, pc, Some(tpc))),
            _ => {}
        }
    }

    // sideways once across the river
    if crossed_river(pc.side, r) {
        for dc in [-1, 1] {
            if let Some(to) = sq(c + dc, r) {
                match board.piece_at(to) {
                    None => out.push(Move::new(from, to, pc, None)),
                    Some(tpc) if tpc.side != pc.side => {
                        out.push(Move::new(from, to, pc, Some(tpc)))
                    }
                    _ => {}
                }
            }
        }
    }
}

fn gen_advisor(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c0 = col_of(from);
    let r0 = row_of(from);
    let deltas = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
    for (dc, dr) in deltas {
        let (c, r) = (c0 + dc, r0 + dr);
        if !in_palace(pc.side, c, r) {
            continue;
        }
        if let Some(to) = sq(c, r) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(tpc) if tpc.side != pc.side => out.push(Move::new(from, to, pc, Some(tpc))),
                _ => {}
            }
        }
    }
}

fn gen_elephant(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c0 = col_of(from);
    let r0 = row_of(from);
    let jumps = [(2, -2), (2, 2), (-2, 2), (-2, -2)];
    let eyes = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
    for (&(dc, dr), &(ec, er)) in jumps.iter().zip(eyes.iter()) {
        let (c, r) = (c0 + dc, r0 + dr);
        // may not cross the river
        if crossed_river(pc.side, r) {
            continue;
        }
        let to = match sq(c, r) {
            Some(s) => s,
            None => continue,
        };
        // blocked when the eye cell is occupied
        let eye = match sq(c0 + ec, r0 + er) {
            Some(s) => s,
            None => continue,
        };
        if board.piece_at(eye).is_some() {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(Move::new(from, to, pc, None)),
            Some(tpc) if tpc.side != pc.side => out.push(Move::new(from, to, pc, Some(tpc))),
            _ => {}
        }
    }
}

fn gen_horse(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c0 = col_of(from);
    let r0 = row_of(from);
    let jumps = [
        (1, -2),
        (2, -1),
        (2, 1),
        (-1, 2),
        (1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
    ];
    // leg cell of each jump, in the jump's dominant direction
    let legs = [
        (0, -1),
        (1, 0),
        (1, 0),
        (0, 1),
        (0, 1),
        (-1, 0),
        (-1, 0),
        (0, -1),
    ];
    for (&(dc, dr), &(lc, lr)) in jumps.iter().zip(legs.iter()) {
        let to = match sq(c0 + dc, r0 + dr) {
            Some(s) => s,
            None => continue,
        };
        let leg = match sq(c0 + lc, r0 + lr) {
            Some(s) => s,
            None => continue,
        };
        if board.piece_at(leg).is_some() {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(Move::new(from, to, pc, None)),
            Some(tpc) if tpc.side != pc.side => out.push(Move::new(from, to, pc, Some(tpc))),
            _ => {}
        }
    }
}

fn gen_chariot(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c0 = col_of(from);
    let r0 = row_of(from);
    for (dc, dr) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
        let mut c = c0 + dc;
        let mut r = r0 + dr;
        while let Some(to) = sq(c, r) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(tpc) if tpc.side != pc.side => {
                    out.push(Move::new(from, to, pc, Some(tpc)));
                    break;
                }
                _ => break,
            }
            c += dc;
            r += dr;
        }
    }
}

fn gen_cannon(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c0 = col_of(from);
    let r0 = row_of(from);
    for (dc, dr) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
        let mut c = c0 + dc;
        let mut r = r0 + dr;
        // quiet slides up to the screen
        while let Some(to) = sq(c, r) {
            if board.piece_at(to).is_some() {
                break;
            }
            out.push(Move::new(from, to, pc, None));
            c += dc;
            r += dr;
        }
        // a capture jumps exactly one screen and takes the first piece
        // beyond it; without a screen a cannon can never capture
        if sq(c, r).is_none() {
            continue;
        }
        c += dc;
        r += dr;
        while let Some(to) = sq(c, r) {
            match board.piece_at(to) {
                None => {
                    c += dc;
                    r += dr;
                }
                Some(tpc) => {
                    if tpc.side != pc.side {
                        out.push(Move::new(from, to, pc, Some(tpc)));
                    }
                    break;
                }
            }
        }
    }
}

fn gen_general(board: &Board, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c0 = col_of(from);
    let r0 = row_of(from);
    for (dc, dr) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
        let (c, r) = (c0 + dc, r0 + dr);
        if !(3..=5).contains(&c) {
            continue;
        }
        let step = match sq(c, r) {
            Some(s) => s,
            None => continue,
        };
        if let Some(tpc) = board.piece_at(step)
            && tpc.side == pc.side
        {
            continue;
        }
        if in_palace(pc.side, c, r) {
            out.push(Move::new(from, step, pc, board.piece_at(step)));
        }
        if dc == 0 {
            // Flying general: from the step cell, scan over empties along the
            // file; if the first piece reached is the enemy General, its
            // capture is a raw move. Through the legality filter this is the
            // confrontation rule: the Generals may not face on an open file.
            let mut rr = r;
            while let Some(cur) = sq(c0, rr) {
                match board.piece_at(cur) {
                    None => rr += dr,
                    Some(tpc) => {
                        if tpc.kind == PieceKind::General {
                            out.push(Move::new(from, cur, pc, Some(tpc)));
                        }
                        break;
                    }
                }
            }
        }
    }
}

/// Ordering value of a move: the captured piece's material (at the current
/// committed-move count) plus twice the mover's positional delta, read from
/// its side-mirrored table. Both sides use this same derivation.
pub fn move_value(board: &Board, mv: Move) -> i32 {
    let mut value = 0;
    if let Some(captured) = mv.captured {
        value += values::material(captured.kind, board.moves_played);
    }
    let kind = mv.piece.kind;
    let side = mv.piece.side;
    value + 2 * (values::positional(kind, side, mv.to) - values::positional(kind, side, mv.from))
}

/// Sorts moves best-first by `move_value`. Equal values keep no particular
/// order.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_unstable_by_key(|&mv| std::cmp::Reverse(move_value(board, mv)));
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
