//! Fixed-depth alpha-beta search with move ordering and best/second-best
//! tracking at the root.

use rand::{thread_rng, Rng};
use xiangqi_core::{legal_moves, legal_moves_into, order_moves, Board, Move, Side};

use crate::eval::evaluate;

/// Result from pick_best_move.
pub struct SearchOutcome {
    /// Best move found with its score (None when no legal moves exist)
    pub best_move: Option<(Move, i32)>,
}

/// Searches the board and returns the chosen move with its score.
///
/// # Arguments
/// * `board` - The position to search; its side to move is the searching side
/// * `depth` - Search depth in plies, clamped to at least 1
/// * `randomize` - Play the second-best root move with probability 1/depth
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// The chosen move and its score, or None when the side to move has no
/// legal moves and has therefore lost.
pub fn pick_best_move(
    board: &Board,
    depth: u8,
    randomize: bool,
    nodes: &mut u64,
) -> SearchOutcome {
    let depth = depth.max(1);
    let mut tmp = board.clone();
    let ai = tmp.side_to_move;

    let mut moves = legal_moves(&tmp);
    if moves.len() < 2 {
        // a forced move is not worth searching; its score is informational
        return SearchOutcome {
            best_move: moves.first().map(|&mv| (mv, 0)),
        };
    }
    order_moves(&tmp, &mut moves);

    let mut best = (moves[0], i32::MIN);
    let mut second = (moves[0], i32::MIN);

    for (index, &mv) in moves.iter().enumerate() {
        tmp.make_move(mv);
        *nodes += 1;
        let value = alpha_beta_min(&mut tmp, best.1, i32::MAX, depth - 1, ai, nodes);
        tmp.unmake_move(mv);

        if index == 0 {
            best = (mv, value);
        } else if index == 1 {
            if value > best.1 {
                second = best;
                best = (mv, value);
            } else {
                second = (mv, value);
            }
        } else if value > best.1 {
            // a displaced best move does not fall back to second place
            best = (mv, value);
        } else if value > second.1 {
            second = (mv, value);
        }
    }

    let chosen = if randomize && thread_rng().gen_range(0..depth) == 0 {
        second
    } else {
        best
    };

    SearchOutcome {
        best_move: Some(chosen),
    }
}

/// Maximizing half of fail-hard alpha-beta: the side to move here is `ai`.
/// A position with no legal moves is a loss for `ai`, scored -9001.
fn alpha_beta_max(
    board: &mut Board,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    ai: Side,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board, ai);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);
    if moves.is_empty() {
        return -9001;
    }
    order_moves(board, &mut moves);

    for mv in moves {
        board.make_move(mv);
        *nodes += 1;
        let value = alpha_beta_min(board, alpha, beta, depth - 1, ai, nodes);
        board.unmake_move(mv);

        if value >= beta {
            return beta;
        }
        if value > alpha {
            alpha = value;
        }
    }
    alpha
}

/// Minimizing half: the side to move here is `ai`'s opponent. A position
/// with no legal moves is the opponent's loss, scored 9001 for `ai`.
fn alpha_beta_min(
    board: &mut Board,
    alpha: i32,
    mut beta: i32,
    depth: u8,
    ai: Side,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board, ai);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);
    if moves.is_empty() {
        return 9001;
    }
    order_moves(board, &mut moves);

    for mv in moves {
        board.make_move(mv);
        *nodes += 1;
        let value = alpha_beta_max(board, alpha, beta, depth - 1, ai, nodes);
        board.unmake_move(mv);

        if value <= alpha {
            return alpha;
        }
        if value < beta {
            beta = value;
        }
    }
    beta
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
