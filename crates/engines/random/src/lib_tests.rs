use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&board, limits);

    assert!(result.best_move.is_some());

    let mut board_copy = board.clone();
    let mut legal_moves = Vec::new();
    legal_moves_into(&mut board_copy, &mut legal_moves);
    assert!(legal_moves.contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let board = Board::from_fen("4k3R/8R/9/9/9/9/9/9/9/3K5 b");
    let limits = SearchLimits::depth(1);

    let result = engine.search(&board, limits);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_trapped_general() {
    // Not in check, but every move walks into a soldier: still a loss,
    // so the engine has nothing to play.
    let mut engine = RandomEngine::new();
    let board = Board::from_fen("4k4/3P1P3/9/9/9/9/9/9/9/3K5 b");
    let limits = SearchLimits::depth(1);

    let result = engine.search(&board, limits);

    assert!(result.best_move.is_none());
}
