//! End-to-end game scenarios exercising the board and move generation
//! together through the committed-move interface.

use xiangqi_core::{
    Board, Move, PieceKind, Side, has_no_legal_moves, legal_moves, material, sq,
};

fn find_move(board: &Board, from: (i8, i8), to: (i8, i8)) -> Move {
    let from = sq(from.0, from.1).unwrap();
    let to = sq(to.0, to.1).unwrap();
    legal_moves(board)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
        .unwrap_or_else(|| panic!("move {from}->{to} is not legal here"))
}

#[test]
fn opening_soldier_trade_and_takeback() {
    let mut board = Board::startpos();

    // red pushes the a-file soldier, black answers in kind
    let push = find_move(&board, (0, 6), (0, 5));
    assert_eq!(board.apply(push), None);
    assert_eq!(board.moves_played, 1);
    assert_eq!(board.side_to_move, Side::Black);

    let reply = find_move(&board, (0, 3), (0, 4));
    assert_eq!(board.apply(reply), None);

    // the advanced soldiers now stare at each other; red takes
    let capture = find_move(&board, (0, 5), (0, 4));
    let taken = board.apply(capture).expect("capture expected");
    assert_eq!(taken.kind, PieceKind::Soldier);
    assert_eq!(taken.side, Side::Black);
    assert_eq!(board.captured_pieces(Side::Black), vec![taken]);
    assert_eq!(board.moves_played, 3);

    // take everything back in order
    assert!(board.undo(capture));
    assert!(!board.undo(reply));
    assert!(!board.undo(push));

    let start = Board::startpos();
    assert_eq!(board.grid, start.grid);
    assert_eq!(board.side_to_move, Side::Red);
    assert_eq!(board.moves_played, 0);
    assert!(board.captured.is_empty());
}

#[test]
fn committed_moves_drive_material_drift() {
    let mut board = Board::startpos();
    assert_eq!(material(PieceKind::Horse, board.moves_played), 280);
    assert_eq!(material(PieceKind::Cannon, board.moves_played), 290);

    let script = [((0, 6), (0, 5)), ((0, 3), (0, 4)), ((2, 6), (2, 5))];
    for (from, to) in script {
        let mv = find_move(&board, from, to);
        board.apply(mv);
    }

    assert_eq!(board.moves_played, 3);
    assert_eq!(material(PieceKind::Horse, board.moves_played), 281);
    assert_eq!(material(PieceKind::Cannon, board.moves_played), 289);

    // speculative make/unmake never move the counter
    let mv = find_move(&board, (8, 3), (8, 4));
    board.make_move(mv);
    assert_eq!(board.moves_played, 3);
    board.unmake_move(mv);
    assert_eq!(board.moves_played, 3);
}

#[test]
fn back_rank_mate_ends_the_game() {
    // two red chariots ladder the black General: moving the lower chariot
    // to the back rank leaves Black without a single legal reply
    let mut board = Board::from_fen("3k5/8R/9/9/9/R8/9/9/9/4K4 w");
    let mate = find_move(&board, (0, 5), (0, 0));
    board.apply(mate);

    assert!(board.in_check(Side::Black));
    assert!(has_no_legal_moves(&board, Side::Black));
    assert!(!has_no_legal_moves(&board, Side::Red));
}

#[test]
fn reset_after_a_game_gives_a_fresh_board() {
    let mut board = Board::startpos();
    for (from, to) in [((0, 6), (0, 5)), ((0, 3), (0, 4)), ((0, 5), (0, 4))] {
        let mv = find_move(&board, from, to);
        board.apply(mv);
    }
    assert!(!board.captured.is_empty());

    board.reset_side(Side::Red);
    board.reset_side(Side::Black);

    let start = Board::startpos();
    assert_eq!(board.grid, start.grid);
    assert!(board.captured.is_empty());
}
