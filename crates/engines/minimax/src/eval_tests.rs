use super::*;
use xiangqi_core::sq;

fn board(fen: &str) -> Board {
    Board::from_fen(fen)
}

#[test]
fn test_startpos_is_balanced() {
    let mut b = Board::startpos();
    assert_eq!(evaluate(&mut b, Side::Red), 0);
    assert_eq!(evaluate(&mut b, Side::Black), 0);
}

#[test]
fn test_perspectives_are_exact_negations() {
    let fens = [
        "3k5/9/9/9/p8/R8/9/9/9/4K4 w",
        "r1bakabr1/9/1cn3nc1/p1p1p1p1p/9/2P6/P3P1P1P/1CN3NC1/9/R1BAKABR1 w",
        "2bak4/9/4b4/4p4/9/9/4P4/4B4/4A4/2B1KA3 w",
    ];
    for fen in fens {
        let mut b = board(fen);
        let red = evaluate(&mut b, Side::Red);
        let black = evaluate(&mut b, Side::Black);
        assert_eq!(red, -black, "asymmetric eval for {fen}");
    }
}

#[test]
fn test_soldier_push_shifts_eval_by_table_delta() {
    let mut b = Board::startpos();
    let before = evaluate(&mut b, Side::Red);

    let mv = xiangqi_core::legal_moves(&b)
        .into_iter()
        .find(|m| m.from == sq(0, 6).unwrap() && m.to == sq(0, 5).unwrap())
        .unwrap();
    b.apply(mv);

    // The edge soldier steps from a 0-valued cell onto a 2-valued one and
    // nothing else on the board changes value.
    assert_eq!(evaluate(&mut b, Side::Red), before + 2);
    assert_eq!(evaluate(&mut b, Side::Black), -(before + 2));
}

#[test]
fn test_mobility_zero_below_full_move_count() {
    let mut b = Board::startpos();
    // Start chariot: two quiet moves out of a maximum of 17.
    assert_eq!(mobility(&mut b, sq(0, 9).unwrap()), 0);
    // Start cannon: twelve out of 17.
    assert_eq!(mobility(&mut b, sq(1, 7).unwrap()), 0);
    // Start horse: two out of eight.
    assert_eq!(mobility(&mut b, sq(1, 9).unwrap()), 0);
}

#[test]
fn test_mobility_at_full_move_count() {
    // Lone chariot in the open reaches all 17 targets.
    let mut b = board("5k3/9/9/9/9/3R5/9/9/9/4K4 w");
    assert_eq!(mobility(&mut b, sq(3, 5).unwrap()), 600 / 4);

    // Lone cannon slides to all 17 empty cells; with no screens it has no
    // captures, which still counts as full mobility.
    let mut b = board("5k3/9/9/9/9/3C5/9/9/9/4K4 w");
    assert_eq!(mobility(&mut b, sq(3, 5).unwrap()), 290 / 4);

    // Horse with all eight jumps clear.
    let mut b = board("4k4/9/9/4p4/2N6/9/9/9/9/4K4 w");
    assert_eq!(mobility(&mut b, sq(2, 4).unwrap()), 280 / 4);
}

#[test]
fn test_mobility_ignores_other_kinds() {
    let mut b = Board::startpos();
    assert_eq!(mobility(&mut b, sq(4, 9).unwrap()), 0); // General
    assert_eq!(mobility(&mut b, sq(0, 6).unwrap()), 0); // Soldier
    assert_eq!(mobility(&mut b, sq(2, 9).unwrap()), 0); // Elephant
    assert_eq!(mobility(&mut b, sq(4, 4).unwrap()), 0); // empty cell
}

#[test]
fn test_capture_swings_the_eval() {
    let mut b = board("3k5/9/9/9/p8/R8/9/9/9/4K4 w");
    let before_red = evaluate(&mut b, Side::Red);
    let before_black = evaluate(&mut b, Side::Black);

    let mv = xiangqi_core::legal_moves(&b)
        .into_iter()
        .find(|m| m.captured.is_some())
        .unwrap();
    b.apply(mv);

    assert!(evaluate(&mut b, Side::Red) > before_red);
    assert!(evaluate(&mut b, Side::Black) < before_black);
}

#[test]
fn test_evaluate_leaves_the_board_unchanged() {
    let mut b = Board::startpos();
    let snapshot = b.clone();

    evaluate(&mut b, Side::Red);
    evaluate(&mut b, Side::Black);

    for s in 0..90u8 {
        assert_eq!(b.piece_at(s), snapshot.piece_at(s), "square {s} changed");
    }
    assert_eq!(b.side_to_move, snapshot.side_to_move);
    assert_eq!(b.generals, snapshot.generals);
    assert_eq!(b.captured.len(), snapshot.captured.len());
    assert_eq!(b.moves_played, snapshot.moves_played);
}
