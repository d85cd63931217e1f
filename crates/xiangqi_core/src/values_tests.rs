use super::*;
use crate::types::sq;

#[test]
fn test_static_material_values() {
    for m in [0, 7, 100] {
        assert_eq!(material(PieceKind::Soldier, m), 60);
        assert_eq!(material(PieceKind::Advisor, m), 120);
        assert_eq!(material(PieceKind::Elephant, m), 130);
        assert_eq!(material(PieceKind::Chariot, m), 600);
        assert_eq!(material(PieceKind::General, m), 6000);
    }
}

#[test]
fn test_horse_gains_and_cannon_fades() {
    assert_eq!(material(PieceKind::Horse, 0), 280);
    assert_eq!(material(PieceKind::Cannon, 0), 290);
    // one point per three committed plies, integer division
    assert_eq!(material(PieceKind::Horse, 2), 280);
    assert_eq!(material(PieceKind::Horse, 3), 281);
    assert_eq!(material(PieceKind::Cannon, 3), 289);
    assert_eq!(material(PieceKind::Horse, 30), 290);
    assert_eq!(material(PieceKind::Cannon, 30), 280);
    // the pair's combined value never drifts
    for m in [0, 1, 14, 60] {
        assert_eq!(
            material(PieceKind::Horse, m) + material(PieceKind::Cannon, m),
            570
        );
    }
}

#[test]
fn test_max_moves_per_kind() {
    assert_eq!(max_moves(PieceKind::Soldier), 3);
    assert_eq!(max_moves(PieceKind::Horse), 8);
    assert_eq!(max_moves(PieceKind::Chariot), 17);
    assert_eq!(max_moves(PieceKind::Cannon), 17);
    assert_eq!(max_moves(PieceKind::Elephant), 4);
    assert_eq!(max_moves(PieceKind::Advisor), 4);
    assert_eq!(max_moves(PieceKind::General), 4);
}

#[test]
fn test_positional_mirroring() {
    // Black's value at (row, col) equals Red's at (9 - row, col)
    let kinds = [
        PieceKind::Soldier,
        PieceKind::Cannon,
        PieceKind::Chariot,
        PieceKind::Horse,
        PieceKind::Elephant,
        PieceKind::Advisor,
        PieceKind::General,
    ];
    for kind in kinds {
        for row in 0..10 {
            for col in 0..9 {
                let here = sq(col, row).unwrap();
                let mirror = sq(col, 9 - row).unwrap();
                assert_eq!(
                    positional(kind, Side::Black, here),
                    positional(kind, Side::Red, mirror),
                    "{kind:?} at row {row} col {col}"
                );
            }
        }
    }
}

#[test]
fn test_soldier_table_spot_values() {
    // start cell, first push, and the deep table rows
    assert_eq!(positional(PieceKind::Soldier, Side::Red, sq(0, 6).unwrap()), 0);
    assert_eq!(positional(PieceKind::Soldier, Side::Red, sq(0, 5).unwrap()), 2);
    assert_eq!(
        positional(PieceKind::Soldier, Side::Red, sq(4, 4).unwrap()),
        20
    );
    assert_eq!(
        positional(PieceKind::Soldier, Side::Red, sq(4, 1).unwrap()),
        120
    );
    // Black mirror of the same cells
    assert_eq!(
        positional(PieceKind::Soldier, Side::Black, sq(0, 3).unwrap()),
        0
    );
    assert_eq!(
        positional(PieceKind::Soldier, Side::Black, sq(0, 4).unwrap()),
        2
    );
    assert_eq!(
        positional(PieceKind::Soldier, Side::Black, sq(4, 8).unwrap()),
        120
    );
}

#[test]
fn test_general_prefers_home_cell() {
    let home = sq(4, 9).unwrap();
    let advanced = sq(4, 8).unwrap();
    assert_eq!(positional(PieceKind::General, Side::Red, home), 2);
    assert_eq!(positional(PieceKind::General, Side::Red, advanced), -2);
}
