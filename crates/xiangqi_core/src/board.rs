use crate::movegen;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Board {
    pub grid: [Option<Piece>; 90],
    pub side_to_move: Side,
    pub generals: [u8; 2], // square of each side's General, indexed by Side::idx()
    pub captured: Vec<Piece>, // capture order, both sides interleaved
    pub moves_played: u32, // committed plies; drives dynamic material values
}

// Start cells per slot, from Red's orientation. Black mirrors the row.
// Slots: 5 Soldiers, 2 Cannons, 2 Chariots, 2 Horses, 2 Elephants,
// 2 Advisors, the General.
const START_KINDS: [PieceKind; 16] = [
    PieceKind::Soldier,
    PieceKind::Soldier,
    PieceKind::Soldier,
    PieceKind::Soldier,
    PieceKind::Soldier,
    PieceKind::Cannon,
    PieceKind::Cannon,
    PieceKind::Chariot,
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::Advisor,
    PieceKind::General,
];
const START_ROWS: [i8; 16] = [6, 6, 6, 6, 6, 7, 7, 9, 9, 9, 9, 9, 9, 9, 9, 9];
const START_COLS: [i8; 16] = [0, 2, 4, 6, 8, 1, 7, 0, 8, 1, 7, 2, 6, 3, 5, 4];

impl Board {
    pub fn startpos() -> Self {
        let mut b = Board {
            grid: [None; 90],
            side_to_move: Side::Red,
            generals: [0; 2],
            captured: Vec::new(),
            moves_played: 0,
        };
        b.reset_side(Side::Red);
        b.reset_side(Side::Black);
        b
    }

    /// Puts `side`'s sixteen pieces back on their start cells and drops that
    /// side's entries from the capture list. The other side is untouched.
    pub fn reset_side(&mut self, side: Side) {
        for cell in self.grid.iter_mut() {
            if let Some(pc) = cell
                && pc.side == side
            {
                *cell = None;
            }
        }
        self.captured.retain(|pc| pc.side != side);

        for (slot, &kind) in START_KINDS.iter().enumerate() {
            let row = match side {
                Side::Red => START_ROWS[slot],
                Side::Black => 9 - START_ROWS[slot],
            };
            let col = START_COLS[slot];
            let s = (row as u8) * 9 + (col as u8);
            self.grid[s as usize] = Some(Piece {
                side,
                kind,
                id: slot as u8,
            });
            if kind == PieceKind::General {
                self.generals[side.idx()] = s;
            }
        }
    }

    pub fn from_fen(fen: &str) -> Self {
        // Xiangqi FEN parser used by tests and benches. Boards built here
        // carry no capture history and a zero committed-move counter.
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 2, "Invalid FEN: expected board and side fields");

        let board_part = parts[0];
        let stm_part = parts[1];

        let mut grid = [None; 90];
        let mut generals = [None; 2];
        let mut next_id = [0u8; 2];
        let ranks: Vec<&str> = board_part.split('/').collect();
        assert!(ranks.len() == 10, "Invalid FEN board section");

        for (row_idx, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            let row = row_idx as i8; // FEN lists Black's back rank (row 0) first
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let side = if ch.is_uppercase() {
                        Side::Red
                    } else {
                        Side::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Soldier,
                        'c' => PieceKind::Cannon,
                        'r' => PieceKind::Chariot,
                        'n' | 'h' => PieceKind::Horse,
                        'b' | 'e' => PieceKind::Elephant,
                        'a' => PieceKind::Advisor,
                        'k' => PieceKind::General,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    let s = sq(col, row).expect("Square out of bounds while parsing FEN");
                    let id = next_id[side.idx()];
                    assert!(id < 16, "Too many pieces for one side in FEN");
                    next_id[side.idx()] += 1;
                    if kind == PieceKind::General {
                        assert!(
                            generals[side.idx()].is_none(),
                            "Duplicate General in FEN"
                        );
                        generals[side.idx()] = Some(s);
                    }
                    grid[s as usize] = Some(Piece { side, kind, id });
                    col += 1;
                }
                assert!(col <= 9, "Too many columns in FEN rank");
            }
            assert!(col == 9, "Not enough columns in FEN rank");
        }

        let side_to_move = match stm_part {
            "w" | "r" => Side::Red,
            "b" => Side::Black,
            _ => panic!("Invalid side to move in FEN: {}", stm_part),
        };

        Board {
            grid,
            side_to_move,
            generals: [
                generals[0].expect("FEN board missing Red's General"),
                generals[1].expect("FEN board missing Black's General"),
            ],
            captured: Vec::new(),
            moves_played: 0,
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.grid[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.grid[sq as usize] = pc;
    }
    pub fn general_sq(&self, side: Side) -> u8 {
        self.generals[side.idx()]
    }

    pub fn in_check(&self, side: Side) -> bool {
        movegen::attacked(self, self.general_sq(side), side.other())
    }

    /// Speculative move used inside search. Pairs with `unmake_move`; the
    /// committed-move counter is untouched so material values stay pinned.
    pub fn make_move(&mut self, mv: Move) {
        self.set_piece(mv.from, None);
        if let Some(captured) = mv.captured {
            self.captured.push(captured);
        }
        self.set_piece(mv.to, Some(mv.piece));
        if mv.piece.kind == PieceKind::General {
            self.generals[mv.piece.side.idx()] = mv.to;
        }
        self.side_to_move = self.side_to_move.other();
    }

    pub fn unmake_move(&mut self, mv: Move) {
        // Restore side first so make/unmake mirror each other exactly
        self.side_to_move = self.side_to_move.other();
        self.set_piece(mv.to, mv.captured);
        if mv.captured.is_some() {
            self.captured.pop();
        }
        self.set_piece(mv.from, Some(mv.piece));
        if mv.piece.kind == PieceKind::General {
            self.generals[mv.piece.side.idx()] = mv.from;
        }
    }

    /// Commits a move to the game and returns the captured piece, if any.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        self.make_move(mv);
        self.moves_played += 1;
        mv.captured
    }

    /// Takes back the most recently applied move; true iff a capture was
    /// restored. Undoing any other move is outside the contract.
    pub fn undo(&mut self, mv: Move) -> bool {
        self.unmake_move(mv);
        self.moves_played -= 1;
        mv.captured.is_some()
    }

    /// `side`'s lost pieces in capture order.
    pub fn captured_pieces(&self, side: Side) -> Vec<Piece> {
        self.captured
            .iter()
            .filter(|pc| pc.side == side)
            .copied()
            .collect()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
