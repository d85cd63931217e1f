#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Soldier,
    Cannon,
    Chariot,
    Horse,
    Elephant,
    Advisor,
    General,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    pub id: u8, // per-side slot 0..15, distinguishes same-kind pieces
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..89
    pub to: u8,   // 0..89
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: u8, to: u8, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
        }
    }
}

// Helpers. Row 0 is Black's back rank at the top, row 9 is Red's.
pub fn col_of(sq: u8) -> i8 {
    (sq % 9) as i8
}
pub fn row_of(sq: u8) -> i8 {
    (sq / 9) as i8
}
pub fn sq(col: i8, row: i8) -> Option<u8> {
    if (0..9).contains(&col) && (0..10).contains(&row) {
        Some((row as u8) * 9 + (col as u8))
    } else {
        None
    }
}

pub fn in_palace(side: Side, col: i8, row: i8) -> bool {
    if !(3..=5).contains(&col) {
        return false;
    }
    match side {
        Side::Red => (7..=9).contains(&row),
        Side::Black => (0..=2).contains(&row),
    }
}

pub fn crossed_river(side: Side, row: i8) -> bool {
    match side {
        Side::Red => row <= 4,
        Side::Black => row >= 5,
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 9)) as char;
    let r = (b'0' + (9 - sq / 9)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'i').contains(&f) || !(b'0'..=b'9').contains(&r) {
        return None;
    }
    let col = f - b'a';
    let row = 9 - (r - b'0');
    Some(row * 9 + col)
}
