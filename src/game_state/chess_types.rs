//! Primitive board vocabulary shared by every subsystem.
//!
//! Squares are stored as zero-based file plus one-based rank so they print the
//! way players read them. Cursor coordinates are a display encoding of a
//! square and convert through exactly one mapping (`BoardCoords`).

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;

/// Piece color. Each side is bound to one color for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding the king and rooks in the opening layout.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is stored separately on the piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A board square: `file` is `0..=7` for `a..=h`, `rank` is `1..=8`.
///
/// Fields are crate-private, so a `Square` from outside the crate always
/// comes through a validating constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub(crate) file: i8,
    pub(crate) rank: i8,
}

impl Square {
    /// Build a square from zero-based file and one-based rank.
    pub fn new(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        let square = Square { file, rank };
        if square.is_on_board() {
            Ok(square)
        } else {
            Err(ChessErrors::InvalidFileOrRank(file, rank))
        }
    }

    /// Build a square from a file letter (`'a'..='h'`) and rank (`1..=8`).
    pub fn from_file_rank(file: char, rank: i8) -> Result<Self, ChessErrors> {
        if !('a'..='h').contains(&file) {
            return Err(ChessErrors::InvalidAlgebraicChar(file));
        }
        Square::new((file as u8 - b'a') as i8, rank)
    }

    /// Zero-based file, `0` for `a`.
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file <= 7 && self.rank >= 1 && self.rank <= 8
    }

    /// Shift by a file/rank delta; `None` once the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let shifted = Square {
            file: self.file.checked_add(d_file)?,
            rank: self.rank.checked_add(d_rank)?,
        };
        shifted.is_on_board().then_some(shifted)
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessErrors::InvalidAlgebraicString(s.to_string()));
        };
        let rank = rank
            .to_digit(10)
            .ok_or(ChessErrors::InvalidAlgebraicChar(rank))?;
        Square::from_file_rank(file.to_ascii_lowercase(), rank as i8)
    }
}

/// Display-space cursor position. `x` runs left to right over files and `y`
/// runs top to bottom from rank 8, for every renderer perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardCoords {
    pub(crate) x: u8,
    pub(crate) y: u8,
}

impl BoardCoords {
    pub fn new(x: u8, y: u8) -> Result<Self, ChessErrors> {
        if x > 7 || y > 7 {
            return Err(ChessErrors::InvalidCoords(x, y));
        }
        Ok(BoardCoords { x, y })
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// `file = 'a' + x`, `rank = 8 - y`.
    #[inline]
    pub fn to_square(self) -> Square {
        Square {
            file: self.x.min(7) as i8,
            rank: 8 - self.y.min(7) as i8,
        }
    }

    #[inline]
    pub fn from_square(square: Square) -> Self {
        BoardCoords {
            x: square.file.clamp(0, 7) as u8,
            y: (8 - square.rank.clamp(1, 8)) as u8,
        }
    }
}

/// One of the two players. The binding to a color never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Side::Left => Color::White,
            Side::Right => Color::Black,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    #[inline]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Side::Left,
            Color::Black => Side::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "white" | "w" | "p1" => Ok(Side::Left),
            "right" | "black" | "b" | "p2" => Ok(Side::Right),
            _ => Err(ChessErrors::UnrecognizedSide(s.to_string())),
        }
    }
}
