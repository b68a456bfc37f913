//! Gameplay record for a single piece.
//!
//! Presentation state (interpolated position, scale, opacity) lives in
//! `utils::piece_view` keyed by `PieceId` and is never stored here.

use std::time::Duration;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Stable handle to a piece. Pieces are never removed from the board's list,
/// so an id stays valid for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

/// A piece with the state the rules and scheduler need.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Captured pieces stay in the list with `alive == false` so renderers can
    /// fade them out; every logical query skips them.
    pub alive: bool,
    /// Set after the first move. Used for castling eligibility.
    pub moved: bool,
    pub cooldown_remaining: Duration,
    pub premove: Option<Square>,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            alive: true,
            moved: false,
            cooldown_remaining: Duration::ZERO,
            premove: None,
        }
    }

    #[inline]
    pub fn is_on_cooldown(&self) -> bool {
        !self.cooldown_remaining.is_zero()
    }
}
