//! Board model: the list of pieces and lookups over it.
//!
//! The board owns every piece of the match, alive or captured. Lookups that
//! answer "what stands here" only ever see living pieces, so rules and
//! resolver code never have to filter captured pieces themselves.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::piece::{Piece, PieceId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard 32-piece opening layout.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.place(
                    *kind,
                    color,
                    Square {
                        file: file as i8,
                        rank: color.home_rank(),
                    },
                );
            }
            for file in 0..8 {
                board.place(
                    PieceKind::Pawn,
                    color,
                    Square {
                        file,
                        rank: color.pawn_start_rank(),
                    },
                );
            }
        }
        board
    }

    /// Add a piece without rule checking. Any living piece already on the
    /// square is captured so the one-piece-per-square invariant holds.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        if let Some(existing) = self.piece_id_at(square) {
            self.pieces[existing.0].alive = false;
        }
        self.pieces.push(Piece::new(kind, color, square));
        PieceId(self.pieces.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.0)
    }

    /// Living piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece_id_at(square).map(|id| &self.pieces[id.0])
    }

    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|p| p.alive && p.square == square)
            .map(PieceId)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Every piece including captured ones, with ids. Renderers use this to
    /// fade captured pieces.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i), p))
    }

    pub fn iter_living(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.iter().filter(|(_, p)| p.alive)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Result of the match after a move, or `None` while it goes on.
    ///
    /// The match is decided once exactly one color still has a king. If the
    /// move that was just applied took the last king on the board, it is
    /// decided with no winner. A board that never had kings keeps playing.
    pub fn match_result(&self, king_just_captured: bool) -> Option<Option<Color>> {
        let white = self.living_kings(Color::White) > 0;
        let black = self.living_kings(Color::Black) > 0;
        match (white, black) {
            (true, false) => Some(Some(Color::White)),
            (false, true) => Some(Some(Color::Black)),
            (false, false) if king_just_captured => Some(None),
            _ => None,
        }
    }

    /// Number of living kings of `color`.
    pub fn living_kings(&self, color: Color) -> usize {
        self.iter_living()
            .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .count()
    }
}
