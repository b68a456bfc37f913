//! Legal destination generation.
//!
//! Pure functions over the current occupancy. Cooldowns are not consulted
//! here: a piece on cooldown still has legal moves, it just cannot take them
//! until the cooldown expires (see `match_state::action_resolver`).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::{Piece, PieceId};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// All squares `piece` may move to on `board`, sorted and without
/// duplicates. A captured piece has none.
pub fn legal_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    if !piece.alive {
        return out;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board, &mut out),
        PieceKind::Knight => knight_moves(piece, board, &mut out),
        PieceKind::Bishop => bishop_moves(piece, board, &mut out),
        PieceKind::Rook => rook_moves(piece, board, &mut out),
        PieceKind::Queen => queen_moves(piece, board, &mut out),
        PieceKind::King => king_moves(piece, board, &mut out),
    }

    out.sort_unstable();
    out.dedup();
    out
}

/// Legal destinations of the piece with id `id`; empty for unknown ids.
pub fn legal_moves_for(id: PieceId, board: &Board) -> Vec<Square> {
    board
        .get(id)
        .map(|piece| legal_moves(piece, board))
        .unwrap_or_default()
}

#[inline]
pub fn move_is_legal(piece: &Piece, target: Square, board: &Board) -> bool {
    legal_moves(piece, board).contains(&target)
}
