use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Union of rook and bishop rays from the queen's square.
#[inline]
pub fn queen_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    rook_moves(piece, board, out);
    bishop_moves(piece, board, out);
}
