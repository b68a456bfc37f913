use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::offset_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

#[inline]
pub fn knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    offset_targets(board, piece.square, piece.color, &KNIGHT_OFFSETS, out);
}
