use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        trace_ray(board, piece.square, piece.color, d_file, d_rank, out);
    }
}
