use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        trace_ray(board, piece.square, piece.color, d_file, d_rank, out);
    }
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn rook_on_open_board_has_fourteen_targets() {
        let mut board = Board::empty();
        let id = board.place(PieceKind::Rook, Color::White, sq("d4"));
        let mut out = Vec::new();
        rook_moves(board.get(id).unwrap(), &board, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        let id = board.place(PieceKind::Rook, Color::White, sq("a1"));
        board.place(PieceKind::Pawn, Color::Black, sq("a4"));
        board.place(PieceKind::Pawn, Color::White, sq("c1"));
        let mut out = Vec::new();
        rook_moves(board.get(id).unwrap(), &board, &mut out);

        assert!(out.contains(&sq("a4")));
        assert!(!out.contains(&sq("a5")));
        assert!(out.contains(&sq("b1")));
        assert!(!out.contains(&sq("c1")));
        assert_eq!(out.len(), 4);
    }
}
