use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::holds_color;

/// Forward pushes and diagonal captures. There is no en passant in this
/// variant, and reaching the last rank is handled when the move is applied.
pub fn pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    let forward = piece.color.forward();

    if let Some(one_ahead) = piece.square.offset(0, forward) {
        if !board.is_occupied(one_ahead) {
            out.push(one_ahead);

            if piece.square.rank == piece.color.pawn_start_rank() {
                if let Some(two_ahead) = one_ahead.offset(0, forward) {
                    if !board.is_occupied(two_ahead) {
                        out.push(two_ahead);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Some(diagonal) = piece.square.offset(d_file, forward) {
            if holds_color(board, diagonal, piece.color.opposite()) {
                out.push(diagonal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn targets(board: &Board, from: &str) -> Vec<Square> {
        let id = board.piece_id_at(sq(from)).unwrap();
        let mut out = Vec::new();
        pawn_moves(board.get(id).unwrap(), board, &mut out);
        out.sort();
        out
    }

    #[test]
    fn white_pawn_on_start_rank_can_double_step() {
        let board = Board::standard();
        assert_eq!(targets(&board, "e2"), vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn black_pawn_moves_toward_rank_one() {
        let board = Board::standard();
        assert_eq!(targets(&board, "d7"), vec![sq("d5"), sq("d6")]);
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::standard();
        board.place(PieceKind::Knight, Color::Black, sq("a3"));
        assert!(targets(&board, "a2").is_empty());

        let mut board = Board::standard();
        board.place(PieceKind::Knight, Color::Black, sq("a4"));
        assert_eq!(targets(&board, "a2"), vec![sq("a3")]);
    }

    #[test]
    fn double_step_only_from_start_rank() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::White, sq("c3"));
        assert_eq!(targets(&board, "c3"), vec![sq("c4")]);
    }

    #[test]
    fn diagonal_capture_requires_enemy() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::White, sq("e5"));
        board.place(PieceKind::Pawn, Color::Black, sq("d6"));
        board.place(PieceKind::Pawn, Color::White, sq("f6"));
        assert_eq!(targets(&board, "e5"), vec![sq("d6"), sq("e6")]);
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::White, sq("e5"));
        board.place(PieceKind::Pawn, Color::Black, sq("e6"));
        assert!(targets(&board, "e5").is_empty());
    }
}
