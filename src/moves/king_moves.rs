//! King steps and castling.
//!
//! Castling here only looks at whether the king and rook have moved and
//! whether the squares between them are empty. The variant has no check, so
//! squares the king passes over are never tested for attacks.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET_FILE, KINGSIDE_ROOK_FILE, KING_START_FILE, QUEENSIDE_KING_TARGET_FILE,
    QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::offset_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub fn king_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    offset_targets(board, piece.square, piece.color, &KING_OFFSETS, out);
    castling_moves(piece, board, out);
}

/// Two-square king moves onto `g` or `c`. The rook half of the move is done
/// by `legal_move_apply::apply_move`.
fn castling_moves(king: &Piece, board: &Board, out: &mut Vec<Square>) {
    let home = Square {
        file: KING_START_FILE,
        rank: king.color.home_rank(),
    };
    if king.moved || king.square != home {
        return;
    }

    for (rook_file, king_target_file) in [
        (KINGSIDE_ROOK_FILE, KINGSIDE_KING_TARGET_FILE),
        (QUEENSIDE_ROOK_FILE, QUEENSIDE_KING_TARGET_FILE),
    ] {
        let rook_square = Square {
            file: rook_file,
            rank: home.rank,
        };
        let rook_ready = board.piece_at(rook_square).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.moved
        });
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_file > home.file {
            (home.file + 1, rook_file)
        } else {
            (rook_file + 1, home.file)
        };
        let path_clear = (low..high).all(|file| {
            !board.is_occupied(Square {
                file,
                rank: home.rank,
            })
        });
        if path_clear {
            out.push(Square {
                file: king_target_file,
                rank: home.rank,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn targets(board: &Board, from: &str) -> Vec<Square> {
        let id = board.piece_id_at(sq(from)).unwrap();
        let mut out = Vec::new();
        king_moves(board.get(id).unwrap(), board, &mut out);
        out.sort();
        out
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq("e1"));
        board.place(PieceKind::Rook, Color::White, sq("h1"));
        board.place(PieceKind::Rook, Color::White, sq("a1"));
        board
    }

    #[test]
    fn king_in_corner_has_three_steps() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq("h8"));
        assert_eq!(targets(&board, "h8").len(), 3);
    }

    #[test]
    fn unmoved_king_and_rooks_can_castle_both_ways() {
        let board = castling_board();
        let moves = targets(&board, "e1");
        assert!(moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_blocked_by_any_piece_between() {
        let mut board = castling_board();
        board.place(PieceKind::Knight, Color::Black, sq("b1"));
        board.place(PieceKind::Bishop, Color::White, sq("f1"));
        let moves = targets(&board, "e1");
        assert!(!moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_requires_unmoved_pieces() {
        let mut board = castling_board();
        let rook = board.piece_id_at(sq("h1")).unwrap();
        board.get_mut(rook).unwrap().moved = true;
        let moves = targets(&board, "e1");
        assert!(!moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));

        let king = board.piece_id_at(sq("e1")).unwrap();
        board.get_mut(king).unwrap().moved = true;
        assert!(!targets(&board, "e1").contains(&sq("c1")));
    }

    #[test]
    fn castling_ignores_enemy_rooks() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq("e8"));
        board.place(PieceKind::Rook, Color::White, sq("h8"));
        assert!(!targets(&board, "e8").contains(&sq("g8")));
    }

    #[test]
    fn opening_king_cannot_castle_through_own_pieces() {
        let board = Board::standard();
        assert!(targets(&board, "e1").is_empty());
    }
}
