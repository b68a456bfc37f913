//! The single "apply move" primitive shared by immediate confirms and by
//! premoves executing on cooldown expiry.

use std::time::Duration;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET_FILE, KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_TARGET_FILE, QUEENSIDE_ROOK_FILE,
    QUEENSIDE_ROOK_TARGET_FILE,
};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::piece::PieceId;
use crate::move_generation::legal_move_generator::move_is_legal;

/// Rook half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRook {
    pub rook: PieceId,
    pub from: Square,
    pub to: Square,
}

/// What `apply_move` changed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    /// Kind before any promotion.
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceId>,
    pub captured_kind: Option<PieceKind>,
    pub castling: Option<CastlingRook>,
    pub promoted: bool,
}

impl MoveOutcome {
    #[inline]
    pub fn captured_king(&self) -> bool {
        self.captured_kind == Some(PieceKind::King)
    }
}

/// Move piece `id` to `target`, capturing, castling and promoting as needed.
///
/// Legality is checked here against the current board, so callers holding a
/// stale target (a premove) can pass it straight through. Returns `None` and
/// leaves the board untouched when the piece is gone or the move is illegal.
/// Cooldown is not checked; callers gate on it.
pub fn apply_move(
    board: &mut Board,
    id: PieceId,
    target: Square,
    cooldown: Duration,
) -> Option<MoveOutcome> {
    let piece = board.get(id)?;
    if !piece.alive || !move_is_legal(piece, target, board) {
        return None;
    }
    let (kind, color, from) = (piece.kind, piece.color, piece.square);

    let captured = board.piece_id_at(target);
    let mut captured_kind = None;
    if let Some(victim_id) = captured {
        if let Some(victim) = board.get_mut(victim_id) {
            victim.alive = false;
            victim.premove = None;
            captured_kind = Some(victim.kind);
        }
    }

    let castling = if kind == PieceKind::King && (target.file - from.file).abs() == 2 {
        relocate_castling_rook(board, from.rank, target.file, cooldown)
    } else {
        None
    };

    let piece = board.get_mut(id)?;
    piece.square = target;
    piece.cooldown_remaining = cooldown;
    piece.premove = None;
    piece.moved = true;

    let promoted = kind == PieceKind::Pawn && target.rank == color.promotion_rank();
    if promoted {
        piece.kind = PieceKind::Queen;
    }

    Some(MoveOutcome {
        piece: id,
        kind,
        color,
        from,
        to: target,
        captured,
        captured_kind,
        castling,
        promoted,
    })
}

/// The rook move is part of the king's move and skips its own legality and
/// cooldown gates.
fn relocate_castling_rook(
    board: &mut Board,
    rank: i8,
    king_target_file: i8,
    cooldown: Duration,
) -> Option<CastlingRook> {
    let (rook_file, rook_target_file) = if king_target_file == KINGSIDE_KING_TARGET_FILE {
        (KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_TARGET_FILE)
    } else {
        (QUEENSIDE_ROOK_FILE, QUEENSIDE_ROOK_TARGET_FILE)
    };
    let from = Square {
        file: rook_file,
        rank,
    };
    let to = Square {
        file: rook_target_file,
        rank,
    };

    let rook_id = board.piece_id_at(from)?;
    let rook = board.get_mut(rook_id)?;
    rook.square = to;
    rook.cooldown_remaining = cooldown;
    rook.premove = None;
    rook.moved = true;

    Some(CastlingRook {
        rook: rook_id,
        from,
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_secs(5);

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn quiet_move_sets_cooldown_and_moved() {
        let mut board = Board::standard();
        let pawn = board.piece_id_at(sq("a2")).unwrap();
        let outcome = apply_move(&mut board, pawn, sq("a4"), COOLDOWN).unwrap();

        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.from, sq("a2"));
        let piece = board.get(pawn).unwrap();
        assert_eq!(piece.square, sq("a4"));
        assert_eq!(piece.cooldown_remaining, COOLDOWN);
        assert!(piece.moved);
    }

    #[test]
    fn illegal_target_leaves_board_unchanged() {
        let mut board = Board::standard();
        let before = board.clone();
        let pawn = board.piece_id_at(sq("a2")).unwrap();
        assert!(apply_move(&mut board, pawn, sq("a5"), COOLDOWN).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn capture_marks_victim_dead_and_clears_its_premove() {
        let mut board = Board::empty();
        let white = board.place(PieceKind::Pawn, Color::White, sq("e5"));
        let black = board.place(PieceKind::Pawn, Color::Black, sq("d6"));
        board.get_mut(black).unwrap().premove = Some(sq("d5"));

        let outcome = apply_move(&mut board, white, sq("d6"), COOLDOWN).unwrap();
        assert_eq!(outcome.captured, Some(black));
        assert_eq!(outcome.captured_kind, Some(PieceKind::Pawn));
        assert!(!outcome.captured_king());
        let victim = board.get(black).unwrap();
        assert!(!victim.alive);
        assert_eq!(victim.premove, None);
        assert_eq!(board.piece_id_at(sq("d6")), Some(white));
    }

    #[test]
    fn king_capture_is_reported() {
        let mut board = Board::empty();
        let rook = board.place(PieceKind::Rook, Color::White, sq("a1"));
        board.place(PieceKind::King, Color::Black, sq("a8"));
        let outcome = apply_move(&mut board, rook, sq("a8"), COOLDOWN).unwrap();
        assert!(outcome.captured_king());
    }

    #[test]
    fn kingside_castle_moves_rook_to_f_file() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1"));
        let rook = board.place(PieceKind::Rook, Color::White, sq("h1"));

        let outcome = apply_move(&mut board, king, sq("g1"), COOLDOWN).unwrap();
        assert_eq!(
            outcome.castling,
            Some(CastlingRook {
                rook,
                from: sq("h1"),
                to: sq("f1"),
            })
        );
        let rook = board.get(rook).unwrap();
        assert_eq!(rook.square, sq("f1"));
        assert!(rook.moved);
        assert_eq!(rook.cooldown_remaining, COOLDOWN);
        assert!(board.get(king).unwrap().moved);
    }

    #[test]
    fn queenside_castle_moves_rook_to_d_file() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::Black, sq("e8"));
        let rook = board.place(PieceKind::Rook, Color::Black, sq("a8"));

        apply_move(&mut board, king, sq("c8"), COOLDOWN).unwrap();
        assert_eq!(board.get(king).unwrap().square, sq("c8"));
        assert_eq!(board.get(rook).unwrap().square, sq("d8"));
    }

    #[test]
    fn pawn_reaching_last_rank_becomes_queen() {
        let mut board = Board::empty();
        let pawn = board.place(PieceKind::Pawn, Color::Black, sq("b2"));
        let outcome = apply_move(&mut board, pawn, sq("b1"), COOLDOWN).unwrap();

        assert!(outcome.promoted);
        assert_eq!(outcome.kind, PieceKind::Pawn);
        assert_eq!(board.get(pawn).unwrap().kind, PieceKind::Queen);
    }
}
