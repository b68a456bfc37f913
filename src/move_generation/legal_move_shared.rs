//! Helpers shared by the per-piece destination generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Walk from `from` in steps of `(d_file, d_rank)` until the edge of the
/// board. Empty squares are pushed; the first occupied square ends the ray
/// and is pushed only when it holds an enemy piece.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_file: i8,
    d_rank: i8,
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_file, d_rank) {
        match board.piece_at(next) {
            Some(blocker) => {
                if blocker.color != color {
                    out.push(next);
                }
                break;
            }
            None => out.push(next),
        }
        current = next;
    }
}

/// Push every on-board `from + offset` that is empty or holds an enemy piece.
pub fn offset_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_file, d_rank) in offsets {
        if let Some(target) = from.offset(d_file, d_rank) {
            if !holds_color(board, target, color) {
                out.push(target);
            }
        }
    }
}

#[inline]
pub fn holds_color(board: &Board, square: Square, color: Color) -> bool {
    board.piece_at(square).is_some_and(|p| p.color == color)
}
