//! Resolves one player intent against the board.
//!
//! Illegal intents are no-ops. Every function here leaves the selection
//! invariant intact: a side's `selected` square always holds a living piece
//! of that side's color, or is `None`.
//!
//! The cursor an intent acts on is passed in explicitly: it is the cursor the
//! side had when the intent was submitted, which may differ from the live one
//! by the time the tick resolves it.

use std::time::Duration;

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardCoords, Color};
use crate::game_state::piece::PieceId;
use crate::input::action_event::ActionKind;
use crate::match_state::events::{events_for_outcome, MatchEvent};
use crate::match_state::player_side::PlayerSide;
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_generator::move_is_legal;

/// Apply `kind` for `player` at `cursor` and return the move it made, if any.
pub fn resolve_action(
    board: &mut Board,
    player: &mut PlayerSide,
    kind: ActionKind,
    cursor: BoardCoords,
    cooldown: Duration,
    events: &mut Vec<MatchEvent>,
) -> Option<MoveOutcome> {
    match kind {
        ActionKind::Select => {
            select_at(board, player, cursor, events);
            None
        }
        ActionKind::Cancel => {
            player.selected = None;
            None
        }
        ActionKind::Confirm => match player.selected {
            None => {
                select_at(board, player, cursor, events);
                None
            }
            Some(selected) => confirm_with_selection(board, player, selected, cursor, cooldown, events),
        },
    }
}

fn confirm_with_selection(
    board: &mut Board,
    player: &mut PlayerSide,
    selected: BoardCoords,
    cursor: BoardCoords,
    cooldown: Duration,
    events: &mut Vec<MatchEvent>,
) -> Option<MoveOutcome> {
    let color = player.color();

    if selected == cursor {
        player.selected = None;
        return None;
    }

    let Some(selected_id) = own_piece_at(board, selected, color) else {
        player.selected = None;
        return None;
    };

    if own_piece_at(board, cursor, color).is_some() {
        select_at(board, player, cursor, events);
        return None;
    }

    player.selected = None;
    let target = cursor.to_square();
    let piece = board.get(selected_id)?;

    if piece.is_on_cooldown() {
        if move_is_legal(piece, target, board) {
            let replaced = piece.premove.filter(|previous| *previous != target);
            if let Some(previous) = replaced {
                events.push(MatchEvent::PremoveDropped {
                    piece: selected_id,
                    target: previous,
                });
            }
            if let Some(piece) = board.get_mut(selected_id) {
                piece.premove = Some(target);
            }
            debug!(side = %player.side, %target, "premove queued");
            events.push(MatchEvent::PremoveQueued {
                piece: selected_id,
                target,
            });
        }
        return None;
    }

    let outcome = apply_move(board, selected_id, target, cooldown)?;
    debug!(side = %player.side, from = %outcome.from, to = %outcome.to, "move applied");
    events_for_outcome(&outcome, events);
    Some(outcome)
}

/// Select the own piece at `cursor` and clear any premove it holds.
fn select_at(board: &mut Board, player: &mut PlayerSide, cursor: BoardCoords, events: &mut Vec<MatchEvent>) {
    let Some(id) = own_piece_at(board, cursor, player.color()) else {
        return;
    };
    player.selected = Some(cursor);
    if let Some(piece) = board.get_mut(id) {
        if let Some(target) = piece.premove.take() {
            events.push(MatchEvent::PremoveDropped { piece: id, target });
        }
    }
}

fn own_piece_at(board: &Board, coords: BoardCoords, color: Color) -> Option<PieceId> {
    board
        .piece_id_at(coords.to_square())
        .filter(|id| board.get(*id).is_some_and(|p| p.color == color))
}

/// Clear any selection that no longer points at a living own piece.
pub fn revalidate_selection(board: &Board, player: &mut PlayerSide) {
    if let Some(selected) = player.selected {
        if own_piece_at(board, selected, player.color()).is_none() {
            debug!(side = %player.side, "selection cleared, piece gone");
            player.selected = None;
        }
    }
}
