//! Per-tick cooldown countdown and premove execution.
//!
//! Pieces are visited in a freshly shuffled order every tick. When several
//! premoves come due on the same tick, one can take the square another was
//! aiming at, so the order decides the outcome; shuffling keeps either side
//! from being favoured by board layout. The shuffle draws from the match's
//! seeded `StdRng`, so a fixed seed replays the same order.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::piece::PieceId;
use crate::match_state::events::{events_for_outcome, MatchEvent};
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_generator::move_is_legal;

/// Advance every living piece's cooldown by `elapsed`.
///
/// A piece whose cooldown reaches zero on this tick while holding a premove
/// attempts it immediately; the premove is consumed whether or not the move
/// is still legal. Processing stops early once a move decides the match so
/// nothing moves after the win; on boards where no king falls every piece is
/// visited. Returns the moves applied.
pub fn advance_cooldowns(
    board: &mut Board,
    elapsed: Duration,
    cooldown: Duration,
    rng: &mut StdRng,
    events: &mut Vec<MatchEvent>,
) -> Vec<MoveOutcome> {
    let mut order: Vec<PieceId> = board.iter_living().map(|(id, _)| id).collect();
    order.shuffle(rng);

    let mut applied = Vec::new();
    for id in order {
        let Some(piece) = board.get_mut(id) else {
            continue;
        };
        if !piece.alive || !piece.is_on_cooldown() {
            continue;
        }

        piece.cooldown_remaining = piece.cooldown_remaining.saturating_sub(elapsed);
        if piece.is_on_cooldown() {
            continue;
        }
        let Some(target) = piece.premove.take() else {
            continue;
        };

        match apply_move(board, id, target, cooldown) {
            Some(outcome) => {
                debug!(from = %outcome.from, to = %outcome.to, "premove executed");
                events_for_outcome(&outcome, events);
                let decided = board.match_result(outcome.captured_king()).is_some();
                applied.push(outcome);
                if decided {
                    break;
                }
            }
            None => {
                debug!(%target, "premove dropped on expiry");
                events.push(MatchEvent::PremoveDropped { piece: id, target });
            }
        }
    }
    applied
}

/// Drop every queued premove that is no longer legal on the current board.
pub fn revalidate_premoves(board: &mut Board, events: &mut Vec<MatchEvent>) {
    let stale: Vec<(PieceId, _)> = board
        .iter_living()
        .filter_map(|(id, piece)| {
            piece
                .premove
                .filter(|target| !move_is_legal(piece, *target, board))
                .map(|target| (id, target))
        })
        .collect();

    for (id, target) in stale {
        if let Some(piece) = board.get_mut(id) {
            piece.premove = None;
        }
        debug!(%target, "premove dropped, no longer legal");
        events.push(MatchEvent::PremoveDropped { piece: id, target });
    }
}

/// Clear every premove without executing it.
pub fn clear_premoves(board: &mut Board) {
    for piece in board.iter_mut() {
        piece.premove = None;
    }
}
