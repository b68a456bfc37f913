//! Advisory notifications for render, audio and haptics adapters.
//!
//! Nothing in the core depends on these being consumed.

use std::fmt;

use crate::game_state::chess_types::{BoardCoords, Color, PieceKind, Side, Square};
use crate::game_state::piece::PieceId;
use crate::move_generation::legal_move_apply::MoveOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    CountdownStarted,
    MatchStarted,
    MoveApplied {
        piece: PieceId,
        kind: PieceKind,
        color: Color,
        from: Square,
        to: Square,
    },
    CaptureApplied {
        piece: PieceId,
        captured: PieceId,
        color: Color,
        from: Square,
        to: Square,
    },
    Castled {
        king: PieceId,
        rook: PieceId,
        rook_from: Square,
        rook_to: Square,
    },
    Promoted {
        piece: PieceId,
        at: Square,
    },
    PremoveQueued {
        piece: PieceId,
        target: Square,
    },
    PremoveDropped {
        piece: PieceId,
        target: Square,
    },
    CursorMoved {
        side: Side,
        cursor: BoardCoords,
    },
    /// `None` only if both kings were gone when the match was decided.
    GameWon {
        winner: Option<Color>,
    },
    MatchReset,
}

impl MatchEvent {
    /// Sound cue an audio adapter should play for this event.
    pub fn sound_cue(&self) -> Option<&'static str> {
        match self {
            MatchEvent::MoveApplied { .. } => Some("move"),
            MatchEvent::CaptureApplied { .. } => Some("capture"),
            MatchEvent::Promoted { .. } => Some("promote"),
            MatchEvent::CursorMoved { .. } => Some("cursor-move"),
            _ => None,
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEvent::CountdownStarted => write!(f, "countdown started"),
            MatchEvent::MatchStarted => write!(f, "match started"),
            MatchEvent::MoveApplied {
                kind, color, from, to, ..
            } => write!(f, "move {} {} {}{}", color, kind, from, to),
            MatchEvent::CaptureApplied { color, from, to, .. } => {
                write!(f, "capture {} {}x{}", color, from, to)
            }
            MatchEvent::Castled {
                rook_from, rook_to, ..
            } => write!(f, "castle rook {}{}", rook_from, rook_to),
            MatchEvent::Promoted { at, .. } => write!(f, "promote {}", at),
            MatchEvent::PremoveQueued { target, .. } => write!(f, "premove queued {}", target),
            MatchEvent::PremoveDropped { target, .. } => write!(f, "premove dropped {}", target),
            MatchEvent::CursorMoved { side, cursor } => {
                write!(f, "cursor {} {}", side, cursor.to_square())
            }
            MatchEvent::GameWon {
                winner: Some(color),
            } => write!(f, "winner {}", color),
            MatchEvent::GameWon { winner: None } => write!(f, "no winner"),
            MatchEvent::MatchReset => write!(f, "match reset"),
        }
    }
}

/// Translate an applied move into its notifications: one move-or-capture
/// event, followed by castling and promotion details when present.
pub fn events_for_outcome(outcome: &MoveOutcome, out: &mut Vec<MatchEvent>) {
    match outcome.captured {
        Some(captured) => out.push(MatchEvent::CaptureApplied {
            piece: outcome.piece,
            captured,
            color: outcome.color,
            from: outcome.from,
            to: outcome.to,
        }),
        None => out.push(MatchEvent::MoveApplied {
            piece: outcome.piece,
            kind: outcome.kind,
            color: outcome.color,
            from: outcome.from,
            to: outcome.to,
        }),
    }
    if let Some(castling) = outcome.castling {
        out.push(MatchEvent::Castled {
            king: outcome.piece,
            rook: castling.rook,
            rook_from: castling.from,
            rook_to: castling.to,
        });
    }
    if outcome.promoted {
        out.push(MatchEvent::Promoted {
            piece: outcome.piece,
            at: outcome.to,
        });
    }
}
