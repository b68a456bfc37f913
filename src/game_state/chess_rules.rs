//! Canonical rule constants for the cooldown variant.
//!
//! Stores the opening layout, the castling geometry and the default timings
//! of the match lifecycle.

use std::time::Duration;

use crate::game_state::chess_types::PieceKind;

/// Back-rank kinds from file `a` to file `h`.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Zero-based file of the king in the opening layout.
pub const KING_START_FILE: i8 = 4;

/// King destination file when castling kingside (`g`) and queenside (`c`).
pub const KINGSIDE_KING_TARGET_FILE: i8 = 6;
pub const QUEENSIDE_KING_TARGET_FILE: i8 = 2;

/// Rook origin files (`h`, `a`) and their post-castle files (`f`, `d`).
pub const KINGSIDE_ROOK_FILE: i8 = 7;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;
pub const KINGSIDE_ROOK_TARGET_FILE: i8 = 5;
pub const QUEENSIDE_ROOK_TARGET_FILE: i8 = 3;

/// Both players must hold ready before this countdown starts.
pub const DEFAULT_COUNTDOWN: Duration = Duration::from_millis(3000);

/// Delay between a win and the automatic reset to a fresh board.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(5000);

/// Initial cursor coordinates: left player on e1, right player on e8.
pub const LEFT_CURSOR_START: (u8, u8) = (4, 7);
pub const RIGHT_CURSOR_START: (u8, u8) = (4, 0);
