//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board from either player's perspective for the console
//! front-end, tests and diagnostics. Coordinates go through `BoardCoords` so
//! the text view uses the same square mapping as every other renderer.

use std::fmt::Write;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Side, Square};
use crate::match_state::match_state::{MatchPhase, MatchState};

/// Render the board with `perspective`'s home rank at the bottom.
pub fn render_board(board: &Board, perspective: Color) -> String {
    let files: Vec<i8> = match perspective {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };
    let ranks: Vec<i8> = match perspective {
        Color::White => (1..=8).rev().collect(),
        Color::Black => (1..=8).collect(),
    };

    let header: String = files
        .iter()
        .map(|f| char::from(b'a' + *f as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("  ");
    out.push_str(&header);
    out.push('\n');

    for rank in &ranks {
        out.push(char::from(b'0' + *rank as u8));
        out.push(' ');
        for (i, file) in files.iter().enumerate() {
            let square = Square {
                file: *file,
                rank: *rank,
            };
            match board.piece_at(square) {
                Some(piece) if piece.is_on_cooldown() => {
                    out.push(piece_to_unicode(piece.color, piece.kind));
                    out.push('\'');
                }
                Some(piece) => {
                    out.push(piece_to_unicode(piece.color, piece.kind));
                    if i < 7 {
                        out.push(' ');
                    }
                }
                None => {
                    out.push('·');
                    if i < 7 {
                        out.push(' ');
                    }
                }
            }
        }
        out.push(' ');
        out.push(char::from(b'0' + *rank as u8));
        out.push('\n');
    }

    out.push_str("  ");
    out.push_str(&header);
    out
}

/// Board plus phase, cursors, selections, cooldowns and premoves.
pub fn render_match_state(state: &MatchState, perspective: Color) -> String {
    let mut out = render_board(state.board(), perspective);
    out.push('\n');

    let phase = match state.phase() {
        MatchPhase::ReadyUp => "ready up".to_string(),
        MatchPhase::Countdown { remaining } => {
            format!("countdown {}", remaining.as_millis().div_ceil(1000))
        }
        MatchPhase::Playing => "playing".to_string(),
        MatchPhase::GameOver {
            winner: Some(color),
            ..
        } => format!("{} wins", color),
        MatchPhase::GameOver { winner: None, .. } => "no winner".to_string(),
    };
    let _ = writeln!(out, "phase: {}", phase);

    for side in Side::BOTH {
        let player = state.side(side);
        let selected = player
            .selected_square()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{} ({}): cursor {} selected {}{}",
            side,
            side.color(),
            player.cursor_square(),
            selected,
            if player.ready { " ready" } else { "" }
        );
    }

    for (_, piece) in state.board().iter_living() {
        if !piece.is_on_cooldown() && piece.premove.is_none() {
            continue;
        }
        let _ = write!(
            out,
            "{} {} {} cooldown {}ms",
            piece.color,
            piece.kind,
            piece.square,
            piece.cooldown_remaining.as_millis()
        );
        if let Some(target) = piece.premove {
            let _ = write!(out, " premove {}", target);
        }
        out.push('\n');
    }

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
