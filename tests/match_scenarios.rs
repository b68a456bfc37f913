//! End-to-end match scenarios driven only through the public `MatchState`
//! surface, the way a front-end would drive it.

use std::time::Duration;

use cooldown_chess::game_state::board::Board;
use cooldown_chess::game_state::chess_types::{BoardCoords, Color, PieceKind, Side, Square};
use cooldown_chess::input::action_event::{ActionEvent, ActionKind};
use cooldown_chess::match_state::events::MatchEvent;
use cooldown_chess::match_state::match_config::{CooldownSetting, MatchConfig};
use cooldown_chess::match_state::match_state::{MatchPhase, MatchState};
use cooldown_chess::move_generation::legal_move_generator::legal_moves;

const FRAME: Duration = Duration::from_millis(16);

fn sq(s: &str) -> Square {
    s.parse().expect("test square should parse")
}

fn config() -> MatchConfig {
    MatchConfig {
        cooldown: CooldownSetting::FiveSeconds,
        shuffle_seed: Some(2024),
        ..MatchConfig::default()
    }
}

fn playing(board: Board) -> MatchState {
    let mut state = MatchState::with_board(config(), board);
    state.set_ready(Side::Left, true);
    state.set_ready(Side::Right, true);
    state.tick(FRAME);
    state.tick(state.config().countdown);
    assert_eq!(state.phase(), MatchPhase::Playing);
    state.drain_events();
    state
}

/// Point `side`'s cursor at `square` and press confirm, one frame each.
fn click(state: &mut MatchState, side: Side, square: &str) {
    state.set_cursor(side, BoardCoords::from_square(sq(square)));
    state.submit(ActionEvent::new(side, ActionKind::Confirm));
    state.tick(FRAME);
}

fn play(state: &mut MatchState, side: Side, from: &str, to: &str) {
    click(state, side, from);
    click(state, side, to);
}

#[test]
fn scenario_a_pawn_double_step_starts_cooldown() {
    let mut state = playing(Board::standard());
    play(&mut state, Side::Left, "a2", "a4");

    let pawn = state.board().piece_at(sq("a4")).expect("pawn relocated");
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert!(pawn.moved);
    assert_eq!(pawn.cooldown_remaining, Duration::from_secs(5));
    assert!(state.board().piece_at(sq("a2")).is_none());

    let events = state.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, MatchEvent::MoveApplied { from, to, .. } if *from == sq("a2") && *to == sq("a4"))));
    assert!(!events.iter().any(|e| matches!(e, MatchEvent::CaptureApplied { .. })));
}

#[test]
fn scenario_b_pawn_captures_diagonally() {
    let mut board = Board::empty();
    let white = board.place(PieceKind::Pawn, Color::White, sq("e5"));
    let black = board.place(PieceKind::Pawn, Color::Black, sq("d6"));
    assert!(legal_moves(board.get(white).expect("white pawn"), &board).contains(&sq("d6")));

    let mut state = playing(board);
    play(&mut state, Side::Left, "e5", "d6");

    assert!(!state.board().get(black).expect("black pawn record kept").alive);
    assert_eq!(state.board().get(white).expect("white pawn").square, sq("d6"));
    assert!(state
        .drain_events()
        .contains(&MatchEvent::CaptureApplied {
            piece: white,
            captured: black,
            color: Color::White,
            from: sq("e5"),
            to: sq("d6"),
        }));
}

#[test]
fn scenario_c_premove_fires_when_cooldown_expires() {
    let mut board = Board::standard();
    let knight = board.piece_id_at(sq("g1")).expect("knight on g1");
    board.get_mut(knight).expect("knight").cooldown_remaining = Duration::from_millis(3000);
    let mut state = playing(board);

    play(&mut state, Side::Left, "g1", "f3");
    let piece = state.board().get(knight).expect("knight");
    assert_eq!(piece.premove, Some(sq("f3")));
    assert_eq!(piece.square, sq("g1"));
    assert_eq!(state.side(Side::Left).selected, None);

    let mut elapsed = FRAME * 2;
    while elapsed < Duration::from_millis(3000) {
        assert_eq!(state.board().get(knight).expect("knight").square, sq("g1"));
        state.tick(FRAME);
        elapsed += FRAME;
    }

    let piece = state.board().get(knight).expect("knight");
    assert_eq!(piece.square, sq("f3"));
    assert_eq!(piece.premove, None);
    assert_eq!(piece.cooldown_remaining, Duration::from_secs(5));
}

#[test]
fn scenario_d_king_capture_ends_and_resets_match() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Color::White, sq("e1"));
    board.place(PieceKind::King, Color::Black, sq("h8"));
    board.place(PieceKind::Rook, Color::Black, sq("e7"));
    let mut state = playing(board);

    play(&mut state, Side::Right, "e7", "e1");
    assert_eq!(state.winner(), Some(Color::Black));
    assert!(state.drain_events().contains(&MatchEvent::GameWon {
        winner: Some(Color::Black)
    }));

    // Inputs are ignored while the result is shown.
    click(&mut state, Side::Left, "e1");
    assert!(matches!(state.phase(), MatchPhase::GameOver { .. }));

    state.tick(state.config().reset_delay);
    assert_eq!(state.phase(), MatchPhase::ReadyUp);
    assert_eq!(*state.board(), Board::standard());
    assert_eq!(state.cooldown(), Duration::from_secs(5));
}

#[test]
fn scenario_e_kingside_castle_moves_both_pieces() {
    let mut board = Board::standard();
    for square in ["f1", "g1"] {
        let id = board.piece_id_at(sq(square)).expect("piece to clear");
        board.get_mut(id).expect("piece").alive = false;
    }
    let king = board.piece_id_at(sq("e1")).expect("king");
    let rook = board.piece_id_at(sq("h1")).expect("rook");
    assert!(legal_moves(board.get(king).expect("king"), &board).contains(&sq("g1")));

    let mut state = playing(board);
    play(&mut state, Side::Left, "e1", "g1");

    let king = state.board().get(king).expect("king");
    let rook = state.board().get(rook).expect("rook");
    assert_eq!((king.square, rook.square), (sq("g1"), sq("f1")));
    assert!(king.moved && rook.moved);
    assert!(state
        .drain_events()
        .iter()
        .any(|e| matches!(e, MatchEvent::Castled { rook_to, .. } if *rook_to == sq("f1"))));
}
