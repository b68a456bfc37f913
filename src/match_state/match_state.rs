//! Match lifecycle and the per-tick update.
//!
//! `MatchState` is the single owned value holding everything about a running
//! match. Adapters feed it discrete inputs (`submit`, `set_ready`,
//! `move_cursor`) and call `tick` once per frame with the wall time elapsed
//! since the previous frame; they read it back through the query methods and
//! `drain_events`.
//!
//! Phases run `ReadyUp -> Countdown -> Playing -> GameOver -> ReadyUp`.
//! Inside `Playing` one tick does, in order:
//! 1. resolve queued actions, revalidating selections and premoves after
//!    each one. Each side's actions keep their submission order; the two
//!    queues are interleaved and a seeded coin flip picks which side leads;
//! 2. advance cooldowns and run due premoves (shuffled);
//! 3. revalidate again.
//!
//! The winner is checked after every applied move, so the board freezes the
//! moment only one color still has a king.

use std::mem;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardCoords, Color, Side, Square};
use crate::input::action_event::ActionEvent;
use crate::match_state::action_resolver::{resolve_action, revalidate_selection};
use crate::match_state::cooldown_scheduler::{advance_cooldowns, clear_premoves, revalidate_premoves};
use crate::match_state::events::MatchEvent;
use crate::match_state::match_config::{CooldownSetting, MatchConfig};
use crate::match_state::player_side::PlayerSide;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for both players to hold ready. The board is not touched.
    ReadyUp,
    /// Board visible, inputs ignored, cooldowns frozen.
    Countdown { remaining: Duration },
    Playing,
    /// Board frozen until the automatic reset.
    GameOver {
        winner: Option<Color>,
        reset_in: Duration,
    },
}

/// An action waiting for the next tick, with the cursor it was aimed at.
#[derive(Debug, Clone, Copy)]
struct QueuedAction {
    event: ActionEvent,
    cursor: BoardCoords,
}

#[derive(Debug, Clone)]
pub struct MatchState {
    config: MatchConfig,
    board: Board,
    sides: [PlayerSide; 2],
    phase: MatchPhase,
    pending: Vec<QueuedAction>,
    events: Vec<MatchEvent>,
    rng: StdRng,
}

impl MatchState {
    /// Fresh match on the standard opening layout.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_board(config, Board::standard())
    }

    /// Match starting from a custom board. Resets still restore the
    /// standard layout.
    pub fn with_board(config: MatchConfig, board: Board) -> Self {
        let seed = config.shuffle_seed.unwrap_or_else(rand::random);
        for color in [Color::White, Color::Black] {
            if board.living_kings(color) == 0 {
                warn!(%color, "board has no king for this color");
            }
        }
        Self {
            config,
            board,
            sides: [PlayerSide::new(Side::Left), PlayerSide::new(Side::Right)],
            phase: MatchPhase::ReadyUp,
            pending: Vec::new(),
            events: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[inline]
    pub fn side(&self, side: Side) -> &PlayerSide {
        &self.sides[side.index()]
    }

    #[inline]
    pub fn cooldown(&self) -> Duration {
        self.config.cooldown.duration()
    }

    /// Winner once the match is decided.
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            MatchPhase::GameOver { winner, .. } => winner,
            _ => None,
        }
    }

    /// Countdown left before play starts; zero outside the countdown.
    pub fn countdown_remaining(&self) -> Duration {
        match self.phase {
            MatchPhase::Countdown { remaining } => remaining,
            _ => Duration::ZERO,
        }
    }

    /// Legal destinations of the piece `side` has selected, for move hints.
    pub fn legal_moves_for_selection(&self, side: Side) -> Vec<Square> {
        self.sides[side.index()]
            .selected_square()
            .and_then(|square| self.board.piece_at(square))
            .map(|piece| legal_moves(piece, &self.board))
            .unwrap_or_default()
    }

    /// Take every notification emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        mem::take(&mut self.events)
    }

    /// Queue an action for the next tick, aimed at the side's current cursor.
    /// Ignored outside `Playing`.
    pub fn submit(&mut self, event: ActionEvent) {
        if self.phase == MatchPhase::Playing {
            let cursor = self.sides[event.side.index()].cursor;
            self.pending.push(QueuedAction { event, cursor });
        } else {
            debug!(side = %event.side, kind = ?event.kind, phase = ?self.phase, "action ignored");
        }
    }

    pub fn set_ready(&mut self, side: Side, held: bool) {
        self.sides[side.index()].ready = held;
    }

    /// Move a side's cursor by a seat-relative direction. Only while playing.
    pub fn move_cursor(&mut self, side: Side, dx: i8, dy: i8, fast: bool) -> bool {
        if self.phase != MatchPhase::Playing {
            return false;
        }
        let player = &mut self.sides[side.index()];
        let moved = player.move_cursor(dx, dy, fast);
        if moved {
            self.events.push(MatchEvent::CursorMoved {
                side,
                cursor: player.cursor,
            });
        }
        moved
    }

    /// Place a side's cursor directly, for adapters that track it themselves.
    pub fn set_cursor(&mut self, side: Side, cursor: BoardCoords) {
        self.sides[side.index()].cursor = cursor;
    }

    /// Change the cooldown. Only allowed before the countdown starts.
    pub fn set_cooldown(&mut self, setting: CooldownSetting) -> Result<(), ChessErrors> {
        if self.phase != MatchPhase::ReadyUp {
            return Err(ChessErrors::ConfigurationLocked);
        }
        self.config.cooldown = setting;
        info!(seconds = setting.seconds(), "cooldown changed");
        Ok(())
    }

    /// Step the cooldown option forward or backward, as the menu arrows do.
    pub fn cycle_cooldown(&mut self, forward: bool) -> Result<CooldownSetting, ChessErrors> {
        let current = self.config.cooldown;
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.set_cooldown(next)?;
        Ok(next)
    }

    /// Advance the match by `dt` of wall time.
    pub fn tick(&mut self, dt: Duration) {
        match self.phase {
            MatchPhase::ReadyUp => {
                if self.sides.iter().all(|s| s.ready) {
                    info!("both players ready, countdown started");
                    self.phase = MatchPhase::Countdown {
                        remaining: self.config.countdown,
                    };
                    self.events.push(MatchEvent::CountdownStarted);
                }
            }
            MatchPhase::Countdown { remaining } => {
                let remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    info!(cooldown_secs = self.config.cooldown.seconds(), "match started");
                    self.phase = MatchPhase::Playing;
                    self.events.push(MatchEvent::MatchStarted);
                } else {
                    self.phase = MatchPhase::Countdown { remaining };
                }
            }
            MatchPhase::Playing => self.play_tick(dt),
            MatchPhase::GameOver { winner, reset_in } => {
                let reset_in = reset_in.saturating_sub(dt);
                if reset_in.is_zero() {
                    self.reset();
                } else {
                    self.phase = MatchPhase::GameOver { winner, reset_in };
                }
            }
        }
    }

    /// Rebuild the match on the standard layout, keeping the configuration
    /// and the shuffle stream. Undrained events are kept.
    pub fn reset(&mut self) {
        info!("match reset");
        let config = self.config.clone();
        let rng = self.rng.clone();
        let mut events = mem::take(&mut self.events);
        events.push(MatchEvent::MatchReset);

        *self = MatchState::new(config);
        self.rng = rng;
        self.events = events;
    }

    fn play_tick(&mut self, dt: Duration) {
        let cooldown = self.cooldown();
        let left_first = self.rng.random_bool(0.5);
        let actions = interleave_sides(mem::take(&mut self.pending), left_first);

        for action in actions {
            let side = action.event.side;
            let player = &mut self.sides[side.index()];
            let applied = resolve_action(
                &mut self.board,
                player,
                action.event.kind,
                action.cursor,
                cooldown,
                &mut self.events,
            );
            self.revalidate();
            if let Some(outcome) = applied {
                if self.check_for_winner(outcome.captured_king()) {
                    return;
                }
            }
        }

        let applied = advance_cooldowns(&mut self.board, dt, cooldown, &mut self.rng, &mut self.events);
        self.revalidate();
        if !applied.is_empty() {
            let king_captured = applied.iter().any(|outcome| outcome.captured_king());
            self.check_for_winner(king_captured);
        }
    }

    fn revalidate(&mut self) {
        for player in self.sides.iter_mut() {
            revalidate_selection(&self.board, player);
        }
        revalidate_premoves(&mut self.board, &mut self.events);
    }

    /// Enter `GameOver` once the board decides the match.
    ///
    /// A board where neither color ever had a king keeps playing. Taking the
    /// last king on a board that had only one ends with no winner; the
    /// standard layout cannot get there because this runs after every move.
    fn check_for_winner(&mut self, king_captured: bool) -> bool {
        let Some(winner) = self.board.match_result(king_captured) else {
            return false;
        };

        match winner {
            Some(color) => info!(winner = %color, side = %Side::for_color(color), "king captured, match over"),
            None => warn!("last king on the board captured, match over with no winner"),
        }
        clear_premoves(&mut self.board);
        for player in self.sides.iter_mut() {
            player.selected = None;
        }
        self.pending.clear();
        self.phase = MatchPhase::GameOver {
            winner,
            reset_in: self.config.reset_delay,
        };
        self.events.push(MatchEvent::GameWon { winner });
        true
    }
}

/// Alternate the two sides' queues, each in submission order, starting with
/// the left side when `left_first` is set.
fn interleave_sides(actions: Vec<QueuedAction>, left_first: bool) -> Vec<QueuedAction> {
    let (left, right): (Vec<_>, Vec<_>) = actions
        .into_iter()
        .partition(|action| action.event.side == Side::Left);
    let (lead, follow) = if left_first { (left, right) } else { (right, left) };

    let mut ordered = Vec::with_capacity(lead.len() + follow.len());
    let mut lead = lead.into_iter();
    let mut follow = follow.into_iter();
    loop {
        match (lead.next(), follow.next()) {
            (None, None) => break,
            (a, b) => {
                ordered.extend(a);
                ordered.extend(b);
            }
        }
    }
    ordered
}
