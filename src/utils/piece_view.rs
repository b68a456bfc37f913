//! Presentation state for pieces and cursors, kept apart from gameplay state.
//!
//! A renderer owns a `PieceViews` and a `CursorViews`, feeds the pieces the
//! match's events and calls `update` on both every frame. Positions are in
//! the same display space as `BoardCoords` (x = file, y = 0 at rank 8), as
//! fractional squares.

use std::collections::HashMap;
use std::time::Duration;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardCoords, Side, Square};
use crate::game_state::piece::PieceId;
use crate::match_state::events::MatchEvent;
use crate::match_state::match_state::MatchState;

/// Approach rate per millisecond.
const EASE_RATE: f32 = 0.02;
/// Beyond this many squares the view is pulled in harder so long slides
/// don't lag.
const CATCH_UP_DISTANCE: f32 = 3.5;
/// Scale a piece pops to when it moves.
const MOVE_SCALE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl PieceView {
    fn at(square: Square) -> Self {
        let coords = BoardCoords::from_square(square);
        Self {
            x: coords.x as f32,
            y: coords.y as f32,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PieceViews {
    views: HashMap<PieceId, PieceView>,
}

impl PieceViews {
    /// Views snapped to the board's current positions.
    pub fn new(board: &Board) -> Self {
        let mut views = Self::default();
        views.snap_missing(board);
        views
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&PieceView> {
        self.views.get(&id)
    }

    pub fn observe(&mut self, event: &MatchEvent) {
        match *event {
            MatchEvent::MoveApplied { piece, .. } | MatchEvent::CaptureApplied { piece, .. } => {
                self.pop(piece);
            }
            MatchEvent::Castled { rook, .. } => self.pop(rook),
            // Piece ids restart with the new board.
            MatchEvent::MatchReset => self.views.clear(),
            _ => {}
        }
    }

    /// Ease every view toward its piece's square, scale 1 and full opacity,
    /// or toward transparent for captured pieces.
    pub fn update(&mut self, board: &Board, dt: Duration) {
        self.snap_missing(board);
        let dt_ms = dt.as_secs_f32() * 1000.0;
        let step = (dt_ms * EASE_RATE).min(1.0);

        for (id, piece) in board.iter() {
            let Some(view) = self.views.get_mut(&id) else {
                continue;
            };
            let target = BoardCoords::from_square(piece.square);
            let (x, y) = ease_toward(
                (view.x, view.y),
                (target.x as f32, target.y as f32),
                step,
            );
            view.x = x;
            view.y = y;
            view.scale += (1.0 - view.scale) * step;

            let target_opacity = if piece.alive { 1.0 } else { 0.0 };
            view.opacity += (target_opacity - view.opacity) * step;
        }
    }

    fn pop(&mut self, id: PieceId) {
        if let Some(view) = self.views.get_mut(&id) {
            view.scale = MOVE_SCALE;
        }
    }

    fn snap_missing(&mut self, board: &Board) {
        for (id, piece) in board.iter() {
            self.views.entry(id).or_insert_with(|| PieceView::at(piece.square));
        }
    }
}

/// Eased on-screen position of one side's cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorView {
    pub x: f32,
    pub y: f32,
}

impl CursorView {
    pub fn new(cursor: BoardCoords) -> Self {
        Self {
            x: cursor.x() as f32,
            y: cursor.y() as f32,
        }
    }

    pub fn update(&mut self, cursor: BoardCoords, dt: Duration) {
        let step = (dt.as_secs_f32() * 1000.0 * EASE_RATE).min(1.0);
        let (x, y) = ease_toward(
            (self.x, self.y),
            (cursor.x() as f32, cursor.y() as f32),
            step,
        );
        self.x = x;
        self.y = y;
    }
}

/// Cursor views for both seats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorViews {
    views: [CursorView; 2],
}

impl CursorViews {
    pub fn new(state: &MatchState) -> Self {
        Self {
            views: Side::BOTH.map(|side| CursorView::new(state.side(side).cursor)),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> &CursorView {
        &self.views[side.index()]
    }

    pub fn update(&mut self, state: &MatchState, dt: Duration) {
        for side in Side::BOTH {
            self.views[side.index()].update(state.side(side).cursor, dt);
        }
    }
}

/// One easing step from `from` toward `to`, with catch-up when far away.
pub fn ease_toward(from: (f32, f32), to: (f32, f32), step: f32) -> (f32, f32) {
    let mut x = from.0 + (to.0 - from.0) * step;
    let mut y = from.1 + (to.1 - from.1) * step;

    let distance = (to.0 - x).hypot(to.1 - y);
    if distance > CATCH_UP_DISTANCE {
        let pull = ((distance - CATCH_UP_DISTANCE) / CATCH_UP_DISTANCE).min(1.0);
        x = to.0 * pull + x * (1.0 - pull);
        y = to.1 * pull + y * (1.0 - pull);
    }
    (x, y)
}
