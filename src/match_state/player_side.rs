//! Per-player cursor and selection.

use crate::game_state::chess_rules::{LEFT_CURSOR_START, RIGHT_CURSOR_START};
use crate::game_state::chess_types::{BoardCoords, Color, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSide {
    pub side: Side,
    pub cursor: BoardCoords,
    /// Must point at a living piece of this side's color whenever it is set.
    pub selected: Option<BoardCoords>,
    /// Ready button currently held (only meaningful before the countdown).
    pub ready: bool,
}

impl PlayerSide {
    pub fn new(side: Side) -> Self {
        let (x, y) = match side {
            Side::Left => LEFT_CURSOR_START,
            Side::Right => RIGHT_CURSOR_START,
        };
        Self {
            side,
            cursor: BoardCoords { x, y },
            selected: None,
            ready: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.side.color()
    }

    #[inline]
    pub fn cursor_square(&self) -> Square {
        self.cursor.to_square()
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selected.map(BoardCoords::to_square)
    }

    /// Move the cursor by a direction as seen from this player's seat.
    ///
    /// The right-hand player looks at the board from black's side, so their
    /// directions are mirrored. `fast` doubles the step. The cursor wraps
    /// around the edges. Returns whether the cursor changed.
    pub fn move_cursor(&mut self, dx: i8, dy: i8, fast: bool) -> bool {
        let mirror: i16 = match self.side {
            Side::Left => 1,
            Side::Right => -1,
        };
        let multiplier: i16 = if fast { 2 } else { 1 };
        let x = (self.cursor.x as i16 + dx as i16 * multiplier * mirror).rem_euclid(8);
        let y = (self.cursor.y as i16 + dy as i16 * multiplier * mirror).rem_euclid(8);
        let moved = BoardCoords {
            x: x as u8,
            y: y as u8,
        };
        let changed = moved != self.cursor;
        self.cursor = moved;
        changed
    }
}
