//! Inbound discrete action events.
//!
//! Adapters speak to the core in tags (`"confirm"`, `"left"`). Decoding a tag
//! the core does not know is a contract violation and is reported as an
//! error instead of being dropped like an illegal move would be.

use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Pick up the own piece under the cursor.
    Select,
    /// Primary button: select, deselect, reselect, move or queue a premove.
    Confirm,
    /// Drop the current selection.
    Cancel,
}

impl FromStr for ActionKind {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(ActionKind::Select),
            "confirm" | "activate" => Ok(ActionKind::Confirm),
            "cancel" => Ok(ActionKind::Cancel),
            _ => Err(ChessErrors::UnrecognizedAction(s.to_string())),
        }
    }
}

/// One player intent. It acts on the side's cursor as it stands when the
/// event is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub side: Side,
    pub kind: ActionKind,
}

impl ActionEvent {
    #[inline]
    pub const fn new(side: Side, kind: ActionKind) -> Self {
        Self { side, kind }
    }

    /// Decode an event from adapter tags, e.g. `("black", "confirm")`.
    pub fn from_tags(side: &str, kind: &str) -> Result<Self, ChessErrors> {
        Ok(Self {
            side: side.parse()?,
            kind: kind.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_decode() {
        let event = ActionEvent::from_tags("white", "Confirm").unwrap();
        assert_eq!(event, ActionEvent::new(Side::Left, ActionKind::Confirm));
        assert_eq!("activate".parse::<ActionKind>(), Ok(ActionKind::Confirm));
    }

    #[test]
    fn unknown_kind_is_rejected_at_the_boundary() {
        assert_eq!(
            ActionEvent::from_tags("left", "castle"),
            Err(ChessErrors::UnrecognizedAction("castle".to_string()))
        );
        assert!(matches!(
            ActionEvent::from_tags("top", "select"),
            Err(ChessErrors::UnrecognizedSide(_))
        ));
    }
}
