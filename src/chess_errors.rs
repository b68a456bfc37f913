//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned at the crate's boundaries:
//! parsing squares and sides, decoding inbound action events, and changing the
//! match configuration.
//!
//! Gameplay itself never fails. Selecting an empty square, confirming an
//! illegal target or a premove landing on a square that became illegal all
//! degrade to "nothing happens" and do not produce a `ChessErrors` value. The
//! variants below therefore describe contract violations between an adapter
//! and the core, or malformed operator input.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChessErrors {
    /// An inbound action event named a kind the core does not know.
    ///
    /// Payload: the offending tag as received from the adapter.
    #[error("unrecognized action kind `{0}`")]
    UnrecognizedAction(String),

    /// An inbound event or command named a side that does not exist.
    #[error("unrecognized side `{0}`")]
    UnrecognizedSide(String),

    /// A single character used during algebraic parsing was invalid.
    #[error("invalid algebraic character `{0}`")]
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square.
    #[error("invalid algebraic square `{0}`")]
    InvalidAlgebraicString(String),

    /// Zero-based file or one-based rank outside the board.
    ///
    /// Payload: (file_index, rank).
    #[error("file/rank ({0}, {1}) is off the board")]
    InvalidFileOrRank(i8, i8),

    /// Display-space cursor coordinates outside `0..=7`.
    #[error("cursor coordinates ({0}, {1}) are off the board")]
    InvalidCoords(u8, u8),

    /// The requested cooldown is not one of the supported settings.
    ///
    /// Payload: the requested cooldown in whole seconds.
    #[error("unsupported cooldown of {0}s")]
    UnsupportedCooldown(u64),

    /// Configuration may only change while both players are readying up.
    #[error("match configuration is locked once the countdown starts")]
    ConfigurationLocked,

    /// The console front-end received a command it does not understand.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// A console argument that should be a whole number was not.
    #[error("expected a number, got `{0}`")]
    InvalidNumber(String),

    /// A console command was missing a required argument.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
