//! Errors for board geometry and state validation.

use thiserror::Error;

use crate::{Player, Value};

/// Errors that can occur when validating a table configuration.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("invalid board size: expected at least 1 vertex, got 0")]
    ZeroSize,

    #[error("invalid value count: expected at least 1 non-empty value, got 0")]
    ZeroValues,

    #[error("invalid key width: expected 1 to {max} bits, got {bits}")]
    KeyBitsOutOfRange { bits: u32, max: u32 },

    #[error("invalid table configuration: {0}")]
    Parse(String),
}

/// Errors that can occur when a board state does not match the table geometry.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StateShapeError {
    #[error("state length mismatch: expected {expected} vertices, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("value {value} at vertex {vertex} is out of range (max {max})")]
    ValueOutOfRange { vertex: usize, value: Value, max: Value },

    #[error("player {player} is out of range (max {max})")]
    PlayerOutOfRange { player: Player, max: Player },
}
