//! Box designators and textual argument parsing.
//!
//! Hosts usually receive designators, offsets and positions as text (form
//! fields, command-line arguments). The parsers here turn that text into the
//! typed arguments the engine takes, rejecting anything outside the contract
//! with [`InvalidArgument`].

use super::error::{InvalidArgument, Result};
use std::fmt;
use std::str::FromStr;

/// Which of the two lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self> {
        let designator = s.trim();
        if designator.is_empty() {
            return Err(InvalidArgument::new("Listbox to manipulate not specified."));
        }
        match designator {
            "L" | "l" => Ok(Side::Left),
            "R" | "r" => Ok(Side::Right),
            _ => Err(InvalidArgument::new(format!(
                "Listbox specifier must be either 'L' or 'R', got '{designator}'."
            ))),
        }
    }
}

/// Parse a move offset. Must be a non-negative integer.
pub fn parse_offset(raw: &str) -> Result<usize> {
    parse_count(raw, "Number of positions to move")
}

/// Parse a 1-based target position. Range checking against the list length
/// happens in the engine.
pub fn parse_position(raw: &str) -> Result<usize> {
    if raw.trim().is_empty() {
        return Err(InvalidArgument::new("Position to move to must be specified."));
    }
    parse_count(raw, "Position to move to")
}

fn parse_count(raw: &str, what: &str) -> Result<usize> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.fract() != 0.0 || trimmed.contains('.') => Err(InvalidArgument::new(
            format!("{what} must be an integer, got '{trimmed}'."),
        )),
        Ok(n) if n < 0.0 => Err(InvalidArgument::new(format!(
            "{what} must not be negative, got '{trimmed}'."
        ))),
        _ => Err(InvalidArgument::new(format!(
            "Invalid {} specified: '{trimmed}'.",
            what.to_lowercase()
        ))),
    }
}
