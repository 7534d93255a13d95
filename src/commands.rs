//! # Commands
//!
//! One subcommand per engine operation. Each invocation of the binary loads
//! the pair, runs a single [`Command`] against it and saves the pair again
//! if anything changed.
//!
//! Designators, offsets and positions go through the engine's own parsers,
//! so malformed input is rejected with the same
//! [`InvalidArgument`](crate::engine::InvalidArgument) the library raises.

use crate::config::Config;
use crate::engine::{
    parse_offset, parse_position, Entry, InvalidArgument, Side, SortMode, DEFAULT_OFFSET,
};
use crate::store::PairState;
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Move selected entries from the left list to the right list
    Right {
        /// Move every entry, selected or not
        #[arg(long)]
        all: bool,
    },

    /// Move selected entries from the right list to the left list
    Left {
        /// Move every entry, selected or not
        #[arg(long)]
        all: bool,
    },

    /// Move the selected entries of a list up
    Up {
        /// List to reorder (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
        /// Number of positions to move
        #[arg(value_name = "OFFSET", value_parser = parse_offset)]
        offset: Option<usize>,
    },

    /// Move the selected entries of a list down
    Down {
        /// List to reorder (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
        /// Number of positions to move
        #[arg(value_name = "OFFSET", value_parser = parse_offset)]
        offset: Option<usize>,
    },

    /// Move the selected block so it starts at a 1-based position
    To {
        /// List to reorder (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
        /// Target position, starting at 1
        #[arg(value_name = "POSITION", value_parser = parse_position)]
        position: usize,
    },

    /// Sort a list by its composite values
    Sort {
        /// List to sort (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
        /// Sort on the numeric (first) or alphabetic (second) key
        #[arg(long = "by", value_name = "MODE")]
        mode: SortMode,
    },

    /// Print the values of a list, one per line
    Values {
        /// List to read (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
    },

    /// Select entries by 1-based position, or every entry when none are given
    Select {
        /// List to select in (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
        /// Positions to select, starting at 1
        #[arg(value_name = "POSITION", value_parser = parse_position)]
        positions: Vec<usize>,
    },

    /// Clear the selection of a list
    Deselect {
        /// List to clear (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
    },

    /// Append a new entry to a list
    Add {
        /// List to append to (L or R)
        #[arg(value_name = "BOX")]
        side: Side,
        /// Display text
        text: String,
        /// Value, conventionally "<number>|<name>"
        value: String,
    },

    /// Print both lists
    Show,
}

/// Result of running a command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Whether the pair was modified and needs saving
    pub changed: bool,
    /// Lines to print on stdout
    pub lines: Vec<String>,
}

impl Outcome {
    fn moved(changed: bool, message: &str, noop: &str) -> Self {
        Self {
            changed,
            lines: vec![if changed { message } else { noop }.to_string()],
        }
    }

    fn done(message: String) -> Self {
        Self {
            changed: true,
            lines: vec![message],
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self {
            changed: false,
            lines,
        }
    }
}

/// Run `command` against `state`.
pub fn execute(command: &Command, state: &mut PairState, config: &Config) -> Result<Outcome> {
    let outcome = match command {
        Command::Right { all } => Outcome::moved(
            state.engine().move_right(*all),
            "moved entries to the right list",
            "nothing to move",
        ),
        Command::Left { all } => Outcome::moved(
            state.engine().move_left(*all),
            "moved entries to the left list",
            "nothing to move",
        ),
        Command::Up { side, offset } => Outcome::moved(
            state
                .engine()
                .move_up(*side, offset.unwrap_or(DEFAULT_OFFSET)),
            "moved selection up",
            "nothing selected",
        ),
        Command::Down { side, offset } => Outcome::moved(
            state
                .engine()
                .move_down(*side, offset.unwrap_or(DEFAULT_OFFSET)),
            "moved selection down",
            "nothing selected",
        ),
        Command::To { side, position } => Outcome::moved(
            state.engine().move_to_position(*side, *position)?,
            "moved selection",
            "nothing selected or already in place",
        ),
        Command::Sort { side, mode } => {
            let mut engine = state.engine();
            if config.strict_sort_keys {
                engine.validate_sort_keys(*side, *mode)?;
            }
            engine.sort(*side, *mode);
            Outcome::done(format!("sorted {side} list ({mode})"))
        }
        Command::Values { side } => Outcome::lines(state.engine().option_values(*side)),
        Command::Select { side, positions } => {
            let mut engine = state.engine();
            if positions.is_empty() {
                engine.select_all(*side);
            } else {
                let indices = positions
                    .iter()
                    .map(|&p| {
                        p.checked_sub(1)
                            .ok_or_else(|| InvalidArgument::new("Positions start at 1."))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                engine.select_indices(*side, &indices)?;
            }
            let count = engine.selected_count(*side);
            Outcome::done(format!("{count} selected in {side} list"))
        }
        Command::Deselect { side } => {
            state.engine().select_none(*side);
            Outcome::done(format!("cleared {side} list selection"))
        }
        Command::Add { side, text, value } => {
            state.push(*side, Entry::new(text.as_str(), value.as_str()));
            Outcome::done(format!("added '{text}' to {side} list"))
        }
        Command::Show => Outcome::lines(render(state)),
    };

    Ok(outcome)
}

/// Plain-text listing of both lists. Selected entries are marked with `*`.
pub fn render(state: &PairState) -> Vec<String> {
    let mut lines = Vec::new();
    for side in [Side::Left, Side::Right] {
        let entries = state.entries(side);
        lines.push(format!("{side} ({}):", entries.len()));
        for (i, entry) in entries.iter().enumerate() {
            let marker = if entry.selected { '*' } else { ' ' };
            lines.push(format!(
                "  {:>3}. {marker} {} [{}]",
                i + 1,
                entry.text,
                entry.value
            ));
        }
    }
    lines
}
