//! # Engine Module
//!
//! Reorder, transfer and sort operations over a pair of ordered option lists.
//!
//! ## Components
//!
//! - [`ListPairEngine`] - Borrows the left and right lists and applies operations to them
//! - [`Entry`] - A single option (text, value, selection flag)
//! - [`Side`] - Which list an operation targets, parsed from `L`/`R` designators
//! - [`InvalidArgument`] - The only error; raised before anything is mutated
//!
//! ## Layout
//!
//! ```text
//!   LEFT                         RIGHT
//! ┌──────────┐  move_right  ┌──────────┐
//! │ entry    │ ───────────► │ entry    │
//! │ entry  * │              │ entry    │
//! │ entry    │ ◄─────────── │ entry  * │
//! └──────────┘  move_left   └──────────┘
//!   ▲ move_up / move_down / move_to_position / sort (per list)
//! ```
//!
//! ## Results
//!
//! Contract violations (bad designator, position out of range, malformed
//! offset text) are `Err(InvalidArgument)`. "Nothing to do" is not an error:
//! operations report it by returning `false`.

pub mod entry;
pub mod error;
pub mod pair;
pub mod reorder;
pub mod side;
pub mod sort;
pub mod transfer;

pub use entry::{CompositeKey, Entry};
pub use error::{InvalidArgument, Result};
pub use pair::ListPairEngine;
pub use reorder::{Direction, Strategy, DEFAULT_OFFSET, MAX_SWAP_COUNT};
pub use side::{parse_offset, parse_position, Side};
pub use sort::SortMode;
