//! # Store Module
//!
//! Persists the list pair between invocations of the command-line host.
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "left": [
//!     { "text": "Apple", "value": "1|apple", "selected": true }
//!   ],
//!   "right": [
//!     { "text": "Banana", "value": "2|banana" }
//!   ],
//!   "updated_at": "2026-02-05T10:30:00Z"
//! }
//! ```
//!
//! `selected` may be omitted and defaults to `false`. Both lists are required.

mod state;

pub use state::{default_state_path, PairState, DEFAULT_STATE_FILE};
