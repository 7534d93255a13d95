//! # Reordering
//!
//! Moves the selected entries of one list up or down as a group.
//!
//! For a list of length `n` whose selected entries sit at ascending indices
//! `i_0 < … < i_{m-1}`, the k-th selected entry lands at
//!
//! ```text
//! up:   max(i_k - offset, k)
//! down: min(i_k + offset, n - m + k)
//! ```
//!
//! so the selection never passes a list boundary; it piles up against it
//! instead. Unselected entries keep their relative order and fill the
//! remaining slots.
//!
//! Small offsets are applied with repeated adjacent swaps, large ones by
//! rebuilding the list around precomputed destinations. Both produce the same
//! result; [`MAX_SWAP_COUNT`] only picks the cheaper one.

use super::entry::Entry;
use tracing::debug;

/// Largest offset that is still applied with the swap strategy.
pub const MAX_SWAP_COUNT: usize = 20;

/// Offset used when a caller does not specify one.
pub const DEFAULT_OFFSET: usize = 1;

/// Direction of a move within a single list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// How a move is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `offset` passes of adjacent swaps, O(offset * n)
    Swap,
    /// Partition and reinsert at computed destinations, O(n * m)
    Rebuild,
}

impl Strategy {
    pub fn for_offset(offset: usize) -> Self {
        if offset <= MAX_SWAP_COUNT {
            Strategy::Swap
        } else {
            Strategy::Rebuild
        }
    }
}

/// Indices of all selected entries, ascending.
pub fn selected_indices(entries: &[Entry]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.selected)
        .map(|(i, _)| i)
        .collect()
}

/// Move every selected entry `offset` places in `direction`.
///
/// Returns `false` when nothing is selected.
pub fn shift_selected(entries: &mut Vec<Entry>, direction: Direction, offset: usize) -> bool {
    shift_selected_with(entries, direction, offset, Strategy::for_offset(offset))
}

/// Same as [`shift_selected`] with an explicit strategy.
pub fn shift_selected_with(
    entries: &mut Vec<Entry>,
    direction: Direction,
    offset: usize,
    strategy: Strategy,
) -> bool {
    let selected = selected_indices(entries);
    if selected.is_empty() {
        return false;
    }

    debug!(
        ?direction,
        ?strategy,
        offset,
        selected = selected.len(),
        len = entries.len(),
        "shifting selection"
    );

    match strategy {
        Strategy::Swap => swap_passes(entries, direction, offset),
        Strategy::Rebuild => {
            let dest = destinations(&selected, entries.len(), direction, offset);
            rebuild(entries, &dest);
        }
    }
    true
}

/// Final index of each selected entry, in the order of `selected`.
pub fn destinations(
    selected: &[usize],
    len: usize,
    direction: Direction,
    offset: usize,
) -> Vec<usize> {
    let count = selected.len();
    selected
        .iter()
        .enumerate()
        .map(|(k, &i)| match direction {
            Direction::Up => i.saturating_sub(offset).max(k),
            Direction::Down => i.saturating_add(offset).min(len - count + k),
        })
        .collect()
}

fn swap_passes(entries: &mut [Entry], direction: Direction, offset: usize) {
    let len = entries.len();
    for _ in 0..offset {
        let mut moved = false;
        match direction {
            Direction::Up => {
                for j in 1..len {
                    if entries[j].selected && !entries[j - 1].selected {
                        entries.swap(j - 1, j);
                        moved = true;
                    }
                }
            }
            Direction::Down => {
                for j in (0..len.saturating_sub(1)).rev() {
                    if entries[j].selected && !entries[j + 1].selected {
                        entries.swap(j, j + 1);
                        moved = true;
                    }
                }
            }
        }
        // Selection is packed against the boundary
        if !moved {
            break;
        }
    }
}

fn rebuild(entries: &mut Vec<Entry>, dest: &[usize]) {
    let (picked, mut rebuilt): (Vec<Entry>, Vec<Entry>) =
        entries.drain(..).partition(|e| e.selected);

    // Ascending destinations, so each insert lands after the previous ones
    for (entry, &index) in picked.into_iter().zip(dest) {
        rebuilt.insert(index, entry);
    }

    for entry in &mut rebuilt {
        entry.selected = false;
    }
    for &index in dest {
        rebuilt[index].selected = true;
    }

    *entries = rebuilt;
}

/// Direction and offset that bring the first selected entry to the 1-based
/// `target` without pushing the last selected entry past the end.
///
/// `None` when nothing would move: the selection already starts at
/// `target`, or it already sits against the bottom.
pub fn offset_to_position(
    first: usize,
    last: usize,
    len: usize,
    target: usize,
) -> Option<(Direction, usize)> {
    let target_index = target.saturating_sub(1);
    if first > target_index {
        Some((Direction::Up, first - target_index))
    } else if first < target_index {
        let mut offset = target_index - first;
        let tail = last + offset;
        if tail > len.saturating_sub(1) {
            offset -= tail - len.saturating_sub(1);
        }
        (offset > 0).then_some((Direction::Down, offset))
    } else {
        None
    }
}
