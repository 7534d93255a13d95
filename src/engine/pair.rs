use super::entry::Entry;
use super::error::{InvalidArgument, Result};
use super::reorder::{self, Direction};
use super::side::Side;
use super::sort::{self, SortMode};
use super::transfer;

/// Operations over a pair of option lists owned by the caller.
///
/// The engine only borrows the two lists; dropping it hands them back
/// unchanged apart from whatever operations were applied.
#[derive(Debug)]
pub struct ListPairEngine<'a> {
    left: &'a mut Vec<Entry>,
    right: &'a mut Vec<Entry>,
}

impl<'a> ListPairEngine<'a> {
    pub fn new(left: &'a mut Vec<Entry>, right: &'a mut Vec<Entry>) -> Self {
        Self { left, right }
    }

    /// The list for `side`.
    pub fn entries(&self, side: Side) -> &[Entry] {
        match side {
            Side::Left => self.left.as_slice(),
            Side::Right => self.right.as_slice(),
        }
    }

    fn entries_mut(&mut self, side: Side) -> &mut Vec<Entry> {
        match side {
            Side::Left => &mut *self.left,
            Side::Right => &mut *self.right,
        }
    }

    /// Resolve a textual designator (`L`, `l`, `R`, `r`) to its list.
    pub fn resolve_box(&self, designator: &str) -> Result<&[Entry]> {
        let side: Side = designator.parse()?;
        Ok(self.entries(side))
    }

    // -- Transfer --

    /// Move entries out of `from` onto the end of the other list.
    pub fn transfer(&mut self, from: Side, move_all: bool) -> bool {
        match from {
            Side::Left => transfer::transfer(self.left, self.right, move_all),
            Side::Right => transfer::transfer(self.right, self.left, move_all),
        }
    }

    /// Move selected (or all) entries from the left list to the right one.
    pub fn move_right(&mut self, move_all: bool) -> bool {
        self.transfer(Side::Left, move_all)
    }

    /// Move selected (or all) entries from the right list to the left one.
    pub fn move_left(&mut self, move_all: bool) -> bool {
        self.transfer(Side::Right, move_all)
    }

    // -- Reordering --

    /// Move the selected entries `offset` places toward the top.
    ///
    /// Returns `false` when nothing is selected.
    pub fn move_up(&mut self, side: Side, offset: usize) -> bool {
        reorder::shift_selected(self.entries_mut(side), Direction::Up, offset)
    }

    /// Move the selected entries `offset` places toward the bottom.
    ///
    /// Returns `false` when nothing is selected.
    pub fn move_down(&mut self, side: Side, offset: usize) -> bool {
        reorder::shift_selected(self.entries_mut(side), Direction::Down, offset)
    }

    /// Move the selected block so its first entry lands on the 1-based
    /// `target` position.
    ///
    /// When moving down, the distance is shortened so the last selected
    /// entry stops at the end of the list. Returns `Ok(false)` when nothing
    /// is selected, the block already starts at `target`, or the block
    /// already sits against the bottom.
    pub fn move_to_position(&mut self, side: Side, target: usize) -> Result<bool> {
        let len = self.entries(side).len();
        if !(1..=len).contains(&target) {
            return Err(InvalidArgument::new(format!(
                "Position to move to must be between 1 and {len}, got {target}."
            )));
        }

        let (Some(first), Some(last)) = (self.first_selected(side), self.last_selected(side))
        else {
            return Ok(false);
        };

        let moved = match reorder::offset_to_position(first, last, len, target) {
            Some((Direction::Up, offset)) => self.move_up(side, offset),
            Some((Direction::Down, offset)) => self.move_down(side, offset),
            None => false,
        };
        Ok(moved)
    }

    // -- Sorting --

    /// Sort one list by the given composite key segment, clearing selection.
    pub fn sort(&mut self, side: Side, mode: SortMode) {
        sort::sort_entries(self.entries_mut(side), mode);
    }

    pub fn sort_numeric(&mut self, side: Side) {
        self.sort(side, SortMode::Numeric);
    }

    pub fn sort_alphabetic(&mut self, side: Side) {
        self.sort(side, SortMode::Alphabetic);
    }

    /// Check that every entry carries the key segment `mode` sorts on.
    pub fn validate_sort_keys(&self, side: Side, mode: SortMode) -> Result<()> {
        sort::validate_sort_keys(self.entries(side), mode)
    }

    // -- Queries and selection --

    /// Values of every entry, in display order.
    pub fn option_values(&self, side: Side) -> Vec<String> {
        self.entries(side).iter().map(|e| e.value.clone()).collect()
    }

    pub fn select_all(&mut self, side: Side) {
        for entry in self.entries_mut(side).iter_mut() {
            entry.selected = true;
        }
    }

    pub fn select_none(&mut self, side: Side) {
        for entry in self.entries_mut(side).iter_mut() {
            entry.selected = false;
        }
    }

    /// Mark the given 0-based indices as selected, leaving the rest as they
    /// are. Nothing changes if any index is out of range.
    pub fn select_indices(&mut self, side: Side, indices: &[usize]) -> Result<()> {
        let len = self.entries(side).len();
        if let Some(bad) = indices.iter().find(|&&i| i >= len) {
            return Err(InvalidArgument::new(format!(
                "Index {bad} is out of range for the {side} list of {len} entries."
            )));
        }

        let entries = self.entries_mut(side);
        for &index in indices {
            entries[index].selected = true;
        }
        Ok(())
    }

    pub fn selected_count(&self, side: Side) -> usize {
        self.entries(side).iter().filter(|e| e.selected).count()
    }

    pub fn first_selected(&self, side: Side) -> Option<usize> {
        self.entries(side).iter().position(|e| e.selected)
    }

    pub fn last_selected(&self, side: Side) -> Option<usize> {
        self.entries(side).iter().rposition(|e| e.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Entry> {
        (1..=count)
            .map(|i| Entry::new(format!("Item {i}"), format!("{i}|item{i}")))
            .collect()
    }

    #[test]
    fn test_resolve_box() {
        let mut left = numbered(2);
        let mut right = numbered(3);
        let engine = ListPairEngine::new(&mut left, &mut right);

        assert_eq!(engine.resolve_box("l").expect("left").len(), 2);
        assert_eq!(engine.resolve_box("r").expect("right").len(), 3);
        assert!(engine.resolve_box("X").is_err());
        assert!(engine.resolve_box("").is_err());
    }

    #[test]
    fn test_move_right_and_left() {
        let mut left = numbered(3);
        let mut right = Vec::new();
        left[1].selected = true;

        let mut engine = ListPairEngine::new(&mut left, &mut right);
        assert!(engine.move_right(false));
        assert_eq!(engine.option_values(Side::Right), ["2|item2"]);
        assert!(engine.move_left(true));
        assert_eq!(
            engine.option_values(Side::Left),
            ["1|item1", "3|item3", "2|item2"]
        );
        assert!(engine.entries(Side::Right).is_empty());
    }

    #[test]
    fn test_move_to_position_validates_before_selection() {
        let mut left = numbered(5);
        let mut right = Vec::new();
        let mut engine = ListPairEngine::new(&mut left, &mut right);

        assert!(engine.move_to_position(Side::Left, 0).is_err());
        assert!(engine.move_to_position(Side::Left, 6).is_err());
        assert_eq!(engine.move_to_position(Side::Left, 3), Ok(false));
        assert!(engine.move_to_position(Side::Right, 1).is_err());
    }

    #[test]
    fn test_move_to_position_already_there() {
        let mut left = numbered(5);
        let mut right = Vec::new();
        left[2].selected = true;
        let mut engine = ListPairEngine::new(&mut left, &mut right);

        assert_eq!(engine.move_to_position(Side::Left, 3), Ok(false));
        assert_eq!(engine.first_selected(Side::Left), Some(2));
    }

    #[test]
    fn test_selection_helpers() {
        let mut left = numbered(4);
        let mut right = Vec::new();
        let mut engine = ListPairEngine::new(&mut left, &mut right);

        assert_eq!(engine.selected_count(Side::Left), 0);
        engine.select_indices(Side::Left, &[1, 3]).expect("in range");
        assert_eq!(engine.selected_count(Side::Left), 2);
        assert_eq!(engine.first_selected(Side::Left), Some(1));
        assert_eq!(engine.last_selected(Side::Left), Some(3));

        assert!(engine.select_indices(Side::Left, &[0, 9]).is_err());
        assert!(!engine.entries(Side::Left)[0].selected);

        engine.select_all(Side::Left);
        assert_eq!(engine.selected_count(Side::Left), 4);
        engine.select_none(Side::Left);
        assert_eq!(engine.selected_count(Side::Left), 0);
    }
}
