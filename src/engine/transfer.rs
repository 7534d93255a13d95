use super::entry::Entry;
use tracing::debug;

/// Move entries from `source` to the end of `destination`.
///
/// With `move_all` every entry moves; otherwise only the selected ones do.
/// Moved entries keep their relative order and their selection flag, and the
/// entries left behind keep theirs. Returns whether anything moved.
pub fn transfer(source: &mut Vec<Entry>, destination: &mut Vec<Entry>, move_all: bool) -> bool {
    let before = destination.len();

    if move_all {
        destination.append(source);
    } else {
        let (moving, staying): (Vec<Entry>, Vec<Entry>) =
            source.drain(..).partition(|e| e.selected);
        *source = staying;
        destination.extend(moving);
    }

    let moved = destination.len() - before;
    debug!(moved, move_all, remaining = source.len(), "transferred entries");
    moved > 0
}
