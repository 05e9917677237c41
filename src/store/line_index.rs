//! Line index: logical line number -> entry, in O(log n).
//!
//! Entries keep the start line they were given when appended (or at the last
//! reindex). Eviction never renumbers the survivors; instead the store keeps a
//! running count of evicted lines, and every stored start is translated by
//! subtracting it:
//!
//! ```text
//! translated_start(i) = entries[i].start_line - evicted_lines
//! range(i)            = [translated_start(i), translated_start(i) + line_count(i))
//! ```

use std::collections::VecDeque;

use crate::model::{Entry, EntryIndex};

/// Binary search for the entry whose translated range contains `line`.
///
/// Range membership is half-open, so a line sitting exactly on the boundary
/// between two entries belongs to the later one. The search window is kept
/// half-open as well (`[lo, hi)`), so narrowing it never steps below index 0.
///
/// # Returns
///
/// - `Some(index)` of the containing entry
/// - `None` if `entries` is empty or `line` is past the last retained line
///
/// # Examples
///
/// ```
/// # use std::collections::VecDeque;
/// # use scrollbuf::model::{Entry, EntryIndex};
/// # use scrollbuf::store::line_index::locate;
/// let mut entries: VecDeque<Entry<()>> = VecDeque::new();
/// entries.push_back(Entry::new("a\nb", None, None, 10)); // [0..2) after eviction of 10
/// entries.push_back(Entry::new("c", None, None, 12));    // [2..3)
///
/// assert_eq!(locate(&entries, 10, 0), Some(EntryIndex::new(0)));
/// assert_eq!(locate(&entries, 10, 2), Some(EntryIndex::new(1)));
/// assert_eq!(locate(&entries, 10, 3), None);
/// ```
pub fn locate<A>(
    entries: &VecDeque<Entry<A>>,
    evicted_lines: usize,
    line: usize,
) -> Option<EntryIndex> {
    let mut lo = 0;
    let mut hi = entries.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let entry = &entries[mid];
        let first = translated_start(entry, evicted_lines);
        let end = first + entry.line_count();

        if line < first {
            hi = mid;
        } else if line >= end {
            lo = mid + 1;
        } else {
            return Some(EntryIndex::new(mid));
        }
    }

    None
}

/// Current logical line number of the entry's first physical line.
pub fn translated_start<A>(entry: &Entry<A>, evicted_lines: usize) -> usize {
    entry.start_line().saturating_sub(evicted_lines)
}
