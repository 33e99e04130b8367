use std::cmp::Ordering;

/// Maximum number of words returned by [`SubstringIndex::find`](crate::SubstringIndex::find).
pub const MAX_RESULTS: usize = 10;

/// Orders `(word, count)` entries by count descending, then word ascending.
///
/// Words compare by code point, which for `str` is the same as byte order.
pub(crate) fn by_rank(a: &(&str, u32), b: &(&str, u32)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Sorts entries into rank order in place.
pub(crate) fn sort_ranked(entries: &mut [(&str, u32)]) {
    // Keys are distinct, so an unstable sort is deterministic here.
    entries.sort_unstable_by(by_rank);
}
