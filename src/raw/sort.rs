use smallvec::SmallVec;

/// Sorts `items` in place with a quicksort whose recursion is replaced by an
/// explicit stack of inclusive index ranges.
///
/// The pivot is the median of the first, middle and last element of each range.
/// The smaller partition is always processed first, which keeps the range stack
/// at O(log n) entries.
pub(crate) fn quicksort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let mut ranges: SmallVec<[(usize, usize); 32]> = SmallVec::new();
    ranges.push((0, items.len() - 1));

    while let Some((lo, hi)) = ranges.pop() {
        if lo >= hi {
            continue;
        }

        let pivot = partition(items, lo, hi);
        let left = (pivot > lo).then(|| (lo, pivot - 1));
        let right = (pivot < hi).then(|| (pivot + 1, hi));

        // Last pushed is popped first.
        match (left, right) {
            (Some(l), Some(r)) if l.1 - l.0 < r.1 - r.0 => {
                ranges.push(r);
                ranges.push(l);
            }
            (Some(l), Some(r)) => {
                ranges.push(l);
                ranges.push(r);
            }
            (Some(only), None) | (None, Some(only)) => ranges.push(only),
            (None, None) => {}
        }
    }
}

/// Orders `items[lo]`, `items[mid]`, `items[hi]` and returns `mid`, which now
/// holds the median of the three.
fn median_of_three<T: Ord>(items: &mut [T], lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    if items[mid] < items[lo] {
        items.swap(lo, mid);
    }
    if items[hi] < items[lo] {
        items.swap(lo, hi);
    }
    if items[hi] < items[mid] {
        items.swap(mid, hi);
    }
    mid
}

/// Lomuto partition of `items[lo..=hi]`. Returns the pivot's final index.
fn partition<T: Ord>(items: &mut [T], lo: usize, hi: usize) -> usize {
    let median = median_of_three(items, lo, hi);
    items.swap(median, hi);

    let mut store = lo;
    for i in lo..hi {
        if items[i] < items[hi] {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, hi);
    store
}
