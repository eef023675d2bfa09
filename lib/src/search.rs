use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchMode {
    /// Return as soon as the midpoint compares equal.
    Lookup,
    /// Keep narrowing on equality and report the lower bound.
    Insertion,
}

// Note: Like the standard library's `binary_search_by`, `f` reports how the
// element at the visited index orders relative to the target. Unlike it, the lookup mode
// stops at the first equal midpoint, and the insertion mode always yields the
// leftmost slot among equal elements.
//
// Returns `(index, true)` on an exact hit (lookup mode only), otherwise
// `(lower_bound, false)`.
pub(crate) fn binary_search_by<F>(len: usize, mode: SearchMode, mut f: F) -> (usize, bool)
where
    F: FnMut(usize) -> Ordering,
{
    let mut l: usize = 0;
    let mut r: usize = len;

    while r > l {
        let mid = l + (r - l) / 2;

        let cmp = f(mid);
        match cmp {
            Ordering::Less => {
                l = mid + 1;
            }
            Ordering::Equal if mode == SearchMode::Lookup => {
                return (mid, true)
            }
            Ordering::Equal | Ordering::Greater => {
                r = mid;
            }
        }
    }

    (l, false)
}
