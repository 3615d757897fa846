//! Scalar comparison and in-place ordering.
//!
//! All sorts here are adjacent-swap (bubble) sorts: O(n²), stable, and
//! allocation free. A pass that makes no swap ends the sort early.

use crate::traits::Comparison;

/// Returns the smaller of `x` and `y`; `y` when they compare equal.
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}

/// Returns the larger of `x` and `y`; `y` when they compare equal.
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

// Swaps neighbours while `out_of_order(left_index, left, right)` says so.
fn bubble<T, F>(seq: &mut [T], mut out_of_order: F)
where
    F: FnMut(usize, &T, &T) -> bool,
{
    let n = seq.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if out_of_order(j, &seq[j], &seq[j + 1]) {
                seq.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `seq` ascending in place and returns it for chaining.
///
/// Incomparable pairs (such as `NaN` against anything) are left where they
/// are.
pub fn sort<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    bubble(seq, |_, a, b| a > b);
    seq
}

/// Sorts `seq` in place with a three-way comparator and returns it.
///
/// `cmp(index_a, index_b, a, b)` is called for neighbouring positions
/// `index_b == index_a + 1`; a result that [`follows`](Comparison::follows)
/// (a positive number, or [`Ordering::Greater`](std::cmp::Ordering::Greater))
/// swaps them. Both indices are positions in `seq` at the time of the call.
/// They are not a pass counter paired with a position, so a comparator can
/// use them to look up side data kept in step with `seq`.
///
/// ```
/// use standout_algo::qsort;
///
/// let mut scores = [37, 53, 74, 7, 66];
/// qsort(&mut scores, |_, _, a, b| b - a);
/// assert_eq!(scores, [74, 66, 53, 37, 7]);
/// ```
pub fn qsort<T, R, F>(seq: &mut [T], mut cmp: F) -> &mut [T]
where
    F: FnMut(usize, usize, &T, &T) -> R,
    R: Comparison,
{
    bubble(seq, |index, a, b| cmp(index, index + 1, a, b).follows());
    seq
}
