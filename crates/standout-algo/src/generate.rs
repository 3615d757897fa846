//! Building slices from a rule or by repetition.

/// Returns `count` elements where element `i` is `f(i)`.
pub fn generate<T, F>(count: usize, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..count).map(f).collect()
}

/// Returns `count` copies of `element`.
pub fn repeat_element<T>(count: usize, element: T) -> Vec<T>
where
    T: Clone,
{
    vec![element; count]
}

/// Returns `count` back-to-back copies of `seq`.
///
/// The result has `count * seq.len()` elements.
pub fn repeat_array<T>(count: usize, seq: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut result = Vec::with_capacity(count.saturating_mul(seq.len()));
    for _ in 0..count {
        result.extend_from_slice(seq);
    }
    result
}
