//! Linear search and counting.
//!
//! Slice searches return positions, mapping searches return keys. Absence
//! is never an error: slices report `None` (or [`NOT_FOUND`] through
//! [`sentinel`]) and mappings report an empty collection.

use std::collections::HashSet;
use std::hash::Hash;

use crate::traits::Mapping;

/// Numeric "not found" position.
pub const NOT_FOUND: isize = -1;

/// Converts a search result into its numeric form: the index, or
/// [`NOT_FOUND`] when absent.
///
/// Indices above `isize::MAX` (only reachable with zero-sized elements)
/// have no numeric form and also map to [`NOT_FOUND`].
pub fn sentinel(position: Option<usize>) -> isize {
    position.map_or(NOT_FOUND, |index| {
        isize::try_from(index).unwrap_or(NOT_FOUND)
    })
}

/// Returns the index of the first element equal to `element`.
pub fn find<T>(seq: &[T], element: &T) -> Option<usize>
where
    T: PartialEq,
{
    seq.iter().position(|x| x == element)
}

/// Returns the index of the first element for which
/// `predicate(index, value)` holds.
pub fn find_if<T, F>(seq: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .find(|(index, value)| predicate(*index, *value))
        .map(|(index, _)| index)
}

/// Counts the elements equal to `element`.
pub fn count<T>(seq: &[T], element: &T) -> usize
where
    T: PartialEq,
{
    seq.iter().filter(|x| *x == element).count()
}

/// Counts the elements for which `predicate(index, value)` holds.
pub fn count_if<T, F>(seq: &[T], mut predicate: F) -> usize
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|(index, value)| predicate(*index, *value))
        .count()
}

/// Returns every key whose value equals `element`.
///
/// Values need not be unique, so several keys may come back. Their order
/// follows the mapping's enumeration order.
pub fn map_find_v<M>(m: &M, element: &M::Value) -> Vec<M::Key>
where
    M: Mapping,
    M::Key: Clone,
    M::Value: PartialEq,
{
    m.entries()
        .filter(|(_, value)| *value == element)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Returns the set of keys whose value equals `element`.
///
/// Same matches as [`map_find_v`], collected into a set.
pub fn map_find_k<M>(m: &M, element: &M::Value) -> HashSet<M::Key>
where
    M: Mapping,
    M::Key: Clone + Eq + Hash,
    M::Value: PartialEq,
{
    m.entries()
        .filter(|(_, value)| *value == element)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Returns the first enumerated key whose value equals `element`.
///
/// When several keys match, which one is returned depends on the
/// mapping's enumeration order.
pub fn map_find_first<M>(m: &M, element: &M::Value) -> Option<M::Key>
where
    M: Mapping,
    M::Key: Clone,
    M::Value: PartialEq,
{
    m.entries()
        .find(|(_, value)| *value == element)
        .map(|(key, _)| key.clone())
}

/// Returns every key for which `predicate(key, value)` holds.
pub fn map_find_if<M, F>(m: &M, mut predicate: F) -> Vec<M::Key>
where
    M: Mapping,
    M::Key: Clone,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    m.entries()
        .filter(|(key, value)| predicate(*key, *value))
        .map(|(key, _)| key.clone())
        .collect()
}

/// Counts the values equal to `element`.
pub fn map_count<M>(m: &M, element: &M::Value) -> usize
where
    M: Mapping,
    M::Value: PartialEq,
{
    m.entries().filter(|(_, value)| *value == element).count()
}

/// Counts the pairs for which `predicate(key, value)` holds.
pub fn map_count_if<M, F>(m: &M, mut predicate: F) -> usize
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    m.entries()
        .filter(|(key, value)| predicate(*key, *value))
        .count()
}
