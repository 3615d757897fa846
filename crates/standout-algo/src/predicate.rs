//! Predicate combinators over one or two containers.
//!
//! The `*_satisfy` forms evaluate the predicate over the cross product of
//! both containers (every element of the first against every element of
//! the second), not index-aligned pairs. Use [`zip`](crate::zip) for the
//! aligned walk.

use crate::traits::Mapping;

/// Returns `true` if `predicate(index, value)` holds for every element.
///
/// An empty slice satisfies any predicate. Stops at the first failure.
pub fn all<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .all(|(index, value)| predicate(index, value))
}

/// Returns `true` if `predicate(value)` holds for at least one element.
///
/// An empty slice never matches. Stops at the first success.
pub fn any<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// Returns `true` if every pair in the cross product of `a` and `b`
/// satisfies `predicate(index_a, index_b, value_a, value_b)`.
///
/// Trivially `true` when either slice is empty.
pub fn all_satisfy<T, U, F>(a: &[T], b: &[U], mut predicate: F) -> bool
where
    F: FnMut(usize, usize, &T, &U) -> bool,
{
    a.iter().enumerate().all(|(index_a, value_a)| {
        b.iter()
            .enumerate()
            .all(|(index_b, value_b)| predicate(index_a, index_b, value_a, value_b))
    })
}

/// Returns `true` if at least one pair in the cross product of `a` and `b`
/// satisfies `predicate(index_a, index_b, value_a, value_b)`.
///
/// Always `false` when either slice is empty.
pub fn any_satisfy<T, U, F>(a: &[T], b: &[U], mut predicate: F) -> bool
where
    F: FnMut(usize, usize, &T, &U) -> bool,
{
    a.iter().enumerate().any(|(index_a, value_a)| {
        b.iter()
            .enumerate()
            .any(|(index_b, value_b)| predicate(index_a, index_b, value_a, value_b))
    })
}

/// Same as [`all`], over the key-value pairs of a mapping.
pub fn map_all<M, F>(m: &M, mut predicate: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    m.entries().all(|(key, value)| predicate(key, value))
}

/// Same as [`any`], over the key-value pairs of a mapping.
///
/// Unlike [`any`], the predicate receives the key as well as the value.
pub fn map_any<M, F>(m: &M, mut predicate: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    m.entries().any(|(key, value)| predicate(key, value))
}

/// Same as [`all_satisfy`], over the cross product of two mappings.
pub fn map_all_satisfy<M, N, F>(a: &M, b: &N, mut predicate: F) -> bool
where
    M: Mapping,
    N: Mapping,
    F: FnMut(&M::Key, &N::Key, &M::Value, &N::Value) -> bool,
{
    a.entries().all(|(key_a, value_a)| {
        b.entries()
            .all(|(key_b, value_b)| predicate(key_a, key_b, value_a, value_b))
    })
}

/// Same as [`any_satisfy`], over the cross product of two mappings.
pub fn map_any_satisfy<M, N, F>(a: &M, b: &N, mut predicate: F) -> bool
where
    M: Mapping,
    N: Mapping,
    F: FnMut(&M::Key, &N::Key, &M::Value, &N::Value) -> bool,
{
    a.entries().any(|(key_a, value_a)| {
        b.entries()
            .any(|(key_b, value_b)| predicate(key_a, key_b, value_a, value_b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn all_even() {
        let is_even = |_: usize, n: &i32| n % 2 == 0;
        assert!(all(&[2, 4, 6, 8, 10], is_even));
        assert!(!all(&[2, 3, 5, 7, 9], is_even));
        assert!(!all(&[2, 4, -5, 2, 1], |_, n: &i32| *n < 0));
    }

    #[test]
    fn all_passes_indices() {
        assert!(all(&[0, 1, 2, 3], |index, value: &usize| index == *value));
    }

    #[test]
    fn all_short_circuits() {
        let mut calls = 0;
        assert!(!all(&[1, -1, 2, 3], |_, n: &i32| {
            calls += 1;
            *n > 0
        }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn any_vacuous_cases() {
        let empty: [i32; 0] = [];
        assert!(all(&empty, |_, _| false));
        assert!(!any(&empty, |_| true));
    }

    #[test]
    fn any_matches() {
        assert!(any(&[1, 3, 4, 7, 9], |n: &i32| n % 2 == 0));
        assert!(any(&[2, 4, -5, 2, 1], |n: &i32| *n < 0));
        assert!(!any(&[1, 3, 5], |n: &i32| n % 2 == 0));
    }

    #[test]
    fn all_satisfy_is_cross_product() {
        let a = [1];
        let b = [2, 3];
        let mut pairs = Vec::new();
        assert!(all_satisfy(&a, &b, |i, j, _, _| {
            pairs.push((i, j));
            true
        }));
        assert_eq!(pairs, vec![(0, 0), (0, 1)]);

        // One failing pair out of six is enough.
        let a = [1, 2, 3];
        let b = [10, 20];
        assert!(!all_satisfy(&a, &b, |_, _, x: &i32, y: &i32| {
            !(*x == 3 && *y == 20)
        }));
    }

    #[test]
    fn all_satisfy_is_not_index_aligned() {
        // Aligned pairs all satisfy x < y, but (2, 1) does not.
        let a = [0, 2];
        let b = [1, 3];
        assert!(!all_satisfy(&a, &b, |_, _, x: &i32, y: &i32| x < y));
    }

    #[test]
    fn satisfy_with_empty_side() {
        let empty: [i32; 0] = [];
        assert!(all_satisfy(&[1, 2], &empty, |_, _, _, _| false));
        assert!(all_satisfy(&empty, &[1, 2], |_, _, _, _| false));
        assert!(!any_satisfy(&[1, 2], &empty, |_, _, _, _| true));
        assert!(!any_satisfy(&empty, &[1, 2], |_, _, _, _| true));
    }

    #[test]
    fn any_satisfy_finds_single_pair() {
        let a = ["apple", "pear"];
        let b = ['x', 'q', 'r'];
        let contains = |_: usize, _: usize, word: &&str, c: &char| word.contains(*c);
        assert!(any_satisfy(&a, &b, contains));
        assert!(!any_satisfy(&a, &['z'], contains));
    }

    #[test]
    fn map_all_squares() {
        let m: HashMap<i32, i32> = (0..=16).map(|x| (x, x * x)).collect();
        assert!(map_all(&m, |x, y| x * x == *y));

        let m: HashMap<&str, i32> = [("1", 1), ("12", 12), ("123", 123), ("456", 456)]
            .into_iter()
            .collect();
        assert!(map_all(&m, |k, v| k.parse::<i32>().ok() == Some(*v)));
    }

    #[test]
    fn map_any_nested() {
        let mut m: HashMap<&str, Vec<&str>> = HashMap::new();
        m.insert("ABCDEFGHIJKLMNOPQRSTUVWXYZ", vec!["abc", "<=>"]);
        m.insert("hello world", vec!["!"]);
        m.insert("abcdef", vec!["AB", "c", "DEF"]);
        assert!(map_any(&m, |k, v| any(v, |s: &&str| k.contains(*s))));
    }

    #[test]
    fn map_vacuous_cases() {
        let empty: BTreeMap<i32, i32> = BTreeMap::new();
        assert!(map_all(&empty, |_, _| false));
        assert!(!map_any(&empty, |_, _| true));
    }

    #[test]
    fn map_satisfy_cross_product() {
        let a: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let b: BTreeMap<char, i32> = [('x', 10), ('y', 20)].into_iter().collect();

        let mut visits = 0;
        assert!(map_all_satisfy(&a, &b, |_, _, x, y| {
            visits += 1;
            x < y
        }));
        assert_eq!(visits, 4);

        assert!(map_any_satisfy(&a, &b, |k, c, _, _| *k == "b" && *c == 'y'));
        assert!(!map_any_satisfy(&a, &b, |_, _, x, y| x > y));
    }
}
