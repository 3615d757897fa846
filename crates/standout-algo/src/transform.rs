//! Filter, transform and reduce over slices and mappings.
//!
//! Every operation here builds a new container or folds to a value; inputs
//! are only borrowed.
//!
//! # Mapping hazards
//!
//! Mapping enumeration order is unspecified, which has two consequences the
//! caller owns:
//!
//! - [`map_reduce`] and [`map_transform_reduce`] only give a stable answer
//!   when the fold does not care about visit order (sums, counts, min/max).
//! - [`map_transform`] may produce the same output key from two different
//!   input keys. The pair enumerated last wins, so with a `HashMap` input
//!   the surviving value is not predictable.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::Mapping;

/// Returns the elements for which `predicate(index, value)` holds, in
/// their original order.
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|(index, value)| predicate(*index, *value))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Applies `f(index, value)` to every element, in order.
pub fn transform<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    seq.iter()
        .enumerate()
        .map(|(index, value)| f(index, value))
        .collect()
}

/// Left fold: starting from `init`, replaces the accumulator with
/// `f(index, accumulator, value)` for each element in order.
pub fn reduce<T, U, F>(seq: &[T], init: U, mut f: F) -> U
where
    F: FnMut(usize, U, &T) -> U,
{
    seq.iter()
        .enumerate()
        .fold(init, |acc, (index, value)| f(index, acc, value))
}

/// Same as `reduce(&transform(seq, transform_fn), init, reduce_fn)`, in a
/// single pass without the intermediate vector.
pub fn transform_reduce<T, U, R, F>(
    seq: &[T],
    init: U,
    mut reduce_fn: R,
    mut transform_fn: F,
) -> U
where
    R: FnMut(usize, U, U) -> U,
    F: FnMut(usize, &T) -> U,
{
    seq.iter().enumerate().fold(init, |acc, (index, value)| {
        let mapped = transform_fn(index, value);
        reduce_fn(index, acc, mapped)
    })
}

/// Returns the pairs for which `predicate(key, value)` holds.
pub fn map_filter<M, F>(m: &M, mut predicate: F) -> HashMap<M::Key, M::Value>
where
    M: Mapping,
    M::Key: Clone + Eq + Hash,
    M::Value: Clone,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    m.entries()
        .filter(|(key, value)| predicate(*key, *value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Maps every pair through `f(key, value) -> (new_key, new_value)`.
///
/// If two input keys map to the same output key, the one enumerated last
/// overwrites the other; see the [module docs](self) for why that winner is
/// unspecified. The result never has more pairs than the input.
pub fn map_transform<M, UK, UV, F>(m: &M, mut f: F) -> HashMap<UK, UV>
where
    M: Mapping,
    UK: Eq + Hash,
    F: FnMut(&M::Key, &M::Value) -> (UK, UV),
{
    let mut result = HashMap::with_capacity(m.len());
    for (key, value) in m.entries() {
        let (new_key, new_value) = f(key, value);
        result.insert(new_key, new_value);
    }
    result
}

/// Same as [`reduce`], over the pairs of a mapping.
///
/// The fold must be order-independent for the result to be well defined.
pub fn map_reduce<M, U, F>(m: &M, init: U, mut f: F) -> U
where
    M: Mapping,
    F: FnMut(&M::Key, U, &M::Value) -> U,
{
    m.entries().fold(init, |acc, (key, value)| f(key, acc, value))
}

/// Same as [`transform_reduce`], over the pairs of a mapping.
///
/// The fold must be order-independent for the result to be well defined.
pub fn map_transform_reduce<M, U, R, F>(
    m: &M,
    init: U,
    mut reduce_fn: R,
    mut transform_fn: F,
) -> U
where
    M: Mapping,
    R: FnMut(&M::Key, U, U) -> U,
    F: FnMut(&M::Key, &M::Value) -> U,
{
    m.entries().fold(init, |acc, (key, value)| {
        let mapped = transform_fn(key, value);
        reduce_fn(key, acc, mapped)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::concatenate;
    use std::collections::BTreeMap;

    #[test]
    fn filter_keeps_order() {
        let seq = [5, -1, 3, -8, 0, 7];
        assert_eq!(filter(&seq, |_, n: &i32| *n >= 0), vec![5, 3, 0, 7]);
        assert_eq!(filter(&seq, |i, _| i % 2 == 1), vec![-1, -8, 7]);
        assert!(filter(&seq, |_, _| false).is_empty());
    }

    #[test]
    fn filter_leaves_input_alone() {
        let seq = vec!["a".to_string(), "bb".to_string()];
        let kept = filter(&seq, |_, s: &String| s.len() > 1);
        assert_eq!(kept, vec!["bb".to_string()]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn transform_squares() {
        let seq: Vec<i32> = (1..=10).collect();
        assert_eq!(
            transform(&seq, |_, x| x * x),
            vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100]
        );
    }

    #[test]
    fn transform_changes_type() {
        let labels = transform(&[3, 1], |i, n: &i32| format!("{i}:{n}"));
        assert_eq!(labels, vec!["0:3".to_string(), "1:1".to_string()]);
    }

    #[test]
    fn reduce_sums_and_products() {
        let seq = [1, 2, 3, 4, 5];
        assert_eq!(reduce(&seq, 0, |_, acc, x| acc + x), 15);
        assert_eq!(reduce(&seq, 1, |_, acc, x| acc * x), 120);
        assert_eq!(reduce(&[1, 2, 3, 4, 5, 6], 1, |_, acc, x| acc * x), 720);
        assert_eq!(reduce(&[1, 2, 3, 4, 5, 6, 7], 1, |_, acc, x| acc * x), 5040);
    }

    #[test]
    fn reduce_join_with_index() {
        let parts = ["012", "345", "678", "9ab"];
        let joined = reduce(&parts, String::new(), |index, acc, part: &&str| {
            if index > 0 {
                concatenate([acc.as_str(), ", ", *part])
            } else {
                part.to_string()
            }
        });
        assert_eq!(joined, "012, 345, 678, 9ab");
    }

    #[test]
    fn reduce_empty_returns_init() {
        let empty: [i32; 0] = [];
        assert_eq!(reduce(&empty, 42, |_, acc, x| acc + x), 42);
    }

    #[test]
    fn transform_reduce_parses_and_sums() {
        let seq = ["123", "456", "789"];
        let total = transform_reduce(
            &seq,
            0,
            |_, acc, x| acc + x,
            |_, s: &&str| s.parse::<i32>().unwrap_or(0),
        );
        assert_eq!(total, 1368);

        let seq: Vec<i32> = (1..=10).collect();
        assert_eq!(
            transform_reduce(&seq, 0, |_, acc, x| acc + x, |_, x| x * x),
            385
        );
    }

    #[test]
    fn transform_reduce_matches_two_pass() {
        let seq = [4, 8, 15, 16, 23, 42];
        let reduce_fn = |i: usize, acc: i64, x: i64| acc * 3 + x - i as i64;
        let transform_fn = |i: usize, x: &i32| i64::from(*x) * (i as i64 + 1);
        let one_pass = transform_reduce(&seq, 7, reduce_fn, transform_fn);
        let mapped = transform(&seq, transform_fn);
        let two_pass = reduce(&mapped, 7, |i, acc, x: &i64| reduce_fn(i, acc, *x));
        assert_eq!(one_pass, two_pass);
    }

    #[test]
    fn map_filter_selects_pairs() {
        let m: HashMap<&str, i32> = [("a", 1), ("b", -2), ("c", 3)].into_iter().collect();
        let positive = map_filter(&m, |_, v| *v > 0);
        assert_eq!(positive.len(), 2);
        assert_eq!(positive.get("a"), Some(&1));
        assert_eq!(positive.get("c"), Some(&3));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn map_transform_swaps_pairs() {
        let m: BTreeMap<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        let swapped = map_transform(&m, |k, v| (*v, *k));
        assert_eq!(swapped, HashMap::from([('a', 1), ('b', 2)]));
    }

    #[test]
    fn map_transform_collision_keeps_one() {
        let m: HashMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
        let collapsed = map_transform(&m, |k, v| (k % 2, *v));
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed.get(&0), Some(&20));
        let odd = collapsed.get(&1).copied();
        assert!(matches!(odd, Some(10) | Some(30)));
    }

    #[test]
    fn map_reduce_commutative_sum() {
        let m: HashMap<&str, u32> = [("x", 3), ("y", 4), ("z", 5)].into_iter().collect();
        assert_eq!(map_reduce(&m, 0, |_, acc, v| acc + v), 12);
        assert_eq!(map_reduce(&m, 0, |k, acc, _| acc + k.len()), 3);
    }

    #[test]
    fn map_transform_reduce_sum_of_squares() {
        let m: HashMap<u32, u32> = (1..=4).map(|k| (k, k * 10)).collect();
        let total = map_transform_reduce(&m, 0, |_, acc, x| acc + x, |k, v| k * v);
        assert_eq!(total, 10 + 40 + 90 + 160);
    }
}
