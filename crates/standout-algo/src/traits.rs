//! Traits at the seams of the operation set.
//!
//! [`Mapping`] lets the `map_*` operations accept any key-value container,
//! and [`Comparison`] lets [`qsort`](crate::qsort) comparators return either
//! an [`Ordering`] or a C-style signed number.

use std::cmp::Ordering;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};

/// A finite container of unique keys, each associated with one value.
///
/// Enumeration order is whatever the container yields. The `map_*`
/// operations never rely on it, so results that depend on order (the
/// winner of a [`map_transform`](crate::map_transform) key collision, the
/// result of a non-commutative [`map_reduce`](crate::map_reduce)) are
/// unspecified for `HashMap` and happen to be key order for `BTreeMap`.
///
/// # Manual Implementation
///
/// ```
/// use std::collections::{hash_map, HashMap};
/// use standout_algo::{map_count, Mapping};
///
/// struct Inventory(HashMap<String, u32>);
///
/// impl Mapping for Inventory {
///     type Key = String;
///     type Value = u32;
///     type Entries<'a> = hash_map::Iter<'a, String, u32>;
///
///     fn entries(&self) -> Self::Entries<'_> {
///         self.0.iter()
///     }
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// let stock = Inventory(HashMap::from([
///     ("bolts".to_string(), 0),
///     ("nuts".to_string(), 12),
///     ("washers".to_string(), 0),
/// ]));
/// assert_eq!(map_count(&stock, &0), 2);
/// ```
pub trait Mapping {
    /// Key type.
    type Key;
    /// Value type.
    type Value;
    /// Iterator over borrowed key-value pairs.
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns an iterator over every key-value pair.
    fn entries(&self) -> Self::Entries<'_>;

    /// Returns the number of pairs.
    fn len(&self) -> usize;

    /// Returns `true` if there are no pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Result of a three-way comparator.
///
/// Implemented for [`Ordering`] and for the signed numeric types, where a
/// positive value means the first argument should follow the second.
pub trait Comparison {
    /// Returns `true` if the first compared element belongs after the second.
    fn follows(&self) -> bool;
}

impl Comparison for Ordering {
    fn follows(&self) -> bool {
        *self == Ordering::Greater
    }
}

macro_rules! impl_signed_comparison {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Comparison for $t {
                fn follows(&self) -> bool {
                    *self > $zero
                }
            }
        )*
    };
}

impl_signed_comparison!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
);
