//! Algo - Generic traversal, search, fold and ordering helpers.
//!
//! Algo provides small higher-order operations over two container shapes:
//! slices (ordered, indexable) and mappings (unique keys, unspecified
//! enumeration order). It supports:
//!
//! - Predicate combinators, including cross-product checks over two containers
//! - Linear search and counting, returning positions or keys
//! - Filter, transform and reduce, with one-pass transform-reduce
//! - Generation and repetition of slices
//! - Controlled traversal with per-element `NoOp`/`Break`/`Continue` signals
//! - Stable in-place ordering with natural order or a three-way comparator
//! - Numeric sums and string concatenation
//!
//! Every operation runs synchronously and materializes its full result.
//! Nothing is shared between calls.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use standout_algo::{
//!     all_satisfy, count_if, filter, find, map_find_v, qsort, reduce, sum, zip, ForeachAction,
//! };
//!
//! let scores = [37, 53, 74, 7, 66];
//!
//! // Predicates receive the index and a borrowed value.
//! let passing = filter(&scores, |_, s| *s >= 50);
//! assert_eq!(passing, vec![53, 74, 66]);
//! assert_eq!(passing.len(), count_if(&scores, |_, s| *s >= 50));
//!
//! // Folds run left to right.
//! assert_eq!(reduce(&scores, 0, |_, acc, s| acc + s), sum(&scores, 0));
//!
//! // Absence is `None`, not an error.
//! assert_eq!(find(&scores, &7), Some(3));
//! assert_eq!(find(&scores, &8), None);
//!
//! // Pairwise checks cover the whole cross product.
//! assert!(all_satisfy(&[1], &[2, 3], |_, _, a, b| a < b));
//!
//! // Zip walks both slices side by side and stops at the shorter one.
//! let mut diffs = Vec::new();
//! assert!(zip(&scores, &[30, 50], |_, a, b| {
//!     diffs.push(a - b);
//!     ForeachAction::NoOp
//! }));
//! assert_eq!(diffs, vec![7, 3]);
//!
//! // In-place ordering with a C-style comparator.
//! let mut sorted = scores;
//! qsort(&mut sorted, |_, _, a, b| a - b);
//! assert_eq!(sorted, [7, 37, 53, 66, 74]);
//!
//! // Mapping searches return keys.
//! let owners = HashMap::from([("ann", "red"), ("bob", "blue"), ("cy", "red")]);
//! let mut reds = map_find_v(&owners, &"red");
//! reds.sort();
//! assert_eq!(reds, vec!["ann", "cy"]);
//! ```
//!
//! # Controlled Traversal
//!
//! [`foreach`], [`map_foreach`] and [`zip`] interpret each visitor's
//! return value:
//!
//! | Signal | Effect |
//! |--------|--------|
//! | `NoOp` (0) | continue with the next element |
//! | `Continue` (2) | same as `NoOp` |
//! | `Break` (1) | stop; the call still succeeds |
//! | anything else | stop; the call fails |
//!
//! The `try_*` variants return a [`Traversal`] summary or an [`AlgoError`].
//!
//! # Mappings
//!
//! `map_*` operations accept any [`Mapping`] (`HashMap`, `BTreeMap`, or
//! your own). They never depend on enumeration order, but some results do:
//! see the [`map_transform`] and [`map_reduce`] docs.

mod action;
mod error;
mod fold;
mod generate;
mod ordering;
mod predicate;
mod search;
mod transform;
mod traverse;
mod traits;

// Re-export public API
pub use action::ForeachAction;
pub use error::{AlgoError, Result};
pub use fold::{concatenate, concatenate_slice, sum, Accumulate};
pub use generate::{generate, repeat_array, repeat_element};
pub use ordering::{max, min, qsort, sort};
pub use predicate::{
    all, all_satisfy, any, any_satisfy, map_all, map_all_satisfy, map_any, map_any_satisfy,
};
pub use search::{
    count, count_if, find, find_if, map_count, map_count_if, map_find_first, map_find_if,
    map_find_k, map_find_v, sentinel, NOT_FOUND,
};
pub use traits::{Comparison, Mapping};
pub use transform::{
    filter, map_filter, map_reduce, map_transform, map_transform_reduce, reduce, transform,
    transform_reduce,
};
pub use traverse::{foreach, map_foreach, try_foreach, try_map_foreach, try_zip, zip, Traversal};
