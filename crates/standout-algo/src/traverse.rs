//! Controlled traversal: [`foreach`], [`map_foreach`] and [`zip`].
//!
//! Each visitor returns a signal convertible into a [`ForeachAction`]:
//!
//! - `NoOp` and `Continue` move on to the next element.
//! - `Break` stops the traversal. Nothing after it is visited, and the call
//!   still succeeds.
//! - Anything that does not convert (for example a raw code of `7`) aborts
//!   the traversal and the call fails.
//!
//! The boolean functions report only success or failure. The `try_*` forms
//! return a [`Traversal`] summary or the [`AlgoError`] that stopped them.

use crate::action::ForeachAction;
use crate::error::{AlgoError, Result};
use crate::traits::Mapping;

/// Summary of a completed traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traversal {
    /// Number of visitor calls made.
    pub visited: usize,
    /// Whether a visitor returned `Break`.
    pub break_requested: bool,
}

impl Traversal {
    /// Returns `true` if every element was visited.
    pub fn is_complete(&self, len: usize) -> bool {
        !self.break_requested && self.visited == len
    }
}

fn drive<I, A, F>(items: I, mut visit: F) -> Result<Traversal>
where
    I: Iterator,
    F: FnMut(I::Item) -> A,
    A: TryInto<ForeachAction>,
{
    let mut traversal = Traversal::default();
    for item in items {
        let step = traversal.visited;
        let action = visit(item)
            .try_into()
            .map_err(|_| AlgoError::InvalidAction { step })?;
        traversal.visited += 1;
        match action {
            ForeachAction::Break => {
                traversal.break_requested = true;
                break;
            }
            ForeachAction::NoOp | ForeachAction::Continue => {}
        }
    }
    Ok(traversal)
}

/// Visits every element in order with `visitor(index, value)`.
///
/// Returns `false` if a visitor returned an invalid action, `true`
/// otherwise (including when traversal stopped on `Break`).
pub fn foreach<T, A, F>(seq: &[T], visitor: F) -> bool
where
    F: FnMut(usize, &T) -> A,
    A: TryInto<ForeachAction>,
{
    try_foreach(seq, visitor).is_ok()
}

/// Same as [`foreach`], returning the traversal summary or the error.
pub fn try_foreach<T, A, F>(seq: &[T], mut visitor: F) -> Result<Traversal>
where
    F: FnMut(usize, &T) -> A,
    A: TryInto<ForeachAction>,
{
    drive(seq.iter().enumerate(), |(index, value)| visitor(index, value))
}

/// Visits every pair of a mapping with `visitor(key, value)`, in the
/// mapping's enumeration order.
///
/// Same result contract as [`foreach`]. Which pairs were visited before a
/// `Break` depends on that order.
pub fn map_foreach<M, A, F>(m: &M, visitor: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> A,
    A: TryInto<ForeachAction>,
{
    try_map_foreach(m, visitor).is_ok()
}

/// Same as [`map_foreach`], returning the traversal summary or the error.
pub fn try_map_foreach<M, A, F>(m: &M, mut visitor: F) -> Result<Traversal>
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> A,
    A: TryInto<ForeachAction>,
{
    drive(m.entries(), |(key, value)| visitor(key, value))
}

/// Walks `a` and `b` side by side with `visitor(index, a[index], b[index])`.
///
/// Stops after `min(a.len(), b.len())` positions; the tail of the longer
/// slice is never visited. Same result contract as [`foreach`].
pub fn zip<T, U, A, F>(a: &[T], b: &[U], visitor: F) -> bool
where
    F: FnMut(usize, &T, &U) -> A,
    A: TryInto<ForeachAction>,
{
    try_zip(a, b, visitor).is_ok()
}

/// Same as [`zip`], returning the traversal summary or the error.
pub fn try_zip<T, U, A, F>(a: &[T], b: &[U], mut visitor: F) -> Result<Traversal>
where
    F: FnMut(usize, &T, &U) -> A,
    A: TryInto<ForeachAction>,
{
    drive(a.iter().zip(b).enumerate(), |(index, (x, y))| visitor(index, x, y))
}
