//! Per-visit control signal for [`foreach`](crate::foreach) and friends.
//!
//! Visitors return either a [`ForeachAction`] directly or a raw code that
//! converts into one. Codes outside the known set make the whole traversal
//! fail.

use crate::error::AlgoError;

/// Control signal returned by a traversal visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ForeachAction {
    /// Proceed to the next element. Code `0`.
    #[default]
    NoOp,
    /// Stop visiting the remaining elements. Code `1`.
    Break,
    /// Skip the rest of this step; same as `NoOp` within a single visit. Code `2`.
    Continue,
}

impl ForeachAction {
    /// Returns the raw code of this action.
    pub fn code(self) -> i64 {
        match self {
            ForeachAction::NoOp => 0,
            ForeachAction::Break => 1,
            ForeachAction::Continue => 2,
        }
    }

    /// Looks up an action by raw code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ForeachAction::NoOp),
            1 => Some(ForeachAction::Break),
            2 => Some(ForeachAction::Continue),
            _ => None,
        }
    }

    /// Returns `true` if this action stops the traversal.
    pub fn is_break(self) -> bool {
        matches!(self, ForeachAction::Break)
    }

    /// Returns the display name of this action.
    pub fn as_str(self) -> &'static str {
        match self {
            ForeachAction::NoOp => "noop",
            ForeachAction::Break => "break",
            ForeachAction::Continue => "continue",
        }
    }
}

impl std::fmt::Display for ForeachAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i64> for ForeachAction {
    type Error = AlgoError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        ForeachAction::from_code(code).ok_or(AlgoError::UnknownAction(code))
    }
}

impl TryFrom<i32> for ForeachAction {
    type Error = AlgoError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ForeachAction::try_from(i64::from(code))
    }
}
