//! Aggregated outcome of a pickup or drop consensus poll.

use std::fmt;

/// What the agent should do with an item after all behaviors have voted.
///
/// The same type serves pickup and drop:
///
/// - `Keep` — do nothing (leave it on the floor / keep it in the pack).
/// - `All` — act on the whole stack.
/// - `Partial(n)` — act on `n` items, `0 < n < quantity`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoteResult {
    #[default]
    Keep,
    All,
    Partial(u32),
}

impl VoteResult {
    /// Map the largest desire across voters onto the tri-state.
    ///
    /// `desire` is unbounded: `u64::MAX` stands for "all of it".
    pub fn from_desire(desire: u64, quantity: u32) -> Self {
        if desire == 0 {
            VoteResult::Keep
        } else if desire >= u64::from(quantity) {
            VoteResult::All
        } else {
            // desire < quantity, so it fits in u32.
            VoteResult::Partial(desire as u32)
        }
    }

    /// Number of items this outcome acts on, given the full stack size.
    pub fn count(self, quantity: u32) -> u32 {
        match self {
            VoteResult::Keep       => 0,
            VoteResult::All        => quantity,
            VoteResult::Partial(n) => n,
        }
    }

    #[inline]
    pub fn is_keep(self) -> bool {
        matches!(self, VoteResult::Keep)
    }
}

impl fmt::Display for VoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteResult::Keep       => f.write_str("keep"),
            VoteResult::All        => f.write_str("all"),
            VoteResult::Partial(n) => write!(f, "partial({n})"),
        }
    }
}
