//! `PriorityPolicy` — per-cycle hook that reorders the priority list.
//!
//! The concrete agent decides which behaviors take precedence on ties; the
//! arbitration core only consumes the resulting order.  The hook runs once at
//! the start of every decision cycle.
//!
//! # Contract
//!
//! The returned order must be a permutation of `current`.  Anything else is
//! rejected by [`BehaviorRegistry::reorder`][crate::BehaviorRegistry::reorder]
//! with `ArbError::PriorityMismatch`.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;

// ── Trait ─────────────────────────────────────────────────────────────────────

pub trait PriorityPolicy {
    /// Produce this cycle's order from the current one.
    fn order(&mut self, current: &[String]) -> Vec<String>;
}

impl<F> PriorityPolicy for F
where
    F: FnMut(&[String]) -> Vec<String>,
{
    fn order(&mut self, current: &[String]) -> Vec<String> {
        self(current)
    }
}

// ── Keep ──────────────────────────────────────────────────────────────────────

/// Leaves the order exactly as `add`/`remove` built it.
pub struct KeepOrder;

impl PriorityPolicy for KeepOrder {
    #[inline]
    fn order(&mut self, current: &[String]) -> Vec<String> {
        current.to_vec()
    }
}

// ── Ranked ────────────────────────────────────────────────────────────────────

/// Sorts by a static rank table, highest rank first.
///
/// Equal ranks keep their current relative order.  Names missing from the
/// table sort after every ranked name, also in current order.
#[derive(Debug, Clone, Default)]
pub struct RankedOrder {
    ranks: FxHashMap<String, i32>,
}

impl RankedOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(mut self, name: impl Into<String>, rank: i32) -> Self {
        self.ranks.insert(name.into(), rank);
        self
    }

    pub fn set_rank(&mut self, name: impl Into<String>, rank: i32) {
        self.ranks.insert(name.into(), rank);
    }
}

impl PriorityPolicy for RankedOrder {
    fn order(&mut self, current: &[String]) -> Vec<String> {
        let mut order = current.to_vec();
        order.sort_by_key(|n| match self.ranks.get(n) {
            Some(&r) => (false, Reverse(r)),
            None => (true, Reverse(0)),
        });
        order
    }
}
