//! `PriorityList` — the tie-break order over behavior names.

use arb_behavior::Placement;
use arb_core::{ArbError, ArbResult};

/// An ordered sequence of behavior names without duplicates.
///
/// Earlier entries win urgency ties during arbitration.  The list is owned by
/// [`BehaviorRegistry`][crate::BehaviorRegistry], which keeps its contents
/// equal to the registry's key set; the mutators here are crate-private for
/// that reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityList {
    names: Vec<String>,
}

impl PriorityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Zero-based position of `name`, or `None` if absent.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Owned copy of the current order.
    ///
    /// Arbitration iterates over a snapshot so that behaviors adding or
    /// removing entries mid-cycle cannot disturb the iteration.
    pub fn snapshot(&self) -> Vec<String> {
        self.names.clone()
    }

    // ── Mutation (registry only) ──────────────────────────────────────────

    /// Insert `name` according to `placement`.
    ///
    /// Fails with [`ArbError::UnknownAnchor`] (list unchanged) if the anchor
    /// is not present.  `name` must not already be in the list.
    pub(crate) fn insert(&mut self, name: &str, placement: &Placement) -> ArbResult<()> {
        debug_assert!(!self.contains(name), "duplicate priority entry {name:?}");
        let index = match placement {
            Placement::Append => self.names.len(),
            Placement::Before(anchor) => self.anchor_position(name, anchor)?,
            Placement::After(anchor) => self.anchor_position(name, anchor)? + 1,
        };
        self.names.insert(index, name.to_owned());
        Ok(())
    }

    /// Check that `placement` can be satisfied without modifying the list.
    pub(crate) fn check_placement(&self, name: &str, placement: &Placement) -> ArbResult<()> {
        match placement.anchor() {
            Some(anchor) => self.anchor_position(name, anchor).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Remove every entry matching `pred`, preserving the order of the rest.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.names.retain(|n| keep(n));
    }

    /// Replace the whole order.  The caller has already validated it.
    pub(crate) fn replace(&mut self, names: Vec<String>) {
        self.names = names;
    }

    fn anchor_position(&self, name: &str, anchor: &str) -> ArbResult<usize> {
        self.position(anchor).ok_or_else(|| ArbError::UnknownAnchor {
            name:   name.to_owned(),
            anchor: anchor.to_owned(),
        })
    }
}
