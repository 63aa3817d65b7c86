//! `BehaviorRegistry` — owns every live behavior and its priority order.

use rustc_hash::{FxHashMap, FxHashSet};

use arb_behavior::{Behavior, Placement, RosterChange};
use arb_core::{ArbError, ArbResult};

use crate::{BehaviorCatalog, PriorityList, PriorityPolicy};

/// Owns the live behavior instances of one agent, keyed by name, together
/// with the [`PriorityList`] over those names.
///
/// Instances are built from the [`BehaviorCatalog`] when added and live until
/// removed; adding a name that is already registered keeps the existing
/// instance.
///
/// Iteration via [`iter`][Self::iter] / [`iter_mut`][Self::iter_mut] is
/// unordered (map order).  Use [`priority`][Self::priority] for the
/// arbitration order.
pub struct BehaviorRegistry<A> {
    catalog:   BehaviorCatalog<A>,
    behaviors: FxHashMap<String, Box<dyn Behavior<A>>>,
    priority:  PriorityList,
}

impl<A: 'static> BehaviorRegistry<A> {
    /// An empty registry that builds behaviors from `catalog`.
    pub fn new(catalog: BehaviorCatalog<A>) -> Self {
        Self {
            catalog,
            behaviors: FxHashMap::default(),
            priority:  PriorityList::new(),
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The behavior registered as `name`.  Absence is not an error.
    pub fn get(&self, name: &str) -> Option<&dyn Behavior<A>> {
        self.behaviors.get(name).map(|b| b.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Behavior<A> + 'static)> {
        self.behaviors.get_mut(name).map(|b| b.as_mut())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// The current arbitration order.
    pub fn priority(&self) -> &PriorityList {
        &self.priority
    }

    pub fn catalog(&self) -> &BehaviorCatalog<A> {
        &self.catalog
    }

    /// Every registered behavior, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Behavior<A>)> {
        self.behaviors.iter().map(|(n, b)| (n.as_str(), b.as_ref()))
    }

    /// Every registered behavior, mutably, in unspecified order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Box<dyn Behavior<A>>)> {
        self.behaviors.iter_mut().map(|(n, b)| (n.as_str(), b))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Instantiate `name` from the catalog and register it at `placement`.
    ///
    /// # Errors
    ///
    /// - [`ArbError::InvalidBehavior`] if the catalog has no such name.
    /// - [`ArbError::UnknownAnchor`] if `placement` names an unregistered
    ///   behavior.
    ///
    /// On error the registry is unchanged.  Adding a name that is already
    /// registered is a no-op.
    pub fn add(&mut self, name: &str, placement: Placement) -> ArbResult<()> {
        if self.behaviors.contains_key(name) {
            tracing::debug!(behavior = name, "already registered; keeping existing instance");
            return Ok(());
        }
        if !self.catalog.contains(name) {
            return Err(ArbError::InvalidBehavior(name.to_owned()));
        }
        self.priority.check_placement(name, &placement)?;
        let behavior = self.catalog.instantiate(name)?;
        self.priority.insert(name, &placement)?;
        self.behaviors.insert(name.to_owned(), behavior);
        tracing::debug!(behavior = name, %placement, "behavior added");
        self.debug_check();
        Ok(())
    }

    /// Remove `name` from the registry and the priority list.
    ///
    /// Returns `true` if something was removed; an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        !self.remove_where(|n| n == name).is_empty()
    }

    /// Remove every behavior whose name satisfies `pred`.
    ///
    /// Returns the removed names in their former priority order.  The
    /// relative order of the survivors is preserved.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&str) -> bool) -> Vec<String> {
        let removed: Vec<String> = self
            .priority
            .iter()
            .filter(|&n| pred(n))
            .map(str::to_owned)
            .collect();
        if removed.is_empty() {
            return removed;
        }
        self.priority.retain(|n| !removed.iter().any(|r| r == n));
        for name in &removed {
            self.behaviors.remove(name);
            tracing::debug!(behavior = name.as_str(), "behavior removed");
        }
        self.debug_check();
        removed
    }

    /// Apply a change requested by a behavior during `prepare`.
    pub fn apply(&mut self, change: RosterChange) -> ArbResult<()> {
        match change {
            RosterChange::Add { name, placement } => self.add(&name, placement),
            RosterChange::Remove(name) => {
                self.remove(&name);
                Ok(())
            }
        }
    }

    /// Replace the priority order with `order`.
    ///
    /// `order` must be a permutation of the registered names; otherwise
    /// [`ArbError::PriorityMismatch`] is returned and the order is unchanged.
    pub fn reorder(&mut self, order: Vec<String>) -> ArbResult<()> {
        if order.len() != self.behaviors.len() {
            return Err(ArbError::PriorityMismatch(format!(
                "expected {} names, got {}",
                self.behaviors.len(),
                order.len()
            )));
        }
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for name in &order {
            if !self.behaviors.contains_key(name) {
                return Err(ArbError::PriorityMismatch(format!("{name:?} is not registered")));
            }
            if !seen.insert(name.as_str()) {
                return Err(ArbError::PriorityMismatch(format!("{name:?} appears twice")));
            }
        }
        self.priority.replace(order);
        Ok(())
    }

    /// Ask `policy` for this cycle's order and install it.
    pub fn refresh_priority<P: PriorityPolicy + ?Sized>(&mut self, policy: &mut P) -> ArbResult<()> {
        let order = policy.order(self.priority.as_slice());
        self.reorder(order)
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.priority.len(), self.behaviors.len());
        debug_assert!(self.priority.iter().all(|n| self.behaviors.contains_key(n)));
    }
}
