//! Fluent builder for constructing a [`BehaviorRegistry`] at agent startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! let registry = RegistryBuilder::new()
//!     .behavior("fight", Fight::default)
//!     .behavior("explore", Explore::default)
//!     .behavior("idle", || IdleBehavior::new(Command::Search, "searching"))
//!     .add("fight")
//!     .add("explore")
//!     .add("idle")
//!     .build()?;
//! ```

use arb_behavior::{Behavior, Placement};
use arb_core::ArbResult;

use crate::{BehaviorCatalog, BehaviorRegistry, RosterEntry};

/// Fluent builder for [`BehaviorRegistry`].
///
/// Factories are collected into a [`BehaviorCatalog`]; roster entries are
/// applied in order by [`build`](Self::build), so the first error aborts
/// construction.
pub struct RegistryBuilder<A> {
    catalog: BehaviorCatalog<A>,
    roster:  Vec<RosterEntry>,
}

impl<A: 'static> Default for RegistryBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> RegistryBuilder<A> {
    pub fn new() -> Self {
        Self {
            catalog: BehaviorCatalog::new(),
            roster:  Vec::new(),
        }
    }

    /// Start from an existing catalog.
    pub fn with_catalog(catalog: BehaviorCatalog<A>) -> Self {
        Self { catalog, roster: Vec::new() }
    }

    /// Make `name` known, built by `factory`.  Does not register it.
    pub fn behavior<F, B>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> B + 'static,
        B: Behavior<A>,
    {
        self.catalog.register(name, factory);
        self
    }

    /// Register `name` at the end of the priority list.
    pub fn add(self, name: impl Into<String>) -> Self {
        self.add_at(name, Placement::Append)
    }

    /// Register `name` at `placement`.
    pub fn add_at(mut self, name: impl Into<String>, placement: Placement) -> Self {
        self.roster.push(RosterEntry::new(name, placement));
        self
    }

    /// Register every entry of `roster`, e.g. from [`load_roster_csv`][crate::load_roster_csv].
    pub fn roster(mut self, roster: impl IntoIterator<Item = RosterEntry>) -> Self {
        self.roster.extend(roster);
        self
    }

    /// Instantiate every roster entry and return the registry.
    pub fn build(self) -> ArbResult<BehaviorRegistry<A>> {
        let mut registry = BehaviorRegistry::new(self.catalog);
        for entry in self.roster {
            registry.add(&entry.name, entry.placement)?;
        }
        Ok(registry)
    }
}
