//! `arb-registry` — live behavior instances and their priority order.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`catalog`]  | `BehaviorCatalog` — name → factory for every known behavior    |
//! | [`priority`] | `PriorityList` — ordered, duplicate-free behavior names        |
//! | [`registry`] | `BehaviorRegistry` — owned instances + their `PriorityList`    |
//! | [`policy`]   | `PriorityPolicy` trait, `KeepOrder`, `RankedOrder`             |
//! | [`builder`]  | `RegistryBuilder` (fluent construction at agent startup)       |
//! | [`loader`]   | `load_roster_csv`, `load_roster_reader`                        |
//!
//! # Invariant
//!
//! After every mutation, the set of names in the registry's `PriorityList`
//! equals the set of keys of its instance map.  Every mutating method goes
//! through `BehaviorRegistry`, which updates both sides together.

pub mod builder;
pub mod catalog;
pub mod loader;
pub mod policy;
pub mod priority;
pub mod registry;


pub use builder::RegistryBuilder;
pub use catalog::BehaviorCatalog;
pub use loader::{RosterEntry, load_roster_csv, load_roster_reader};
pub use policy::{KeepOrder, PriorityPolicy, RankedOrder};
pub use priority::PriorityList;
pub use registry::BehaviorRegistry;
