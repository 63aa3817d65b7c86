//! `arb-behavior` — the pluggable behavior interface.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`model`]   | `Behavior<A>` trait                                             |
//! | [`vote`]    | `Vote` — one behavior's opinion on a pickup or drop             |
//! | [`event`]   | `EventArg` — payload values for broadcast notifications        |
//! | [`context`] | `DecisionContext<'a>` — read-only cycle snapshot for `prepare`  |
//! | [`roster`]  | `Placement`, `RosterChange` — requests to add/remove behaviors  |
//! | [`idle`]    | `IdleBehavior` — always-available fallback                      |
//!
//! # Design notes
//!
//! Every capability of a behavior except `urgency` and `action` has a default
//! implementation that means "not supported": indifferent votes, no event
//! handlers, an empty status.  Callers never need to probe for a method
//! before calling it.
//!
//! `prepare` cannot touch the registry that owns the behavior.  Structural
//! changes are returned as [`RosterChange`]s and applied by the arbiter right
//! after the behavior has been evaluated.

pub mod context;
pub mod event;
pub mod idle;
pub mod model;
pub mod roster;
pub mod vote;

#[cfg(test)]
mod tests;

pub use context::DecisionContext;
pub use event::EventArg;
pub use idle::IdleBehavior;
pub use model::Behavior;
pub use roster::{Placement, RosterChange};
pub use vote::Vote;
