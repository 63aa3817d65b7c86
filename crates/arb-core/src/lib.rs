//! `arb-core` — foundational types for the behavior arbitration core.
//!
//! This crate is a dependency of every other `arb-*` crate.  It has no
//! `arb-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`urgency`] | `Urgency` — the closed, totally ordered urgency scale    |
//! | [`world`]   | `ActorState`, `Item`, `Monster` — inputs from the game   |
//! | [`vote`]    | `VoteResult` — aggregated pickup/drop outcome            |
//! | [`error`]   | `ArbError`, `ArbResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod error;
pub mod urgency;
pub mod vote;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ArbError, ArbResult};
pub use urgency::Urgency;
pub use vote::VoteResult;
pub use world::{ActorState, Item, Monster};
