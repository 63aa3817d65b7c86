//! `arb-decide` — decision-cycle orchestration for the behavior arbitration core.
//!
//! # Decision cycle
//!
//! ```text
//! per call to Brain::decide:
//!   ① Policy    — PriorityPolicy reorders the priority list.
//!   ② Snapshot  — copy the priority order; iteration uses the copy.
//!   ③ Evaluate  — for each name in order:
//!                   reset_urgency → prepare → urgency
//!                   apply any RosterChange the behavior returned
//!   ④ Select    — highest urgency wins; ties go to the earlier name.
//!   ⑤ Act       — winner's action() and "<name>:<status()>".
//! ```
//!
//! A cycle with no positive urgency is a broken invariant (there should
//! always be a fallback behavior) and fails with `ArbError::NoSelection`.
//!
//! # Consensus
//!
//! [`vote_pickup`] and [`vote_drop`] poll every registered behavior, in map
//! order rather than priority order, and fold their [`Vote`][arb_behavior::Vote]s
//! into one [`VoteResult`][arb_core::VoteResult].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let registry = RegistryBuilder::new()
//!     .behavior("fight", Fight::default)
//!     .behavior("idle", || IdleBehavior::new(Command::Search, "searching"))
//!     .add("fight")
//!     .add("idle")
//!     .build()?;
//! let mut brain = BrainBuilder::new(registry).build();
//! let decision = brain.decide(&actor)?;
//! ```

pub mod arbiter;
pub mod brain;
pub mod consensus;
pub mod notify;
pub mod observer;


pub use arbiter::{Decision, Selection, decide, evaluate, select_behavior};
pub use brain::{Brain, BrainBuilder};
pub use consensus::{vote_drop, vote_pickup};
pub use notify::notify;
pub use observer::{DecisionObserver, DecisionTrace, NoopObserver};
