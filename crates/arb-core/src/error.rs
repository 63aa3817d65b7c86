//! Framework error type.
//!
//! Every `arb-*` crate reports failures through [`ArbError`].  The variants
//! map one-to-one onto the failure modes of the arbitration core; recoverable
//! conditions (a behavior missing from the registry, conflicting votes) are
//! not errors and never appear here.

use thiserror::Error;

/// The error type shared by all `arb-*` crates.
#[derive(Debug, Error)]
pub enum ArbError {
    /// A behavior reported an urgency outside the closed label set.
    #[error("invalid urgency {0:?}")]
    InvalidUrgency(String),

    /// `add` was asked for a name with no known implementation.
    #[error("no implementation registered for behavior {0:?}")]
    InvalidBehavior(String),

    /// A `Before`/`After` placement referenced a name not in the priority list.
    #[error("cannot place behavior {name:?} relative to unknown behavior {anchor:?}")]
    UnknownAnchor { name: String, anchor: String },

    /// A full decision cycle found no behavior with positive urgency.
    #[error("no behavior reported a positive urgency")]
    NoSelection,

    /// Threat evaluation against an actor with zero speed or zero health.
    #[error("cannot evaluate threat: actor speed {speed} x health {health} is zero")]
    DivisionError { speed: u32, health: u32 },

    /// A priority policy produced an order that is not a permutation of the
    /// registered names.
    #[error("priority order does not match the registry: {0}")]
    PriorityMismatch(String),

    /// A behavior's own logic failed.
    #[error("behavior {name:?} failed: {message}")]
    Behavior { name: String, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArbError {
    /// `true` for errors that indicate a broken invariant of the running
    /// agent rather than bad input.
    pub fn is_critical(&self) -> bool {
        matches!(self, ArbError::NoSelection)
    }
}

/// Shorthand result type for all `arb-*` crates.
pub type ArbResult<T> = Result<T, ArbError>;
