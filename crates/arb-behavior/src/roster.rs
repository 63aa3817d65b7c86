//! Structural changes to the behavior roster.

use std::fmt;

/// Where a newly added behavior goes in the priority list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// After every existing entry.
    #[default]
    Append,
    /// Immediately before the named behavior.
    Before(String),
    /// Immediately after the named behavior.
    After(String),
}

impl Placement {
    pub fn before(anchor: impl Into<String>) -> Self {
        Placement::Before(anchor.into())
    }

    pub fn after(anchor: impl Into<String>) -> Self {
        Placement::After(anchor.into())
    }

    /// The behavior this placement is relative to, if any.
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Placement::Append => None,
            Placement::Before(a) | Placement::After(a) => Some(a),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Append    => f.write_str("append"),
            Placement::Before(a) => write!(f, "before {a}"),
            Placement::After(a)  => write!(f, "after {a}"),
        }
    }
}

/// A change a behavior asks for while it is being prepared.
///
/// Returned from [`Behavior::prepare`][crate::Behavior::prepare] and applied
/// to the registry once that behavior's evaluation finishes.  The priority
/// order already being iterated is not affected; later lookups in the same
/// cycle and all later cycles see the change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterChange {
    Add { name: String, placement: Placement },
    Remove(String),
}
