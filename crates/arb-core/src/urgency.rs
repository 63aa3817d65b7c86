//! The urgency scale.
//!
//! Behaviors report how strongly they want to act this cycle as one of six
//! labels.  The labels are totally ordered and project onto fixed integers:
//!
//! | Label         | Value |
//! |---------------|-------|
//! | `Critical`    | 50    |
//! | `Important`   | 40    |
//! | `Normal`      | 30    |
//! | `Unimportant` | 20    |
//! | `Fallback`    | 10    |
//! | `None`        | 0     |
//!
//! Variants are declared lowest-first so the derived `Ord` agrees with the
//! numeric projection.  The enum is closed; values arriving from untyped
//! sources (configuration, scripted behaviors) go through [`FromStr`] or
//! `TryFrom<i64>`, which reject anything outside the set with
//! [`ArbError::InvalidUrgency`].

use std::fmt;
use std::str::FromStr;

use crate::ArbError;

/// How strongly a behavior wants to act during the current decision cycle.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Urgency {
    /// The behavior does not want to act.
    #[default]
    None,
    /// Act only if nothing else wants to.
    Fallback,
    Unimportant,
    Normal,
    Important,
    /// Act now.
    Critical,
}

impl Urgency {
    /// Every label, highest first.
    pub const ALL: [Urgency; 6] = [
        Urgency::Critical,
        Urgency::Important,
        Urgency::Normal,
        Urgency::Unimportant,
        Urgency::Fallback,
        Urgency::None,
    ];

    /// Numeric projection used for arbitration.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Urgency::Critical    => 50,
            Urgency::Important   => 40,
            Urgency::Normal      => 30,
            Urgency::Unimportant => 20,
            Urgency::Fallback    => 10,
            Urgency::None        => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Critical    => "critical",
            Urgency::Important   => "important",
            Urgency::Normal      => "normal",
            Urgency::Unimportant => "unimportant",
            Urgency::Fallback    => "fallback",
            Urgency::None        => "none",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ArbError;

    /// Parse a label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ArbError::InvalidUrgency(label.to_owned()))
    }
}

impl TryFrom<i64> for Urgency {
    type Error = ArbError;

    /// Only the six projected values are accepted; there is no rounding.
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Urgency::ALL
            .into_iter()
            .find(|u| i64::from(u.value()) == n)
            .ok_or_else(|| ArbError::InvalidUrgency(n.to_string()))
    }
}

impl From<Urgency> for i32 {
    #[inline]
    fn from(u: Urgency) -> i32 {
        u.value()
    }
}
