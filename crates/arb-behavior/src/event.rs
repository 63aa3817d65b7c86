//! Payload values carried by broadcast notifications.

use std::fmt;

/// One argument of a broadcast event such as `("dlvl_change", [Int(3)])`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventArg {
    Int(i64),
    Text(String),
    Flag(bool),
}

impl EventArg {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            EventArg::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EventArg::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            EventArg::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for EventArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventArg::Int(n)  => write!(f, "{n}"),
            EventArg::Text(s) => f.write_str(s),
            EventArg::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for EventArg {
    fn from(n: i64) -> Self {
        EventArg::Int(n)
    }
}

impl From<&str> for EventArg {
    fn from(s: &str) -> Self {
        EventArg::Text(s.to_owned())
    }
}

impl From<String> for EventArg {
    fn from(s: String) -> Self {
        EventArg::Text(s)
    }
}

impl From<bool> for EventArg {
    fn from(b: bool) -> Self {
        EventArg::Flag(b)
    }
}
