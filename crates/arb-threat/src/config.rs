//! Thresholds for threat classification.

/// Tuning for [`evaluate_with`][crate::evaluate_with].
///
/// Both thresholds compare strictly: a `turns_to_kill` exactly equal to a
/// threshold does not set the corresponding flag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatConfig {
    /// Spend minor resources when the fight index falls below this.
    pub minor_turns: f64,
    /// Spend major resources when the fight index falls below this.
    pub major_turns: f64,
}

impl Default for ThreatConfig {
    fn default() -> Self {
        Self { minor_turns: 20.0, major_turns: 10.0 }
    }
}

impl ThreatConfig {
    pub fn with_minor_turns(mut self, turns: f64) -> Self {
        self.minor_turns = turns;
        self
    }

    pub fn with_major_turns(mut self, turns: f64) -> Self {
        self.major_turns = turns;
        self
    }
}
