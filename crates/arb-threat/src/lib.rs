//! `arb-threat` — how dangerous is this one monster?
//!
//! Threat evaluation is a pure function of an opponent's melee profile and
//! the actor's current health and speed:
//!
//! ```text
//! avoid_melee   = one_hit_class || max_melee_damage >= health
//! turns_to_kill = (avg_melee_damage * monster.speed) / (actor.speed * health)
//! spend_minor   = turns_to_kill < minor_turns      (default 20, strict)
//! spend_major   = turns_to_kill < major_turns      (default 10, strict)
//! ```
//!
//! Nothing is cached: every call recomputes.  Callers that query the same
//! opponent repeatedly within a cycle may memoize the result themselves.

pub mod assess;
pub mod config;

#[cfg(test)]
mod tests;

pub use assess::{ThreatAssessment, evaluate, evaluate_with};
pub use config::ThreatConfig;
