//! Threat evaluation of a single opponent.

use arb_core::{ActorState, ArbError, ArbResult, Monster};

use crate::ThreatConfig;

/// Combat-risk flags for one opponent, computed fresh per query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatAssessment {
    /// Do not stand in melee range.
    pub avoid_melee: bool,
    /// Worth spending cheap resources (e.g. wands with many charges).
    pub spend_minor: bool,
    /// Worth spending expensive resources (e.g. prayer, scrolls).
    pub spend_major: bool,
}

impl ThreatAssessment {
    /// `true` if any flag is set.
    pub fn is_threat(&self) -> bool {
        self.avoid_melee || self.spend_minor || self.spend_major
    }
}

/// Evaluate `monster` against `actor` with the default thresholds.
pub fn evaluate(monster: &Monster, actor: &ActorState) -> ArbResult<ThreatAssessment> {
    evaluate_with(monster, actor, &ThreatConfig::default())
}

/// Evaluate `monster` against `actor`.
///
/// # Errors
///
/// [`ArbError::DivisionError`] if `actor.speed * actor.health` is zero.
pub fn evaluate_with(
    monster: &Monster,
    actor:   &ActorState,
    config:  &ThreatConfig,
) -> ArbResult<ThreatAssessment> {
    let divisor = f64::from(actor.speed) * f64::from(actor.health);
    if divisor == 0.0 {
        return Err(ArbError::DivisionError { speed: actor.speed, health: actor.health });
    }

    let avoid_melee = monster.one_hit_class || monster.max_melee_damage >= actor.health;
    let turns_to_kill = monster.avg_melee_damage * f64::from(monster.speed) / divisor;

    Ok(ThreatAssessment {
        avoid_melee,
        spend_minor: turns_to_kill < config.minor_turns,
        spend_major: turns_to_kill < config.major_turns,
    })
}
