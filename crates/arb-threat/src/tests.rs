//! Unit tests for arb-threat.

use arb_core::{ActorState, ArbError, Monster};

use crate::{ThreatAssessment, ThreatConfig, evaluate, evaluate_with};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn actor(health: u32, speed: u32) -> ActorState {
    ActorState::new(health, speed, 0)
}

#[cfg(test)]
mod melee {
    use super::*;

    #[test]
    fn one_hit_class_always_avoided() {
        let m = Monster::new("floating eye", 0.0, 0, 1).one_hit();
        assert!(evaluate(&m, &actor(100, 12)).unwrap().avoid_melee);
    }

    #[test]
    fn max_damage_reaching_health_is_avoided() {
        let m = Monster::new("soldier ant", 4.0, 10, 18);
        assert!(evaluate(&m, &actor(10, 12)).unwrap().avoid_melee);
        assert!(!evaluate(&m, &actor(11, 12)).unwrap().avoid_melee);
    }
}

#[cfg(test)]
mod spending {
    use super::*;

    #[test]
    fn weak_actor_spends_everything() {
        // 5 * 12 / (12 * 10) = 0.5
        let m = Monster::new("jackal", 5.0, 2, 12);
        let t = evaluate(&m, &actor(10, 12)).unwrap();
        assert!(t.spend_minor);
        assert!(t.spend_major);
    }

    #[test]
    fn exactly_ten_is_not_major() {
        // 100 * 12 / (12 * 10) = 10.0
        let m = Monster::new("brute", 100.0, 5, 12);
        let t = evaluate(&m, &actor(10, 12)).unwrap();
        assert!(t.spend_minor);
        assert!(!t.spend_major);
    }

    #[test]
    fn exactly_twenty_is_not_minor() {
        // 200 * 12 / (12 * 10) = 20.0
        let m = Monster::new("giant", 200.0, 5, 12);
        let t = evaluate(&m, &actor(10, 12)).unwrap();
        assert!(!t.spend_minor);
        assert!(!t.spend_major);
        assert!(!t.is_threat());
    }

    #[test]
    fn custom_thresholds() {
        // 5 * 12 / (12 * 10) = 0.5
        let m = Monster::new("jackal", 5.0, 2, 12);
        let config = ThreatConfig::default().with_minor_turns(1.0).with_major_turns(0.5);
        let t = evaluate_with(&m, &actor(10, 12), &config).unwrap();
        assert!(t.spend_minor);
        assert!(!t.spend_major);
    }

    #[test]
    fn default_config_values() {
        let c = ThreatConfig::default();
        assert_eq!(c.minor_turns, 20.0);
        assert_eq!(c.major_turns, 10.0);
    }
}

#[cfg(test)]
mod degenerate {
    use super::*;

    #[test]
    fn zero_speed_is_division_error() {
        let m = Monster::new("newt", 1.0, 3, 6);
        let err = evaluate(&m, &actor(10, 0)).unwrap_err();
        assert!(matches!(err, ArbError::DivisionError { speed: 0, health: 10 }));
    }

    #[test]
    fn zero_health_is_division_error() {
        let m = Monster::new("newt", 1.0, 3, 6);
        assert!(matches!(
            evaluate(&m, &actor(0, 12)),
            Err(ArbError::DivisionError { .. })
        ));
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let m = Monster::new("newt", 1.0, 3, 6);
        let a = actor(10, 12);
        let first: ThreatAssessment = evaluate(&m, &a).unwrap();
        assert_eq!(first, evaluate(&m, &a).unwrap());
    }
}
