//! Unit tests for arb-behavior.

use arb_core::{ActorState, Item, Urgency};

use crate::{Behavior, DecisionContext, EventArg, IdleBehavior, Placement, Vote};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn actor() -> ActorState {
    ActorState::new(20, 12, 50)
}

// ── Vote ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vote_tests {
    use super::*;

    #[test]
    fn desire_per_variant() {
        assert_eq!(Vote::Indifferent.desire(), None);
        assert_eq!(Vote::Refuse.desire(), Some(0));
        assert_eq!(Vote::All.desire(), Some(u64::MAX));
        assert_eq!(Vote::Quantity(4).desire(), Some(4));
    }

    #[test]
    fn from_bool_and_count() {
        assert_eq!(Vote::from(true), Vote::All);
        assert_eq!(Vote::from(false), Vote::Refuse);
        assert_eq!(Vote::from(7u32), Vote::Quantity(7));
    }

    #[test]
    fn from_option() {
        assert_eq!(Vote::from(None::<bool>), Vote::Indifferent);
        assert_eq!(Vote::from(Some(false)), Vote::Refuse);
        assert_eq!(Vote::from(Some(2u32)), Vote::Quantity(2));
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placement_tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(Placement::Append.anchor(), None);
        assert_eq!(Placement::before("melee").anchor(), Some("melee"));
        assert_eq!(Placement::after("melee").to_string(), "after melee");
    }
}

// ── EventArg ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(EventArg::from(3_i64).as_int(), Some(3));
        assert_eq!(EventArg::from("sink").as_text(), Some("sink"));
        assert_eq!(EventArg::from(true).as_flag(), Some(true));
        assert_eq!(EventArg::from(3_i64).as_text(), None);
    }
}

// ── Default capabilities ──────────────────────────────────────────────────────

#[cfg(test)]
mod default_capabilities {
    use super::*;

    /// Only implements the two required methods.
    struct Minimal;

    impl Behavior<&'static str> for Minimal {
        fn urgency(&self) -> Option<Urgency> {
            None
        }

        fn action(&mut self) -> &'static str {
            "wait"
        }
    }

    #[test]
    fn defaults_are_inert() {
        let mut b = Minimal;
        let actor = actor();
        let ctx = DecisionContext::new(0, &actor);
        let item = Item::new("rock", 1);

        b.reset_urgency();
        assert!(b.prepare(&ctx).unwrap().is_empty());
        assert_eq!(b.status(), "");
        assert_eq!(b.pickup_vote(&item, &actor), Vote::Indifferent);
        assert_eq!(b.drop_vote(&item, &actor), Vote::Indifferent);
        assert!(!b.handles("anything"));
        assert!(b.on_event("anything", &[]).is_ok());
    }

    #[test]
    fn behavior_is_object_safe_via_box() {
        let mut b: Box<dyn Behavior<&'static str>> = Box::new(Minimal);
        assert_eq!(b.action(), "wait");
        assert_eq!(b.urgency(), None);
    }
}

// ── IdleBehavior ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle_tests {
    use super::*;

    #[test]
    fn always_fallback() {
        let mut idle = IdleBehavior::new('s', "searching");
        let actor = actor();
        let ctx = DecisionContext::new(9, &actor);
        idle.reset_urgency();
        idle.prepare(&ctx).unwrap();
        assert_eq!(idle.urgency(), Some(Urgency::Fallback));
        assert_eq!(idle.action(), 's');
        assert_eq!(idle.status(), "searching");
    }
}
