//! Unit tests for arb-core primitives.

#[cfg(test)]
mod urgency {
    use crate::{ArbError, Urgency};

    #[test]
    fn numeric_projection() {
        let values: Vec<i32> = Urgency::ALL.iter().map(|u| u.value()).collect();
        assert_eq!(values, vec![50, 40, 30, 20, 10, 0]);
    }

    #[test]
    fn ordering_matches_projection() {
        for pair in Urgency::ALL.windows(2) {
            assert!(pair[0] > pair[1], "{} should outrank {}", pair[0], pair[1]);
            assert!(pair[0].value() > pair[1].value());
        }
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Urgency::default(), Urgency::None);
        assert_eq!(Urgency::default().value(), 0);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("critical".parse::<Urgency>().unwrap(), Urgency::Critical);
        assert_eq!(" Normal ".parse::<Urgency>().unwrap(), Urgency::Normal);
        assert_eq!("NONE".parse::<Urgency>().unwrap(), Urgency::None);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "panic".parse::<Urgency>().unwrap_err();
        assert!(matches!(err, ArbError::InvalidUrgency(ref s) if s == "panic"));
    }

    #[test]
    fn numeric_conversion_is_exact() {
        assert_eq!(Urgency::try_from(40_i64).unwrap(), Urgency::Important);
        assert_eq!(Urgency::try_from(0_i64).unwrap(), Urgency::None);
        assert!(Urgency::try_from(35_i64).is_err());
        assert!(Urgency::try_from(-10_i64).is_err());
        assert!(Urgency::try_from(60_i64).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Urgency::Unimportant.to_string(), "unimportant");
    }

    #[test]
    fn into_i32() {
        assert_eq!(i32::from(Urgency::Critical), 50);
        let n: i32 = Urgency::Fallback.into();
        assert_eq!(n, 10);
    }
}

#[cfg(test)]
mod vote_result {
    use crate::VoteResult;

    #[test]
    fn zero_desire_keeps() {
        assert_eq!(VoteResult::from_desire(0, 10), VoteResult::Keep);
        assert!(VoteResult::from_desire(0, 10).is_keep());
        assert!(!VoteResult::Partial(1).is_keep());
    }

    #[test]
    fn desire_at_or_above_quantity_is_all() {
        assert_eq!(VoteResult::from_desire(10, 10), VoteResult::All);
        assert_eq!(VoteResult::from_desire(u64::MAX, 10), VoteResult::All);
    }

    #[test]
    fn desire_below_quantity_is_partial() {
        assert_eq!(VoteResult::from_desire(5, 10), VoteResult::Partial(5));
    }

    #[test]
    fn count() {
        assert_eq!(VoteResult::Keep.count(7), 0);
        assert_eq!(VoteResult::All.count(7), 7);
        assert_eq!(VoteResult::Partial(3).count(7), 3);
    }

    #[test]
    fn display() {
        assert_eq!(VoteResult::Partial(2).to_string(), "partial(2)");
        assert_eq!(VoteResult::Keep.to_string(), "keep");
    }
}

#[cfg(test)]
mod world {
    use crate::{ActorState, Item, Monster};

    #[test]
    fn affordability() {
        let actor = ActorState::new(10, 12, 100);
        assert!(actor.can_afford(100));
        assert!(!actor.can_afford(101));
    }

    #[test]
    fn item_builder() {
        let item = Item::new("dagger", 3).with_cost(40);
        assert_eq!(item.quantity, 3);
        assert_eq!(item.cost, Some(40));
        assert_eq!(Item::new("rock", 1).cost, None);
    }

    #[test]
    fn monster_builder() {
        let m = Monster::new("cockatrice", 1.5, 3, 6).one_hit();
        assert!(m.one_hit_class);
        assert_eq!(m.speed, 6);
    }
}

#[cfg(test)]
mod error {
    use crate::ArbError;

    #[test]
    fn only_no_selection_is_critical() {
        assert!(ArbError::NoSelection.is_critical());
        assert!(!ArbError::InvalidBehavior("x".into()).is_critical());
    }

    #[test]
    fn messages() {
        let e = ArbError::UnknownAnchor { name: "x".into(), anchor: "y".into() };
        assert_eq!(
            e.to_string(),
            "cannot place behavior \"x\" relative to unknown behavior \"y\""
        );
    }
}
