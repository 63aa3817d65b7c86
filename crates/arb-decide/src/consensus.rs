//! Pickup and drop consensus across every registered behavior.
//!
//! Both polls visit behaviors in registry map order, not priority order, and
//! take the largest positive desire.  They differ in what can stop the poll
//! early:
//!
//! - **Pickup**: the first behavior with a positive desire triggers the
//!   affordability check on a priced item.  If the actor cannot pay, the
//!   poll ends with `Keep`, whatever anyone else wanted.
//! - **Drop**: any `Vote::Refuse` ends the poll with `Keep`.

use arb_behavior::Vote;
use arb_core::{ActorState, Item, VoteResult};
use arb_registry::BehaviorRegistry;

/// Should the agent pick up `item`, and how many?
pub fn vote_pickup<A: 'static>(
    registry: &BehaviorRegistry<A>,
    item:     &Item,
    actor:    &ActorState,
) -> VoteResult {
    let mut max_desire = 0u64;

    for (name, behavior) in registry.iter() {
        let desire = match behavior.pickup_vote(item, actor).desire() {
            Some(d) if d > 0 => d,
            _ => continue,
        };
        if let Some(cost) = item.cost {
            if !actor.can_afford(cost) {
                tracing::debug!(
                    item = item.name.as_str(),
                    behavior = name,
                    cost,
                    gold = actor.gold,
                    "pickup refused: cannot afford"
                );
                return VoteResult::Keep;
            }
        }
        max_desire = max_desire.max(desire);
    }

    VoteResult::from_desire(max_desire, item.quantity)
}

/// Should the agent drop `item`, and how many?
pub fn vote_drop<A: 'static>(
    registry: &BehaviorRegistry<A>,
    item:     &Item,
    actor:    &ActorState,
) -> VoteResult {
    let mut max_desire = 0u64;

    for (name, behavior) in registry.iter() {
        match behavior.drop_vote(item, actor) {
            Vote::Indifferent => {}
            Vote::Refuse => {
                tracing::debug!(item = item.name.as_str(), behavior = name, "drop vetoed");
                return VoteResult::Keep;
            }
            vote => max_desire = max_desire.max(vote.desire().unwrap_or(0)),
        }
    }

    VoteResult::from_desire(max_desire, item.quantity)
}
