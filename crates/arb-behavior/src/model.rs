//! The `Behavior` trait — the main extension point for agent code.

use arb_core::{ActorState, ArbResult, Item, Urgency};

use crate::{DecisionContext, EventArg, RosterChange, Vote};

/// A pluggable decision unit.
///
/// Each decision cycle the arbiter calls, for every behavior in priority
/// order:
///
/// 1. [`reset_urgency`][Self::reset_urgency]
/// 2. [`prepare`][Self::prepare] — the behavior inspects the world and
///    decides how urgent it is
/// 3. [`urgency`][Self::urgency]
///
/// The single behavior with the highest urgency then has
/// [`action`][Self::action] and [`status`][Self::status] called.
///
/// `A` is the agent's action type; the arbitration core never looks inside it.
///
/// # Required methods
///
/// Only [`urgency`][Self::urgency] and [`action`][Self::action] are required.
/// Everything else defaults to "not supported".
///
/// # Example
///
/// ```rust,ignore
/// struct Eat { hungry: bool }
///
/// impl Behavior<Command> for Eat {
///     fn prepare(&mut self, ctx: &DecisionContext<'_>) -> ArbResult<Vec<RosterChange>> {
///         self.hungry = ctx.cycle % 1000 == 0;
///         Ok(vec![])
///     }
///     fn urgency(&self) -> Option<Urgency> {
///         self.hungry.then_some(Urgency::Important)
///     }
///     fn action(&mut self) -> Command {
///         Command::Eat
///     }
/// }
/// ```
pub trait Behavior<A>: 'static {
    /// Forget any urgency computed in a previous cycle.
    ///
    /// Default: nothing to forget.
    fn reset_urgency(&mut self) {}

    /// Inspect the world and settle this cycle's urgency.
    ///
    /// This is the one place the arbiter calls into behavior logic that may
    /// have side effects on the game.  An `Err` aborts the whole cycle.
    ///
    /// Default: no work, no roster changes.
    fn prepare(&mut self, _ctx: &DecisionContext<'_>) -> ArbResult<Vec<RosterChange>> {
        Ok(vec![])
    }

    /// This cycle's urgency.  `None` is treated as [`Urgency::None`].
    fn urgency(&self) -> Option<Urgency>;

    /// The action to perform after winning arbitration.
    fn action(&mut self) -> A;

    /// Short human-readable description of what the behavior is doing.
    fn status(&self) -> String {
        String::new()
    }

    /// Opinion on picking up `item`.
    fn pickup_vote(&self, _item: &Item, _actor: &ActorState) -> Vote {
        Vote::Indifferent
    }

    /// Opinion on dropping `item`.
    fn drop_vote(&self, _item: &Item, _actor: &ActorState) -> Vote {
        Vote::Indifferent
    }

    /// `true` if this behavior has a handler for the named event.
    fn handles(&self, _event: &str) -> bool {
        false
    }

    /// Handle a broadcast event.  Only called when
    /// [`handles`][Self::handles] returned `true` for `event`.
    fn on_event(&mut self, _event: &str, _args: &[EventArg]) -> ArbResult<()> {
        Ok(())
    }
}
