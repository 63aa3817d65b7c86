//! Read-only cycle state passed to every `prepare` call.

use arb_core::ActorState;

/// A read-only snapshot of the decision cycle passed to
/// [`Behavior::prepare`][crate::Behavior::prepare].
///
/// Built once per cycle by the arbiter and shared by every behavior it
/// evaluates.
pub struct DecisionContext<'a> {
    /// Monotonic decision-cycle counter, starting at 0.
    pub cycle: u64,

    /// The agent's own state at the start of the cycle.
    pub actor: &'a ActorState,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(cycle: u64, actor: &'a ActorState) -> Self {
        Self { cycle, actor }
    }
}
