//! The `Brain` facade and its builder.

use arb_behavior::{DecisionContext, EventArg, Placement};
use arb_core::{ActorState, ArbResult, Item, Monster, VoteResult};
use arb_registry::{BehaviorRegistry, KeepOrder, PriorityPolicy};
use arb_threat::{ThreatAssessment, ThreatConfig};

use crate::{Decision, DecisionObserver, NoopObserver};

// ── Brain ─────────────────────────────────────────────────────────────────────

/// Everything the agent's run loop talks to.
///
/// `Brain<A, P>` owns the behavior registry and the priority policy, counts
/// decision cycles, and exposes the operations of the arbitration core:
///
/// | Method                        | Purpose                                  |
/// |-------------------------------|------------------------------------------|
/// | [`decide`](Self::decide)      | one decision cycle → action + status     |
/// | [`pickup`](Self::pickup)      | consensus on picking up an item          |
/// | [`drop`](Self::drop)          | consensus on dropping an item            |
/// | [`evaluate_threat`](Self::evaluate_threat) | risk flags for one monster  |
/// | [`add`](Self::add) / [`remove`](Self::remove) | behavior lifecycle    |
/// | [`notify`](Self::notify)      | broadcast an event to handlers           |
///
/// Create via [`BrainBuilder`].
pub struct Brain<A, P: PriorityPolicy = KeepOrder> {
    /// Live behaviors and their priority order.
    pub registry: BehaviorRegistry<A>,

    /// Reorders the priority list at the start of every cycle.
    pub policy: P,

    /// Thresholds used by [`evaluate_threat`](Self::evaluate_threat).
    pub threat: ThreatConfig,

    cycle: u64,
}

impl<A: 'static, P: PriorityPolicy> Brain<A, P> {
    // ── Decision cycle ────────────────────────────────────────────────────

    /// Run one decision cycle.
    ///
    /// Fails with `ArbError::NoSelection` if nothing wanted to act; see
    /// [`decide`][crate::decide].
    pub fn decide(&mut self, actor: &ActorState) -> ArbResult<Decision<A>> {
        self.decide_with(actor, &mut NoopObserver)
    }

    /// Like [`decide`](Self::decide), reporting progress to `observer`.
    ///
    /// The cycle counter advances even when the cycle fails.
    pub fn decide_with<O>(&mut self, actor: &ActorState, observer: &mut O) -> ArbResult<Decision<A>>
    where
        O: DecisionObserver + ?Sized,
    {
        let cycle = self.cycle;
        self.cycle += 1;

        self.registry.refresh_priority(&mut self.policy)?;
        let ctx = DecisionContext::new(cycle, actor);
        crate::decide(&mut self.registry, &ctx, observer)
    }

    /// Number of decision cycles started so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    // ── Consensus ─────────────────────────────────────────────────────────

    pub fn pickup(&self, item: &Item, actor: &ActorState) -> VoteResult {
        crate::vote_pickup(&self.registry, item, actor)
    }

    pub fn drop(&self, item: &Item, actor: &ActorState) -> VoteResult {
        crate::vote_drop(&self.registry, item, actor)
    }

    // ── Threat ────────────────────────────────────────────────────────────

    pub fn evaluate_threat(&self, monster: &Monster, actor: &ActorState) -> ArbResult<ThreatAssessment> {
        arb_threat::evaluate_with(monster, actor, &self.threat)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    pub fn add(&mut self, name: &str, placement: Placement) -> ArbResult<()> {
        self.registry.add(name, placement)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.registry.remove(name)
    }

    pub fn remove_where(&mut self, pred: impl FnMut(&str) -> bool) -> Vec<String> {
        self.registry.remove_where(pred)
    }

    // ── Events ────────────────────────────────────────────────────────────

    pub fn notify(&mut self, event: &str, args: &[EventArg]) -> usize {
        crate::notify(&mut self.registry, event, args)
    }
}

// ── BrainBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Brain<A, P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                  |
/// |---------------------|--------------------------|
/// | `.policy(p)`        | [`KeepOrder`]            |
/// | `.threat_config(c)` | `ThreatConfig::default()`|
/// | `.start_cycle(n)`   | 0                        |
pub struct BrainBuilder<A, P: PriorityPolicy = KeepOrder> {
    registry: BehaviorRegistry<A>,
    policy:   P,
    threat:   ThreatConfig,
    cycle:    u64,
}

impl<A: 'static> BrainBuilder<A, KeepOrder> {
    pub fn new(registry: BehaviorRegistry<A>) -> Self {
        Self {
            registry,
            policy: KeepOrder,
            threat: ThreatConfig::default(),
            cycle:  0,
        }
    }
}

impl<A: 'static, P: PriorityPolicy> BrainBuilder<A, P> {
    /// Replace the priority policy.
    pub fn policy<Q: PriorityPolicy>(self, policy: Q) -> BrainBuilder<A, Q> {
        BrainBuilder {
            registry: self.registry,
            policy,
            threat:   self.threat,
            cycle:    self.cycle,
        }
    }

    pub fn threat_config(mut self, threat: ThreatConfig) -> Self {
        self.threat = threat;
        self
    }

    /// Resume counting cycles from `cycle`.
    pub fn start_cycle(mut self, cycle: u64) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn build(self) -> Brain<A, P> {
        if self.registry.is_empty() {
            tracing::warn!("building a brain with no behaviors; every decision cycle will fail");
        }
        Brain {
            registry: self.registry,
            policy:   self.policy,
            threat:   self.threat,
            cycle:    self.cycle,
        }
    }
}
