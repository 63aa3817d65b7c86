//! Urgency evaluation and behavior selection.

use arb_behavior::DecisionContext;
use arb_core::{ArbError, ArbResult, Urgency};
use arb_registry::BehaviorRegistry;

use crate::DecisionObserver;

/// The winner of one arbitration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub behavior: String,
    pub urgency:  Urgency,
}

/// The outcome of a full decision cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<A> {
    /// The winning behavior's action.
    pub action: A,
    /// `"<behavior>:<behavior status>"`.
    pub status: String,
    pub behavior: String,
    pub urgency: Urgency,
}

/// Evaluate the urgency of `name` for this cycle.
///
/// Resets the behavior's urgency, runs its `prepare` step, and reads the
/// result (`None` counts as [`Urgency::None`]).  Roster changes the behavior
/// asked for are applied to `registry` before returning.
///
/// A name with no registered behavior is logged and scores
/// [`Urgency::None`]; it usually means an earlier behavior removed it during
/// this cycle.
///
/// # Errors
///
/// Whatever `prepare` fails with, and any error applying its roster changes.
pub fn evaluate<A: 'static>(
    registry: &mut BehaviorRegistry<A>,
    name:     &str,
    ctx:      &DecisionContext<'_>,
) -> ArbResult<Urgency> {
    let Some(behavior) = registry.get_mut(name) else {
        tracing::info!(behavior = name, cycle = ctx.cycle, "behavior not registered; urgency none");
        return Ok(Urgency::None);
    };

    behavior.reset_urgency();
    let changes = behavior.prepare(ctx).inspect_err(|e| {
        tracing::error!(behavior = name, cycle = ctx.cycle, error = %e, "prepare failed");
    })?;
    let urgency = behavior.urgency().unwrap_or_default();

    for change in changes {
        registry.apply(change)?;
    }
    Ok(urgency)
}

/// Evaluate every behavior in priority order and pick the most urgent.
///
/// Iterates over a snapshot of the priority list taken on entry.  A later
/// behavior replaces the running best only with a strictly greater urgency,
/// so ties go to the earlier position.  Only behaviors still registered when
/// the pass ends are eligible: one removed by itself or by a later behavior
/// cannot win, and the next best candidate is chosen instead.
///
/// Returns `None` when no eligible behavior reported more than
/// [`Urgency::None`].
pub fn select_behavior<A, O>(
    registry: &mut BehaviorRegistry<A>,
    ctx:      &DecisionContext<'_>,
    observer: &mut O,
) -> ArbResult<Option<Selection>>
where
    A: 'static,
    O: DecisionObserver + ?Sized,
{
    match run_pass(registry, ctx, observer)? {
        Pass::Selected(selection) => Ok(Some(selection)),
        Pass::NothingUrgent | Pass::AllRemoved => Ok(None),
    }
}

/// Run one decision cycle: select a behavior and take its action.
///
/// # Errors
///
/// - [`ArbError::NoSelection`] if no behavior wanted to act, or every
///   behavior that did was removed during the cycle.  The first breaks the
///   agent's contract of always carrying a fallback; both are logged as
///   critical.
/// - Any error from [`evaluate`].
pub fn decide<A, O>(
    registry: &mut BehaviorRegistry<A>,
    ctx:      &DecisionContext<'_>,
    observer: &mut O,
) -> ArbResult<Decision<A>>
where
    A: 'static,
    O: DecisionObserver + ?Sized,
{
    let Selection { behavior: name, urgency } = match run_pass(registry, ctx, observer)? {
        Pass::Selected(selection) => selection,
        Pass::NothingUrgent => {
            tracing::error!(critical = true, cycle = ctx.cycle, "no behavior reported a positive urgency");
            return Err(ArbError::NoSelection);
        }
        Pass::AllRemoved => {
            tracing::error!(
                critical = true,
                cycle = ctx.cycle,
                "every behavior with a positive urgency was removed during the cycle"
            );
            return Err(ArbError::NoSelection);
        }
    };

    let behavior = registry.get_mut(&name).ok_or(ArbError::NoSelection)?;
    let action = behavior.action();
    let status = format!("{name}:{}", behavior.status());

    tracing::debug!(cycle = ctx.cycle, behavior = name.as_str(), %urgency, status = status.as_str(), "behavior selected");
    observer.on_selected(ctx.cycle, &name, urgency);

    Ok(Decision { action, status, behavior: name, urgency })
}

// ── Internals ─────────────────────────────────────────────────────────────────

enum Pass {
    Selected(Selection),
    NothingUrgent,
    /// Some behavior scored above `None`, but none of those is still registered.
    AllRemoved,
}

fn run_pass<A, O>(
    registry: &mut BehaviorRegistry<A>,
    ctx:      &DecisionContext<'_>,
    observer: &mut O,
) -> ArbResult<Pass>
where
    A: 'static,
    O: DecisionObserver + ?Sized,
{
    let order = registry.priority().snapshot();
    observer.on_cycle_start(ctx.cycle, &order);

    let mut scored: Vec<(String, Urgency)> = Vec::with_capacity(order.len());
    for name in order {
        let urgency = evaluate(registry, &name, ctx)?;
        observer.on_evaluated(ctx.cycle, &name, urgency);
        if urgency > Urgency::None {
            scored.push((name, urgency));
        }
    }
    if scored.is_empty() {
        return Ok(Pass::NothingUrgent);
    }

    let mut best: Option<(String, Urgency)> = None;
    for (name, urgency) in scored {
        if !registry.contains(&name) {
            tracing::info!(behavior = name.as_str(), cycle = ctx.cycle, "candidate removed during the cycle; skipped");
            continue;
        }
        if best.as_ref().is_none_or(|(_, b)| urgency.value() > b.value()) {
            best = Some((name, urgency));
        }
    }

    Ok(match best {
        Some((behavior, urgency)) => Pass::Selected(Selection { behavior, urgency }),
        None => Pass::AllRemoved,
    })
}
