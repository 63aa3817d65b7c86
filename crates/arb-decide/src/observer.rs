//! Decision observer trait for tracing and debugging arbitration.

use arb_core::Urgency;

/// Callbacks invoked while a decision cycle runs.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — urgency printer
///
/// ```rust,ignore
/// struct UrgencyPrinter;
///
/// impl DecisionObserver for UrgencyPrinter {
///     fn on_evaluated(&mut self, cycle: u64, behavior: &str, urgency: Urgency) {
///         println!("{cycle} {behavior:>12} {urgency}");
///     }
/// }
/// ```
pub trait DecisionObserver {
    /// Called after the priority order has been snapshotted.
    fn on_cycle_start(&mut self, _cycle: u64, _order: &[String]) {}

    /// Called after each behavior's urgency has been evaluated.
    fn on_evaluated(&mut self, _cycle: u64, _behavior: &str, _urgency: Urgency) {}

    /// Called once the winner's action has been taken.
    fn on_selected(&mut self, _cycle: u64, _behavior: &str, _urgency: Urgency) {}
}

/// A [`DecisionObserver`] that does nothing.
pub struct NoopObserver;

impl DecisionObserver for NoopObserver {}

/// Records the most recent cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTrace {
    pub cycle: u64,
    /// The priority order the cycle iterated over.
    pub order: Vec<String>,
    /// Every evaluation, in evaluation order.
    pub evaluated: Vec<(String, Urgency)>,
    pub selected: Option<(String, Urgency)>,
}

impl DecisionObserver for DecisionTrace {
    fn on_cycle_start(&mut self, cycle: u64, order: &[String]) {
        self.cycle = cycle;
        self.order = order.to_vec();
        self.evaluated.clear();
        self.selected = None;
    }

    fn on_evaluated(&mut self, _cycle: u64, behavior: &str, urgency: Urgency) {
        self.evaluated.push((behavior.to_owned(), urgency));
    }

    fn on_selected(&mut self, _cycle: u64, behavior: &str, urgency: Urgency) {
        self.selected = Some((behavior.to_owned(), urgency));
    }
}
