//! A fallback behavior that always wants to act a little.

use arb_core::Urgency;

use crate::Behavior;

/// A [`Behavior`] that reports [`Urgency::Fallback`] every cycle and returns
/// a fixed action.
///
/// Register one at the end of the priority list so that every cycle has at
/// least one candidate with positive urgency.
pub struct IdleBehavior<A: Clone> {
    action: A,
    status: String,
}

impl<A: Clone> IdleBehavior<A> {
    pub fn new(action: A, status: impl Into<String>) -> Self {
        Self { action, status: status.into() }
    }
}

impl<A: Clone + 'static> Behavior<A> for IdleBehavior<A> {
    fn urgency(&self) -> Option<Urgency> {
        Some(Urgency::Fallback)
    }

    fn action(&mut self) -> A {
        self.action.clone()
    }

    fn status(&self) -> String {
        self.status.clone()
    }
}
