//! Fire-and-forget event broadcast.

use arb_behavior::EventArg;
use arb_registry::BehaviorRegistry;

/// Deliver `event` to every registered behavior that handles it.
///
/// Order is unspecified.  Handler failures are logged and otherwise ignored;
/// one failing handler does not stop delivery to the rest.  Returns the
/// number of behaviors the event was delivered to.
pub fn notify<A: 'static>(registry: &mut BehaviorRegistry<A>, event: &str, args: &[EventArg]) -> usize {
    let mut delivered = 0;
    for (name, behavior) in registry.iter_mut() {
        if !behavior.handles(event) {
            continue;
        }
        delivered += 1;
        if let Err(e) = behavior.on_event(event, args) {
            tracing::error!(behavior = name, event, error = %e, "event handler failed");
        }
    }
    delivered
}
