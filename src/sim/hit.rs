//! Click hit testing
//!
//! Clicks are applied one at a time in queue order, each against the registry as
//! left by the previous click. A circle popped by an earlier click in the same frame
//! is gone for the later ones.

use super::input::PendingClick;
use super::registry::CircleRegistry;
use super::state::SimEvent;

/// Pop every circle covering each click; returns one `Pop` event per removal
pub fn resolve_clicks(registry: &mut CircleRegistry, clicks: &[PendingClick]) -> Vec<SimEvent> {
    let mut events = Vec::new();

    for click in clicks {
        let point = click.pos();
        let hits: Vec<usize> = registry
            .iter()
            .filter(|(_, circle)| circle.covers(point))
            .map(|(slot, _)| slot)
            .collect();

        for slot in hits {
            if let Some(circle) = registry.remove_at(slot) {
                log::debug!(
                    "Popped slot {} at ({}, {}) r={}",
                    slot,
                    circle.center.x,
                    circle.center.y,
                    circle.radius
                );
                events.push(SimEvent::Pop { slot, circle });
            }
        }
    }

    events
}
