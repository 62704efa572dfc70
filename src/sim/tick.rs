//! Per-frame simulation update
//!
//! One call per display refresh. Order within a frame:
//! 1. record frame stats
//! 2. resolve clicks queued since the last frame
//! 3. growth ticks, then spawn ticks (a circle spawned this frame reads radius 0)

use super::hit::resolve_clicks;
use super::input::PendingClick;
use super::state::{SimEvent, Simulation};
use super::timer::clamp_delta;

/// Advance the simulation by `dt` milliseconds, applying `clicks` first
pub fn frame(sim: &mut Simulation, clicks: &[PendingClick], dt: f64) -> Vec<SimEvent> {
    let dt = clamp_delta(dt);
    sim.stats.record(dt);

    let mut events = resolve_clicks(&mut sim.registry, clicks);
    sim.stats.pops += events.len() as u64;

    let registry = &mut sim.registry;
    sim.growth_timer.advance(dt, |_| registry.grow_all());

    let spawns = sim.spawn_timer.advance(dt, |_| {});
    for _ in 0..spawns {
        sim.spawn_random(&mut events);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn pops(events: &[SimEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SimEvent::Pop { .. }))
            .count()
    }

    #[test]
    fn test_first_spawn_after_one_interval() {
        let mut sim = Simulation::new(42, 800, 600);
        frame(&mut sim, &[], 999.0);
        assert!(sim.registry.is_empty());

        let events = frame(&mut sim, &[], 1.0);
        assert_eq!(events, vec![SimEvent::Spawn { slot: 0 }]);
        assert_eq!(sim.registry.get(0).unwrap().radius, 0);
    }

    #[test]
    fn test_growth_follows_spawn() {
        let mut sim = Simulation::with_timing(42, 800, 600, MAX_CIRCLES, 1000.0, 100.0);
        frame(&mut sim, &[], 1000.0);
        assert_eq!(sim.registry.get(0).unwrap().radius, 0);

        frame(&mut sim, &[], 350.0);
        assert_eq!(sim.registry.get(0).unwrap().radius, 3);
    }

    #[test]
    fn test_click_pops_before_growth() {
        let mut sim = Simulation::with_timing(42, 800, 600, MAX_CIRCLES, 1000.0, 100.0);
        frame(&mut sim, &[], 1000.0);
        let center = sim.registry.get(0).unwrap().center;

        // Radius 0 covers only the exact center
        let click = PendingClick::new(center.x + 1.0, center.y);
        let events = frame(&mut sim, &[click], 100.0);
        assert_eq!(pops(&events), 0);
        assert_eq!(sim.registry.get(0).unwrap().radius, 1);

        let events = frame(&mut sim, &[click], 16.0);
        assert_eq!(pops(&events), 1);
        assert!(sim.registry.is_empty());
        assert_eq!(sim.stats.pops, 1);
    }

    #[test]
    fn test_negative_delta_counts_as_zero() {
        let mut sim = Simulation::new(42, 800, 600);
        frame(&mut sim, &[], 900.0);
        frame(&mut sim, &[], -5000.0);
        assert_eq!(sim.stats.dt, 0.0);
        assert_eq!(sim.stats.max_dt, 900.0);

        frame(&mut sim, &[], 100.0);
        assert_eq!(sim.registry.len(), 1);
    }

    #[test]
    fn test_overflowing_capacity_evicts() {
        let mut sim = Simulation::with_timing(42, 800, 600, 2, 100.0, 10_000.0);
        let events = frame(&mut sim, &[], 300.0);
        let evictions = events
            .iter()
            .filter(|e| matches!(e, SimEvent::Evict { slot: 0, .. }))
            .count();
        assert_eq!(evictions, 1);
        assert_eq!(sim.registry.len(), 2);
        assert_eq!(sim.registry.cursor(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = Simulation::new(99999, 1024, 768);
        let mut b = Simulation::new(99999, 1024, 768);
        for dt in [16.7, 250.0, 800.0, 33.3, 1500.0] {
            frame(&mut a, &[], dt);
            frame(&mut b, &[], dt);
        }
        assert_eq!(a.registry, b.registry);
    }
}
