//! Fixed-capacity circle registry
//!
//! Circles live in a ring of slots addressed by a wrapping write cursor. A slot
//! is identified only by its index; there are no stable circle IDs.
//!
//! Spawning always writes the cursor slot and advances it, so once the ring is full
//! the oldest slot is overwritten regardless of the size or age of the circle in it.
//! This is plain ring reuse, not a priority eviction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A growing circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    /// Grows by one per growth tick, never shrinks
    pub radius: u32,
}

impl Circle {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            center: DVec2::new(x, y),
            radius: 0,
        }
    }

    /// True if the point lies within (or on) the current radius
    pub fn covers(&self, point: DVec2) -> bool {
        // Survives strictly while radius < distance, so tangency does not cover
        !((self.radius as f64) < self.center.distance(point))
    }
}

/// Ring buffer of optional circle slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleRegistry {
    /// `None` is a hole (never written, or cleared by a pop)
    slots: Vec<Option<Circle>>,
    /// Next slot to write
    cursor: usize,
}

impl CircleRegistry {
    /// Create an empty registry with `capacity` slots.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "registry needs at least one slot");
        Self {
            slots: vec![None; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next spawn will write
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Write a fresh circle at the cursor slot and advance the cursor.
    ///
    /// Returns the slot written and the circle it overwrote, if any.
    pub fn spawn(&mut self, x: f64, y: f64) -> (usize, Option<Circle>) {
        let slot = self.cursor;
        let evicted = self.slots[slot].replace(Circle::new(x, y));
        self.cursor = (self.cursor + 1) % self.slots.len();
        (slot, evicted)
    }

    /// Grow every live circle by one; holes are skipped
    pub fn grow_all(&mut self) {
        for circle in self.slots.iter_mut().flatten() {
            circle.radius = circle.radius.saturating_add(1);
        }
    }

    /// Clear a slot to a hole. Idempotent; out-of-range slots are ignored.
    pub fn remove_at(&mut self, slot: usize) -> Option<Circle> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn get(&self, slot: usize) -> Option<&Circle> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Live circles with their slot index, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Circle)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, c)| c.as_ref().map(|c| (slot, c)))
    }

    /// Visit every live circle in slot order
    pub fn for_each<F: FnMut(usize, &Circle)>(&self, mut visitor: F) {
        for (slot, circle) in self.iter() {
            visitor(slot, circle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_writes_cursor_slot() {
        let mut reg = CircleRegistry::new(3);
        assert!(reg.is_empty());

        let (slot, evicted) = reg.spawn(10.0, 20.0);
        assert_eq!(slot, 0);
        assert!(evicted.is_none());
        assert_eq!(reg.cursor(), 1);

        let c = reg.get(0).unwrap();
        assert_eq!(c.center, DVec2::new(10.0, 20.0));
        assert_eq!(c.radius, 0);
    }

    #[test]
    fn test_cursor_wraps_and_overwrites_oldest() {
        let mut reg = CircleRegistry::new(2);
        reg.spawn(1.0, 1.0);
        reg.spawn(2.0, 2.0);
        reg.grow_all();

        // Third spawn reuses slot 0 even though that circle is the largest
        let (slot, evicted) = reg.spawn(3.0, 3.0);
        assert_eq!(slot, 0);
        assert_eq!(evicted.map(|c| c.center), Some(DVec2::new(1.0, 1.0)));
        assert_eq!(reg.get(0).unwrap().radius, 0);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_spawn_fills_hole_at_cursor_only() {
        let mut reg = CircleRegistry::new(3);
        reg.spawn(0.0, 0.0);
        reg.spawn(1.0, 1.0);
        reg.remove_at(0);

        // Cursor is at 2, the hole at 0 waits for the wrap
        let (slot, _) = reg.spawn(2.0, 2.0);
        assert_eq!(slot, 2);
        assert!(reg.get(0).is_none());
    }

    #[test]
    fn test_grow_all_skips_holes() {
        let mut reg = CircleRegistry::new(3);
        reg.spawn(0.0, 0.0);
        reg.spawn(5.0, 5.0);
        reg.remove_at(0);
        reg.grow_all();
        reg.grow_all();

        assert!(reg.get(0).is_none());
        assert_eq!(reg.get(1).unwrap().radius, 2);
        assert!(reg.get(2).is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut reg = CircleRegistry::new(2);
        reg.spawn(0.0, 0.0);
        assert!(reg.remove_at(0).is_some());
        assert!(reg.remove_at(0).is_none());
        assert!(reg.remove_at(99).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn test_for_each_visits_in_slot_order() {
        let mut reg = CircleRegistry::new(4);
        for i in 0..4 {
            reg.spawn(i as f64, 0.0);
        }
        reg.remove_at(1);

        let mut seen = Vec::new();
        reg.for_each(|slot, c| seen.push((slot, c.center.x)));
        assert_eq!(seen, vec![(0, 0.0), (2, 2.0), (3, 3.0)]);
    }

    #[test]
    fn test_covers_is_strict_at_tangency() {
        let mut c = Circle::new(100.0, 100.0);
        c.radius = 10;
        assert!(!c.covers(DVec2::new(110.0, 100.0)));
        assert!(c.covers(DVec2::new(109.9999, 100.0)));
        assert!(c.covers(DVec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_zero_radius_covers_only_center() {
        let c = Circle::new(5.0, 5.0);
        assert!(c.covers(DVec2::new(5.0, 5.0)));
        assert!(!c.covers(DVec2::new(5.0, 5.001)));
    }

    proptest! {
        #[test]
        fn test_spawn_past_capacity_reuses_slot(capacity in 1usize..16, extra in 1usize..32) {
            let mut reg = CircleRegistry::new(capacity);
            let total = capacity + extra;
            for i in 0..total {
                let (slot, evicted) = reg.spawn(i as f64, 0.0);
                prop_assert_eq!(slot, i % capacity);
                if i >= capacity {
                    // Spawn i overwrites spawn i - capacity
                    prop_assert_eq!(evicted.map(|c| c.center.x), Some((i - capacity) as f64));
                }
            }
            prop_assert_eq!(reg.len(), capacity);
        }
    }
}
