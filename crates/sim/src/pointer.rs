//! Pointer-derived repulsor state.
//!
//! Holds the most recent pointer coordinates (or none after a leave event)
//! and the current repulsor radius. Touch events are routed through the same
//! state by the simulation.

use glam::DVec2;
use glyphdust_core::repulsor::{Repulsor, RepulsorSource};

/// The pointer as a repulsor source: active while it has coordinates.
#[derive(Debug, Clone)]
pub struct Pointer {
    position: Option<DVec2>,
    radius: f64,
    default_radius: f64,
}

impl Pointer {
    /// Creates an inactive pointer with the given default radius.
    pub fn new(default_radius: f64) -> Self {
        Self {
            position: None,
            radius: default_radius,
            default_radius,
        }
    }

    /// Handles a pointer-move: updates coordinates and restores the radius
    /// to its default.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Some(DVec2::new(x, y));
        self.radius = self.default_radius;
    }

    /// Handles a pointer-leave: the pointer stops contributing force.
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Last known coordinates, if the pointer is on the canvas.
    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    /// Current repulsor radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl RepulsorSource for Pointer {
    fn repulsor(&self) -> Option<Repulsor> {
        self.position.map(|center| Repulsor {
            center,
            radius: self.radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pointer_is_inactive() {
        let p = Pointer::new(150.0);
        assert!(p.position().is_none());
        assert!(p.repulsor().is_none());
    }

    #[test]
    fn move_to_activates_with_default_radius() {
        let mut p = Pointer::new(150.0);
        p.move_to(40.0, 60.0);
        let r = p.repulsor().unwrap();
        assert_eq!(r.center, DVec2::new(40.0, 60.0));
        assert_eq!(r.radius, 150.0);
    }

    #[test]
    fn clear_deactivates_again() {
        let mut p = Pointer::new(150.0);
        p.move_to(40.0, 60.0);
        p.clear();
        assert!(p.repulsor().is_none());
        // The last radius survives; only the coordinates go away.
        assert_eq!(p.radius(), 150.0);
    }

    #[test]
    fn repeated_moves_track_the_latest_position() {
        let mut p = Pointer::new(150.0);
        p.move_to(1.0, 2.0);
        p.move_to(3.0, 4.0);
        assert_eq!(p.position(), Some(DVec2::new(3.0, 4.0)));
    }
}
