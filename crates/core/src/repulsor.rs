//! The repulsor abstraction: a point with a radius of influence.
//!
//! Both concrete sources (the real pointer and the idle-mode virtual agents)
//! expose the same `Repulsor` value through `RepulsorSource`, so the force
//! model and the particle field never special-case where an influence came
//! from. An inactive source yields `None` and contributes exactly zero
//! force; no coordinate of an inactive source is ever read.

use crate::error::SimError;
use glam::DVec2;

/// An active influence point: pushes (or, for attract-polarity particles,
/// pulls) particles within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsor {
    pub center: DVec2,
    pub radius: f64,
}

impl Repulsor {
    /// Creates a repulsor, rejecting a non-positive or non-finite radius
    /// with `SimError::InvalidRadius`.
    pub fn new(center: DVec2, radius: f64) -> Result<Self, SimError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SimError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// True if the point lies strictly inside the radius of influence.
    pub fn contains(&self, p: DVec2) -> bool {
        self.center.distance(p) < self.radius
    }
}

/// Something that may currently project a repulsor onto the canvas.
///
/// Exactly two implementers exist: the pointer (active while it has
/// coordinates) and a virtual agent (active while in idle mode). The trait
/// is object-safe so the active set can be assembled from mixed sources.
pub trait RepulsorSource {
    /// The current influence, or `None` while the source is inactive.
    fn repulsor(&self) -> Option<Repulsor>;
}
