//! Logical canvas geometry: the simulation extent and rectangular zones.
//!
//! All coordinates are logical (CSS-pixel-like) f64 values, not device
//! pixels. `Bounds` is the full canvas extent; `Rect` is an axis-aligned
//! region of it used to bias where autonomous agents wander.

use crate::error::SimError;
use crate::prng::Xorshift64;
use glam::DVec2;

/// The logical canvas extent. Width and height are positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Creates bounds of the given logical size.
    ///
    /// Returns `SimError::InvalidBounds` unless both dimensions are positive
    /// and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, SimError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(SimError::InvalidBounds);
        }
        Ok(Self { width, height })
    }

    /// Canvas width in logical units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in logical units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Relocates a point that drifted past an edge to the opposite edge.
    ///
    /// A coordinate past the far edge resets to 0 and a negative coordinate
    /// resets to the far edge; in-range coordinates pass through unchanged.
    /// This is the ambient-dust wrap rule: re-entry is at the edge itself,
    /// not at the modular overshoot position.
    pub fn wrap(&self, mut p: DVec2) -> DVec2 {
        if p.x > self.width {
            p.x = 0.0;
        } else if p.x < 0.0 {
            p.x = self.width;
        }
        if p.y > self.height {
            p.y = 0.0;
        } else if p.y < 0.0 {
            p.y = self.height;
        }
        p
    }

    /// True if the point lies inside the canvas (edges inclusive).
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Uniformly samples a point over the full canvas.
    pub fn sample(&self, rng: &mut Xorshift64) -> DVec2 {
        DVec2::new(
            rng.next_range(0.0, self.width),
            rng.next_range(0.0, self.height),
        )
    }

    /// A rectangular region given as fractions of the canvas extent.
    ///
    /// `region(0.6, 0.0, 1.0, 1.0)` is the right vertical strip. Corner
    /// fractions are normalized, so swapped corners still yield a valid rect.
    pub fn region(&self, fx0: f64, fy0: f64, fx1: f64, fy1: f64) -> Rect {
        Rect::from_corners(
            DVec2::new(fx0 * self.width, fy0 * self.height),
            DVec2::new(fx1 * self.width, fy1 * self.height),
        )
    }

    /// The point at the given fractions of the extent.
    pub fn at(&self, fx: f64, fy: f64) -> DVec2 {
        DVec2::new(fx * self.width, fy * self.height)
    }
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min: DVec2,
    max: DVec2,
}

impl Rect {
    /// Builds a rect from two opposite corners, normalizing their order.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower-left corner.
    pub fn min(&self) -> DVec2 {
        self.min
    }

    /// Upper-right corner.
    pub fn max(&self) -> DVec2 {
        self.max
    }

    /// True if the point lies inside the rect (edges inclusive).
    pub fn contains(&self, p: DVec2) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Uniformly samples a point inside the rect.
    pub fn sample(&self, rng: &mut Xorshift64) -> DVec2 {
        DVec2::new(
            rng.next_range(self.min.x, self.max.x),
            rng.next_range(self.min.y, self.max.y),
        )
    }
}
