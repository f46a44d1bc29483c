//! Ambient dust: the decorative background particle species.
//!
//! Dust drifts at a constant velocity chosen at creation, wraps at the
//! canvas edges, and is softly displaced by nearby repulsors. Physics never
//! touches its velocity: repulsion moves the position directly.

use glam::DVec2;
use glyphdust_core::bounds::Bounds;
use glyphdust_core::force;
use glyphdust_core::prng::Xorshift64;
use glyphdust_core::repulsor::Repulsor;

use crate::config::SimConfig;

/// One background dust particle.
#[derive(Debug, Clone)]
pub struct AmbientParticle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub alpha: f64,
}

impl AmbientParticle {
    /// Spawns a dust particle at a uniform position with a power-law-biased
    /// size (most dust is small), a uniform alpha, and a constant drift.
    pub fn spawn(bounds: &Bounds, config: &SimConfig, rng: &mut Xorshift64) -> Self {
        let position = bounds.sample(rng);
        let size = config.ambient_size_min
            + rng.next_f64().powf(config.ambient_size_bias)
                * (config.ambient_size_max - config.ambient_size_min);
        let alpha = rng.next_range(config.ambient_alpha_min, config.ambient_alpha_max);
        let velocity = DVec2::new(
            rng.next_range(-config.ambient_drift, config.ambient_drift),
            rng.next_range(-config.ambient_drift, config.ambient_drift),
        );
        Self {
            position,
            velocity,
            size,
            alpha,
        }
    }

    /// Advances one tick: drift, edge wrap, then the soft push from every
    /// active repulsor. A push can carry the particle past an edge; the next
    /// tick's wrap brings it back.
    pub fn update(&mut self, bounds: &Bounds, repulsors: &[Repulsor]) {
        self.position += self.velocity;
        self.position = bounds.wrap(self.position);
        for repulsor in repulsors {
            self.position += force::ambient_push(self.position, repulsor);
        }
    }
}
