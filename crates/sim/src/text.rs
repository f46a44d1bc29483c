//! Text particles: the species that forms the glyph silhouette.
//!
//! Each particle owns an immutable home coordinate sampled from the rendered
//! text by an external collaborator. Repulsors shatter the silhouette by
//! injecting velocity; the home pull and per-tick friction bring every
//! particle back once the repulsor moves on.

use glam::DVec2;
use glyphdust_core::bounds::Bounds;
use glyphdust_core::force;
use glyphdust_core::prng::Xorshift64;
use glyphdust_core::repulsor::Repulsor;

use crate::config::SimConfig;

/// Force sensitivity is drawn uniformly from [DENSITY_MIN, DENSITY_MAX).
const DENSITY_MIN: f64 = 1.0;
const DENSITY_MAX: f64 = 11.0;

/// Whether a particle is shattered away from a repulsor or pulled into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Repel,
    Attract,
}

impl Polarity {
    /// Sign applied to the repulsion impulse: +1 repels, -1 attracts.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Repel => 1.0,
            Polarity::Attract => -1.0,
        }
    }
}

/// One glyph-forming particle.
#[derive(Debug, Clone)]
pub struct TextParticle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    home: DVec2,
    density: f64,
    polarity: Polarity,
}

impl TextParticle {
    /// Spawns a particle bound to `home`, starting from a uniform position
    /// anywhere on the canvas so the silhouette assembles on the first
    /// ticks.
    pub fn spawn(home: DVec2, bounds: &Bounds, config: &SimConfig, rng: &mut Xorshift64) -> Self {
        let position = bounds.sample(rng);
        let size = rng.next_range(config.text_size_min, config.text_size_max);
        let density = rng.next_range(DENSITY_MIN, DENSITY_MAX);
        let polarity = if rng.chance(config.attract_fraction) {
            Polarity::Attract
        } else {
            Polarity::Repel
        };
        Self {
            position,
            velocity: DVec2::ZERO,
            size,
            home,
            density,
            polarity,
        }
    }

    /// The immutable glyph-sampled target coordinate.
    pub fn home(&self) -> DVec2 {
        self.home
    }

    /// Force sensitivity in [1, 11).
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Whether repulsors shatter or swallow this particle.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Advances one tick: repulsion impulses, home pull, Euler integration,
    /// friction. The home pull and friction run unconditionally so released
    /// particles always decay back toward home.
    pub fn update(&mut self, repulsors: &[Repulsor], config: &SimConfig) {
        for repulsor in repulsors {
            let impulse = force::repulsion(self.position, repulsor);
            self.velocity +=
                impulse * self.density * config.repulsion_gain * self.polarity.sign();
        }
        self.velocity += force::home_pull(self.position, self.home, config.ease_base);
        self.position += self.velocity;
        self.velocity *= config.friction;
    }

    /// Rendering alpha: boosted to full opacity while any repulsor's center
    /// is within its own (non-multiplied) radius of this particle. Visual
    /// cue only.
    pub fn alpha(&self, repulsors: &[Repulsor], base_alpha: f64) -> f64 {
        if repulsors.iter().any(|r| r.contains(self.position)) {
            1.0
        } else {
            base_alpha
        }
    }
}
