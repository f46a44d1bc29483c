//! Reproducible specification for a headless simulation run.
//!
//! A [`Scenario`] captures everything needed to replay a run: canvas
//! dimensions, PRNG seed, tick count, and parameter overrides. Two identical
//! scenarios fed to the same binary produce identical trajectories.

use crate::bounds::Bounds;
use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a headless simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub width: f64,
    pub height: f64,
    pub seed: u64,
    #[serde(default)]
    pub ticks: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Scenario {
    /// Creates a scenario with no parameter overrides and zero ticks.
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ticks: 0,
            params: empty_params(),
        }
    }

    /// Validates that the scenario describes a constructible canvas.
    pub fn validate(&self) -> Result<(), SimError> {
        Bounds::new(self.width, self.height).map(|_| ())
    }

    /// The canvas bounds this scenario describes.
    pub fn bounds(&self) -> Result<Bounds, SimError> {
        Bounds::new(self.width, self.height)
    }
}
