#![deny(unsafe_code)]
//! WASM bindings for glyphdust.
//!
//! A thin translation layer: the browser host wires pointer/touch listeners
//! and `requestAnimationFrame` to these methods, samples glyph pixels into
//! the homes buffer, and draws the sprite quadruples onto a 2D canvas. All
//! behavior lives in `glyphdust-sim`.

use glam::DVec2;
use glyphdust_core::bounds::Bounds;
use glyphdust_sim::{SimConfig, Simulation};
use wasm_bindgen::prelude::*;

/// One simulation instance owned by the JS host.
#[wasm_bindgen]
pub struct Glyphdust {
    sim: Simulation,
}

#[wasm_bindgen]
impl Glyphdust {
    /// Creates a simulation for a canvas of the given logical size.
    ///
    /// `params_json` is a JSON object of parameter overrides (`"{}"` for
    /// defaults). Errors surface as JS exceptions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, seed: u32, params_json: &str) -> Result<Glyphdust, JsError> {
        let bounds = Bounds::new(width, height).map_err(|e| JsError::new(&e.to_string()))?;
        let params: serde_json::Value =
            serde_json::from_str(params_json).map_err(|e| JsError::new(&e.to_string()))?;
        let config = SimConfig::from_json(&params);
        let sim = Simulation::new(bounds, config, u64::from(seed))
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Glyphdust { sim })
    }

    /// (Re)builds the text particles from a flat `[x0, y0, x1, y1, ...]`
    /// buffer of glyph-sampled home coordinates.
    pub fn set_homes(&mut self, coords: &[f64]) {
        self.sim.seed_text(&pair_up(coords));
    }

    /// Resize path: new logical size plus freshly sampled homes.
    pub fn resize(&mut self, width: f64, height: f64, coords: &[f64]) -> Result<(), JsError> {
        let bounds = Bounds::new(width, height).map_err(|e| JsError::new(&e.to_string()))?;
        self.sim.reinit(bounds, &pair_up(coords));
        Ok(())
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: f64) {
        self.sim.pointer_moved(x, y, now_ms);
    }

    pub fn pointer_left(&mut self) {
        self.sim.pointer_left();
    }

    pub fn touch_started(&mut self, x: f64, y: f64, now_ms: f64) {
        self.sim.touch_started(x, y, now_ms);
    }

    pub fn touch_moved(&mut self, x: f64, y: f64, now_ms: f64) {
        self.sim.touch_moved(x, y, now_ms);
    }

    pub fn touch_ended(&mut self) {
        self.sim.touch_ended();
    }

    /// Advances one step. Call once per animation frame, after drawing.
    pub fn tick(&mut self, now_ms: f64) {
        self.sim.tick(now_ms);
    }

    /// Sprite data for the current state as `[x, y, radius, alpha]`
    /// quadruples. Every sprite is a filled circle in
    /// `rgba(255, 255, 255, alpha)`.
    pub fn frame_data(&self) -> Vec<f32> {
        let frame = self.sim.frame();
        let mut data = Vec::with_capacity(frame.sprites.len() * 4);
        for sprite in &frame.sprites {
            data.push(sprite.position.x as f32);
            data.push(sprite.position.y as f32);
            data.push(sprite.radius as f32);
            data.push(sprite.alpha as f32);
        }
        data
    }

    /// Number of sprites in a frame (ambient plus text).
    pub fn sprite_count(&self) -> usize {
        self.sim.ambient_particles().len() + self.sim.text_particles().len()
    }
}

/// Folds a flat coordinate buffer into points, ignoring a trailing odd
/// element.
fn pair_up(coords: &[f64]) -> Vec<DVec2> {
    coords
        .chunks_exact(2)
        .map(|pair| DVec2::new(pair[0], pair[1]))
        .collect()
}
