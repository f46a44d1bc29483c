//! The simulation: explicit owner of all mutable state, advanced tick by
//! tick.
//!
//! Hosts deliver interaction events and timestamps, call [`Simulation::tick`]
//! once per frame, and read back a [`Frame`] of sprites. Draw the frame
//! before ticking: rendering stays one step behind physics, which keeps the
//! animation visually stable.

use glam::DVec2;
use glyphdust_core::bounds::Bounds;
use glyphdust_core::error::SimError;
use glyphdust_core::prng::Xorshift64;
use glyphdust_core::repulsor::{Repulsor, RepulsorSource};
use glyphdust_core::scenario::Scenario;

use crate::agent::AgentController;
use crate::ambient::AmbientParticle;
use crate::clock::IdleClock;
use crate::config::SimConfig;
use crate::pointer::Pointer;
use crate::text::TextParticle;

/// One draw primitive: a filled circle at `position` with `radius`, colored
/// `rgba(255, 255, 255, alpha)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub position: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

/// Everything the renderer needs for one frame: ambient sprites first, then
/// text sprites.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
}

/// The particle field, pointer, idle clock, and agent controller under one
/// explicit owner.
pub struct Simulation {
    config: SimConfig,
    bounds: Bounds,
    rng: Xorshift64,
    clock: IdleClock,
    pointer: Pointer,
    agents: AgentController,
    ambient: Vec<AmbientParticle>,
    text: Vec<TextParticle>,
    /// Active repulsor set resolved by the latest tick.
    active: Vec<Repulsor>,
}

impl Simulation {
    /// Creates a simulation with the ambient dust spawned and the text field
    /// empty until [`Simulation::seed_text`] delivers home coordinates.
    ///
    /// Rejects an invalid config (see [`SimConfig::validate`]).
    pub fn new(bounds: Bounds, config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = Xorshift64::new(seed);
        let ambient = (0..config.ambient_count)
            .map(|_| AmbientParticle::spawn(&bounds, &config, &mut rng))
            .collect();
        Ok(Self {
            clock: IdleClock::new(config.idle_threshold_ms),
            pointer: Pointer::new(config.pointer_radius),
            agents: AgentController::new(&config.agent_profiles),
            config,
            bounds,
            rng,
            ambient,
            text: Vec::new(),
            active: Vec::new(),
        })
    }

    /// Creates a simulation from a reproducible scenario.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SimError> {
        let bounds = scenario.bounds()?;
        let config = SimConfig::from_json(&scenario.params);
        Self::new(bounds, config, scenario.seed)
    }

    /// (Re)builds the text particles from externally sampled glyph home
    /// coordinates. Particle count equals `homes.len()`.
    pub fn seed_text(&mut self, homes: &[DVec2]) {
        self.text = homes
            .iter()
            .map(|&home| TextParticle::spawn(home, &self.bounds, &self.config, &mut self.rng))
            .collect();
    }

    /// Resize path: swaps in new bounds and recreates both particle species
    /// together. Nothing else resets; pointer, clock, and agents carry on.
    pub fn reinit(&mut self, bounds: Bounds, homes: &[DVec2]) {
        self.bounds = bounds;
        self.ambient = (0..self.config.ambient_count)
            .map(|_| AmbientParticle::spawn(&self.bounds, &self.config, &mut self.rng))
            .collect();
        self.seed_text(homes);
    }

    // ---- Interaction events ----

    /// Pointer-move: updates coordinates, restores the default radius, and
    /// ends idle mode immediately.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: f64) {
        self.pointer.move_to(x, y);
        self.clock.touch(now_ms);
        self.agents.deactivate_all();
    }

    /// Pointer-leave: the pointer stops contributing force. Not an
    /// interaction; the idle countdown keeps running.
    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Touch-start maps to the pointer-move path.
    pub fn touch_started(&mut self, x: f64, y: f64, now_ms: f64) {
        self.pointer_moved(x, y, now_ms);
    }

    /// Touch-move maps to the pointer-move path.
    pub fn touch_moved(&mut self, x: f64, y: f64, now_ms: f64) {
        self.pointer_moved(x, y, now_ms);
    }

    /// Touch-end maps to the pointer-leave path.
    pub fn touch_ended(&mut self) {
        self.pointer_left();
    }

    // ---- Tick ----

    /// Advances the simulation one step.
    ///
    /// Resolves the active repulsor set (the pointer while interactive, the
    /// virtual agents while idle), then updates every particle against it.
    pub fn tick(&mut self, now_ms: f64) {
        self.clock.observe(now_ms);

        self.active.clear();
        if self.clock.is_idle(now_ms) {
            self.agents.update(
                &self.bounds,
                &self.config,
                self.pointer.position(),
                &mut self.rng,
            );
            self.active.extend(self.agents.repulsors());
        } else {
            self.agents.deactivate_all();
            self.active.extend(self.pointer.repulsor());
        }

        for particle in &mut self.ambient {
            particle.update(&self.bounds, &self.active);
        }
        for particle in &mut self.text {
            particle.update(&self.active, &self.config);
        }
    }

    /// The draw output for the current state: ambient sprites first, then
    /// text sprites with their proximity-boosted alpha.
    pub fn frame(&self) -> Frame {
        let mut sprites = Vec::with_capacity(self.ambient.len() + self.text.len());
        sprites.extend(self.ambient.iter().map(|p| Sprite {
            position: p.position,
            radius: p.size,
            alpha: p.alpha,
        }));
        sprites.extend(self.text.iter().map(|p| Sprite {
            position: p.position,
            radius: p.size,
            alpha: p.alpha(&self.active, self.config.base_alpha),
        }));
        Frame { sprites }
    }

    // ---- Introspection ----

    /// True if the simulation is in idle mode at `now_ms`.
    pub fn idle(&self, now_ms: f64) -> bool {
        self.clock.is_idle(now_ms)
    }

    /// The repulsor set resolved by the latest tick.
    pub fn active_repulsors(&self) -> &[Repulsor] {
        &self.active
    }

    /// The virtual agents.
    pub fn agents(&self) -> &[crate::agent::VirtualAgent] {
        self.agents.agents()
    }

    /// The ambient dust particles.
    pub fn ambient_particles(&self) -> &[AmbientParticle] {
        &self.ambient
    }

    /// The text particles.
    pub fn text_particles(&self) -> &[TextParticle] {
        &self.text
    }

    /// The pointer state.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// The canvas bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The tuning parameters.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TICK_MS: f64 = 1000.0 / 60.0;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0).unwrap()
    }

    fn small_config() -> SimConfig {
        let mut config = SimConfig::default();
        config.ambient_count = 20;
        config
    }

    fn homes() -> Vec<DVec2> {
        (0..30)
            .map(|i| DVec2::new(100.0 + (i % 10) as f64 * 4.0, 100.0 + (i / 10) as f64 * 4.0))
            .collect()
    }

    fn sim() -> Simulation {
        let mut sim = Simulation::new(bounds(), small_config(), 42).unwrap();
        sim.seed_text(&homes());
        sim
    }

    // ---- Construction ----

    #[test]
    fn new_spawns_the_configured_ambient_population() {
        let sim = sim();
        assert_eq!(sim.ambient_particles().len(), 20);
        assert_eq!(sim.text_particles().len(), 30);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut config = SimConfig::default();
        config.pointer_radius = -1.0;
        assert!(Simulation::new(bounds(), config, 42).is_err());
    }

    #[test]
    fn from_scenario_applies_overrides() {
        let mut scenario = Scenario::new(640.0, 480.0, 7);
        scenario.params = json!({"ambient_count": 5});
        let sim = Simulation::from_scenario(&scenario).unwrap();
        assert_eq!(sim.ambient_particles().len(), 5);
        assert_eq!(sim.bounds().width(), 640.0);
    }

    #[test]
    fn reinit_rebuilds_both_species_together() {
        let mut sim = sim();
        let new_bounds = Bounds::new(400.0, 300.0).unwrap();
        let new_homes: Vec<DVec2> = (0..12).map(|i| DVec2::new(i as f64, 10.0)).collect();
        sim.reinit(new_bounds, &new_homes);
        assert_eq!(sim.ambient_particles().len(), 20);
        assert_eq!(sim.text_particles().len(), 12);
        assert_eq!(sim.bounds().width(), 400.0);
    }

    // ---- Active repulsor set ----

    #[test]
    fn no_pointer_and_not_idle_means_empty_set() {
        let mut sim = sim();
        sim.tick(0.0);
        assert!(sim.active_repulsors().is_empty());
    }

    #[test]
    fn pointer_present_and_not_idle_means_pointer_only() {
        let mut sim = sim();
        sim.pointer_moved(400.0, 300.0, 0.0);
        sim.tick(TICK_MS);
        let set = sim.active_repulsors();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].center, DVec2::new(400.0, 300.0));
        assert_eq!(set[0].radius, 150.0);
    }

    #[test]
    fn pointer_leave_empties_the_set_without_entering_idle() {
        let mut sim = sim();
        sim.pointer_moved(400.0, 300.0, 0.0);
        sim.pointer_left();
        sim.tick(TICK_MS);
        assert!(sim.active_repulsors().is_empty());
        assert!(!sim.idle(TICK_MS));
    }

    // ---- Idle transition ----

    #[test]
    fn idle_switches_to_the_three_agents_exactly_past_the_threshold() {
        let mut sim = sim();
        sim.pointer_moved(400.0, 300.0, 0.0);

        sim.tick(1500.0);
        assert!(!sim.idle(1500.0), "exactly at threshold stays interactive");
        assert_eq!(sim.active_repulsors().len(), 1);

        sim.tick(1500.1);
        assert!(sim.idle(1500.1));
        assert_eq!(sim.active_repulsors().len(), 3);
        assert!(sim.agents().iter().all(|a| a.active));
    }

    #[test]
    fn idle_arms_from_the_first_tick_without_any_interaction() {
        let mut sim = sim();
        sim.tick(5000.0); // first tick arms the clock
        assert!(sim.active_repulsors().is_empty());
        sim.tick(6501.0);
        assert_eq!(sim.active_repulsors().len(), 3);
    }

    #[test]
    fn one_interaction_deactivates_every_agent_in_the_same_tick() {
        let mut sim = sim();
        sim.tick(0.0);
        sim.tick(1501.0);
        assert_eq!(sim.active_repulsors().len(), 3);

        sim.pointer_moved(100.0, 100.0, 1600.0);
        assert!(
            sim.agents().iter().all(|a| !a.active),
            "deactivation is event-driven, before the next tick"
        );
        sim.tick(1601.0);
        assert_eq!(sim.active_repulsors().len(), 1);
    }

    #[test]
    fn touch_events_mirror_the_pointer_paths() {
        let mut sim = sim();
        sim.touch_started(50.0, 60.0, 0.0);
        assert_eq!(sim.pointer().position(), Some(DVec2::new(50.0, 60.0)));
        sim.touch_moved(70.0, 80.0, 10.0);
        assert_eq!(sim.pointer().position(), Some(DVec2::new(70.0, 80.0)));
        sim.touch_ended();
        assert!(sim.pointer().position().is_none());
    }

    #[test]
    fn agent_zero_takes_over_from_a_stationary_pointer() {
        let mut sim = sim();
        // The pointer stays on canvas but stops moving: stationary idle.
        sim.pointer_moved(250.0, 260.0, 0.0);
        sim.tick(2000.0);
        let b = sim.bounds();
        let slack = 0.05 * (b.width() + b.height());
        assert!(sim.agents()[0].position.distance(DVec2::new(250.0, 260.0)) < slack);
    }

    // ---- Frame output ----

    #[test]
    fn frame_lists_ambient_then_text_sprites() {
        let mut sim = sim();
        sim.tick(0.0);
        let frame = sim.frame();
        assert_eq!(frame.sprites.len(), 20 + 30);
        // Ambient sprites keep their per-particle alpha; the defaults cap
        // below the text base alpha of 1.0.
        assert!(frame.sprites[..20].iter().all(|s| s.alpha < 1.0));
        assert!(frame.sprites[20..].iter().all(|s| s.alpha == 1.0));
    }

    #[test]
    fn frame_boosts_text_alpha_near_the_pointer() {
        let mut config = small_config();
        config.base_alpha = 0.5;
        let mut sim = Simulation::new(bounds(), config, 42).unwrap();
        sim.seed_text(&homes());

        // Pull every text particle to its home first.
        for i in 0..600 {
            sim.tick(i as f64); // 600 ms < idle threshold
        }
        sim.pointer_moved(102.0, 102.0, 600.0);
        sim.tick(601.0);
        let frame = sim.frame();
        let text_sprites = &frame.sprites[20..];
        assert!(text_sprites.iter().any(|s| s.alpha == 1.0), "boosted near");
        assert!(
            text_sprites.iter().all(|s| s.alpha == 1.0 || s.alpha == 0.5),
            "alpha is either boosted or base"
        );
    }

    // ---- Determinism ----

    #[test]
    fn same_seed_and_events_produce_identical_trajectories() {
        let run = || {
            let mut sim = Simulation::new(bounds(), small_config(), 99).unwrap();
            sim.seed_text(&homes());
            for i in 0..200 {
                let now = i as f64 * TICK_MS;
                if i == 40 {
                    sim.pointer_moved(300.0, 200.0, now);
                }
                if i == 80 {
                    sim.pointer_left();
                }
                sim.tick(now);
            }
            sim.frame()
        };
        let a = run();
        let b = run();
        assert_eq!(a.sprites.len(), b.sprites.len());
        for (sa, sb) in a.sprites.iter().zip(b.sprites.iter()) {
            assert_eq!(sa.position.x.to_bits(), sb.position.x.to_bits());
            assert_eq!(sa.position.y.to_bits(), sb.position.y.to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let run = |seed| {
            let mut sim = Simulation::new(bounds(), small_config(), seed).unwrap();
            sim.seed_text(&homes());
            sim.tick(0.0);
            sim.frame()
        };
        let a = run(1);
        let b = run(2);
        assert!(a
            .sprites
            .iter()
            .zip(b.sprites.iter())
            .any(|(sa, sb)| sa.position != sb.position));
    }

    // ---- Convergence through the full tick path ----

    #[test]
    fn text_settles_onto_its_homes_while_interactive() {
        let mut sim = sim();
        // Keep the clock interactive with sub-threshold gaps and no pointer
        // on canvas: the active set stays empty the whole time.
        for i in 0..1400 {
            sim.tick(i as f64);
        }
        for particle in sim.text_particles() {
            assert!(
                particle.position.distance(particle.home()) < 1.0,
                "particle at {:?} still far from {:?}",
                particle.position,
                particle.home()
            );
        }
    }
}
