//! Idle-mode virtual agents and their wandering state machine.
//!
//! While the simulation is idle, three agents with distinct radii and speeds
//! roam the canvas as stand-in repulsors. Targets are biased away from the
//! text zone so the silhouette stays mostly legible, with occasional
//! deliberate passes through it.

use glam::DVec2;
use glyphdust_core::bounds::Bounds;
use glyphdust_core::prng::Xorshift64;
use glyphdust_core::repulsor::{Repulsor, RepulsorSource};

use crate::config::{AgentProfile, SimConfig};

/// Number of virtual agents. Fixed: the spawn-zone rule is keyed by index.
pub const AGENT_COUNT: usize = 3;

/// Spawn corners sit this fraction in from the near edges.
const SPAWN_NEAR_EDGE: f64 = 0.1;
const SPAWN_FAR_EDGE: f64 = 0.9;

/// One autonomous repulsor.
///
/// Lives for the simulation's lifetime; only `position`, `target`, and
/// `active` mutate. Inactive agents project no repulsor.
#[derive(Debug, Clone)]
pub struct VirtualAgent {
    pub position: DVec2,
    pub target: Option<DVec2>,
    pub radius: f64,
    pub speed: f64,
    pub active: bool,
}

impl VirtualAgent {
    fn from_profile(profile: &AgentProfile) -> Self {
        Self {
            position: DVec2::ZERO,
            target: None,
            radius: profile.radius,
            speed: profile.speed,
            active: false,
        }
    }
}

impl RepulsorSource for VirtualAgent {
    fn repulsor(&self) -> Option<Repulsor> {
        self.active.then(|| Repulsor {
            center: self.position,
            radius: self.radius,
        })
    }
}

/// Owns the agents and drives their ACTIVE/INACTIVE transitions.
#[derive(Debug, Clone)]
pub struct AgentController {
    agents: [VirtualAgent; AGENT_COUNT],
}

impl AgentController {
    /// Creates the controller with every agent inactive.
    pub fn new(profiles: &[AgentProfile; AGENT_COUNT]) -> Self {
        Self {
            agents: std::array::from_fn(|i| VirtualAgent::from_profile(&profiles[i])),
        }
    }

    /// Read-only view of the agents.
    pub fn agents(&self) -> &[VirtualAgent] {
        &self.agents
    }

    /// Forces every agent inactive. Called on every real interaction,
    /// independent of the idle threshold.
    pub fn deactivate_all(&mut self) {
        for agent in &mut self.agents {
            agent.active = false;
        }
    }

    /// Repulsors of the currently active agents.
    pub fn repulsors(&self) -> impl Iterator<Item = Repulsor> + '_ {
        self.agents.iter().filter_map(RepulsorSource::repulsor)
    }

    /// One idle-mode tick: (re)activates agents at their spawn zones, picks
    /// targets, and moves each agent an exponential step toward its target.
    ///
    /// `last_pointer` lets agent 0 take over seamlessly from wherever the
    /// real pointer was last seen.
    pub fn update(
        &mut self,
        bounds: &Bounds,
        config: &SimConfig,
        last_pointer: Option<DVec2>,
        rng: &mut Xorshift64,
    ) {
        for (index, agent) in self.agents.iter_mut().enumerate() {
            if !agent.active {
                agent.position = match (index, last_pointer) {
                    (0, Some(pointer)) => pointer,
                    (1, _) => bounds.at(SPAWN_FAR_EDGE, SPAWN_NEAR_EDGE),
                    _ => bounds.at(SPAWN_NEAR_EDGE, SPAWN_FAR_EDGE),
                };
                agent.target = None;
                agent.active = true;
            }

            // Fresh agents pick immediately; settled agents wander off with
            // a small per-tick chance, the escape valve for the exponential
            // approach never quite arriving.
            let target = match agent.target {
                Some(t) if !rng.chance(config.retarget_chance) => t,
                _ => {
                    let t = pick_target(bounds, config, rng);
                    agent.target = Some(t);
                    t
                }
            };

            agent.position += (target - agent.position) * agent.speed;
        }
    }
}

/// Picks a wander target: usually one of the two safe strips flanking the
/// text zone, occasionally the text zone itself.
fn pick_target(bounds: &Bounds, config: &SimConfig, rng: &mut Xorshift64) -> DVec2 {
    let extent = config.text_zone_extent;
    if rng.chance(config.safe_zone_bias) {
        if rng.chance(0.5) {
            // Right vertical strip, full height.
            bounds.region(extent, 0.0, 1.0, 1.0).sample(rng)
        } else {
            // Bottom horizontal strip, full width.
            bounds.region(0.0, extent, 1.0, 1.0).sample(rng)
        }
    } else {
        bounds.region(0.0, 0.0, extent, extent).sample(rng)
    }
}
