//! Simulation tuning parameters.
//!
//! Every constant the simulation's behavior depends on lives here as an
//! adjustable field rather than a hidden literal. Use [`Default`] for the
//! reference tuning, [`SimConfig::from_json`] for overrides, and
//! [`SimConfig::validate`] before constructing a simulation.

use glyphdust_core::error::SimError;
use glyphdust_core::params::{param_f64, param_usize};
use serde_json::{json, Value};

/// Default ambient (background dust) particle count.
const DEFAULT_AMBIENT_COUNT: usize = 500;
/// Default idle threshold: no interaction for this long enters idle mode.
const DEFAULT_IDLE_THRESHOLD_MS: f64 = 1500.0;
/// Default pointer repulsor radius, restored on every pointer move.
const DEFAULT_POINTER_RADIUS: f64 = 150.0;
/// Default probability that a new agent target avoids the text zone.
const DEFAULT_SAFE_ZONE_BIAS: f64 = 0.8;
/// Default per-tick probability that an agent abandons its target.
const DEFAULT_RETARGET_CHANCE: f64 = 0.01;
/// Default per-tick velocity damping for text particles.
const DEFAULT_FRICTION: f64 = 0.92;
/// Default ease base for the home pull.
const DEFAULT_EASE_BASE: f64 = 0.05;
/// Default fraction of text particles with attract polarity.
const DEFAULT_ATTRACT_FRACTION: f64 = 0.3;
/// Default multiplier on the repulsion impulse.
const DEFAULT_REPULSION_GAIN: f64 = 20.0;
/// Default text-zone extent: the top-left fraction of each axis the
/// rendered text occupies, avoided by most agent targets.
const DEFAULT_TEXT_ZONE_EXTENT: f64 = 0.6;

/// Radius and approach speed of one virtual agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentProfile {
    pub radius: f64,
    pub speed: f64,
}

/// The three reference agents: medium, large, small.
const DEFAULT_AGENT_PROFILES: [AgentProfile; 3] = [
    AgentProfile {
        radius: 90.0,
        speed: 0.03,
    },
    AgentProfile {
        radius: 110.0,
        speed: 0.02,
    },
    AgentProfile {
        radius: 70.0,
        speed: 0.04,
    },
];

/// Simulation tuning parameters.
///
/// Groups every behavioral constant: particle population, idle detection,
/// repulsor geometry, agent wandering, and the particle appearance ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of ambient dust particles.
    pub ambient_count: usize,
    /// Idle threshold in milliseconds.
    pub idle_threshold_ms: f64,
    /// Pointer repulsor radius, restored on every pointer move.
    pub pointer_radius: f64,
    /// Radius/speed of the three virtual agents.
    pub agent_profiles: [AgentProfile; 3],
    /// Probability that a new agent target lands in a safe zone.
    pub safe_zone_bias: f64,
    /// Per-tick probability that an agent picks a new target early.
    pub retarget_chance: f64,
    /// Per-tick velocity damping for text particles, in (0, 1).
    pub friction: f64,
    /// Ease base for the home pull.
    pub ease_base: f64,
    /// Fraction of text particles assigned attract polarity.
    pub attract_fraction: f64,
    /// Multiplier on the repulsion impulse applied to text particles.
    pub repulsion_gain: f64,
    /// Smallest ambient particle size.
    pub ambient_size_min: f64,
    /// Largest ambient particle size.
    pub ambient_size_max: f64,
    /// Power-law exponent biasing ambient sizes toward the small end.
    pub ambient_size_bias: f64,
    /// Dimmest ambient alpha.
    pub ambient_alpha_min: f64,
    /// Brightest ambient alpha.
    pub ambient_alpha_max: f64,
    /// Per-axis limit of the constant ambient drift velocity.
    pub ambient_drift: f64,
    /// Smallest text particle size.
    pub text_size_min: f64,
    /// Largest text particle size.
    pub text_size_max: f64,
    /// Text particle alpha while no repulsor is near.
    pub base_alpha: f64,
    /// Fraction of each axis occupied by the text zone (top-left).
    pub text_zone_extent: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ambient_count: DEFAULT_AMBIENT_COUNT,
            idle_threshold_ms: DEFAULT_IDLE_THRESHOLD_MS,
            pointer_radius: DEFAULT_POINTER_RADIUS,
            agent_profiles: DEFAULT_AGENT_PROFILES,
            safe_zone_bias: DEFAULT_SAFE_ZONE_BIAS,
            retarget_chance: DEFAULT_RETARGET_CHANCE,
            friction: DEFAULT_FRICTION,
            ease_base: DEFAULT_EASE_BASE,
            attract_fraction: DEFAULT_ATTRACT_FRACTION,
            repulsion_gain: DEFAULT_REPULSION_GAIN,
            ambient_size_min: 1.0,
            ambient_size_max: 4.0,
            ambient_size_bias: 15.0,
            ambient_alpha_min: 0.1,
            ambient_alpha_max: 0.6,
            ambient_drift: 0.25,
            text_size_min: 1.0,
            text_size_max: 1.6,
            base_alpha: 1.0,
            text_zone_extent: DEFAULT_TEXT_ZONE_EXTENT,
        }
    }
}

impl SimConfig {
    /// Extracts a config from a JSON object, falling back to defaults for
    /// missing or mistyped keys. Range checking is deferred to
    /// [`SimConfig::validate`].
    ///
    /// Agent profiles are read from `"agent_profiles": [[radius, speed], ...]`;
    /// malformed entries keep their default.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            ambient_count: param_usize(params, "ambient_count", defaults.ambient_count),
            idle_threshold_ms: param_f64(params, "idle_threshold_ms", defaults.idle_threshold_ms),
            pointer_radius: param_f64(params, "pointer_radius", defaults.pointer_radius),
            agent_profiles: agent_profiles_from_json(params, defaults.agent_profiles),
            safe_zone_bias: param_f64(params, "safe_zone_bias", defaults.safe_zone_bias),
            retarget_chance: param_f64(params, "retarget_chance", defaults.retarget_chance),
            friction: param_f64(params, "friction", defaults.friction),
            ease_base: param_f64(params, "ease_base", defaults.ease_base),
            attract_fraction: param_f64(params, "attract_fraction", defaults.attract_fraction),
            repulsion_gain: param_f64(params, "repulsion_gain", defaults.repulsion_gain),
            ambient_size_min: param_f64(params, "ambient_size_min", defaults.ambient_size_min),
            ambient_size_max: param_f64(params, "ambient_size_max", defaults.ambient_size_max),
            ambient_size_bias: param_f64(params, "ambient_size_bias", defaults.ambient_size_bias),
            ambient_alpha_min: param_f64(params, "ambient_alpha_min", defaults.ambient_alpha_min),
            ambient_alpha_max: param_f64(params, "ambient_alpha_max", defaults.ambient_alpha_max),
            ambient_drift: param_f64(params, "ambient_drift", defaults.ambient_drift),
            text_size_min: param_f64(params, "text_size_min", defaults.text_size_min),
            text_size_max: param_f64(params, "text_size_max", defaults.text_size_max),
            base_alpha: param_f64(params, "base_alpha", defaults.base_alpha),
            text_zone_extent: param_f64(params, "text_zone_extent", defaults.text_zone_extent),
        }
    }

    /// Checks every field against its documented range.
    ///
    /// Malformed configuration is a programming-time precondition violation:
    /// `Simulation::new` refuses to construct from an invalid config.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.pointer_radius > 0.0 && self.pointer_radius.is_finite()) {
            return Err(SimError::InvalidRadius(self.pointer_radius));
        }
        for profile in &self.agent_profiles {
            if !(profile.radius > 0.0 && profile.radius.is_finite()) {
                return Err(SimError::InvalidRadius(profile.radius));
            }
            if !(profile.speed > 0.0 && profile.speed <= 1.0) {
                return Err(SimError::ParamOutOfRange {
                    name: "agent_profiles.speed",
                    value: profile.speed,
                    expected: "(0, 1]",
                });
            }
        }
        check_probability("safe_zone_bias", self.safe_zone_bias)?;
        check_probability("retarget_chance", self.retarget_chance)?;
        check_probability("attract_fraction", self.attract_fraction)?;
        check_probability("base_alpha", self.base_alpha)?;
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(SimError::ParamOutOfRange {
                name: "friction",
                value: self.friction,
                expected: "(0, 1)",
            });
        }
        if !(self.ease_base > 0.0 && self.ease_base.is_finite()) {
            return Err(SimError::ParamOutOfRange {
                name: "ease_base",
                value: self.ease_base,
                expected: "> 0",
            });
        }
        if !(self.repulsion_gain >= 0.0 && self.repulsion_gain.is_finite()) {
            return Err(SimError::ParamOutOfRange {
                name: "repulsion_gain",
                value: self.repulsion_gain,
                expected: ">= 0",
            });
        }
        if !(self.idle_threshold_ms >= 0.0 && self.idle_threshold_ms.is_finite()) {
            return Err(SimError::ParamOutOfRange {
                name: "idle_threshold_ms",
                value: self.idle_threshold_ms,
                expected: ">= 0",
            });
        }
        check_size_range(
            "ambient_size_min",
            self.ambient_size_min,
            self.ambient_size_max,
        )?;
        check_size_range("text_size_min", self.text_size_min, self.text_size_max)?;
        if !(self.ambient_size_bias > 0.0 && self.ambient_size_bias.is_finite()) {
            return Err(SimError::ParamOutOfRange {
                name: "ambient_size_bias",
                value: self.ambient_size_bias,
                expected: "> 0",
            });
        }
        if !(0.0..=1.0).contains(&self.ambient_alpha_min)
            || !(0.0..=1.0).contains(&self.ambient_alpha_max)
            || self.ambient_alpha_min > self.ambient_alpha_max
        {
            return Err(SimError::ParamOutOfRange {
                name: "ambient_alpha_min",
                value: self.ambient_alpha_min,
                expected: "0 <= min <= max <= 1",
            });
        }
        if !(self.ambient_drift >= 0.0 && self.ambient_drift.is_finite()) {
            return Err(SimError::ParamOutOfRange {
                name: "ambient_drift",
                value: self.ambient_drift,
                expected: ">= 0",
            });
        }
        if !(self.text_zone_extent > 0.0 && self.text_zone_extent < 1.0) {
            return Err(SimError::ParamOutOfRange {
                name: "text_zone_extent",
                value: self.text_zone_extent,
                expected: "(0, 1)",
            });
        }
        Ok(())
    }

    /// Current values as a JSON object, key-compatible with `from_json`.
    pub fn to_json(&self) -> Value {
        json!({
            "ambient_count": self.ambient_count,
            "idle_threshold_ms": self.idle_threshold_ms,
            "pointer_radius": self.pointer_radius,
            "agent_profiles": self.agent_profiles
                .iter()
                .map(|p| json!([p.radius, p.speed]))
                .collect::<Vec<_>>(),
            "safe_zone_bias": self.safe_zone_bias,
            "retarget_chance": self.retarget_chance,
            "friction": self.friction,
            "ease_base": self.ease_base,
            "attract_fraction": self.attract_fraction,
            "repulsion_gain": self.repulsion_gain,
            "ambient_size_min": self.ambient_size_min,
            "ambient_size_max": self.ambient_size_max,
            "ambient_size_bias": self.ambient_size_bias,
            "ambient_alpha_min": self.ambient_alpha_min,
            "ambient_alpha_max": self.ambient_alpha_max,
            "ambient_drift": self.ambient_drift,
            "text_size_min": self.text_size_min,
            "text_size_max": self.text_size_max,
            "base_alpha": self.base_alpha,
            "text_zone_extent": self.text_zone_extent,
        })
    }

    /// Schema describing every parameter: type, default, range, description.
    pub fn schema() -> Value {
        json!({
            "ambient_count": {
                "type": "integer",
                "default": DEFAULT_AMBIENT_COUNT,
                "min": 0,
                "description": "Number of ambient dust particles"
            },
            "idle_threshold_ms": {
                "type": "number",
                "default": DEFAULT_IDLE_THRESHOLD_MS,
                "min": 0.0,
                "description": "No interaction for this many milliseconds enters idle mode"
            },
            "pointer_radius": {
                "type": "number",
                "default": DEFAULT_POINTER_RADIUS,
                "min": 1.0,
                "description": "Pointer repulsor radius, restored on every pointer move"
            },
            "agent_profiles": {
                "type": "array",
                "default": [[90.0, 0.03], [110.0, 0.02], [70.0, 0.04]],
                "description": "Radius and approach speed of the three virtual agents"
            },
            "safe_zone_bias": {
                "type": "number",
                "default": DEFAULT_SAFE_ZONE_BIAS,
                "min": 0.0,
                "max": 1.0,
                "description": "Probability that a new agent target avoids the text zone"
            },
            "retarget_chance": {
                "type": "number",
                "default": DEFAULT_RETARGET_CHANCE,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-tick probability that an agent abandons its target"
            },
            "friction": {
                "type": "number",
                "default": DEFAULT_FRICTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-tick velocity damping for text particles"
            },
            "ease_base": {
                "type": "number",
                "default": DEFAULT_EASE_BASE,
                "min": 0.0,
                "description": "Ease base for the home pull"
            },
            "attract_fraction": {
                "type": "number",
                "default": DEFAULT_ATTRACT_FRACTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Fraction of text particles with attract polarity"
            },
            "repulsion_gain": {
                "type": "number",
                "default": DEFAULT_REPULSION_GAIN,
                "min": 0.0,
                "description": "Multiplier on the repulsion impulse for text particles"
            },
            "ambient_size_min": {
                "type": "number",
                "default": 1.0,
                "min": 0.0,
                "description": "Smallest ambient particle size"
            },
            "ambient_size_max": {
                "type": "number",
                "default": 4.0,
                "min": 0.0,
                "description": "Largest ambient particle size"
            },
            "ambient_size_bias": {
                "type": "number",
                "default": 15.0,
                "min": 0.0,
                "description": "Power-law exponent biasing ambient sizes small"
            },
            "ambient_alpha_min": {
                "type": "number",
                "default": 0.1,
                "min": 0.0,
                "max": 1.0,
                "description": "Dimmest ambient alpha"
            },
            "ambient_alpha_max": {
                "type": "number",
                "default": 0.6,
                "min": 0.0,
                "max": 1.0,
                "description": "Brightest ambient alpha"
            },
            "ambient_drift": {
                "type": "number",
                "default": 0.25,
                "min": 0.0,
                "description": "Per-axis limit of the constant ambient drift velocity"
            },
            "text_size_min": {
                "type": "number",
                "default": 1.0,
                "min": 0.0,
                "description": "Smallest text particle size"
            },
            "text_size_max": {
                "type": "number",
                "default": 1.6,
                "min": 0.0,
                "description": "Largest text particle size"
            },
            "base_alpha": {
                "type": "number",
                "default": 1.0,
                "min": 0.0,
                "max": 1.0,
                "description": "Text particle alpha while no repulsor is near"
            },
            "text_zone_extent": {
                "type": "number",
                "default": DEFAULT_TEXT_ZONE_EXTENT,
                "min": 0.0,
                "max": 1.0,
                "description": "Fraction of each axis occupied by the text zone"
            }
        })
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::ParamOutOfRange {
            name,
            value,
            expected: "[0, 1]",
        })
    }
}

fn check_size_range(name: &'static str, min: f64, max: f64) -> Result<(), SimError> {
    if min > 0.0 && min <= max && max.is_finite() {
        Ok(())
    } else {
        Err(SimError::ParamOutOfRange {
            name,
            value: min,
            expected: "0 < min <= max, finite",
        })
    }
}

/// Reads `"agent_profiles": [[radius, speed], ...]`, keeping the default for
/// missing or malformed entries.
fn agent_profiles_from_json(params: &Value, default: [AgentProfile; 3]) -> [AgentProfile; 3] {
    let mut profiles = default;
    let Some(entries) = params.get("agent_profiles").and_then(Value::as_array) else {
        return profiles;
    };
    for (slot, entry) in profiles.iter_mut().zip(entries) {
        let pair = entry.as_array();
        let radius = pair.and_then(|p| p.first()).and_then(Value::as_f64);
        let speed = pair.and_then(|p| p.get(1)).and_then(Value::as_f64);
        if let (Some(radius), Some(speed)) = (radius, speed) {
            *slot = AgentProfile { radius, speed };
        }
    }
    profiles
}
