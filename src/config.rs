//! Tunables for both effects.
//!
//! Defaults reproduce the look of the contact page. Page scripts may pass a
//! JSON object overriding any subset of fields, e.g.
//! `{"max_particles": 20, "debug": true}`.

use crate::error::EffectsError;
use serde::{Deserialize, Serialize};

/// Particle animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Id of the canvas element to draw on
    pub canvas_id: String,
    /// Hard cap on the number of particles
    pub max_particles: usize,
    /// Surface area (px²) that earns one particle
    pub area_per_particle: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Velocity components are drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    /// Hue shared by particles and links
    pub color: [u8; 3],
    pub min_alpha: f64,
    pub max_alpha: f64,
    /// Distance within which the pointer pushes particles away
    pub interaction_radius: f64,
    /// Displacement applied at zero distance from the pointer
    pub repulsion_strength: f64,
    /// Fraction of speed kept after bouncing off an edge
    pub bounce_damping: f64,
    /// Particles closer than this are linked
    pub link_distance: f64,
    /// Link opacity as the distance approaches zero
    pub link_max_opacity: f64,
    pub link_width: f64,
    /// Log at debug level
    pub debug: bool,
    /// Wrap every frame in `console.time` / `console.timeEnd`
    pub profile_frames: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            canvas_id: "contact-animation".to_string(),
            max_particles: 35,
            area_per_particle: 20000.0,
            min_radius: 0.5,
            max_radius: 2.0,
            max_speed: 0.15,
            color: [124, 255, 161],
            min_alpha: 0.1,
            max_alpha: 0.3,
            interaction_radius: 150.0,
            repulsion_strength: 1.5,
            bounce_damping: 0.8,
            link_distance: 80.0,
            link_max_opacity: 0.15,
            link_width: 0.3,
            debug: false,
            profile_frames: false,
        }
    }
}

impl ParticleConfig {
    /// Parse overrides from JSON, falling back to defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self, EffectsError> {
        let config: ParticleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve an optional JSON override string into a config
    pub fn resolve(json: Option<String>) -> Result<Self, EffectsError> {
        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), EffectsError> {
        if !(self.area_per_particle > 0.0) {
            return Err(EffectsError::Config("area_per_particle must be positive".to_string()));
        }
        if self.min_radius < 0.0 || self.max_radius < self.min_radius {
            return Err(EffectsError::Config(
                "radius range must satisfy 0 <= min_radius <= max_radius".to_string(),
            ));
        }
        if self.min_alpha < 0.0 || self.max_alpha > 1.0 || self.max_alpha < self.min_alpha {
            return Err(EffectsError::Config("alpha range must lie within [0, 1]".to_string()));
        }
        if !(self.interaction_radius > 0.0) || !(self.link_distance > 0.0) {
            return Err(EffectsError::Config(
                "interaction_radius and link_distance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hero slider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub slide_selector: String,
    pub hero_selector: String,
    /// Class that marks the visible slide
    pub active_class: String,
    pub interval_ms: i32,
    /// Stop rotating while the pointer is over the hero
    pub pause_on_hover: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slide_selector: ".hero-slide".to_string(),
            hero_selector: ".hero".to_string(),
            active_class: "active".to_string(),
            interval_ms: 5000,
            pause_on_hover: true,
        }
    }
}

impl SliderConfig {
    pub fn from_json(json: &str) -> Result<Self, EffectsError> {
        let config: SliderConfig = serde_json::from_str(json)?;
        if config.interval_ms <= 0 {
            return Err(EffectsError::Config("interval_ms must be positive".to_string()));
        }
        Ok(config)
    }

    pub fn resolve(json: Option<String>) -> Result<Self, EffectsError> {
        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }
}
