// Ledge Engine - side-scrolling platformer simulation core
//
// Data-Oriented Programming (DOP) layout:
// - *_data modules hold plain data structures
// - *_operations modules hold the functions that transform them
// - The per-tick path (physics, input, game::update_play) never fails
//
// Rendering, windowing and the socket transport live in the embedding game.
// This crate hands them plain data: quads to draw and bytes to send.

// Constants module
pub mod constants;

// Core engine modules
pub mod error;

// Essential systems
pub mod game;
pub mod input;
pub mod level;
pub mod network;
pub mod physics;

use anyhow::Result;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::{EngineError, EngineResult};
pub use game::{PlayState, QuadInstance, TickOutput};
pub use input::{InputState, KeyAction, KeyCode};
pub use level::{LevelBox, LevelData};
pub use physics::{BodyData, CollisionWorldData, Resolution, AABB};

/// Simulation configuration
///
/// Every field has a default, so a TOML file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Surface the default level is laid out for
    pub drawable_width: u32,
    pub drawable_height: u32,
    /// Full size of the player collision box, `[w, h]`
    pub body_size: Vec2,
    pub horizontal_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub ceiling_epsilon: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        use crate::constants::{display, physics, player};

        Self {
            drawable_width: display::DRAWABLE_WIDTH,
            drawable_height: display::DRAWABLE_HEIGHT,
            body_size: Vec2::new(player::BODY_WIDTH, player::BODY_HEIGHT),
            horizontal_speed: physics::HORIZONTAL_SPEED,
            jump_velocity: physics::JUMP_VELOCITY,
            gravity: physics::GRAVITY,
            ceiling_epsilon: physics::CEILING_EPSILON,
        }
    }
}

fn invalid_config(field: &str, value: impl std::fmt::Display, reason: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl SimulationConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.drawable_width == 0 || self.drawable_height == 0 {
            return Err(invalid_config(
                "drawable_size",
                format!("{}x{}", self.drawable_width, self.drawable_height),
                "dimensions cannot be 0",
            )
            .into());
        }

        if !self.body_size.is_finite() || self.body_size.x <= 0.0 || self.body_size.y <= 0.0 {
            return Err(invalid_config(
                "body_size",
                format!("{}x{}", self.body_size.x, self.body_size.y),
                "must be positive",
            )
            .into());
        }

        for (field, value) in [
            ("horizontal_speed", self.horizontal_speed),
            ("jump_velocity", self.jump_velocity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_config(field, value, "must be non-negative").into());
            }
        }

        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(invalid_config("gravity", self.gravity, "must be positive").into());
        }

        if !self.ceiling_epsilon.is_finite() || self.ceiling_epsilon <= 0.0 {
            return Err(invalid_config(
                "ceiling_epsilon",
                self.ceiling_epsilon,
                "must be positive or bodies can stick to ceilings",
            )
            .into());
        }

        log::info!(
            "[SimulationConfig] Validation: body={}x{}, speed={}, jump={}, gravity={}",
            self.body_size.x,
            self.body_size.y,
            self.horizontal_speed,
            self.jump_velocity,
            self.gravity
        );
        Ok(())
    }

    /// Parse configuration from TOML, missing fields take their defaults
    pub fn from_toml_str(source: &str) -> EngineResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EngineResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("[SimulationConfig::load] Loaded configuration from {}", path.display());
        Ok(config)
    }
}
