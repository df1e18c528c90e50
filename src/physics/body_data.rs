//! Dynamic body data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in integration.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A player-controlled body
///
/// Only vertical speed persists between ticks; horizontal motion is derived
/// from input every tick and never written to `velocity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyData {
    /// Center of the body's box (pixels, +y down)
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
}

/// Movement tuning shared by every body of the same kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementParams {
    /// Full size of the body's collision box
    pub body_size: Vec2,
    /// Walking speed (pixels/second)
    pub horizontal_speed: f32,
    /// Upward speed set by a jump (pixels/second)
    pub jump_velocity: f32,
    /// Downward acceleration (pixels/second²)
    pub gravity: f32,
    /// Downward speed floor after a ceiling hit
    pub ceiling_epsilon: f32,
}

/// Which branch of the post-move resolution fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedAxis {
    /// Nothing overlapped after moving
    None,
    /// Pushed sideways, velocity cleared
    Horizontal { correction: Vec2 },
    /// Pushed down out of a ceiling
    Ceiling { correction: Vec2 },
    /// Pushed up out of a floor
    Floor { correction: Vec2 },
}

/// What happened to a body during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Body touched something before moving
    pub grounded: bool,
    /// A jump impulse was applied this tick
    pub jumped: bool,
    pub resolution: ResolvedAxis,
}
