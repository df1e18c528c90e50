//! Level data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in level_operations.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One static box of map geometry, as authored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelBox {
    /// Center in world pixels, serialized as `[x, y]`
    pub center: Vec2,
    /// Full width and height, serialized as `[w, h]`
    pub size: Vec2,
}

/// A complete level description
///
/// Box order matters: collision queries resolve against the first
/// overlapping box in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Player body center at level start
    pub spawn: Vec2,
    #[serde(default)]
    pub boxes: Vec<LevelBox>,
}

/// Serialized level formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFormat {
    Toml,
    Json,
}
