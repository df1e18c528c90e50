//! Level operations - Pure DOP functions
//!
//! Loading and validation run once before play starts, so unlike the
//! per-tick physics path they check their input.

use super::level_data::{LevelBox, LevelData, LevelFormat};
use super::{LevelError, LevelResult};
use crate::constants::player::{SPAWN_OFFSET_X, SPAWN_OFFSET_Y};
use crate::error::{EngineError, EngineResult};
use crate::physics::{add_box, create_collision_world_with_capacity, CollisionWorldData};
use glam::Vec2;
use std::path::Path;

/// The hard-coded map laid out for a `width` x `height` surface
///
/// A full-width ground strip, three floating platforms and two tall walls
/// around the spawn point.
pub fn default_level(width: u32, height: u32) -> LevelData {
    let w = width as f32;
    let h = height as f32;
    let half_w = w / 2.0;

    let platform = Vec2::new(400.0, 40.0);
    let wall = Vec2::new(40.0, 400.0);

    LevelData {
        spawn: Vec2::new(half_w + SPAWN_OFFSET_X, h - SPAWN_OFFSET_Y),
        boxes: vec![
            LevelBox {
                center: Vec2::new(half_w, h - 20.0),
                size: Vec2::new(w, 40.0),
            },
            LevelBox {
                center: Vec2::new(half_w, h - 160.0),
                size: platform,
            },
            LevelBox {
                center: Vec2::new(half_w + 500.0, h - 250.0),
                size: platform,
            },
            LevelBox {
                center: Vec2::new(half_w - 500.0, h - 250.0),
                size: platform,
            },
            LevelBox {
                center: Vec2::new(half_w + 60.0, h - 480.0),
                size: wall,
            },
            LevelBox {
                center: Vec2::new(half_w - 60.0, h - 400.0),
                size: wall,
            },
        ],
    }
}

/// Check that every box has a finite center and a finite, non-negative size
pub fn validate_level(level: &LevelData) -> LevelResult<()> {
    if !level.spawn.is_finite() {
        return Err(LevelError::NonFiniteSpawn);
    }

    for (index, level_box) in level.boxes.iter().enumerate() {
        if !level_box.center.is_finite() {
            return Err(LevelError::NonFiniteCenter { index });
        }
        let size = level_box.size;
        if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
            return Err(LevelError::InvalidBoxSize {
                index,
                width: size.x,
                height: size.y,
            });
        }
        if size.x == 0.0 || size.y == 0.0 {
            log::warn!(
                "[level::validate_level] box {} has zero area ({} x {})",
                index,
                size.x,
                size.y
            );
        }
    }

    Ok(())
}

/// Parse a level from a string in the given format and validate it
pub fn parse_level(source: &str, format: LevelFormat) -> EngineResult<LevelData> {
    let level: LevelData = match format {
        LevelFormat::Toml => toml::from_str(source)?,
        LevelFormat::Json => serde_json::from_str(source)?,
    };
    validate_level(&level)?;
    Ok(level)
}

/// Serialize a level for saving or sending to a peer
pub fn serialize_level(level: &LevelData, format: LevelFormat) -> EngineResult<String> {
    match format {
        LevelFormat::Toml => Ok(toml::to_string(level)?),
        LevelFormat::Json => serde_json::to_string_pretty(level).map_err(|e| {
            EngineError::SerializationError {
                context: "json".to_string(),
                error: e.to_string(),
            }
        }),
    }
}

/// Pick the level format from a file extension
pub fn format_for_path(path: &Path) -> LevelResult<LevelFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(LevelFormat::Toml),
        Some("json") => Ok(LevelFormat::Json),
        other => Err(LevelError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/// Load and validate a level file (`.toml` or `.json`)
pub fn load_level_file(path: &Path) -> EngineResult<LevelData> {
    let format = format_for_path(path)?;
    let source = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let level = parse_level(&source, format)?;
    log::info!(
        "[level::load_level_file] Loaded {} boxes from {}",
        level.boxes.len(),
        path.display()
    );
    Ok(level)
}

/// Build the static collision world, one box per level box, in level order
pub fn build_collision_world(level: &LevelData) -> CollisionWorldData {
    let mut world = create_collision_world_with_capacity(level.boxes.len());
    for level_box in &level.boxes {
        add_box(&mut world, level_box.center, level_box.size);
    }
    log::info!(
        "[level::build_collision_world] Collision world built with {} boxes",
        level.boxes.len()
    );
    world
}
