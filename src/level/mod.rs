//! Level Module - map geometry description and loading
//!
//! A level is a spawn point plus an ordered list of static boxes. It can be
//! built in code or loaded from TOML/JSON, then turned into a collision world.

pub mod level_data;
pub mod level_operations;

pub use level_data::{LevelBox, LevelData, LevelFormat};
pub use level_operations::{
    build_collision_world, default_level, format_for_path, load_level_file, parse_level,
    serialize_level, validate_level,
};

pub type LevelResult<T> = Result<T, LevelError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("Box {index} has invalid size {width} x {height}")]
    InvalidBoxSize { index: usize, width: f32, height: f32 },
    #[error("Box {index} has a non-finite center")]
    NonFiniteCenter { index: usize },
    #[error("Spawn point is not finite")]
    NonFiniteSpawn,
    #[error("Unsupported level format: '{0}'")]
    UnsupportedFormat(String),
}
