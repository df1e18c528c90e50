//! Physics Module - AABB collision against static map geometry
//!
//! - aabb.rs: box data and pure overlap math
//! - collision_data.rs / collision_operations.rs: the static collision world
//! - body_data.rs / integration.rs: per-tick motion of a dynamic body

pub mod aabb;
pub mod body_data;
pub mod collision_data;
pub mod collision_operations;
pub mod integration;

// Simple re-exports
pub use aabb::AABB;
pub use body_data::{BodyData, MovementParams, ResolvedAxis, StepReport};
pub use collision_data::{BoxIndex, CollisionWorldData, Resolution};

// Re-export DOP operations
pub use collision_operations::{
    add_box, box_count, create_collision_world, create_collision_world_with_capacity, get_box,
    query_first_overlap,
};
pub use integration::{is_grounded, resolve_penetration, step_body};
