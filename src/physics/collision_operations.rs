//! Collision world operations - Pure DOP functions
//!
//! The world is only mutated while a level is being built. During play every
//! function here takes it by shared reference.

use super::aabb::{aabb_from_center_size, aabb_penetration_vector, AABB};
use super::collision_data::{BoxIndex, CollisionWorldData, Resolution};
use glam::Vec2;

/// Create an empty collision world
pub fn create_collision_world() -> CollisionWorldData {
    CollisionWorldData::default()
}

/// Create an empty collision world with room for `capacity` boxes
pub fn create_collision_world_with_capacity(capacity: usize) -> CollisionWorldData {
    CollisionWorldData {
        boxes: Vec::with_capacity(capacity),
    }
}

/// Append a static box built from its center and full size
///
/// Sizes must be non-negative; that is checked by the level loader, not here.
pub fn add_box(world: &mut CollisionWorldData, center: Vec2, size: Vec2) -> BoxIndex {
    let index = world.boxes.len();
    world.boxes.push(aabb_from_center_size(center, size));
    log::debug!(
        "[physics::add_box] box {} center=({}, {}) size=({}, {})",
        index,
        center.x,
        center.y,
        size.x,
        size.y
    );
    index
}

/// Read a box back by index
pub fn get_box(world: &CollisionWorldData, index: BoxIndex) -> Option<&AABB> {
    world.boxes.get(index)
}

/// Number of static boxes
pub fn box_count(world: &CollisionWorldData) -> usize {
    world.boxes.len()
}

/// Find the first static box the query box overlaps or touches
///
/// Insertion order decides which box wins when several overlap, regardless of
/// penetration depth. Dense or overlapping geometry can therefore resolve
/// against a shallower box than expected.
pub fn query_first_overlap(
    world: &CollisionWorldData,
    query_center: Vec2,
    query_size: Vec2,
) -> Resolution {
    let query = aabb_from_center_size(query_center, query_size);

    world
        .boxes
        .iter()
        .find_map(|obstacle| aabb_penetration_vector(&query, obstacle))
        .map_or(Resolution::NoCollision, |correction| Resolution::Collided {
            correction,
        })
}
