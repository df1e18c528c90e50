//! Data-Oriented Axis-Aligned Bounding Box System
//!
//! Pure functions for 2D box overlap - no methods, just data transformations.
//! Screen space: +x right, +y down, so `upper_left` is the minimum corner.

use glam::Vec2;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub upper_left: Vec2,
    pub lower_right: Vec2,
}

/// Create new AABB from its corners
/// Pure function - constructs AABB data structure
pub fn create_aabb(upper_left: Vec2, lower_right: Vec2) -> AABB {
    AABB {
        upper_left,
        lower_right,
    }
}

/// Create AABB from center point and full size
/// Pure function - transforms center/size into AABB bounds
pub fn aabb_from_center_size(center: Vec2, size: Vec2) -> AABB {
    let half = size / 2.0;
    AABB {
        upper_left: center - half,
        lower_right: center + half,
    }
}

/// Get center point of AABB
pub fn aabb_center(aabb: &AABB) -> Vec2 {
    (aabb.upper_left + aabb.lower_right) / 2.0
}

/// Get full size of AABB
pub fn aabb_size(aabb: &AABB) -> Vec2 {
    aabb.lower_right - aabb.upper_left
}

/// Per-axis overlap between two AABBs
///
/// Sum of both sizes minus the extent of their union. Positive on an axis means
/// penetration depth, zero means the edges touch, negative means a gap.
pub fn aabb_overlap(a: &AABB, b: &AABB) -> Vec2 {
    let union_extent = a.lower_right.max(b.lower_right) - a.upper_left.min(b.upper_left);
    aabb_size(a) + aabb_size(b) - union_extent
}

/// Test if two AABBs intersect, touching edges included
pub fn aabb_intersects(a: &AABB, b: &AABB) -> bool {
    let overlap = aabb_overlap(a, b);
    overlap.x >= 0.0 && overlap.y >= 0.0
}

/// Sign that maps zero (and negative zero) to zero
///
/// `f32::signum` returns 1.0 for +0.0, which would invent a push direction
/// when the centers coincide on an axis.
pub fn sign_or_zero(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Calculate the correction that moves `query` out of `obstacle`
/// Pure function - `None` when the boxes neither overlap nor touch
///
/// The correction points from the obstacle's center toward the query's center
/// on each axis, scaled by that axis' overlap. An axis where the centers
/// coincide gets a zero correction.
pub fn aabb_penetration_vector(query: &AABB, obstacle: &AABB) -> Option<Vec2> {
    let overlap = aabb_overlap(query, obstacle);
    if overlap.x < 0.0 || overlap.y < 0.0 {
        return None;
    }

    let offset = aabb_center(query) - aabb_center(obstacle);
    Some(Vec2::new(
        sign_or_zero(offset.x) * overlap.x,
        sign_or_zero(offset.y) * overlap.y,
    ))
}
