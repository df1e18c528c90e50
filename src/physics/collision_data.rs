use super::aabb::AABB;
use glam::Vec2;

/// Index of a static box inside a collision world
pub type BoxIndex = usize;

/// Static collision world - append-only arena of map geometry
///
/// Boxes are immutable once added and live as long as the world.
/// Queries scan in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorldData {
    pub boxes: Vec<AABB>,
}

/// Outcome of an overlap query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    NoCollision,
    /// `correction` added to the query center removes the penetration
    /// against the box that matched
    Collided { correction: Vec2 },
}

impl Resolution {
    pub fn is_collided(&self) -> bool {
        matches!(self, Resolution::Collided { .. })
    }

    pub fn correction(&self) -> Option<Vec2> {
        match *self {
            Resolution::Collided { correction } => Some(correction),
            Resolution::NoCollision => None,
        }
    }
}
