//! Body integration - per-tick motion and penetration resolution
//!
//! One tick runs in this order:
//! 1. probe the current position; a jump only fires if that probe collides
//! 2. derive horizontal motion from input (no momentum)
//! 3. explicit Euler step: position from the old velocity, then gravity
//! 4. probe again and push the body out along the cheaper axis
//!
//! Grounding is evaluated before moving, so a jump uses last tick's resting
//! state. Resolution is discrete; fast bodies can tunnel through thin boxes.

use super::body_data::{BodyData, MovementParams, ResolvedAxis, StepReport};
use super::collision_data::{CollisionWorldData, Resolution};
use super::collision_operations::query_first_overlap;
use crate::input::{horizontal_axis, InputState};
use glam::Vec2;

/// Whether the body currently touches or overlaps static geometry
pub fn is_grounded(body: &BodyData, world: &CollisionWorldData, params: &MovementParams) -> bool {
    query_first_overlap(world, body.position, params.body_size).is_collided()
}

/// Horizontal displacement rate requested by input
pub fn horizontal_move(input: &InputState, params: &MovementParams) -> Vec2 {
    Vec2::new(horizontal_axis(input) * params.horizontal_speed, 0.0)
}

/// Advance position and velocity by `elapsed` seconds, ignoring geometry
pub fn integrate_motion(body: &mut BodyData, movement: Vec2, params: &MovementParams, elapsed: f32) {
    body.position += movement * elapsed;
    body.position += body.velocity * elapsed;
    body.velocity.y += params.gravity * elapsed;
}

/// Apply an overlap query result to the body
///
/// Horizontal wins when both corrections have the same magnitude. A
/// horizontal hit clears the whole velocity; a vertical hit only clamps the
/// vertical component so an upward jump survives landing on the tick it starts.
pub fn resolve_penetration(
    body: &mut BodyData,
    resolution: Resolution,
    params: &MovementParams,
) -> ResolvedAxis {
    let Some(correction) = resolution.correction() else {
        return ResolvedAxis::None;
    };

    if correction.x.abs() <= correction.y.abs() {
        body.velocity = Vec2::ZERO;
        body.position.x += correction.x;
        ResolvedAxis::Horizontal { correction }
    } else {
        body.position.y += correction.y;
        if correction.y >= 0.0 {
            body.velocity.y = params.ceiling_epsilon.max(body.velocity.y);
            ResolvedAxis::Ceiling { correction }
        } else {
            body.velocity.y = body.velocity.y.min(0.0);
            ResolvedAxis::Floor { correction }
        }
    }
}

/// Run one simulation tick for a single body
pub fn step_body(
    body: &mut BodyData,
    world: &CollisionWorldData,
    input: &InputState,
    params: &MovementParams,
    elapsed: f32,
) -> StepReport {
    let grounded = is_grounded(body, world, params);

    let jumped = input.jump.pressed && grounded;
    if jumped {
        body.velocity.y = -params.jump_velocity;
    }

    let movement = horizontal_move(input, params);
    integrate_motion(body, movement, params, elapsed);

    let resolution = query_first_overlap(world, body.position, params.body_size);
    let resolution = resolve_penetration(body, resolution, params);

    log::trace!(
        "[physics::step_body] grounded={} jumped={} position=({}, {}) velocity=({}, {}) resolution={:?}",
        grounded,
        jumped,
        body.position.x,
        body.position.y,
        body.velocity.x,
        body.velocity.y,
        resolution
    );

    StepReport {
        grounded,
        jumped,
        resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision_operations::{add_box, create_collision_world};

    const TOLERANCE: f32 = 1e-3;

    fn params() -> MovementParams {
        MovementParams {
            body_size: Vec2::new(40.0, 80.0),
            horizontal_speed: 200.0,
            jump_velocity: 400.0,
            gravity: 300.0,
            ceiling_epsilon: 0.0001,
        }
    }

    /// Ground spanning x in [0, 1280], y in [680, 720]
    fn ground_world() -> CollisionWorldData {
        let mut world = create_collision_world();
        add_box(&mut world, Vec2::new(640.0, 700.0), Vec2::new(1280.0, 40.0));
        world
    }

    fn body_at(x: f32, y: f32, vy: f32) -> BodyData {
        BodyData {
            position: Vec2::new(x, y),
            velocity: Vec2::new(0.0, vy),
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_free_fall_integrates_position_before_gravity() {
        let world = create_collision_world();
        let mut body = body_at(100.0, 100.0, 0.0);

        let report = step_body(&mut body, &world, &InputState::default(), &params(), 1.0);

        assert_eq!(body.position, Vec2::new(100.0, 100.0));
        assert_eq!(body.velocity, Vec2::new(0.0, 300.0));
        assert!(!report.grounded);
        assert_eq!(report.resolution, ResolvedAxis::None);
    }

    #[test]
    fn test_horizontal_motion_has_no_momentum() {
        let world = create_collision_world();
        let mut body = body_at(100.0, 100.0, 0.0);
        let mut input = InputState::default();
        input.right.pressed = true;

        step_body(&mut body, &world, &input, &params(), 0.5);
        assert_close(body.position.x, 200.0);
        assert_eq!(body.velocity.x, 0.0);

        input.right.pressed = false;
        step_body(&mut body, &world, &input, &params(), 0.5);
        assert_close(body.position.x, 200.0);

        input.left.pressed = true;
        input.right.pressed = true;
        step_body(&mut body, &world, &input, &params(), 0.5);
        assert_close(body.position.x, 200.0);
    }

    #[test]
    fn test_grounded_jump() {
        let world = ground_world();
        let mut body = body_at(690.0, 640.0, 0.0);
        let mut input = InputState::default();
        input.jump.pressed = true;

        let report = step_body(&mut body, &world, &input, &params(), 0.1);

        assert!(report.grounded);
        assert!(report.jumped);
        assert!(body.velocity.y < 0.0);
        assert_close(body.position.y, 600.0);
    }

    #[test]
    fn test_grounded_without_jump_only_gravity_applies() {
        let world = ground_world();
        let mut body = body_at(690.0, 640.0, 0.0);
        let elapsed = 0.1;

        let report = step_body(&mut body, &world, &InputState::default(), &params(), elapsed);

        assert!(report.grounded);
        assert!(!report.jumped);
        assert_eq!(body.velocity.y, params().gravity * elapsed);
        // Zero penetration gives a -0.0 correction, which takes the ceiling branch
        assert!(matches!(report.resolution, ResolvedAxis::Ceiling { .. }));
        assert_eq!(body.position.y, 640.0);
    }

    #[test]
    fn test_jump_denied_in_air() {
        let world = ground_world();
        let mut body = body_at(690.0, 300.0, 0.0);
        let mut input = InputState::default();
        input.jump.pressed = true;

        let report = step_body(&mut body, &world, &input, &params(), 0.1);

        assert!(!report.grounded);
        assert!(!report.jumped);
        assert!(body.velocity.y > 0.0);
    }

    #[test]
    fn test_ceiling_hit_clamps_to_epsilon() {
        let mut world = create_collision_world();
        // Spans x in [500, 900], y in [380, 420]
        add_box(&mut world, Vec2::new(700.0, 400.0), Vec2::new(400.0, 40.0));
        let mut body = body_at(690.0, 470.0, -100.0);

        let report = step_body(&mut body, &world, &InputState::default(), &params(), 0.2);

        let correction = match report.resolution {
            ResolvedAxis::Ceiling { correction } => correction,
            other => panic!("expected ceiling resolution, got {:?}", other),
        };
        assert!(correction.y >= 0.0);
        assert!(body.velocity.y >= 0.0001);
        assert_eq!(body.velocity.y, params().ceiling_epsilon);
        assert_close(body.position.y, 460.0);
    }

    #[test]
    fn test_floor_landing_clamps_to_zero() {
        let world = ground_world();
        let mut body = body_at(690.0, 630.0, 150.0);

        let report = step_body(&mut body, &world, &InputState::default(), &params(), 0.1);

        let correction = match report.resolution {
            ResolvedAxis::Floor { correction } => correction,
            other => panic!("expected floor resolution, got {:?}", other),
        };
        assert!(correction.y < 0.0);
        assert!(body.velocity.y <= 0.0);
        assert_eq!(body.velocity.y, 0.0);
        assert_close(body.position.y, 640.0);
    }

    #[test]
    fn test_floor_clamp_keeps_jump_started_this_tick() {
        let world = ground_world();
        // Sunk 10 pixels into the ground
        let mut body = body_at(690.0, 650.0, 0.0);
        let mut input = InputState::default();
        input.jump.pressed = true;

        let report = step_body(&mut body, &world, &input, &params(), 0.01);

        assert!(report.jumped);
        assert!(matches!(report.resolution, ResolvedAxis::Floor { .. }));
        assert_close(body.position.y, 640.0);
        assert_close(body.velocity.y, -397.0);
    }

    #[test]
    fn test_wall_stop_clears_velocity() {
        let mut world = create_collision_world();
        // Spans x in [780, 820], y in [300, 700]
        add_box(&mut world, Vec2::new(800.0, 500.0), Vec2::new(40.0, 400.0));
        let mut body = body_at(755.0, 520.0, 50.0);
        let mut input = InputState::default();
        input.right.pressed = true;

        let report = step_body(&mut body, &world, &input, &params(), 0.1);

        let correction = match report.resolution {
            ResolvedAxis::Horizontal { correction } => correction,
            other => panic!("expected horizontal resolution, got {:?}", other),
        };
        assert!(correction.x.abs() <= correction.y.abs());
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_close(body.position.x, 760.0);
        assert_close(body.position.x - correction.x, 775.0);
        assert_close(body.position.y, 525.0);
    }

    #[test]
    fn test_equal_corrections_resolve_horizontally() {
        let mut world = create_collision_world();
        add_box(&mut world, Vec2::ZERO, Vec2::new(100.0, 100.0));
        let mut body = body_at(60.0, 80.0, -5.0);

        let report = step_body(&mut body, &world, &InputState::default(), &params(), 0.0);

        assert_eq!(
            report.resolution,
            ResolvedAxis::Horizontal {
                correction: Vec2::new(10.0, 10.0)
            }
        );
        assert_eq!(body.position, Vec2::new(70.0, 80.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_coincident_center_leaves_body_penetrating() {
        let world = ground_world();
        // Horizontally centered on the ground and sunk 20 pixels in
        let mut body = body_at(640.0, 660.0, 0.0);

        let report = step_body(&mut body, &world, &InputState::default(), &params(), 0.1);

        assert_eq!(
            report.resolution,
            ResolvedAxis::Horizontal {
                correction: Vec2::new(0.0, -20.0)
            }
        );
        assert_eq!(body.position, Vec2::new(640.0, 660.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_one_second_ticks_tunnel_through_ground() {
        let world = ground_world();
        let mut body = body_at(640.0, 600.0, 0.0);
        let mut input = InputState::default();
        input.jump.pressed = true;

        // 40 pixels above the ground: no contact, jump denied, position
        // moves with the old (zero) velocity
        let first = step_body(&mut body, &world, &input, &params(), 1.0);
        assert!(!first.grounded);
        assert!(!first.jumped);
        assert_eq!(first.resolution, ResolvedAxis::None);
        assert_eq!(body.position, Vec2::new(640.0, 600.0));
        assert_eq!(body.velocity.y, 300.0);

        // 300 pixels in one step carries the body clean past the 40 pixel ground
        let second = step_body(&mut body, &world, &input, &params(), 1.0);
        assert!(!second.grounded);
        assert_eq!(second.resolution, ResolvedAxis::None);
        assert_eq!(body.position, Vec2::new(640.0, 900.0));
        assert_eq!(body.velocity.y, 600.0);
        assert!(body.position.y - 40.0 > 720.0);
    }

    #[test]
    fn test_fall_and_land_on_ground() {
        let world = ground_world();
        let mut body = body_at(690.0, 600.0, 0.0);
        let mut input = InputState::default();
        input.jump.pressed = true;

        // In the air: the held jump is denied
        let first = step_body(&mut body, &world, &input, &params(), 0.5);
        assert!(!first.grounded);
        assert!(!first.jumped);
        assert_eq!(body.position.y, 600.0);
        assert_eq!(body.velocity.y, 150.0);

        // Falls to y = 675, sinks 35 pixels and is pushed back up
        let second = step_body(&mut body, &world, &input, &params(), 0.5);
        assert!(!second.jumped);
        assert_eq!(
            second.resolution,
            ResolvedAxis::Floor {
                correction: Vec2::new(40.0, -35.0)
            }
        );
        assert_eq!(body.position.y + 40.0, 680.0);
        assert_eq!(body.velocity.y, 0.0);

        // Resting on the ground now, so the jump goes through
        let third = step_body(&mut body, &world, &input, &params(), 0.5);
        assert!(third.grounded);
        assert!(third.jumped);
    }
}
