//! Play mode operations - Pure DOP functions
//!
//! Drives a single tick: physics for the local player, then the button-down
//! bookkeeping that feeds the outgoing network message.

use super::play_data::{PlayState, QuadInstance, TickOutput};
use crate::input::{
    apply_key_event, directional_downs, has_directional_downs, reset_downs, InputState, KeyAction,
    KeyCode,
};
use crate::level::{build_collision_world, validate_level, LevelData};
use crate::network::{drain_server_messages, ProtocolResult, ServerMessage};
use crate::physics::{step_body, BodyData, MovementParams};
use crate::SimulationConfig;
use anyhow::{Context, Result};
use glam::Vec2;

/// Movement tuning derived from the configuration
pub fn movement_params(config: &SimulationConfig) -> MovementParams {
    MovementParams {
        body_size: config.body_size,
        horizontal_speed: config.horizontal_speed,
        jump_velocity: config.jump_velocity,
        gravity: config.gravity,
        ceiling_epsilon: config.ceiling_epsilon,
    }
}

/// Validate inputs, build the collision world and place the player at spawn
pub fn init_play_state(config: SimulationConfig, level: &LevelData) -> Result<PlayState> {
    config.validate().context("Invalid simulation configuration")?;
    validate_level(level).context("Invalid level")?;

    let params = movement_params(&config);
    let world = build_collision_world(level);
    let player = BodyData {
        position: level.spawn,
        velocity: Vec2::ZERO,
    };

    log::info!(
        "[game::init_play_state] Play started: {} boxes, spawn=({}, {})",
        world.boxes.len(),
        level.spawn.x,
        level.spawn.y
    );

    Ok(PlayState {
        config,
        params,
        world,
        player,
        opponent: BodyData::default(),
        input: InputState::default(),
        server_message: String::new(),
        tick: 0,
    })
}

/// Feed a key transition into the play state's input
pub fn handle_key_event(state: &mut PlayState, key: KeyCode, action: KeyAction) -> bool {
    apply_key_event(&mut state.input, key, action)
}

/// Advance the session by `elapsed` seconds
///
/// Press counts are read for the outgoing message before they are reset, so
/// every press is reported exactly once.
pub fn update_play(state: &mut PlayState, elapsed: f32) -> TickOutput {
    let step = step_body(
        &mut state.player,
        &state.world,
        &state.input,
        &state.params,
        elapsed,
    );

    let downs = directional_downs(&state.input);
    let button_downs = has_directional_downs(&downs).then_some(downs);
    reset_downs(&mut state.input);

    state.tick += 1;

    TickOutput {
        tick: state.tick,
        player_quad: player_quad(state),
        step,
        button_downs,
    }
}

/// Consume complete server messages from `recv_buffer`
///
/// Returns how many messages were read. The last text message replaces
/// `server_message`. Messages that arrived before a malformed one are still
/// applied before the error is returned.
pub fn receive_server_data(state: &mut PlayState, recv_buffer: &mut Vec<u8>) -> ProtocolResult<usize> {
    let mut messages = Vec::new();
    let result = drain_server_messages(recv_buffer, &mut messages);

    for message in &messages {
        match message {
            ServerMessage::Text(text) => {
                log::debug!("[game::receive_server_data] Server says: {}", text);
                state.server_message.clone_from(text);
            }
        }
    }

    if let Err(err) = &result {
        log::warn!("[game::receive_server_data] Malformed server data: {}", err);
    }
    result.map(|()| messages.len())
}

/// Render quad for any body of the given size
pub fn body_quad(body: &BodyData, size: Vec2) -> QuadInstance {
    QuadInstance {
        center: body.position.to_array(),
        size: size.to_array(),
    }
}

/// Render quad for the local player
pub fn player_quad(state: &PlayState) -> QuadInstance {
    body_quad(&state.player, state.params.body_size)
}
