//! Game Module - Pure DOP play mode
//!
//! Glue between the window layer, physics and the network codec. The
//! embedding game calls `handle_key_event` as keys arrive, `update_play`
//! once per frame, then draws `TickOutput::player_quad` and sends
//! `TickOutput::button_downs` if present.

pub mod play_data;
pub mod play_operations;

pub use play_data::{PlayState, QuadInstance, TickOutput};

pub use play_operations::{
    body_quad, handle_key_event, init_play_state, movement_params, player_quad,
    receive_server_data, update_play,
};
