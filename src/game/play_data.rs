//! Play mode data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in play_operations.rs

use crate::input::{DirectionalDowns, InputState};
use crate::physics::{BodyData, CollisionWorldData, MovementParams, StepReport};
use crate::SimulationConfig;
use bytemuck::{Pod, Zeroable};

/// Everything one play session owns
#[derive(Debug, Clone)]
pub struct PlayState {
    pub config: SimulationConfig,
    pub params: MovementParams,
    /// Static geometry, read-only once play starts
    pub world: CollisionWorldData,
    pub player: BodyData,
    /// Remote player's body; positioned by the embedding game, never stepped here
    pub opponent: BodyData,
    pub input: InputState,
    /// Most recent text received from the server
    pub server_message: String,
    pub tick: u64,
}

/// Render instance for one body, laid out for direct upload to a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
}

/// Result of one `update_play` tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Tick number that produced this output (first tick is 1)
    pub tick: u64,
    pub player_quad: QuadInstance,
    pub step: StepReport,
    /// Directional press counts to send to the server, `None` when all are zero
    pub button_downs: Option<DirectionalDowns>,
}
