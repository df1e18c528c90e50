//! Engine-wide constants
//!
//! Grouped by concern. Tunables that a game is expected to change live in
//! `SimulationConfig`; these are the defaults it starts from.

/// Display surface the default level is laid out for
pub mod display {
    pub const DRAWABLE_WIDTH: u32 = 1280;
    pub const DRAWABLE_HEIGHT: u32 = 720;
}

/// Player body defaults
pub mod player {
    /// Width of the player collision box (pixels)
    pub const BODY_WIDTH: f32 = 40.0;
    /// Height of the player collision box (pixels)
    pub const BODY_HEIGHT: f32 = 80.0;
    /// Spawn offset from the horizontal center of the screen
    pub const SPAWN_OFFSET_X: f32 = 50.0;
    /// Spawn height above the bottom edge of the screen
    pub const SPAWN_OFFSET_Y: f32 = 60.0;
}

/// Physics defaults
pub mod physics {
    /// Horizontal walking speed (pixels/second)
    pub const HORIZONTAL_SPEED: f32 = 200.0;
    /// Upward speed applied by a jump (pixels/second)
    pub const JUMP_VELOCITY: f32 = 400.0;
    /// Downward gravity acceleration (pixels/second²), +y points down
    pub const GRAVITY: f32 = 300.0;
    /// Minimum downward speed after hitting a ceiling, keeps the body from sticking
    pub const CEILING_EPSILON: f32 = 0.0001;
}

/// Wire protocol constants
pub mod protocol {
    /// Outgoing button-downs message tag
    pub const BUTTON_MESSAGE_TYPE: u8 = b'b';
    /// Outgoing button-downs message length (tag + four counters)
    pub const BUTTON_MESSAGE_LEN: usize = 5;
    /// Incoming text message tag
    pub const TEXT_MESSAGE_TYPE: u8 = b'm';
    /// Incoming text message header length (tag + 24-bit length)
    pub const TEXT_MESSAGE_HEADER_LEN: usize = 4;
}
