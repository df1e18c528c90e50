//! Input data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in input_operations.rs

use serde::{Deserialize, Serialize};

/// Keys the play mode reacts to
///
/// The window layer translates its native key codes into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    A,
    D,
    W,
    S,
    Space,
    /// Anything the play mode ignores
    Other,
}

/// Key transition reported by the window layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key went down; `repeat` is set for OS auto-repeat events
    Down { repeat: bool },
    Up,
}

/// Logical buttons driven by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

/// State of a single logical button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Press transitions since the last tick
    pub downs: u8,
    /// Currently held
    pub pressed: bool,
}

/// All buttons the play mode tracks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: ButtonState,
    pub right: ButtonState,
    pub up: ButtonState,
    pub down: ButtonState,
    pub jump: ButtonState,
}

/// Directional press counts gathered for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalDowns {
    pub left: u8,
    pub right: u8,
    pub down: u8,
    pub up: u8,
}
