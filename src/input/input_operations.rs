//! Input operations - Pure DOP functions
//!
//! Take data, return results. The only mutation is of the `InputState`
//! handed in by the caller.

use super::input_data::{
    Button, ButtonState, DirectionalDowns, InputState, KeyAction, KeyCode,
};

/// Map a key to the logical button it drives
pub fn button_for_key(key: KeyCode) -> Option<Button> {
    match key {
        KeyCode::A => Some(Button::Left),
        KeyCode::D => Some(Button::Right),
        KeyCode::W => Some(Button::Up),
        KeyCode::S => Some(Button::Down),
        KeyCode::Space => Some(Button::Jump),
        KeyCode::Other => None,
    }
}

/// Mutable access to one button's state
pub fn button_state_mut(input: &mut InputState, button: Button) -> &mut ButtonState {
    match button {
        Button::Left => &mut input.left,
        Button::Right => &mut input.right,
        Button::Up => &mut input.up,
        Button::Down => &mut input.down,
        Button::Jump => &mut input.jump,
    }
}

/// Apply a key event to the input state
///
/// Returns `true` when the event was consumed. Auto-repeat key downs are
/// swallowed without counting as a new press. Jump is tracked but never
/// consumed, so the window layer still sees Space.
pub fn apply_key_event(input: &mut InputState, key: KeyCode, action: KeyAction) -> bool {
    let Some(button) = button_for_key(key) else {
        return false;
    };

    let state = button_state_mut(input, button);
    match action {
        KeyAction::Down { repeat: true } => return false,
        KeyAction::Down { repeat: false } => {
            state.downs = state.downs.saturating_add(1);
            state.pressed = true;
        }
        KeyAction::Up => {
            state.pressed = false;
        }
    }

    button != Button::Jump
}

/// Horizontal direction requested by the held buttons: -1, 0 or 1
///
/// Holding both directions cancels out.
pub fn horizontal_axis(input: &InputState) -> f32 {
    match (input.left.pressed, input.right.pressed) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Collect the directional press counts for this tick
pub fn directional_downs(input: &InputState) -> DirectionalDowns {
    DirectionalDowns {
        left: input.left.downs,
        right: input.right.downs,
        down: input.down.downs,
        up: input.up.downs,
    }
}

/// Whether any directional button was pressed since the last tick
pub fn has_directional_downs(downs: &DirectionalDowns) -> bool {
    downs.left != 0 || downs.right != 0 || downs.down != 0 || downs.up != 0
}

/// Clear every press counter, held state is kept
pub fn reset_downs(input: &mut InputState) {
    input.left.downs = 0;
    input.right.downs = 0;
    input.up.downs = 0;
    input.down.downs = 0;
    input.jump.downs = 0;
}
