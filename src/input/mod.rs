/// Input Module - Data-Oriented Programming (DOP) style
///
/// - input_data.rs: Pure data structures with NO methods
/// - input_operations.rs: Pure functions that operate on data
///

pub mod input_data;
pub mod input_operations;

// Re-export data structures
pub use input_data::{Button, ButtonState, DirectionalDowns, InputState, KeyAction, KeyCode};

// Re-export all operations
pub use input_operations::{
    apply_key_event, button_for_key, button_state_mut, directional_downs,
    has_directional_downs, horizontal_axis, reset_downs,
};
