//! Protocol Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in protocol_operations.rs

use crate::constants::protocol::BUTTON_MESSAGE_LEN;

/// Encoded outgoing button-downs message: `'b', left, right, down, up`
pub type ButtonMessage = [u8; BUTTON_MESSAGE_LEN];

/// Messages a server can send to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// Free-form status text
    Text(String),
}
