//! Network Module - message codec for the two-player session
//!
//! Only byte layouts live here. Connecting, polling and sending are done by
//! the embedding game's transport.

pub mod protocol_data;
pub mod protocol_operations;

pub use protocol_data::{ButtonMessage, ServerMessage};
pub use protocol_operations::{
    decode_button_message, drain_server_messages, encode_button_message, encode_text_message,
};

pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("Unknown message type '{}' (0x{:02x})", char::from(*.0), .0)]
    UnknownMessageType(u8),
    #[error("Invalid message length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("Payload too large: {size} bytes")]
    PayloadTooLarge { size: usize },
}
