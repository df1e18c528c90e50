//! Protocol operations - message encoding and framing
//!
//! Byte layouts only. Sockets and polling belong to the embedding game.

use super::protocol_data::{ButtonMessage, ServerMessage};
use super::{ProtocolError, ProtocolResult};
use crate::constants::protocol::{
    BUTTON_MESSAGE_LEN, BUTTON_MESSAGE_TYPE, TEXT_MESSAGE_HEADER_LEN, TEXT_MESSAGE_TYPE,
};
use crate::input::DirectionalDowns;

/// Encode the per-tick directional press counts
pub fn encode_button_message(downs: &DirectionalDowns) -> ButtonMessage {
    [
        BUTTON_MESSAGE_TYPE,
        downs.left,
        downs.right,
        downs.down,
        downs.up,
    ]
}

/// Decode the message produced by `encode_button_message`
pub fn decode_button_message(bytes: &[u8]) -> ProtocolResult<DirectionalDowns> {
    match bytes {
        [BUTTON_MESSAGE_TYPE, left, right, down, up] => Ok(DirectionalDowns {
            left: *left,
            right: *right,
            down: *down,
            up: *up,
        }),
        [tag, ..] if *tag != BUTTON_MESSAGE_TYPE => {
            Err(ProtocolError::UnknownMessageType(*tag))
        }
        _ => Err(ProtocolError::InvalidLength {
            expected: BUTTON_MESSAGE_LEN,
            found: bytes.len(),
        }),
    }
}

/// Encode a text message: `'m'`, 24-bit big-endian length, UTF-8 bytes
pub fn encode_text_message(text: &str) -> ProtocolResult<Vec<u8>> {
    let len = text.len();
    if len > 0x00FF_FFFF {
        return Err(ProtocolError::PayloadTooLarge { size: len });
    }

    let mut bytes = Vec::with_capacity(TEXT_MESSAGE_HEADER_LEN + len);
    bytes.push(TEXT_MESSAGE_TYPE);
    bytes.extend_from_slice(&(len as u32).to_be_bytes()[1..]);
    bytes.extend_from_slice(text.as_bytes());
    Ok(bytes)
}

/// Consume every complete server message at the front of `recv_buffer`
///
/// Decoded messages are appended to `messages` and their bytes removed from
/// the buffer, even when a later message is malformed. A trailing partial
/// message stays in the buffer for the next poll; on error the buffer starts
/// at the offending type byte. Text is decoded lossily.
pub fn drain_server_messages(
    recv_buffer: &mut Vec<u8>,
    messages: &mut Vec<ServerMessage>,
) -> ProtocolResult<()> {
    let mut consumed = 0;

    let result = loop {
        let pending = &recv_buffer[consumed..];
        if pending.len() < TEXT_MESSAGE_HEADER_LEN {
            break Ok(());
        }

        let tag = pending[0];
        if tag != TEXT_MESSAGE_TYPE {
            break Err(ProtocolError::UnknownMessageType(tag));
        }

        let size = u32::from_be_bytes([0, pending[1], pending[2], pending[3]]) as usize;
        let total = TEXT_MESSAGE_HEADER_LEN + size;
        if pending.len() < total {
            break Ok(());
        }

        let text = String::from_utf8_lossy(&pending[TEXT_MESSAGE_HEADER_LEN..total]);
        messages.push(ServerMessage::Text(text.into_owned()));
        consumed += total;
    };

    recv_buffer.drain(..consumed);
    result
}
