//! Error handling for Ledge Engine
//!
//! The per-tick physics path is infallible. Everything that touches the
//! outside world (config files, level files, server bytes) reports through
//! this unified error type.

use crate::level::LevelError;
use crate::network::ProtocolError;
use std::error::Error as StdError;
use std::fmt;

/// Main error type for Ledge Engine
#[derive(Debug)]
pub enum EngineError {
    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // Level Errors
    InvalidLevel(LevelError),

    // Network Errors
    Protocol(ProtocolError),

    // System Errors
    IoError {
        path: String,
        error: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },
    SerializationError {
        context: String,
        error: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),

            EngineError::InvalidLevel(err) => write!(f, "Invalid level: {}", err),

            EngineError::Protocol(err) => write!(f, "Protocol error: {}", err),

            EngineError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            EngineError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }
            EngineError::SerializationError { context, error } => {
                write!(f, "Serialization error in {}: {}", context, error)
            }
        }
    }
}

impl StdError for EngineError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            EngineError::InvalidLevel(err) => Some(err),
            EngineError::Protocol(err) => Some(err),
            _ => None,
        }
    }
}

/// Type alias for Results in Ledge Engine
pub type EngineResult<T> = Result<T, EngineError>;

// Conversion traits for common error types

impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::IoError {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(error: toml::de::Error) -> Self {
        EngineError::DeserializationError {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<toml::ser::Error> for EngineError {
    fn from(error: toml::ser::Error) -> Self {
        EngineError::SerializationError {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return EngineError::IoError {
                path: String::new(),
                error: error.to_string(),
            };
        }
        EngineError::DeserializationError {
            context: "json".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<LevelError> for EngineError {
    fn from(error: LevelError) -> Self {
        EngineError::InvalidLevel(error)
    }
}

impl From<ProtocolError> for EngineError {
    fn from(error: ProtocolError) -> Self {
        EngineError::Protocol(error)
    }
}
