//! Crate-level error types.

use std::fmt;

/// Errors produced by the geoverlay crate.
#[derive(Debug)]
pub enum BridgeError {
    /// Tangent-frame reference height was zero or negative, leaving the
    /// local vertical undefined.
    InvalidReferenceHeight(f64),
    /// Anchor longitude/latitude was non-finite.
    InvalidAnchor(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Globe Engine render failure, formatted by the host adapter.
    Globe(String),
    /// Scene Engine render failure, formatted by the host adapter.
    Scene(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReferenceHeight(h) => {
                write!(f, "reference height must be > 0, got {h}")
            }
            Self::InvalidAnchor(msg) => {
                write!(f, "invalid anchor point: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Globe(msg) => write!(f, "globe engine error: {msg}"),
            Self::Scene(msg) => write!(f, "scene engine error: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
