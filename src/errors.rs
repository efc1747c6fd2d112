// errors.rs
use std::fmt;

/// Errors that can abort a run: filesystem trouble while persisting, or a
/// summary that refuses to serialize. API-level failures never reach this
/// type; they are absorbed at the market boundary.
#[derive(Debug)]
pub enum RunError {
    Io(String),
    Serialize(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(msg) => write!(f, "I/O error: {msg}"),
            RunError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::Serialize(e.to_string())
    }
}
