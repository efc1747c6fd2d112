use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Http { status: u16, body: String },
    Decode(String),
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "Response decode error: {msg}"),
            ApiError::Config(msg) => write!(f, "Client config error: {msg}"),
        }
    }
}

impl Error for ApiError {}
