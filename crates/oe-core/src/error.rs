//! Error types for the oxidized-emotion frontend

use thiserror::Error;

/// Main error type for the frontend
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("Parse error: {0}")]
    Parse(#[from] oe_text::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Invalid memory card slot: port {port}, slot {slot}")]
    InvalidMemcardSlot { port: u32, slot: u32 },
}

impl From<toml::de::Error> for FrontendError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FrontendError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for frontend operations
pub type Result<T> = std::result::Result<T, FrontendError>;
