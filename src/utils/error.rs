use thiserror::Error;

/// Underlying cause of a failed round-trip. Callers only ever see
/// `ConsultaError::Transport`; the cause is kept for logs.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not a JSON object: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConsultaError {
    #[error("invalid {kind}: expected {expected} digits, got {actual:?}")]
    Validation {
        kind: &'static str,
        expected: usize,
        actual: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("lookup rejected by API: {message}")]
    Domain { message: String },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsultaError {
    /// Process exit status used by the CLI for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConsultaError::Validation { .. } => 1,
            ConsultaError::Domain { .. } => 2,
            ConsultaError::Transport(_) => 3,
            ConsultaError::Config { .. }
            | ConsultaError::InvalidConfigValue { .. }
            | ConsultaError::Io(_) => 4,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ConsultaError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, ConsultaError>;
