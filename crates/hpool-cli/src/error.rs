use hpool_core::HpoolError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] hpool_core::ValidationError),

    #[error(transparent)]
    Client(#[from] HpoolError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Client(error) => match error {
                HpoolError::Api { .. } => 3,
                HpoolError::Decode { .. } => 4,
                HpoolError::Transport(_) | HpoolError::HttpStatus { .. } => 5,
            },
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
