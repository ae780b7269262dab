use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for configuration and user-supplied selectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("access token cannot be empty")]
    EmptyAccessToken,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be a positive number of milliseconds: '{value}'")]
    InvalidTimeout { value: String },
    #[error("invalid pool type '{value}', expected one of opened, all")]
    InvalidPoolType { value: String },
    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },
}

/// Decode stage at which a response body was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Outer `{code, message, data}` wrapper.
    Envelope,
    /// The `data` payload, either a record or a `{total, list}` wrapper.
    Data,
    /// The `list` payload of a list-shaped response.
    List,
}

impl DecodeStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Envelope => "envelope",
            Self::Data => "data",
            Self::List => "list",
        }
    }
}

impl Display for DecodeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error returned by every client operation. Configuration
/// problems surface earlier, as [`ValidationError`] from the constructors.
#[derive(Debug, Error)]
pub enum HpoolError {
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("upstream returned http status {status}")]
    HttpStatus { status: u16, body: String },

    #[error("failed to decode {stage}: {source}")]
    Decode {
        stage: DecodeStage,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope carried a non-success code. Displays the vendor message as-is.
    #[error("{message}")]
    Api { code: i64, message: String },
}

impl HpoolError {
    pub(crate) fn decode(stage: DecodeStage, source: serde_json::Error) -> Self {
        Self::Decode { stage, source }
    }

    /// Vendor message for application errors, `None` for everything else.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn decode_stage(&self) -> Option<DecodeStage> {
        match self {
            Self::Decode { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_vendor_message_verbatim() {
        let error = HpoolError::Api {
            code: 500,
            message: String::from("invalid token"),
        };
        assert_eq!(error.to_string(), "invalid token");
        assert_eq!(error.api_message(), Some("invalid token"));
    }

    #[test]
    fn decode_error_names_the_stage() {
        let source = serde_json::from_str::<u8>("{").expect_err("must fail");
        let error = HpoolError::decode(DecodeStage::List, source);
        assert!(error.to_string().starts_with("failed to decode list:"));
        assert_eq!(error.decode_stage(), Some(DecodeStage::List));
        assert_eq!(error.api_message(), None);
    }
}
