//! Error types for Reel Core

use thiserror::Error;

/// Result type alias for Reel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reel error types
#[derive(Error, Debug)]
pub enum Error {
    // Fetch errors
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("Server responded with an empty body")]
    EmptyBody,

    #[error("Failed to decode video list: {0}")]
    Decode(#[from] serde_json::Error),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if this error came from fetching or decoding the video list
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::EmptyBody | Error::Decode(_)
        )
    }

    /// Returns true if the request never produced a usable response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::HttpStatus { .. } | Error::EmptyBody)
    }

    /// Returns a stable error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Transport(_) => "TRANSPORT",
            Error::HttpStatus { .. } => "HTTP_STATUS",
            Error::EmptyBody => "EMPTY_BODY",
            Error::Decode(_) => "DECODE",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_is_fetch_failure() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.is_fetch_failure());
        assert!(!err.is_transport());
        assert_eq!(err.error_code(), "DECODE");
    }

    #[test]
    fn test_status_error_is_transport() {
        let err = Error::HttpStatus { status: 503 };
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Server responded with status 503");
    }

    #[test]
    fn test_config_error_is_not_fetch_failure() {
        let err = Error::InvalidConfig("zero timeout".into());
        assert!(!err.is_fetch_failure());
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }
}
