//! Error types for MailCheck

use thiserror::Error;

/// Main error type for MailCheck
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for MailCheck
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Config(_) => 500,
            Error::Validation(_) => 400,
            Error::Other(_) => 500,
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "CONFIG_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Message without the category prefix, suitable for a response body
    pub fn message(&self) -> String {
        match self {
            Error::Config(msg) | Error::Validation(msg) => msg.clone(),
            Error::Other(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::Validation("bad body".into()).status_code(), 400);
        assert_eq!(Error::Config("missing".into()).status_code(), 500);
    }

    #[test]
    fn test_message_has_no_prefix() {
        let err = Error::Validation("EOF while parsing a value at line 1 column 0".into());
        assert_eq!(err.message(), "EOF while parsing a value at line 1 column 0");
        assert!(err.to_string().starts_with("Validation error: "));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: Error = anyhow::anyhow!("boom").into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.to_string(), "boom");
    }
}
