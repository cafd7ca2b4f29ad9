// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for accessweb

use thiserror::Error;

/// Errors raised by the contrast evaluator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContrastError {
    #[error("Invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: String },
}

impl ContrastError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        ContrastError::InvalidColorFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Main error type for accessweb
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &str) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn parse(text: &str) -> Result<toml::Value> {
        Ok(toml::from_str(text)?)
    }

    #[test]
    fn test_io_and_toml_errors_convert() {
        assert!(matches!(read("/nonexistent/accessweb.toml"), Err(AuditError::Io(_))));
        let err = parse("[contrast\n").unwrap_err();
        assert!(matches!(err, AuditError::Toml(_)));
        assert!(err.to_string().starts_with("TOML parse error: "));
    }

    #[test]
    fn test_invalid_color_message_names_input() {
        let err = ContrastError::invalid("#12", "expected 3 or 6 hex digits, found 2");
        assert_eq!(
            err.to_string(),
            "Invalid color format \"#12\": expected 3 or 6 hex digits, found 2"
        );
    }
}
