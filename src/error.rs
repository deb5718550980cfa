//! Error types and handling for the `Vayu` application

use thiserror::Error;

/// Main error type for the `Vayu` application
#[derive(Error, Debug)]
pub enum VayuError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Dashboard rendering errors
    #[error("Render error: {message}")]
    Render { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl VayuError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new rendering error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            VayuError::Config { .. } => {
                "Configuration error. Please check your config file and environment overrides."
                    .to_string()
            }
            VayuError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            VayuError::Render { .. } => {
                "Unable to render the dashboard view. Try a different terminal width.".to_string()
            }
            VayuError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            VayuError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = VayuError::config("missing forecast section");
        assert!(matches!(config_err, VayuError::Config { .. }));

        let validation_err = VayuError::validation("empty city name");
        assert!(matches!(validation_err, VayuError::Validation { .. }));

        let render_err = VayuError::render("empty series");
        assert!(matches!(render_err, VayuError::Render { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = VayuError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = VayuError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let vayu_err: VayuError = io_err.into();
        assert!(matches!(vayu_err, VayuError::Io { .. }));
    }
}
