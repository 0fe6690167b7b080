//! Error handling for domain-alterations

use thiserror::Error;

/// Main error type for domain-alterations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlterationError {
    #[error("Invalid input name '{name}': {message}")]
    InvalidInput { name: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AlterationError {
    /// Create an invalid input error
    pub fn invalid_input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the failure comes from a malformed input name rather than
    /// from the environment. Retrying such a name never helps.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { name, message } => {
                format!("⚠️  Skipping '{}': {}\n💡 Names must look like label.example.com", name, message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or configuration", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the file format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<serde_json::Error> for AlterationError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for AlterationError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<tokio::task::JoinError> for AlterationError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Worker task failed: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AlterationError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::AlterationError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AlterationError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! invalid_input {
    ($name:expr, $msg:expr) => {
        $crate::error::AlterationError::invalid_input($name, $msg)
    };
    ($name:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::error::AlterationError::invalid_input($name, format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = AlterationError::invalid_input("localhost", "missing '.' separator");
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("localhost"));
        assert!(err.user_message().contains("label.example.com"));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("bad value {}", 7);
        assert_eq!(err, AlterationError::config("bad value 7"));

        let err = invalid_input!("abc", "no tail");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AlterationError = io.into();
        assert!(matches!(err, AlterationError::Io { .. }));
    }
}
