//! Error types and handling infrastructure for PRD to beads conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionError {
    pub fn input_not_found(path: PathBuf) -> Self {
        Self::InputNotFound { path }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::Parse(ParseError::new(message, location))
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => {
                format!("PRD file not found: {}", path.display())
            }
            Self::Io { message, path } => match path {
                Some(path) => format!("{} ({})", message, path.display()),
                None => message.clone(),
            },
            Self::Parse(err) => {
                let mut message = match err.location {
                    Some((line, col)) => format!(
                        "PRD parse error at line {}, column {}: {}",
                        line, col, err.message
                    ),
                    None => format!("PRD parse error: {}", err.message),
                };
                if let Some(preview) = &err.input_preview {
                    message.push_str(&format!("\n  | {}", preview));
                }
                message
            }
            Self::Serialization { message } => {
                format!("Failed to encode beads issue: {}", message)
            }
            Self::Configuration { .. } => self.to_string(),
        }
    }
}

/// PRD parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
