//! Error types for the chroma_palette library

use thiserror::Error;

/// Result type alias for palette extraction operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette extraction
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Invalid input parameters (cluster count, delta threshold, iteration cap)
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// No observations could be extracted from the image (zero-area image)
    #[error("No pixel observations to cluster (empty image)")]
    EmptyInput,

    /// Output sink write failed
    #[error("Output sink failed: {message}")]
    Sink {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an invalid parameter error from any displayable value
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a sink error with context
    pub fn sink<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Sink {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
