//! Error handling for the HitViz layout engine

use thiserror::Error;

/// Main error type for layout and color-mapping operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Configuration error: {steps} gradient steps but {keys} color keys")]
    Configuration { steps: usize, keys: usize },

    #[error("Unknown color scheme: {name}")]
    UnknownScheme { name: String },

    #[error("Invalid score range: {message}")]
    InvalidRange { message: String },

    #[error("Invalid feature: {start}..{end} does not fit a parent of length {parent}")]
    InvalidFeature { start: u64, end: u64, parent: u64 },
}

impl LayoutError {
    pub fn configuration(steps: usize, keys: usize) -> Self {
        Self::Configuration { steps, keys }
    }

    pub fn unknown_scheme<S: Into<String>>(name: S) -> Self {
        Self::UnknownScheme { name: name.into() }
    }

    pub fn invalid_range<S: Into<String>>(message: S) -> Self {
        Self::InvalidRange { message: message.into() }
    }

    pub fn invalid_feature(start: u64, end: u64, parent: u64) -> Self {
        Self::InvalidFeature { start, end, parent }
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
