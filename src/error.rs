//! Error types for the theme compiler

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Container index out of range for {variable}: position {index} but only {supplied} containers supplied")]
    ContainerOutOfRange { variable: String, index: usize, supplied: usize },

    #[error("Empty property name in selector '{selector}'")]
    EmptyPropertyName { selector: String },

    #[error("Empty value sequence for property '{property}' in selector '{selector}'")]
    EmptySequence { selector: String, property: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

pub type Result<T> = std::result::Result<T, ThemeError>;

impl ThemeError {
    pub fn container_out_of_range(variable: impl Into<String>, index: usize, supplied: usize) -> Self {
        Self::ContainerOutOfRange {
            variable: variable.into(),
            index,
            supplied,
        }
    }

    pub fn empty_property_name(selector: impl Into<String>) -> Self {
        Self::EmptyPropertyName {
            selector: selector.into(),
        }
    }

    pub fn empty_sequence(selector: impl Into<String>, property: impl Into<String>) -> Self {
        Self::EmptySequence {
            selector: selector.into(),
            property: property.into(),
        }
    }
}
