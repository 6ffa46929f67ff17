//! Error types for catalog lookups, selection and presets

use crate::catalog::Category;
use thiserror::Error;

/// Errors raised by the core library
#[derive(Error, Debug)]
pub enum StackError {
    /// The id is not an option of the category
    #[error("Unknown {category} option '{id}'")]
    UnknownOption { category: Category, id: String },

    /// Commands were requested before every category was chosen
    #[error("Selection is not ready, missing: {}", format_missing(.missing))]
    NotReady { missing: Vec<Category> },

    /// Preset file could not be interpreted
    #[error("Preset error: {0}")]
    Preset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, StackError>;

impl StackError {
    pub fn unknown_option(category: Category, id: impl Into<String>) -> Self {
        Self::UnknownOption {
            category,
            id: id.into(),
        }
    }

    pub fn preset(msg: impl Into<String>) -> Self {
        Self::Preset(msg.into())
    }
}

fn format_missing(missing: &[Category]) -> String {
    missing
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
