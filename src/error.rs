use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resume file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported file format: .{extension}. Supported formats: pdf, docx, doc, txt, md")]
    UnsupportedFormat { extension: String },

    #[error("Failed to extract text from {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
