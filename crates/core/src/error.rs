// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} manifest '{path}': {details}")]
    ManifestParse {
        format: String,
        path: PathBuf,
        details: String,
    },

    #[error("Invalid version '{value}': {details}")]
    InvalidVersion { value: String, details: String },

    #[error("Invalid release date '{value}': expected MM-DD-YYYY or YYYY-MM-DD")]
    InvalidReleaseDate { value: String },

    #[error("Declared version string '{declared}' does not match {major}.{minor}.{patch}")]
    VersionMismatch {
        declared: String,
        major: u32,
        minor: u32,
        patch: u32,
    },

    #[error("Declared release string '{declared}' does not match derived '{derived}'")]
    ReleaseMismatch { declared: String, derived: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, StampError>;
