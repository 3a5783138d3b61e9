//! Crate error type.
//!
//! The engine itself is total: generation, analysis and field validation
//! always return a value. Errors only come from the surroundings (loading
//! configuration, reading CLI input, decoding JSON).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PitchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PitchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = PitchError::io(
            "input.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("input.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: PitchError = parse.unwrap_err().into();
        assert!(matches!(err, PitchError::Json(_)));
    }
}
