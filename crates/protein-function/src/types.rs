//! Core data types shared across the prediction pipeline.

use serde::{Deserialize, Serialize};

/// Display name used when a GO term cannot be resolved.
pub const UNKNOWN_GO_TERM: &str = "Unknown GO term";

/// Outcome of a single prediction before name resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Index of the winning class in the classifier output.
    pub class_index: usize,
    /// Probability the classifier assigned to the winning class.
    pub confidence: f32,
    /// GO term decoded from the class index.
    pub go_term: String,
}

/// Errors that can occur in the prediction library.
#[derive(thiserror::Error, Debug)]
pub enum PredictError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Class index {index} out of range for {classes} labels")]
    Decoding { index: usize, classes: usize },

    #[error("Label table error: {0}")]
    Labels(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type.
pub type PredictResult<T> = Result<T, PredictError>;
