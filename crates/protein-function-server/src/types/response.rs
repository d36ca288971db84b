//! Outgoing response bodies.

use serde::{Deserialize, Serialize};

/// Successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted GO term, e.g. `GO:0004768`.
    pub predicted_function: String,
    /// Human-readable GO term name, or the unknown-term sentinel.
    pub go_term_name: String,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
