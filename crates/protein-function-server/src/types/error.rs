//! Error types and HTTP status mapping for the prediction service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use protein_function::PredictError;

use super::response::ErrorResponse;

/// Message returned when the request carries no usable sequence.
pub const NO_SEQUENCE_MESSAGE: &str = "No protein sequence provided";

/// Message returned for every failure that is not the caller's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// All errors that can occur in the prediction service.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Prediction failed: {0}")]
    Predict(PredictError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text safe to show the caller.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::InvalidInput(msg) => msg.clone(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<PredictError> for ServiceError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::InvalidInput(msg) => ServiceError::InvalidInput(msg),
            other => ServiceError::Predict(other),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let err = ServiceError::InvalidInput(NO_SEQUENCE_MESSAGE.to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), NO_SEQUENCE_MESSAGE);
    }

    #[test]
    fn test_internal_details_hidden() {
        let err: ServiceError = PredictError::Decoding {
            index: 7,
            classes: 3,
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_core_invalid_input_maps_to_bad_request() {
        let err: ServiceError = PredictError::InvalidInput("empty".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
