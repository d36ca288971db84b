//! Prediction service — validation, inference, and GO term name resolution.

use std::sync::Arc;

use serde_json::Value;

use protein_function::Predictor;

use crate::ontology::OntologyClient;
use crate::types::{
    PredictRequest, PredictResponse, ServiceError, ServiceResult, NO_SEQUENCE_MESSAGE,
};

/// Orchestrates one prediction per request over shared read-only artifacts.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<Predictor>,
    ontology: OntologyClient,
}

impl PredictionService {
    pub fn new(predictor: Arc<Predictor>, ontology: OntologyClient) -> Self {
        Self {
            predictor,
            ontology,
        }
    }

    /// Handle a raw JSON request body.
    pub async fn handle(&self, body: &Value) -> ServiceResult<PredictResponse> {
        let request = PredictRequest::from_json(body)
            .ok_or_else(|| ServiceError::InvalidInput(NO_SEQUENCE_MESSAGE.to_string()))?;
        self.predict(request.sequence).await
    }

    /// Predict the GO term for a sequence and resolve its name.
    pub async fn predict(&self, sequence: String) -> ServiceResult<PredictResponse> {
        if sequence.is_empty() {
            return Err(ServiceError::InvalidInput(NO_SEQUENCE_MESSAGE.to_string()));
        }

        let predictor = self.predictor.clone();
        let residues = sequence.chars().count();
        let prediction = tokio::task::spawn_blocking(move || predictor.predict(&sequence))
            .await
            .map_err(|e| ServiceError::Internal(format!("inference task failed: {e}")))??;

        tracing::info!(
            residues,
            go_term = %prediction.go_term,
            confidence = prediction.confidence,
            "Predicted function"
        );

        let go_term_name = self.ontology.term_name(&prediction.go_term).await;

        Ok(PredictResponse {
            predicted_function: prediction.go_term,
            go_term_name,
        })
    }
}
