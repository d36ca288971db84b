//! Protein function classifier via ONNX Runtime.

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor;

use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::types::{PredictError, PredictResult};

/// A trained model mapping one feature row to a class probability distribution.
///
/// Implementations must be safe to call from several request handlers at once.
pub trait Classifier: Send + Sync {
    /// Run inference on a single feature vector.
    fn predict(&self, features: &FeatureVector) -> PredictResult<Vec<f32>>;
}

/// Classifier backed by an ONNX model exported from the training pipeline.
///
/// The model takes one float32 input of shape `[N, 6]` and yields float32
/// probabilities of shape `[N, classes]` as its first output.
pub struct OnnxClassifier {
    session: Mutex<Session>,
}

impl OnnxClassifier {
    /// Load the model from an ONNX file.
    pub fn load(path: &Path) -> PredictResult<Self> {
        if !path.exists() {
            return Err(PredictError::Classifier(format!(
                "model not found at {}",
                path.display()
            )));
        }

        tracing::info!("Loading classifier from {}", path.display());

        let session = Session::builder()
            .and_then(|b| Ok(b.with_intra_threads(1)?))
            .and_then(|mut b| b.commit_from_file(path))
            .map_err(|e| PredictError::Classifier(format!("Failed to load ONNX model: {e}")))?;

        tracing::info!("Classifier loaded successfully");
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> PredictResult<Vec<f32>> {
        let row = Array2::from_shape_vec((1, FEATURE_COUNT), features.to_f32().to_vec())
            .map_err(|e| PredictError::Classifier(format!("Failed to shape input: {e}")))?;

        let input_tensor = Tensor::from_array(row).map_err(|e| {
            PredictError::Classifier(format!("Failed to create input tensor: {e}"))
        })?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| PredictError::Classifier("classifier lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| PredictError::Classifier(format!("ONNX inference failed: {e}")))?;

        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError::Classifier(format!("Failed to extract output: {e}")))?;

        let probabilities = data.to_vec();
        Ok(probabilities)
    }
}

/// Index of the highest probability; the first maximum wins on ties.
///
/// Fails on an empty distribution or a NaN entry.
pub fn argmax(probabilities: &[f32]) -> PredictResult<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (i, &p) in probabilities.iter().enumerate() {
        if p.is_nan() {
            return Err(PredictError::Classifier(format!(
                "classifier produced NaN at class {i}"
            )));
        }
        match best {
            Some((_, max)) if p <= max => {}
            _ => best = Some((i, p)),
        }
    }

    best.map(|(i, _)| i)
        .ok_or_else(|| PredictError::Classifier("classifier produced no classes".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_maximum() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]).unwrap(), 1);
        assert_eq!(argmax(&[0.9]).unwrap(), 0);
    }

    #[test]
    fn test_argmax_first_index_wins_ties() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]).unwrap(), 1);
        assert_eq!(argmax(&[0.25, 0.25, 0.25, 0.25]).unwrap(), 0);
    }

    #[test]
    fn test_argmax_negative_scores() {
        assert_eq!(argmax(&[-3.0, -1.0, -2.0]).unwrap(), 1);
    }

    #[test]
    fn test_argmax_rejects_empty() {
        assert!(matches!(argmax(&[]), Err(PredictError::Classifier(_))));
    }

    #[test]
    fn test_argmax_rejects_nan() {
        assert!(matches!(
            argmax(&[0.1, f32::NAN, 0.2]),
            Err(PredictError::Classifier(_))
        ));
    }

    #[test]
    fn test_missing_model_is_error() {
        let err = OnnxClassifier::load(Path::new("/nonexistent/model.onnx"))
            .err()
            .unwrap();
        assert!(matches!(err, PredictError::Classifier(_)));
    }
}
