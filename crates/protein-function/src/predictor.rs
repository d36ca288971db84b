//! Sequence to GO term prediction.

use std::path::Path;

use crate::classifier::{argmax, Classifier, OnnxClassifier};
use crate::features::extract_features;
use crate::labels::LabelTable;
use crate::types::{PredictError, Prediction, PredictResult};

/// Sequence used to probe the classifier output width at startup.
const PROBE_SEQUENCE: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Loaded classifier plus its label table, shared read-only by all requests.
pub struct Predictor {
    classifier: Box<dyn Classifier>,
    labels: LabelTable,
}

impl Predictor {
    pub fn new(classifier: Box<dyn Classifier>, labels: LabelTable) -> Self {
        Self { classifier, labels }
    }

    /// Load the ONNX model and label table from disk.
    pub fn open(model_path: &Path, labels_path: &Path) -> PredictResult<Self> {
        let classifier = OnnxClassifier::load(model_path)?;
        let labels = LabelTable::load(labels_path)?;
        Ok(Self::new(Box::new(classifier), labels))
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Predict the GO term for a sequence.
    pub fn predict(&self, sequence: &str) -> PredictResult<Prediction> {
        let features = extract_features(sequence)?;
        tracing::debug!(features = ?features.as_array(), "Extracted features");

        let probabilities = self.classifier.predict(&features)?;
        tracing::debug!(classes = probabilities.len(), "Classifier output");

        let class_index = argmax(&probabilities)?;
        let go_term = self.labels.decode(class_index)?.to_string();

        Ok(Prediction {
            class_index,
            confidence: probabilities[class_index],
            go_term,
        })
    }

    /// Check that the classifier and label table were trained together.
    ///
    /// Runs one inference and compares the output width to the label count.
    pub fn verify(&self) -> PredictResult<()> {
        let features = extract_features(PROBE_SEQUENCE)?;
        let width = self.classifier.predict(&features)?.len();
        if width != self.labels.len() {
            return Err(PredictError::Labels(format!(
                "classifier emits {width} classes but label table has {}",
                self.labels.len()
            )));
        }
        Ok(())
    }
}
