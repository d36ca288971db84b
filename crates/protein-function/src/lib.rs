//! Protein function prediction — sequence features, classifier inference, and GO term decoding.

pub mod classifier;
pub mod features;
pub mod labels;
pub mod predictor;
pub mod types;

pub use classifier::{argmax, Classifier, OnnxClassifier};
pub use features::{extract_features, FeatureVector, FEATURE_COUNT, TERMINAL_WINDOW};
pub use labels::LabelTable;
pub use predictor::Predictor;
pub use types::*;
