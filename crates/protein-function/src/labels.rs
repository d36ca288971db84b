//! GO term label table.

use std::path::Path;

use serde::Deserialize;

use crate::types::{PredictError, PredictResult};

/// On-disk shapes accepted for the label table.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelFile {
    Bare(Vec<String>),
    Encoder { classes: Vec<String> },
}

/// Index-to-label mapping fixed at training time.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    classes: Vec<String>,
}

impl LabelTable {
    /// Build a table from labels in class-index order.
    pub fn new(classes: Vec<String>) -> PredictResult<Self> {
        if classes.is_empty() {
            return Err(PredictError::Labels("label table is empty".to_string()));
        }
        Ok(Self { classes })
    }

    /// Parse a table from JSON: either `["GO:...", ...]` or `{"classes": [...]}`.
    pub fn from_json(json: &str) -> PredictResult<Self> {
        let classes = match serde_json::from_str::<LabelFile>(json)? {
            LabelFile::Bare(classes) => classes,
            LabelFile::Encoder { classes } => classes,
        };
        Self::new(classes)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> PredictResult<Self> {
        tracing::info!("Loading label table from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        tracing::info!("Label table loaded: {} classes", table.len());
        Ok(table)
    }

    /// Decode a class index to its label.
    pub fn decode(&self, index: usize) -> PredictResult<&str> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(PredictError::Decoding {
                index,
                classes: self.classes.len(),
            })
    }

    /// Find the class index of a label.
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
