//! Incoming prediction request.

use serde_json::Value;

/// A prediction request after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    pub sequence: String,
}

impl PredictRequest {
    /// Extract the `sequence` field from a raw JSON body.
    ///
    /// Returns `None` if the body is not an object, the field is missing,
    /// the field is not a string, or the string is empty.
    pub fn from_json(body: &Value) -> Option<Self> {
        body.get("sequence")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(|s| Self {
                sequence: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_sequence() {
        let req = PredictRequest::from_json(&json!({"sequence": "MTEYK"})).unwrap();
        assert_eq!(req.sequence, "MTEYK");
    }

    #[test]
    fn test_rejects_missing_or_empty() {
        assert!(PredictRequest::from_json(&json!({})).is_none());
        assert!(PredictRequest::from_json(&json!({"sequence": ""})).is_none());
        assert!(PredictRequest::from_json(&json!({"sequence": null})).is_none());
        assert!(PredictRequest::from_json(&json!({"sequence": 42})).is_none());
        assert!(PredictRequest::from_json(&json!(["MTEYK"])).is_none());
    }
}
