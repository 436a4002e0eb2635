//! Prediction types and top-prediction reduction

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single label/score pair returned by an inference endpoint.
///
/// The client treats predictions as opaque beyond these two fields; the
/// label vocabulary is defined by whichever model the endpoint hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Classification label
    pub label: String,

    /// Confidence score (0.0-1.0)
    pub score: f32,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Parse a response body into a prediction list.
///
/// The endpoint contract is a JSON array of `{label, score}` objects.
/// Anything else, including valid JSON that is not an array (the hosted
/// APIs report errors as `{"error": ...}` objects), is a parse failure.
pub fn parse_predictions(body: &str) -> Result<Vec<Prediction>> {
    serde_json::from_str::<Vec<Prediction>>(body)
        .map_err(|e| Error::parse(format!("expected a JSON array of predictions: {e}")))
}

/// Select the highest-scoring prediction.
///
/// Ties resolve to the first maximum in the list's original order. An empty
/// list is a valid, if unhelpful, outcome and yields `None` rather than an
/// error; boundaries that need a distinct message map it to
/// [`Error::EmptyResult`].
pub fn top_prediction(predictions: &[Prediction]) -> Option<&Prediction> {
    let mut best: Option<&Prediction> = None;
    for p in predictions {
        match best {
            Some(b) if p.score <= b.score => {}
            _ => best = Some(p),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_prediction_is_max_score() {
        let preds = vec![
            Prediction::new("male", 0.12),
            Prediction::new("female", 0.88),
        ];

        let top = top_prediction(&preds).unwrap();
        assert_eq!(top.label, "female");
        assert_eq!(top.score, 0.88);
    }

    #[test]
    fn test_top_prediction_tie_keeps_first() {
        let preds = vec![
            Prediction::new("first", 0.5),
            Prediction::new("second", 0.5),
        ];

        assert_eq!(top_prediction(&preds).unwrap().label, "first");
    }

    #[test]
    fn test_top_prediction_empty_is_none() {
        assert!(top_prediction(&[]).is_none());
    }

    #[test]
    fn test_parse_valid_array() {
        let body = r#"[{"label":"human","score":0.9},{"label":"artificial","score":0.1}]"#;

        let preds = parse_predictions(body).unwrap();
        assert_eq!(preds.len(), 2);
        assert_eq!(preds[0].label, "human");
    }

    #[test]
    fn test_parse_json_object_is_failure() {
        let result = parse_predictions(r#"{"error":"model overloaded"}"#);
        assert!(matches!(result, Err(Error::ParseFailure(_))));
    }

    #[test]
    fn test_parse_non_json_is_failure() {
        let result = parse_predictions("<html>bad gateway</html>");
        assert!(matches!(result, Err(Error::ParseFailure(_))));
    }
}
