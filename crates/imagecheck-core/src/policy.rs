//! Artificial-image policy

use crate::prediction::Prediction;

/// Default label the hosted detector uses for synthetic images
pub const DEFAULT_ARTIFICIAL_LABEL: &str = "artificial";

/// Default score threshold above which an image is flagged.
///
/// Intentionally lower than a 0.5 majority cut to bias toward flagging
/// borderline synthetic content.
pub const DEFAULT_ARTIFICIAL_THRESHOLD: f32 = 0.20;

/// Policy deciding whether a prediction list indicates a synthetic image.
///
/// The label and threshold are configuration rather than constants in the
/// check: detector models disagree on vocabulary, so deployments can match
/// whichever taxonomy their endpoint returns.
#[derive(Debug, Clone)]
pub struct ArtificialPolicy {
    /// Label to look for, matched case-insensitively
    pub label: String,

    /// Flag when the matching entry's score is strictly above this
    pub threshold: f32,
}

impl Default for ArtificialPolicy {
    fn default() -> Self {
        Self {
            label: DEFAULT_ARTIFICIAL_LABEL.to_string(),
            threshold: DEFAULT_ARTIFICIAL_THRESHOLD,
        }
    }
}

impl ArtificialPolicy {
    /// Create a policy with a custom label and threshold
    pub fn new(label: impl Into<String>, threshold: f32) -> Self {
        Self {
            label: label.into(),
            threshold,
        }
    }

    /// True if any prediction carries the policy label with a score
    /// strictly above the threshold.
    pub fn is_artificial(&self, predictions: &[Prediction]) -> bool {
        predictions
            .iter()
            .any(|p| p.label.eq_ignore_ascii_case(&self.label) && p.score > self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_above_threshold() {
        let policy = ArtificialPolicy::default();
        let preds = vec![Prediction::new("artificial", 0.21)];

        assert!(policy.is_artificial(&preds));
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        let policy = ArtificialPolicy::default();
        let preds = vec![Prediction::new("artificial", 0.20)];

        assert!(!policy.is_artificial(&preds));
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let policy = ArtificialPolicy::default();
        let preds = vec![Prediction::new("Artificial", 0.5)];

        assert!(policy.is_artificial(&preds));
    }

    #[test]
    fn test_other_labels_never_flag() {
        let policy = ArtificialPolicy::default();
        let preds = vec![Prediction::new("human", 0.99)];

        assert!(!policy.is_artificial(&preds));
    }

    #[test]
    fn test_empty_list_never_flags() {
        let policy = ArtificialPolicy::default();

        assert!(!policy.is_artificial(&[]));
    }

    #[test]
    fn test_custom_vocabulary() {
        let policy = ArtificialPolicy::new("ai-generated", 0.5);
        let preds = vec![
            Prediction::new("artificial", 0.9),
            Prediction::new("AI-Generated", 0.6),
        ];

        assert!(policy.is_artificial(&preds));
    }
}
