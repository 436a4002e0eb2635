//! imagecheck Core
//!
//! Shared types and reductions for the imagecheck tools.
//!
//! This crate provides:
//! - The `Prediction` label/score type returned by hosted inference endpoints
//! - Response-body parsing and the top-prediction reduction
//! - The artificial-image policy
//! - Error types and result handling

pub mod error;
pub mod policy;
pub mod prediction;

pub use error::{Error, Result};
pub use policy::{ArtificialPolicy, DEFAULT_ARTIFICIAL_LABEL, DEFAULT_ARTIFICIAL_THRESHOLD};
pub use prediction::{parse_predictions, top_prediction, Prediction};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::policy::ArtificialPolicy;
    pub use crate::prediction::{parse_predictions, top_prediction, Prediction};
}
