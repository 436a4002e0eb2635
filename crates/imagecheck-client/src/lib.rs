//! imagecheck Client
//!
//! Configuration, image preparation, and the HTTP client used to query
//! hosted label/score inference endpoints.

pub mod client;
pub mod config;
pub mod prepare;

pub use client::InferenceClient;
pub use config::{token_from_env, ClientConfig, ToolConfig, TOKEN_ENV_VAR};
pub use prepare::encode_jpeg;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::InferenceClient;
    pub use crate::config::{token_from_env, ClientConfig, ToolConfig};
    pub use crate::prepare::encode_jpeg;
}
