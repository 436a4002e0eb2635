//! Tool and endpoint configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use imagecheck_core::Result;

/// Environment variable holding the inference API token
pub const TOKEN_ENV_VAR: &str = "HUGGINGFACE_API_KEY";

/// Configuration for the imagecheck tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Gender classification endpoint URL
    #[serde(default = "default_gender_url")]
    pub gender_url: String,

    /// AI-image detector endpoint URL
    #[serde(default = "default_detector_url")]
    pub detector_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Artificial-image policy overrides
    #[serde(default)]
    pub artificial: ArtificialPolicySpec,
}

impl ToolConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(config_path: &str) -> Result<Self> {
        if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| imagecheck_core::Error::config(format!("{config_path}: {e}")))
        } else {
            Ok(Self::default())
        }
    }

    /// Per-call configuration for the gender endpoint
    pub fn gender_endpoint(&self, auth_token: Option<String>) -> ClientConfig {
        ClientConfig {
            endpoint_url: self.gender_url.clone(),
            auth_token,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Per-call configuration for the detector endpoint
    pub fn detector_endpoint(&self, auth_token: Option<String>) -> ClientConfig {
        ClientConfig {
            endpoint_url: self.detector_url.clone(),
            auth_token,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            gender_url: default_gender_url(),
            detector_url: default_detector_url(),
            timeout_secs: default_timeout_secs(),
            artificial: ArtificialPolicySpec::default(),
        }
    }
}

/// Serializable form of the artificial-image policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtificialPolicySpec {
    /// Label the detector model uses for synthetic images
    #[serde(default = "default_artificial_label")]
    pub label: String,

    /// Score threshold, exclusive
    #[serde(default = "default_artificial_threshold")]
    pub threshold: f32,
}

impl Default for ArtificialPolicySpec {
    fn default() -> Self {
        Self {
            label: default_artificial_label(),
            threshold: default_artificial_threshold(),
        }
    }
}

impl From<&ArtificialPolicySpec> for imagecheck_core::ArtificialPolicy {
    fn from(spec: &ArtificialPolicySpec) -> Self {
        Self::new(spec.label.clone(), spec.threshold)
    }
}

/// Immutable configuration for a single classification call
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Inference endpoint URL
    pub endpoint_url: String,

    /// Bearer token; `None` means no credential is configured
    pub auth_token: Option<String>,

    /// How long to wait for a response
    pub timeout: Duration,
}

/// Read the API token from the process environment.
///
/// An unset or blank variable both count as missing.
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn default_gender_url() -> String {
    "https://api-inference.huggingface.co/models/rizandwiki/gender-classification".to_string()
}

fn default_detector_url() -> String {
    "https://api-inference.huggingface.co/models/umm-maybe/AI-image-detector".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_artificial_label() -> String {
    imagecheck_core::DEFAULT_ARTIFICIAL_LABEL.to_string()
}

fn default_artificial_threshold() -> f32 {
    imagecheck_core::DEFAULT_ARTIFICIAL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_carry_hosted_endpoints() {
        let config = ToolConfig::default();

        assert!(config.gender_url.contains("gender-classification"));
        assert!(config.detector_url.contains("AI-image-detector"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ToolConfig::load("/nonexistent/imagecheck.yaml").unwrap();
        assert_eq!(config.artificial.threshold, 0.20);
    }

    #[test]
    fn test_load_partial_yaml_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 5").unwrap();

        let config = ToolConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.detector_url.contains("AI-image-detector"));
    }

    #[test]
    fn test_load_invalid_yaml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: [not a number").unwrap();

        let result = ToolConfig::load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(imagecheck_core::Error::Config(_))));
    }
}
