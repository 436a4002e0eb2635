//! HTTP client for hosted inference endpoints

use imagecheck_core::{parse_predictions, Error, Prediction, Result};
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// Client for label/score inference endpoints.
///
/// One reqwest client is shared across calls; timeouts are per request so
/// the same client can serve endpoints with different windows.
pub struct InferenceClient {
    http: reqwest::Client,
}

impl InferenceClient {
    /// Create a new inference client
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Classify JPEG bytes against the configured endpoint.
    ///
    /// Issues exactly one POST carrying the bytes as the body and a bearer
    /// token header, then waits up to the configured timeout. No retries
    /// are performed; callers decide whether to re-invoke.
    ///
    /// Failure modes stay distinct: a missing token short-circuits to
    /// [`Error::MissingCredential`] before any network I/O, an elapsed
    /// window is [`Error::Timeout`], a 503 from a cold-starting model is
    /// [`Error::ModelLoading`], any other non-200 is [`Error::Http`], and a
    /// 200 body that is not a prediction array is [`Error::ParseFailure`].
    pub async fn classify(
        &self,
        image_bytes: &[u8],
        config: &ClientConfig,
    ) -> Result<Vec<Prediction>> {
        let token = config
            .auth_token
            .as_deref()
            .ok_or(Error::MissingCredential)?;

        debug!(
            endpoint = %config.endpoint_url,
            bytes = image_bytes.len(),
            "posting image for classification"
        );

        let response = self
            .http
            .post(&config.endpoint_url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .timeout(config.timeout)
            .body(image_bytes.to_vec())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;

        match status {
            200 => parse_predictions(&body),
            503 => {
                warn!(endpoint = %config.endpoint_url, "endpoint is cold-starting");
                Err(Error::ModelLoading)
            }
            _ => Err(Error::http(status, body)),
        }
    }
}

/// Map reqwest transport failures onto the error taxonomy
fn map_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
