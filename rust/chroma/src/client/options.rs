use std::time::Duration;

/// Errors raised while assembling [`ChromaHttpClientOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ChromaHttpClientOptionsError {
    /// The endpoint is not an absolute URL, or it carries a query or fragment
    /// that request paths cannot be appended after.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// Endpoint and transport settings used to build a [`ChromaHttpClient`](crate::ChromaHttpClient).
///
/// Timeouts belong to the transport. `None` leaves reqwest's defaults in place.
#[derive(Debug, Clone)]
pub struct ChromaHttpClientOptions {
    /// Base URL of the Chroma server. API paths are appended to it verbatim.
    pub endpoint: reqwest::Url,
    /// Deadline for a whole request, from connect until the response headers arrive.
    pub timeout: Option<Duration>,
    /// Deadline for establishing the TCP/TLS connection.
    pub connect_timeout: Option<Duration>,
}

impl Default for ChromaHttpClientOptions {
    fn default() -> Self {
        ChromaHttpClientOptions {
            endpoint: DEFAULT_LOCAL_ENDPOINT.parse().expect("valid URL"),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ChromaHttpClientOptions {
    /// Reads `CHROMA_ENDPOINT`, falling back to `http://localhost:8000`.
    pub fn from_env() -> Result<Self, ChromaHttpClientOptionsError> {
        let endpoint = std::env::var("CHROMA_ENDPOINT")
            .map(|s| s.parse())
            .unwrap_or(Ok(ChromaHttpClientOptions::default().endpoint))
            .map_err(|err| ChromaHttpClientOptionsError::InvalidEndpoint(err.to_string()))?;
        let endpoint = check_endpoint(endpoint)?;

        Ok(ChromaHttpClientOptions {
            endpoint,
            ..Default::default()
        })
    }

    /// Parses `base_url` into an endpoint, leaving the transport settings at their defaults.
    pub fn from_base_url(base_url: impl AsRef<str>) -> Result<Self, ChromaHttpClientOptionsError> {
        let endpoint = base_url.as_ref().parse::<reqwest::Url>().map_err(|err| {
            ChromaHttpClientOptionsError::InvalidEndpoint(format!("{}: {}", base_url.as_ref(), err))
        })?;
        let endpoint = check_endpoint(endpoint)?;

        Ok(ChromaHttpClientOptions {
            endpoint,
            ..Default::default()
        })
    }
}

/// Paths are appended to the endpoint as text, so anything after the path
/// would swallow them.
fn check_endpoint(
    endpoint: reqwest::Url,
) -> Result<reqwest::Url, ChromaHttpClientOptionsError> {
    if endpoint.query().is_some() || endpoint.fragment().is_some() {
        return Err(ChromaHttpClientOptionsError::InvalidEndpoint(format!(
            "{}: query and fragment are not allowed",
            endpoint
        )));
    }
    Ok(endpoint)
}
