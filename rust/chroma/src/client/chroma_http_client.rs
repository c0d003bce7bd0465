use chroma_v1_error::{ChromaError, ErrorCodes};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use thiserror::Error;

use crate::client::ChromaHttpClientOptions;
use crate::client::ChromaHttpClientOptionsError;
use crate::collection::ChromaCollection;
use crate::types::{
    AddEmbeddingsRequest, CreateCollectionRequest, DeleteEmbeddingsRequest, GetEmbeddingsRequest,
    QueryEmbeddingsRequest, RawSqlRequest, UpdateCollectionRequest, UpdateEmbeddingsRequest,
};

const USER_AGENT: &str = concat!(
    "Chroma Rust v1 Client v",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/chroma-core/chroma)"
);

const API_ROOT: &str = "/api/v1";

/// Errors that originate from the client while building or dispatching a request.
///
/// A response that arrives is never turned into an error, whatever its status.
#[derive(Error, Debug)]
pub enum ChromaHttpClientError {
    /// Network-level HTTP request failed (DNS, connection refused, timeout).
    #[error("Request error: {0:?}")]
    RequestError(#[from] reqwest::Error),
    /// JSON serialization of the request body failed.
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
    /// The endpoint joined with the request path is not a valid URL, or the
    /// endpoint carries a query or fragment the path cannot follow.
    ///
    /// Holds the offending URL and the parser's message.
    #[error("Invalid URL {0}: {1}")]
    InvalidUrl(String, String),
}

impl ChromaError for ChromaHttpClientError {
    fn code(&self) -> ErrorCodes {
        match self {
            ChromaHttpClientError::RequestError(err) if err.is_timeout() => {
                ErrorCodes::DeadlineExceeded
            }
            ChromaHttpClientError::RequestError(err) if err.is_builder() => {
                ErrorCodes::InvalidArgument
            }
            ChromaHttpClientError::RequestError(_) => ErrorCodes::Unavailable,
            ChromaHttpClientError::SerdeError(_) => ErrorCodes::InvalidArgument,
            ChromaHttpClientError::InvalidUrl(_, _) => ErrorCodes::InvalidArgument,
        }
    }
}

#[cfg(feature = "opentelemetry")]
static METRICS: std::sync::LazyLock<crate::client::metrics::Metrics> =
    std::sync::LazyLock::new(crate::client::metrics::Metrics::new);

/// Client handle for the `/api/v1` REST API of a Chroma server.
///
/// Every method issues exactly one HTTP request and hands back the raw
/// [`reqwest::Response`]. The client never reads the status or the body, so a
/// `404` or a `422` arrives as `Ok(response)`; only failures to build or
/// deliver the request are returned as `Err`. There are no retries.
///
/// # Cloning
///
/// `ChromaHttpClient` is cheap to clone and the clones share one connection
/// pool. It holds no mutable state, so clones can be used from many tasks at once.
///
/// # Examples
///
/// ```no_run
/// use chroma_v1::ChromaHttpClient;
/// use chroma_v1::types::AddEmbeddingsRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ChromaHttpClient::from_base_url("http://localhost:8000")?;
///
/// let response = client
///     .add_embeddings("docs", &AddEmbeddingsRequest::new(vec![vec![0.1, 0.2]]))
///     .await?;
/// println!("add returned {}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ChromaHttpClient {
    base_url: reqwest::Url,
    client: reqwest::Client,
}

impl Default for ChromaHttpClient {
    fn default() -> Self {
        Self::new(ChromaHttpClientOptions::default())
    }
}

impl ChromaHttpClient {
    /// Constructs a client from explicit configuration options.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use chroma_v1::{ChromaHttpClient, ChromaHttpClientOptions};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let options = ChromaHttpClientOptions {
    ///     endpoint: "http://localhost:8000".parse()?,
    ///     timeout: Some(Duration::from_secs(30)),
    ///     ..Default::default()
    /// };
    /// let client = ChromaHttpClient::new(options);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(options: ChromaHttpClientOptions) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder.build().expect("Failed to initialize TLS backend");

        ChromaHttpClient {
            base_url: options.endpoint,
            client,
        }
    }

    /// Constructs a client around a transport configured by the caller.
    ///
    /// Use this to share one [`reqwest::Client`] across services or to attach
    /// default headers (for example auth tokens) that this crate does not model.
    pub fn with_transport(endpoint: reqwest::Url, client: reqwest::Client) -> Self {
        ChromaHttpClient {
            base_url: endpoint,
            client,
        }
    }

    /// Constructs a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn from_base_url(base_url: impl AsRef<str>) -> Result<Self, ChromaHttpClientOptionsError> {
        Ok(Self::new(ChromaHttpClientOptions::from_base_url(base_url)?))
    }

    /// Constructs a client from the `CHROMA_ENDPOINT` environment variable.
    ///
    /// Falls back to `http://localhost:8000` when the variable is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is malformed.
    pub fn from_env() -> Result<Self, ChromaHttpClientOptionsError> {
        Ok(Self::new(ChromaHttpClientOptions::from_env()?))
    }

    /// The base URL every request path is appended to.
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Returns a handle bound to the collection `name`.
    ///
    /// No request is made; the collection does not need to exist yet.
    pub fn collection(&self, name: impl Into<String>) -> ChromaCollection {
        ChromaCollection::new(self.clone(), name.into())
    }

    /// `GET /api/v1`
    pub async fn root(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>("root", Method::GET, API_ROOT.to_string(), None)
            .await
    }

    /// `POST /api/v1/reset`
    ///
    /// Asks the server to drop all of its data. Servers usually refuse this
    /// unless resetting is enabled in their settings.
    pub async fn reset(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>("reset", Method::POST, format!("{API_ROOT}/reset"), None)
            .await
    }

    /// `GET /api/v1/version`
    pub async fn version(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>("version", Method::GET, format!("{API_ROOT}/version"), None)
            .await
    }

    /// `POST /api/v1/persist`
    pub async fn persist(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>("persist", Method::POST, format!("{API_ROOT}/persist"), None)
            .await
    }

    /// `POST /api/v1/raw_sql`
    pub async fn execute_raw_sql(
        &self,
        request: &RawSqlRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "execute_raw_sql",
            Method::POST,
            format!("{API_ROOT}/raw_sql"),
            Some(request),
        )
        .await
    }

    /// `GET /api/v1/collections`
    pub async fn list_collections(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>(
            "list_collections",
            Method::GET,
            format!("{API_ROOT}/collections"),
            None,
        )
        .await
    }

    /// `POST /api/v1/collections`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use chroma_v1::ChromaHttpClient;
    /// # use chroma_v1::types::CreateCollectionRequest;
    /// # async fn example(client: ChromaHttpClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = CreateCollectionRequest::builder()
    ///     .name("docs")
    ///     .get_or_create(true)
    ///     .build();
    /// let response = client.create_collection(&request).await?;
    /// assert!(response.status().is_success());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_collection(
        &self,
        request: &CreateCollectionRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "create_collection",
            Method::POST,
            format!("{API_ROOT}/collections"),
            Some(request),
        )
        .await
    }

    /// `POST /api/v1/collections/{name}/add`
    pub async fn add_embeddings(
        &self,
        collection_name: impl AsRef<str>,
        request: &AddEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "add_embeddings",
            Method::POST,
            collection_path(collection_name, "/add"),
            Some(request),
        )
        .await
    }

    /// `POST /api/v1/collections/{name}/update`
    pub async fn update_embeddings(
        &self,
        collection_name: impl AsRef<str>,
        request: &UpdateEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "update_embeddings",
            Method::POST,
            collection_path(collection_name, "/update"),
            Some(request),
        )
        .await
    }

    /// `POST /api/v1/collections/{name}/get`
    pub async fn get_embeddings(
        &self,
        collection_name: impl AsRef<str>,
        request: &GetEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "get_embeddings",
            Method::POST,
            collection_path(collection_name, "/get"),
            Some(request),
        )
        .await
    }

    /// `POST /api/v1/collections/{name}/delete`
    pub async fn delete_embeddings(
        &self,
        collection_name: impl AsRef<str>,
        request: &DeleteEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "delete_embeddings",
            Method::POST,
            collection_path(collection_name, "/delete"),
            Some(request),
        )
        .await
    }

    /// `GET /api/v1/collections/{name}/count`
    pub async fn count_embeddings(
        &self,
        collection_name: impl AsRef<str>,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>(
            "count_embeddings",
            Method::GET,
            collection_path(collection_name, "/count"),
            None,
        )
        .await
    }

    /// `POST /api/v1/collections/{name}/query`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use chroma_v1::ChromaHttpClient;
    /// # use chroma_v1::types::QueryEmbeddingsRequest;
    /// # async fn example(client: ChromaHttpClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = QueryEmbeddingsRequest::builder()
    ///     .query_embeddings(vec![vec![0.1, 0.2, 0.3]])
    ///     .n_results(5)
    ///     .build();
    /// let response = client.query_nearest_neighbors("docs", &request).await?;
    /// let body: serde_json::Value = response.json().await?;
    /// println!("{body}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query_nearest_neighbors(
        &self,
        collection_name: impl AsRef<str>,
        request: &QueryEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "query_nearest_neighbors",
            Method::POST,
            collection_path(collection_name, "/query"),
            Some(request),
        )
        .await
    }

    /// `POST /api/v1/collections/{name}/create_index`
    pub async fn create_index(
        &self,
        collection_name: impl AsRef<str>,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>(
            "create_index",
            Method::POST,
            collection_path(collection_name, "/create_index"),
            None,
        )
        .await
    }

    /// `GET /api/v1/collections/{name}`
    pub async fn get_collection(
        &self,
        collection_name: impl AsRef<str>,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>(
            "get_collection",
            Method::GET,
            collection_path(collection_name, ""),
            None,
        )
        .await
    }

    /// `PUT /api/v1/collections/{name}`
    pub async fn update_collection(
        &self,
        collection_name: impl AsRef<str>,
        request: &UpdateCollectionRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send(
            "update_collection",
            Method::PUT,
            collection_path(collection_name, ""),
            Some(request),
        )
        .await
    }

    /// `DELETE /api/v1/collections/{name}`
    pub async fn delete_collection(
        &self,
        collection_name: impl AsRef<str>,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.send::<()>(
            "delete_collection",
            Method::DELETE,
            collection_path(collection_name, ""),
            None,
        )
        .await
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, ChromaHttpClientError> {
        // Endpoints from `with_transport` skip the options checks.
        if self.base_url.query().is_some() || self.base_url.fragment().is_some() {
            return Err(ChromaHttpClientError::InvalidUrl(
                self.base_url.to_string(),
                "endpoint must not carry a query or fragment".to_string(),
            ));
        }
        let url = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        reqwest::Url::parse(&url)
            .map_err(|err| ChromaHttpClientError::InvalidUrl(url, err.to_string()))
    }

    /// Builds the request without sending it.
    ///
    /// A body, when present, is serialized up front so that serialization
    /// failures surface before anything touches the network.
    pub(crate) fn build_request<Body: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Body>,
    ) -> Result<reqwest::Request, ChromaHttpClientError> {
        let url = self.url(path)?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(serde_json::to_vec(body)?);
        }
        Ok(request.build()?)
    }

    /// Executes a single request and returns the response untouched.
    ///
    /// This is the transport method used by every endpoint. It does not look at
    /// the response status and does not retry.
    pub(crate) async fn send<Body: Serialize>(
        &self,
        operation_name: &str,
        method: Method,
        path: impl AsRef<str>,
        body: Option<&Body>,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        let request = self.build_request(method, path.as_ref(), body)?;
        let url = request.url().clone();
        let method = request.method().clone();

        tracing::trace!(url = %url, method =? method, "Sending request");

        #[cfg(feature = "opentelemetry")]
        let started_at = std::time::Instant::now();

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(
                    url = %url,
                    method =? method,
                    operation = operation_name,
                    "Request failed: {}",
                    err
                );

                #[cfg(feature = "opentelemetry")]
                METRICS.record_request(
                    operation_name,
                    "transport_error",
                    started_at.elapsed().as_secs_f64() * 1000.0,
                );

                return Err(ChromaHttpClientError::RequestError(err));
            }
        };

        #[cfg(feature = "opentelemetry")]
        METRICS.record_request(
            operation_name,
            response.status().as_str(),
            started_at.elapsed().as_secs_f64() * 1000.0,
        );

        tracing::trace!(
            url = %url,
            method =? method,
            status = %response.status(),
            "Received response"
        );

        Ok(response)
    }
}

/// `/api/v1/collections/{name}{suffix}` with `name` inserted as given.
fn collection_path(collection_name: impl AsRef<str>, suffix: &str) -> String {
    format!(
        "{API_ROOT}/collections/{}{}",
        collection_name.as_ref(),
        suffix
    )
}
