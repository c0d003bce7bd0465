//! Rust client library for the `/api/v1` REST API of a [Chroma](https://www.trychroma.com) server.
//!
//! The client is a thin pass-through layer: each method builds one HTTP request,
//! serializes the typed payload to JSON when the endpoint takes a body, and
//! returns the raw [`reqwest::Response`]. Interpreting the status code and
//! decoding the body is left to the caller.
//!
//! # Core Types
//!
//! - [`ChromaHttpClient`] - One method per endpoint (collections, records, server admin)
//! - [`ChromaCollection`] - Handle that binds a collection name to a client
//! - [`ChromaHttpClientOptions`] - Endpoint and transport timeouts
//! - [`types`] - Request payloads with their defaults, plus the 422 error envelope
//!
//! # Quick Start
//!
//! ```no_run
//! use chroma_v1::ChromaHttpClient;
//! use chroma_v1::types::{AddEmbeddingsRequest, CreateCollectionRequest, QueryEmbeddingsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChromaHttpClient::from_base_url("http://localhost:8000")?;
//!
//! client
//!     .create_collection(&CreateCollectionRequest::new("docs"))
//!     .await?;
//! client
//!     .add_embeddings("docs", &AddEmbeddingsRequest::new(vec![vec![0.1, 0.2]]))
//!     .await?;
//!
//! let response = client
//!     .query_nearest_neighbors("docs", &QueryEmbeddingsRequest::new(vec![vec![0.1, 0.2]]))
//!     .await?;
//! let results: serde_json::Value = response.json().await?;
//! println!("{results}");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Operations return `Result<reqwest::Response, ChromaHttpClientError>`. An `Err` means the
//! request never produced a response (connection refused, DNS failure, timeout, unserializable
//! payload). Any response the server sends, including `4xx` and `5xx`, is returned as `Ok`.
//! Callers that want a coarse classification of a status can convert it with
//! [`ErrorCodes::from`].
//!
//! ```no_run
//! # use chroma_v1::ChromaHttpClient;
//! # use chroma_v1::client::ChromaHttpClientError;
//! # use chroma_v1::types::ValidationErrorEnvelope;
//! # async fn example(client: ChromaHttpClient) -> Result<(), Box<dyn std::error::Error>> {
//! match client.list_collections().await {
//!     Ok(response) if response.status().as_u16() == 422 => {
//!         let envelope: ValidationErrorEnvelope = response.json().await?;
//!         eprintln!("Rejected: {:?}", envelope.detail);
//!     }
//!     Ok(response) => println!("Status: {}", response.status()),
//!     Err(ChromaHttpClientError::RequestError(e)) => eprintln!("Network error: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `default` - Enables `rustls`
//! - `native-tls` - Use native system TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `rustls` - Use pure-Rust TLS implementation
//! - `opentelemetry` - Record request latency per operation and status code

#![deny(missing_docs)]

pub mod client;
mod collection;
pub mod types;

pub use client::ChromaHttpClient;
pub use client::ChromaHttpClientOptions;
pub use collection::ChromaCollection;

pub use chroma_v1_error::{ChromaError, ErrorCodes};
