//! Client configuration and request dispatch for the Chroma v1 API.
//!
//! This module contains:
//! - [`ChromaHttpClient`] - The client handle, one method per `/api/v1` endpoint
//! - [`ChromaHttpClientOptions`] - Endpoint and transport configuration
//! - [`ChromaHttpClientError`] - Transport and request construction failures
//!
//! When the `opentelemetry` feature is enabled, request latency is recorded
//! through internal instrumentation.

mod chroma_http_client;
#[cfg(feature = "opentelemetry")]
mod metrics;
mod options;

pub use chroma_http_client::*;
pub use options::*;
