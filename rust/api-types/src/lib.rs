//! Wire shapes of the Chroma `/api/v1` REST API.
//!
//! Request payloads mirror the server's schema: optional keys are omitted
//! from the JSON rather than sent as `null`, and defaults are filled in when a
//! payload is constructed.

mod collection;
mod embeddings;
mod error;
mod include;
mod raw_sql;

pub use collection::*;
pub use embeddings::*;
pub use error::*;
pub use include::*;
pub use raw_sql::*;

/// Caller-defined key/value metadata attached to a collection or a record.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Server-interpreted filter predicate used by `where` and `where_document`.
pub type Where = serde_json::Value;
