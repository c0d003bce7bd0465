use bon::Builder;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/raw_sql`.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSqlRequest {
    /// SQL statement executed verbatim by the server.
    #[builder(into)]
    pub raw_sql: String,
}

impl RawSqlRequest {
    /// Wraps a single SQL statement.
    pub fn new(raw_sql: impl Into<String>) -> Self {
        Self {
            raw_sql: raw_sql.into(),
        }
    }
}
