use serde::{Deserialize, Serialize};

/// Optional result components the server should return from `get` and `query`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Include {
    #[serde(rename = "distances")]
    Distance,
    #[serde(rename = "documents")]
    Document,
    #[serde(rename = "embeddings")]
    Embedding,
    #[serde(rename = "metadatas")]
    Metadata,
}

impl Include {
    /// `["metadatas", "documents"]`
    pub fn default_get() -> Vec<Include> {
        vec![Include::Metadata, Include::Document]
    }

    /// `["metadatas", "documents", "distances"]`
    pub fn default_query() -> Vec<Include> {
        vec![Include::Metadata, Include::Document, Include::Distance]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_wire_names() {
        let json = serde_json::to_value(vec![
            Include::Distance,
            Include::Document,
            Include::Embedding,
            Include::Metadata,
        ])
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!(["distances", "documents", "embeddings", "metadatas"])
        );
    }
}
