use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::Metadata;

/// Body of `POST /api/v1/collections`.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    #[builder(into)]
    pub name: String,
    /// Metadata stored on the collection. Omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<Metadata>,
    /// Return the existing collection instead of failing when `name` is taken.
    #[builder(default)]
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub get_or_create: bool,
}

impl CreateCollectionRequest {
    /// Collection `name` with no metadata and `get_or_create` off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
            get_or_create: false,
        }
    }
}

/// Body of `PUT /api/v1/collections/{name}`.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCollectionRequest {
    /// Rename target. Omitted when `None`.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub new_name: Option<String>,
    /// Replacement metadata. Omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub new_metadata: Option<Metadata>,
}

impl UpdateCollectionRequest {
    /// An update that changes nothing; serializes to `{}`.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_collection_with_only_name() {
        let request = CreateCollectionRequest::new("docs");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"name": "docs"})
        );
    }

    #[test]
    fn test_create_collection_builder() {
        let mut metadata = Metadata::new();
        metadata.insert("hnsw:space".to_string(), "cosine".into());

        let request = CreateCollectionRequest::builder()
            .name("docs")
            .metadata(metadata)
            .get_or_create(true)
            .build();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "name": "docs",
                "metadata": {"hnsw:space": "cosine"},
                "get_or_create": true,
            })
        );
    }

    #[test]
    fn test_update_collection_omits_unset_fields() {
        assert_eq!(
            serde_json::to_string(&UpdateCollectionRequest::new()).unwrap(),
            "{}"
        );

        let request = UpdateCollectionRequest::builder()
            .new_name("renamed")
            .build();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"new_name":"renamed"}"#
        );
    }
}
