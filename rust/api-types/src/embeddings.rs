use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{Include, Metadata, Where};

fn default_increment_index() -> bool {
    true
}

/// Body of `POST /api/v1/collections/{name}/add`.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddEmbeddingsRequest {
    /// One vector per record.
    pub embeddings: Vec<Vec<f32>>,
    /// Per-record metadata, parallel to `embeddings`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadatas: Option<Vec<Metadata>>,
    /// Per-record document text, parallel to `embeddings`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub documents: Option<Vec<String>>,
    /// Per-record ids, parallel to `embeddings`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ids: Option<Vec<String>>,
    /// Whether the server updates the vector index as part of the write.
    #[builder(default = true)]
    #[serde(default = "default_increment_index")]
    pub increment_index: bool,
}

impl AddEmbeddingsRequest {
    /// Records with only `embeddings` set and `increment_index: true`.
    pub fn new(embeddings: Vec<Vec<f32>>) -> Self {
        Self {
            embeddings,
            metadatas: None,
            documents: None,
            ids: None,
            increment_index: true,
        }
    }
}

/// Body of `POST /api/v1/collections/{name}/update`.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmbeddingsRequest {
    /// One vector per record.
    pub embeddings: Vec<Vec<f32>>,
    /// Per-record metadata, parallel to `embeddings`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadatas: Option<Vec<Metadata>>,
    /// Per-record document text, parallel to `embeddings`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub documents: Option<Vec<String>>,
    /// Per-record ids, parallel to `embeddings`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ids: Option<Vec<String>>,
    /// Whether the server updates the vector index as part of the write.
    #[builder(default = true)]
    #[serde(default = "default_increment_index")]
    pub increment_index: bool,
}

impl UpdateEmbeddingsRequest {
    /// Records with only `embeddings` set and `increment_index: true`.
    pub fn new(embeddings: Vec<Vec<f32>>) -> Self {
        Self {
            embeddings,
            metadatas: None,
            documents: None,
            ids: None,
            increment_index: true,
        }
    }
}

/// Body of `POST /api/v1/collections/{name}/delete`.
///
/// With every filter unset the server deletes all records of the collection.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteEmbeddingsRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ids: Option<Vec<String>>,
    /// Metadata filter, sent as `where`.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none", default)]
    pub where_clause: Option<Where>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub where_document: Option<Where>,
}

impl DeleteEmbeddingsRequest {
    /// No filters; serializes to `{}`.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Body of `POST /api/v1/collections/{name}/get`.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetEmbeddingsRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ids: Option<Vec<String>>,
    /// Metadata filter, sent as `where`.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none", default)]
    pub where_clause: Option<Where>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub where_document: Option<Where>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sort: Option<String>,
    /// Page size. Omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub offset: Option<u32>,
    #[builder(default = Include::default_get())]
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Include::default_get")]
    pub include: Vec<Include>,
}

impl GetEmbeddingsRequest {
    /// No filters or paging, `include: ["metadatas", "documents"]`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for GetEmbeddingsRequest {
    fn default() -> Self {
        Self {
            ids: None,
            where_clause: None,
            where_document: None,
            sort: None,
            limit: None,
            offset: None,
            include: Include::default_get(),
        }
    }
}

/// Body of `POST /api/v1/collections/{name}/query`.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryEmbeddingsRequest {
    /// Metadata filter, sent as `where`.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none", default)]
    pub where_clause: Option<Where>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub where_document: Option<Where>,
    /// One vector per query; results come back per query.
    pub query_embeddings: Vec<Vec<f32>>,
    /// Nearest neighbors to return per query embedding.
    #[builder(default = 10)]
    #[serde(default = "default_n_results")]
    pub n_results: u32,
    #[builder(default = Include::default_query())]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        default = "Include::default_query"
    )]
    pub include: Vec<Include>,
}

fn default_n_results() -> u32 {
    10
}

impl QueryEmbeddingsRequest {
    /// `n_results: 10`, `include: ["metadatas", "documents", "distances"]`, no filters.
    pub fn new(query_embeddings: Vec<Vec<f32>>) -> Self {
        Self {
            where_clause: None,
            where_document: None,
            query_embeddings,
            n_results: default_n_results(),
            include: Include::default_query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_defaults_increment_index() {
        let request = AddEmbeddingsRequest::new(vec![vec![0.1, 0.2]]);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"embeddings":[[0.1,0.2]],"increment_index":true}"#
        );
    }

    #[test]
    fn test_update_defaults_increment_index() {
        let request = UpdateEmbeddingsRequest::new(vec![vec![1.0]]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"embeddings": [[1.0]], "increment_index": true})
        );
    }

    #[test]
    fn test_add_builder_matches_constructor() {
        let built = AddEmbeddingsRequest::builder()
            .embeddings(vec![vec![0.5]])
            .build();
        assert_eq!(built, AddEmbeddingsRequest::new(vec![vec![0.5]]));
    }

    #[test]
    fn test_add_with_all_fields() {
        let mut metadata = Metadata::new();
        metadata.insert("source".to_string(), "notion".into());
        metadata.insert("page".to_string(), 3.into());

        let request = AddEmbeddingsRequest::builder()
            .embeddings(vec![vec![1.5, 2.5]])
            .metadatas(vec![metadata])
            .documents(vec!["hello".to_string()])
            .ids(vec!["id1".to_string()])
            .increment_index(false)
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "embeddings": [[1.5, 2.5]],
                "metadatas": [{"source": "notion", "page": 3}],
                "documents": ["hello"],
                "ids": ["id1"],
                "increment_index": false,
            })
        );
    }

    #[test]
    fn test_delete_omits_unset_filters() {
        assert_eq!(
            serde_json::to_string(&DeleteEmbeddingsRequest::new()).unwrap(),
            "{}"
        );

        let request = DeleteEmbeddingsRequest::builder()
            .where_clause(json!({"color": "red"}))
            .build();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"where": {"color": "red"}})
        );
    }

    #[test]
    fn test_get_defaults_include() {
        assert_eq!(
            serde_json::to_value(GetEmbeddingsRequest::new()).unwrap(),
            json!({"include": ["metadatas", "documents"]})
        );
        assert_eq!(
            GetEmbeddingsRequest::builder().build(),
            GetEmbeddingsRequest::new()
        );
    }

    #[test]
    fn test_get_with_filters_and_paging() {
        let request = GetEmbeddingsRequest::builder()
            .ids(vec!["a".to_string(), "b".to_string()])
            .where_document(json!({"$contains": "rust"}))
            .sort("id")
            .limit(5)
            .offset(10)
            .include(vec![Include::Embedding])
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "ids": ["a", "b"],
                "where_document": {"$contains": "rust"},
                "sort": "id",
                "limit": 5,
                "offset": 10,
                "include": ["embeddings"],
            })
        );
    }

    #[test]
    fn test_empty_include_is_omitted() {
        let request = GetEmbeddingsRequest::builder().include(vec![]).build();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
    }

    #[test]
    fn test_query_defaults() {
        let request = QueryEmbeddingsRequest::new(vec![vec![0.25, 0.75]]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query_embeddings": [[0.25, 0.75]],
                "n_results": 10,
                "include": ["metadatas", "documents", "distances"],
            })
        );
    }

    #[test]
    fn test_query_builder_overrides() {
        let request = QueryEmbeddingsRequest::builder()
            .query_embeddings(vec![vec![1.0]])
            .n_results(3)
            .where_clause(json!({"year": {"$gte": 2020}}))
            .build();

        assert_eq!(request.include, Include::default_query());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "where": {"year": {"$gte": 2020}},
                "query_embeddings": [[1.0]],
                "n_results": 3,
                "include": ["metadatas", "documents", "distances"],
            })
        );
    }

    #[test]
    fn test_missing_defaults_filled_on_decode() {
        let request: QueryEmbeddingsRequest =
            serde_json::from_value(json!({"query_embeddings": [[1.0]]})).unwrap();
        assert_eq!(request, QueryEmbeddingsRequest::new(vec![vec![1.0]]));

        let request: AddEmbeddingsRequest =
            serde_json::from_value(json!({"embeddings": [[1.0]]})).unwrap();
        assert!(request.increment_index);
    }
}
