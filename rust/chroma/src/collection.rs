//! Collection-scoped access to the v1 API.
//!
//! [`ChromaCollection`] binds a collection name to a [`ChromaHttpClient`] so
//! callers working with a single collection do not have to pass the name to
//! every call. It adds nothing else: each method forwards to the client and
//! returns the raw response.

use crate::{
    client::ChromaHttpClientError,
    types::{
        AddEmbeddingsRequest, DeleteEmbeddingsRequest, GetEmbeddingsRequest,
        QueryEmbeddingsRequest, UpdateCollectionRequest, UpdateEmbeddingsRequest,
    },
    ChromaHttpClient,
};

/// A handle to one collection on a Chroma server.
///
/// Obtained through [`ChromaHttpClient::collection`]. Holding a handle does not
/// imply the collection exists; the server answers that on the first request.
///
/// # Examples
///
/// ```no_run
/// # use chroma_v1::ChromaHttpClient;
/// # use chroma_v1::types::{AddEmbeddingsRequest, QueryEmbeddingsRequest};
/// # async fn example(client: ChromaHttpClient) -> Result<(), Box<dyn std::error::Error>> {
/// let collection = client.collection("docs");
///
/// collection
///     .add(&AddEmbeddingsRequest::new(vec![vec![0.1, 0.2, 0.3]]))
///     .await?;
///
/// let response = collection
///     .query(&QueryEmbeddingsRequest::new(vec![vec![0.1, 0.2, 0.3]]))
///     .await?;
/// println!("query returned {}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ChromaCollection {
    client: ChromaHttpClient,
    name: String,
}

impl ChromaCollection {
    pub(crate) fn new(client: ChromaHttpClient, name: String) -> Self {
        ChromaCollection { client, name }
    }

    /// Returns the collection name used in request paths.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client this handle sends requests through.
    pub fn client(&self) -> &ChromaHttpClient {
        &self.client
    }

    /// Adds records. See [`ChromaHttpClient::add_embeddings`].
    pub async fn add(
        &self,
        request: &AddEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.add_embeddings(&self.name, request).await
    }

    /// Updates records. See [`ChromaHttpClient::update_embeddings`].
    pub async fn update(
        &self,
        request: &UpdateEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.update_embeddings(&self.name, request).await
    }

    /// Fetches records by id or filter. See [`ChromaHttpClient::get_embeddings`].
    pub async fn get(
        &self,
        request: &GetEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.get_embeddings(&self.name, request).await
    }

    /// Deletes records. See [`ChromaHttpClient::delete_embeddings`].
    pub async fn delete(
        &self,
        request: &DeleteEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.delete_embeddings(&self.name, request).await
    }

    /// Counts records. See [`ChromaHttpClient::count_embeddings`].
    pub async fn count(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.count_embeddings(&self.name).await
    }

    /// Nearest-neighbor search. See [`ChromaHttpClient::query_nearest_neighbors`].
    pub async fn query(
        &self,
        request: &QueryEmbeddingsRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.query_nearest_neighbors(&self.name, request).await
    }

    /// See [`ChromaHttpClient::create_index`].
    pub async fn create_index(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.create_index(&self.name).await
    }

    /// Fetches the collection itself. See [`ChromaHttpClient::get_collection`].
    pub async fn fetch(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.get_collection(&self.name).await
    }

    /// Renames the collection or replaces its metadata.
    ///
    /// The handle keeps its current name; after a successful rename obtain a
    /// new handle with [`ChromaHttpClient::collection`].
    pub async fn modify(
        &self,
        request: &UpdateCollectionRequest,
    ) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.update_collection(&self.name, request).await
    }

    /// Deletes the collection and all of its records. See [`ChromaHttpClient::delete_collection`].
    pub async fn drop_collection(&self) -> Result<reqwest::Response, ChromaHttpClientError> {
        self.client.delete_collection(&self.name).await
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{
        AddEmbeddingsRequest, DeleteEmbeddingsRequest, GetEmbeddingsRequest,
        QueryEmbeddingsRequest, UpdateCollectionRequest, UpdateEmbeddingsRequest,
    };
    use crate::ChromaHttpClient;
    use httpmock::MockServer;
    use serde_json::json;

    #[test]
    fn test_handle_keeps_name() {
        let client = ChromaHttpClient::default();
        let collection = client.collection("docs");
        assert_eq!(collection.name(), "docs");
        assert_eq!(collection.client().endpoint().as_str(), "http://localhost:8000/");
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_handle_routes_to_its_collection() {
        let server = MockServer::start_async().await;

        let mut mocks = Vec::new();
        for (method, path) in [
            ("POST", "/api/v1/collections/notes/add"),
            ("POST", "/api/v1/collections/notes/update"),
            ("POST", "/api/v1/collections/notes/get"),
            ("POST", "/api/v1/collections/notes/delete"),
            ("GET", "/api/v1/collections/notes/count"),
            ("POST", "/api/v1/collections/notes/query"),
            ("POST", "/api/v1/collections/notes/create_index"),
            ("GET", "/api/v1/collections/notes"),
            ("PUT", "/api/v1/collections/notes"),
            ("DELETE", "/api/v1/collections/notes"),
        ] {
            mocks.push(
                server
                    .mock_async(|when, then| {
                        when.method(method).path(path);
                        then.status(200);
                    })
                    .await,
            );
        }

        let client = ChromaHttpClient::from_base_url(server.base_url()).unwrap();
        let collection = client.collection("notes");

        collection
            .add(&AddEmbeddingsRequest::new(vec![vec![1.0]]))
            .await
            .unwrap();
        collection
            .update(&UpdateEmbeddingsRequest::new(vec![vec![1.0]]))
            .await
            .unwrap();
        collection.get(&GetEmbeddingsRequest::new()).await.unwrap();
        collection
            .delete(&DeleteEmbeddingsRequest::new())
            .await
            .unwrap();
        collection.count().await.unwrap();
        collection
            .query(&QueryEmbeddingsRequest::new(vec![vec![1.0]]))
            .await
            .unwrap();
        collection.create_index().await.unwrap();
        collection.fetch().await.unwrap();
        collection
            .modify(&UpdateCollectionRequest::new())
            .await
            .unwrap();
        collection.drop_collection().await.unwrap();

        for mock in mocks {
            assert_eq!(mock.calls(), 1);
        }
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_modify_sends_new_metadata() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/api/v1/collections/notes")
                    .json_body(json!({"new_metadata": {"owner": "search-team"}}));
                then.status(200);
            })
            .await;

        let mut metadata = crate::types::Metadata::new();
        metadata.insert("owner".to_string(), "search-team".into());

        let client = ChromaHttpClient::from_base_url(server.base_url()).unwrap();
        client
            .collection("notes")
            .modify(
                &UpdateCollectionRequest::builder()
                    .new_metadata(metadata)
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(mock.calls(), 1);
    }
}
