use serde::{Deserialize, Serialize};

/// One step of the path to the offending field, either a key or a list index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationSegment {
    Name(String),
    Index(u64),
}

/// A single field-level validation failure reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub loc: Vec<LocationSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Body of a `422 Unprocessable Entity` response.
///
/// The client never decodes responses itself; callers that inspect a 422 can
/// deserialize its body into this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorEnvelope {
    pub detail: Vec<ValidationError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unprocessable_entity_body() {
        let body = r#"{
            "detail": [
                {"loc": ["body", "embeddings", 0], "msg": "field required", "type": "value_error.missing"}
            ]
        }"#;

        let envelope: ValidationErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.detail.len(), 1);

        let error = &envelope.detail[0];
        assert_eq!(
            error.loc,
            vec![
                LocationSegment::Name("body".to_string()),
                LocationSegment::Name("embeddings".to_string()),
                LocationSegment::Index(0),
            ]
        );
        assert_eq!(error.msg, "field required");
        assert_eq!(error.error_type, "value_error.missing");
    }
}
