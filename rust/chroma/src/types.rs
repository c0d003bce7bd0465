//! Request and response shapes of the v1 API, re-exported from `chroma-v1-api-types`.

pub use chroma_v1_api_types::*;
