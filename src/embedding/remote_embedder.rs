//! Remote HTTP API-based embedder.
//!
//! Calls an OpenAI-style embeddings endpoint (`{model, input}` in,
//! `{data: [{embedding}]}` out) and returns the vector verbatim. Network,
//! authentication, and response-shape failures surface as errors to the
//! caller; the decision to fall back is the caller's, not this module's.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::embedding::TextEmbedder;
use crate::error::{PatlexError, Result};
use crate::vector::Vector;

/// Request structure for the embeddings API.
#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    /// Model identifier to use for embeddings.
    model: String,
    /// Input texts to embed.
    input: Vec<String>,
}

/// Response structure from the embeddings API.
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    /// List of embedding data objects.
    data: Vec<EmbeddingData>,
}

/// Individual embedding data from the API response.
#[derive(Debug, Deserialize)]
struct EmbeddingData {
    /// The embedding vector.
    embedding: Vec<f32>,
}

/// Remote API-based embedder.
///
/// Requires an API key and network reachability. The underlying
/// `reqwest::Client` is cheap to clone and safe to share across concurrent
/// requests; this struct holds no per-request state.
pub struct RemoteEmbedder {
    /// HTTP client for making API requests.
    client: Client,
    /// Embeddings endpoint URL.
    api_url: String,
    /// API key for bearer authentication.
    api_key: String,
    /// Model name sent with each request.
    model: String,
}

impl RemoteEmbedder {
    /// Create a new remote embedder.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(PatlexError::invalid_config(
                "remote embedder requires an API key",
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_url,
            api_key,
            model,
        })
    }

    /// The model this embedder requests.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextEmbedder for RemoteEmbedder {
    async fn embed(&self, text: &str) -> Result<Vector> {
        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: vec![text.to_string()],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PatlexError::embedding(format!(
                "embedding API returned {status}: {body}"
            )));
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|data| Vector::new(data.embedding))
            .ok_or_else(|| PatlexError::embedding("embedding API returned no vectors"))?;

        if vector.data.is_empty() || !vector.is_valid() {
            return Err(PatlexError::embedding(
                "embedding API returned an empty or non-finite vector",
            ));
        }

        Ok(vector)
    }

    fn dimension(&self) -> usize {
        // The remote provider owns the dimensionality; vectors are returned
        // verbatim and compared only against other vectors from the same
        // provider.
        0
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let result = RemoteEmbedder::new(
            "https://api.example.com/v1/embeddings".to_string(),
            "  ".to_string(),
            "test-model".to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_request_serialization() {
        let request = EmbeddingRequest {
            model: "text-embedding-3-small".to_string(),
            input: vec!["wireless charging".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "text-embedding-3-small");
        assert_eq!(json["input"][0], "wireless charging");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"data": [{"embedding": [0.1, 0.2, 0.3]}]}"#;
        let response: EmbeddingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].embedding, vec![0.1, 0.2, 0.3]);
    }
}
