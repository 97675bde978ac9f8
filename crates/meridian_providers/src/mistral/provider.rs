//! Mistral [`ModelProvider`] implementation.

use super::client::MistralClient;
use super::types::{GenerateRequest, GenerateResponse, RagConfig, SamplingParams};
use crate::config::EndpointConfig;
use async_trait::async_trait;
use core::time::Duration;
use meridian_models::invocation::{
    InvocationError, InvocationMetadata, InvocationResult, ModelProvider, ResolvedRequest,
    ResultPayload,
};
use serde_json::json;

/// Mistral [`ModelProvider`] implementation.
#[derive(Debug, Clone)]
pub struct MistralProvider {
    client: MistralClient,
}

impl MistralProvider {
    /// Creates a new provider for the configured endpoint.
    #[must_use]
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: MistralClient::new(config),
        }
    }
}

#[async_trait]
impl ModelProvider for MistralProvider {
    async fn invoke(&self, request: ResolvedRequest) -> Result<InvocationResult, InvocationError> {
        tracing::debug!(model = %request.model, "dispatching RAG generation request");

        let wire_request = convert_request(request);
        let response = self.client.generate(&wire_request).await?;

        Ok(convert_response(response))
    }
}

fn convert_request(request: ResolvedRequest) -> GenerateRequest {
    let params = request.params;
    let rag_config = match params.chunking {
        Some(chunking) => RagConfig {
            enabled: true,
            chunk_size: chunking.chunk_size,
            overlap: chunking.overlap,
            similarity_threshold: chunking.similarity_threshold,
        },
        None => RagConfig {
            enabled: false,
            chunk_size: 512,
            overlap: 50,
            similarity_threshold: 0.7,
        },
    };

    GenerateRequest {
        query: request.prompt,
        context: request.context,
        parameters: SamplingParams {
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            top_k: params.top_k,
        },
        rag_config,
    }
}

fn convert_response(response: GenerateResponse) -> InvocationResult {
    let mut extra = serde_json::Map::new();
    if !response.contexts.is_empty() {
        extra.insert("contexts".to_string(), json!(response.contexts));
    }
    if !response.retrieved_documents.is_empty() {
        extra.insert(
            "retrieved_documents".to_string(),
            json!(response.retrieved_documents),
        );
    }

    InvocationResult {
        payload: ResultPayload::Text(response.response),
        metadata: InvocationMetadata {
            processing_time: Duration::from_secs_f64(response.processing_time),
            tokens_used: response.usage.total_tokens,
            extra,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_models::invocation::{ChunkingDefaults, ResolvedParams};

    fn resolved(prompt: &str, context: Vec<String>) -> ResolvedRequest {
        ResolvedRequest {
            model: "mistral".to_string(),
            prompt: prompt.to_string(),
            image: None,
            context,
            params: ResolvedParams {
                temperature: 0.7,
                max_tokens: 2048,
                top_p: 0.95,
                top_k: 50,
                chunking: Some(ChunkingDefaults {
                    chunk_size: 512,
                    overlap: 50,
                    similarity_threshold: 0.7,
                }),
                additional: None,
            },
        }
    }

    #[test]
    fn request_matches_the_wire_contract() {
        let request = convert_request(resolved(
            "What is retrieval-augmented generation?",
            vec!["background doc".to_string()],
        ));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["query"], "What is retrieval-augmented generation?");
        assert_eq!(value["context"][0], "background doc");
        assert_eq!(value["parameters"]["max_tokens"], 2048);
        assert_eq!(value["parameters"]["top_k"], 50);
        assert_eq!(value["rag_config"]["enabled"], true);
        assert_eq!(value["rag_config"]["chunk_size"], 512);
        assert_eq!(value["rag_config"]["overlap"], 50);
        // f32 fields widen lossily on the wire; compare approximately.
        let close = |v: &serde_json::Value, expected: f64| {
            (v.as_f64().unwrap() - expected).abs() < 1e-6
        };
        assert!(close(&value["parameters"]["temperature"], 0.7));
        assert!(close(&value["parameters"]["top_p"], 0.95));
        assert!(close(&value["rag_config"]["similarity_threshold"], 0.7));
    }

    #[test]
    fn retrieval_is_disabled_when_no_chunking_defaults_exist() {
        let mut request = resolved("plain question", Vec::new());
        request.params.chunking = None;

        let wire = convert_request(request);
        assert!(!wire.rag_config.enabled);
    }

    #[test]
    fn response_normalizes_onto_the_canonical_envelope() {
        let body = serde_json::json!({
            "response": "RAG augments generation with retrieved passages.",
            "contexts": ["passage one", "passage two"],
            "retrieved_documents": ["handbook.pdf"],
            "processing_time": 0.42,
            "usage": { "total_tokens": 128 }
        });
        let response: GenerateResponse = serde_json::from_value(body).unwrap();

        let result = convert_response(response);
        assert_eq!(
            result.payload,
            ResultPayload::Text("RAG augments generation with retrieved passages.".to_string())
        );
        assert_eq!(
            result.metadata.processing_time,
            Duration::from_secs_f64(0.42)
        );
        assert_eq!(result.metadata.tokens_used, 128);
        assert_eq!(
            result.metadata.extra["retrieved_documents"],
            serde_json::json!(["handbook.pdf"])
        );
        assert_eq!(result.metadata.extra["contexts"][1], "passage two");
    }

    #[test]
    fn empty_retrieval_fields_are_omitted_from_metadata() {
        let body = serde_json::json!({
            "response": "no retrieval ran",
            "processing_time": 0.1,
            "usage": { "total_tokens": 7 }
        });
        let response: GenerateResponse = serde_json::from_value(body).unwrap();

        let result = convert_response(response);
        assert!(result.metadata.extra.is_empty());
    }
}
