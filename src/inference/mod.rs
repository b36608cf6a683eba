// src/inference/mod.rs

//! Text generation abstraction and the Llama 3 wire format.

pub mod bedrock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::models::GenerationOutcome;

// Re-export for convenience
pub use bedrock::BedrockGenerator;

/// Trait for blog text generation backends.
#[async_trait]
pub trait BlogGenerator: Send + Sync {
    /// Generate blog text for `topic`.
    ///
    /// Never fails the invocation: transport and decoding errors are
    /// reported as [`GenerationOutcome::Failed`].
    async fn generate(&self, topic: &str) -> GenerationOutcome;
}

/// Request body for a Llama model invocation.
#[derive(Debug, Serialize)]
pub struct InferenceRequest {
    pub prompt: String,
    pub max_gen_len: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl InferenceRequest {
    pub fn new(prompt: String, generation: &GenerationConfig) -> Self {
        Self {
            prompt,
            max_gen_len: generation.max_gen_len,
            temperature: generation.temperature,
            top_p: generation.top_p,
        }
    }
}

/// Response body of a Llama model invocation.
///
/// Token counts and the finish reason are not retained.
#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    pub generation: String,
}

/// Build the instruction-formatted prompt for `topic`.
///
/// Embeds the request in Llama 3's chat template so the model answers as
/// the assistant turn.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\
         Human: Write a 200 words blog on the topic {topic}\n\
         <|eot_id|>\n\
         <|start_header_id|>assistant<|end_header_id|>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_topic_and_chat_markers() {
        let prompt = build_prompt("serverless rust");
        assert!(prompt.contains("Write a 200 words blog on the topic serverless rust"));
        assert!(prompt.starts_with("<|begin_of_text|>"));
        assert!(prompt.contains("<|eot_id|>"));
        assert!(prompt.ends_with("<|start_header_id|>assistant<|end_header_id|>\n"));
    }

    #[test]
    fn test_request_body_carries_sampling_parameters() {
        let generation = GenerationConfig::default();
        let request = InferenceRequest::new(build_prompt("topic"), &generation);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_gen_len"], 512);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["top_p"], 0.9);
        assert!(json["prompt"].as_str().unwrap().contains("topic"));
    }

    #[test]
    fn test_response_decodes_generation_field() {
        let json = r#"{"generation": "A blog.", "prompt_token_count": 25, "stop_reason": "stop"}"#;
        let response: InferenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.generation, "A blog.");
    }

    #[test]
    fn test_response_rejects_missing_generation_field() {
        let json = r#"{"output": "A blog."}"#;
        assert!(serde_json::from_str::<InferenceResponse>(json).is_err());
    }
}
