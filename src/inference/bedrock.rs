// src/inference/bedrock.rs

//! Amazon Bedrock inference client.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::inference::{BlogGenerator, InferenceRequest, InferenceResponse, build_prompt};
use crate::models::GenerationOutcome;

/// Bedrock-backed blog generator.
///
/// Read timeout and retry attempts come from the shared SDK
/// configuration; this client does not run its own retry loop.
pub struct BedrockGenerator {
    client: Client,
    config: AppConfig,
}

impl BedrockGenerator {
    /// Create a new Bedrock generator.
    pub fn new(client: Client, config: AppConfig) -> Self {
        Self { client, config }
    }

    /// Create a Bedrock generator from a shared SDK configuration.
    pub fn from_config(sdk_config: &aws_config::SdkConfig, config: AppConfig) -> Self {
        Self::new(Client::new(sdk_config), config)
    }

    async fn invoke(&self, topic: &str) -> Result<String> {
        let request = InferenceRequest::new(build_prompt(topic), &self.config.generation);
        let body = serde_json::to_vec(&request)?;

        let output = self
            .client
            .invoke_model()
            .model_id(&self.config.model_id)
            .content_type("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| AppError::inference(e.to_string()))?;

        let response: InferenceResponse = serde_json::from_slice(output.body().as_ref())?;
        Ok(response.generation)
    }
}

#[async_trait]
impl BlogGenerator for BedrockGenerator {
    async fn generate(&self, topic: &str) -> GenerationOutcome {
        match self.invoke(topic).await {
            Ok(text) => {
                info!(model_id = %self.config.model_id, "Generation succeeded");
                GenerationOutcome::from_text(text)
            }
            Err(e) => {
                error!(model_id = %self.config.model_id, "Error generating the blog: {}", e);
                GenerationOutcome::Failed(e.to_string())
            }
        }
    }
}
