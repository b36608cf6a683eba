// src/config.rs

//! Application configuration.
//!
//! Lifts the bucket name, model identifier, and sampling parameters into
//! one structure built at cold start, with environment overrides for the
//! Lambda deployment.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Destination S3 bucket for generated posts
    #[serde(default = "defaults::bucket")]
    pub bucket: String,

    /// Key prefix inside the bucket
    #[serde(default = "defaults::key_prefix")]
    pub key_prefix: String,

    /// Bedrock model identifier
    #[serde(default = "defaults::model_id")]
    pub model_id: String,

    /// AWS region for the Bedrock endpoint
    #[serde(default = "defaults::region")]
    pub region: String,

    /// Text generation sampling parameters
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Read timeout for the inference call, in seconds
    #[serde(default = "defaults::read_timeout")]
    pub read_timeout_secs: u64,

    /// Transport-level retry attempts for the inference call
    #[serde(default = "defaults::retry_attempts")]
    pub max_retry_attempts: u32,
}

/// Sampling parameters sent with every inference request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    #[serde(default = "defaults::max_gen_len")]
    pub max_gen_len: u32,

    /// Randomness of the output; lower is more deterministic
    #[serde(default = "defaults::temperature")]
    pub temperature: f64,

    /// Nucleus sampling threshold
    #[serde(default = "defaults::top_p")]
    pub top_p: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_gen_len: defaults::max_gen_len(),
            temperature: defaults::temperature(),
            top_p: defaults::top_p(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bucket: defaults::bucket(),
            key_prefix: defaults::key_prefix(),
            model_id: defaults::model_id(),
            region: defaults::region(),
            generation: GenerationConfig::default(),
            read_timeout_secs: defaults::read_timeout(),
            max_retry_attempts: defaults::retry_attempts(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bucket) = std::env::var("S3_BUCKET") {
            config.bucket = bucket;
        }
        if let Ok(prefix) = std::env::var("S3_PREFIX") {
            config.key_prefix = prefix.trim_matches('/').to_string();
        }
        if let Ok(model_id) = std::env::var("BEDROCK_MODEL_ID") {
            config.model_id = model_id;
        }
        if let Ok(region) = std::env::var("BEDROCK_REGION") {
            config.region = region;
        }

        config
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.trim().is_empty() {
            return Err(AppError::config("bucket is empty"));
        }
        if self.model_id.trim().is_empty() {
            return Err(AppError::config("model_id is empty"));
        }
        if self.generation.max_gen_len == 0 {
            return Err(AppError::config("generation.max_gen_len must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.generation.temperature) {
            return Err(AppError::config(
                "generation.temperature must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.generation.top_p) {
            return Err(AppError::config("generation.top_p must be within [0, 1]"));
        }
        if self.read_timeout_secs == 0 {
            return Err(AppError::config("read_timeout_secs must be > 0"));
        }
        if self.max_retry_attempts == 0 {
            return Err(AppError::config("max_retry_attempts must be > 0"));
        }
        Ok(())
    }
}

mod defaults {
    pub fn bucket() -> String {
        "aws-bedrock-demo-course".to_string()
    }

    pub fn key_prefix() -> String {
        "blog-output".to_string()
    }

    pub fn model_id() -> String {
        "meta.llama3-8b-instruct-v1:0".to_string()
    }

    pub fn region() -> String {
        "us-east-1".to_string()
    }

    pub fn max_gen_len() -> u32 {
        512
    }

    pub fn temperature() -> f64 {
        0.5
    }

    pub fn top_p() -> f64 {
        0.9
    }

    pub fn read_timeout() -> u64 {
        300
    }

    pub fn retry_attempts() -> u32 {
        3
    }
}
