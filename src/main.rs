// src/main.rs

//! AWS Lambda entry point for the blog generator.
//!
//! Deploy with `cargo lambda build --release`.
//!
//! ## Environment Variables
//!
//! - `S3_BUCKET`: Destination bucket (default: `aws-bedrock-demo-course`)
//! - `S3_PREFIX`: Object key prefix (default: `blog-output`)
//! - `BEDROCK_MODEL_ID`: Model identifier (default: `meta.llama3-8b-instruct-v1:0`)
//! - `BEDROCK_REGION`: Bedrock endpoint region (default: `us-east-1`)
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use std::sync::Arc;
use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use lambda_runtime::service_fn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_lambda::config::AppConfig;
use blog_lambda::handler::Handler;
use blog_lambda::inference::BedrockGenerator;
use blog_lambda::storage::S3Storage;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing for Lambda
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Blog generator Lambda starting...");

    let config = AppConfig::from_env();
    config.validate()?;

    // Clients are built once at cold start and shared across invocations.
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .timeout_config(
            TimeoutConfig::builder()
                .read_timeout(Duration::from_secs(config.read_timeout_secs))
                .build(),
        )
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_retry_attempts))
        .load()
        .await;

    let generator = Arc::new(BedrockGenerator::from_config(&sdk_config, config.clone()));
    let storage = Arc::new(S3Storage::from_config(&sdk_config, config.bucket.clone()));
    let handler = Arc::new(Handler::new(generator, storage, Arc::new(config)));

    // Run Lambda handler
    lambda_runtime::run(service_fn(move |event| {
        let handler = handler.clone();
        async move { handler.handle(event).await }
    }))
    .await
}
