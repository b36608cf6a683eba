// src/handler.rs

//! AWS Lambda handler for the blog generator.

use std::sync::Arc;

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::inference::BlogGenerator;
use crate::models::{ApiGatewayEvent, BlogRequest, GenerationOutcome, HandlerResponse};
use crate::storage::{BlogStorage, blog_key};

/// Response message when a post was generated and the store was attempted.
pub const MSG_COMPLETED: &str = "Blog Generation is completed";

/// Response message when inference failed or produced nothing.
pub const MSG_NO_BLOG: &str = "No blog was generated";

/// Request handler with injected generation and storage backends.
///
/// Clients are constructed once per container lifecycle and shared across
/// invocations; the handler itself holds no mutable state.
pub struct Handler {
    generator: Arc<dyn BlogGenerator>,
    storage: Arc<dyn BlogStorage>,
    config: Arc<AppConfig>,
}

impl Handler {
    pub fn new(
        generator: Arc<dyn BlogGenerator>,
        storage: Arc<dyn BlogStorage>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            generator,
            storage,
            config,
        }
    }

    /// Handle one invocation.
    ///
    /// A malformed envelope fails the invocation. Inference failure and
    /// storage failure do not: both branches answer 200, and a storage
    /// error is only visible in the logs.
    #[instrument(skip(self, event))]
    pub async fn handle(
        &self,
        event: LambdaEvent<ApiGatewayEvent>,
    ) -> Result<HandlerResponse, LambdaError> {
        let (envelope, _context) = event.into_parts();
        let request = BlogRequest::from_envelope(&envelope)?;

        info!("Generating blog for topic: {}", request.blog_topic);

        match self.generator.generate(&request.blog_topic).await {
            GenerationOutcome::Generated(text) => {
                let key = blog_key(&self.config.key_prefix);
                if let Err(e) = self.storage.put_blog(&key, &text).await {
                    error!("Error when saving the blog to s3: {}", e);
                }
                Ok(HandlerResponse::ok(MSG_COMPLETED))
            }
            GenerationOutcome::Failed(reason) => {
                info!("No blog was generated: {}", reason);
                Ok(HandlerResponse::ok(MSG_NO_BLOG))
            }
        }
    }
}
