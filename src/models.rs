// src/models.rs

//! Request and response types for the Lambda trigger boundary.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Envelope delivered by the HTTP front end (API Gateway proxy format).
///
/// The actual payload arrives as a JSON string inside `body`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGatewayEvent {
    /// JSON-encoded request payload
    pub body: String,
}

/// Decoded request payload: the topic to write about.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogRequest {
    pub blog_topic: String,
}

impl BlogRequest {
    /// Decode the request from the envelope body.
    ///
    /// Fails on malformed JSON, a missing `blog_topic` field, or an
    /// empty topic. These errors propagate out of the handler and fail
    /// the whole invocation.
    pub fn from_envelope(event: &ApiGatewayEvent) -> Result<Self> {
        let request: BlogRequest = serde_json::from_str(&event.body)?;
        if request.blog_topic.trim().is_empty() {
            return Err(AppError::request("blog_topic is empty"));
        }
        Ok(request)
    }
}

/// Response returned to the HTTP front end.
///
/// `body` holds a JSON-encoded message string, matching the proxy
/// integration contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// Build a 200 response with a JSON-encoded message body.
    ///
    /// Functional failures ("no blog was generated") also report 200 so
    /// the front end does not trip its error handling on them.
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            // String serialization cannot fail
            body: serde_json::to_string(message).unwrap_or_default(),
        }
    }
}

/// Outcome of a single inference attempt.
///
/// Replaces an empty-string sentinel with an explicit tag so callers can
/// tell a failed call apart from an empty completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The model produced non-empty text.
    Generated(String),
    /// The call failed or produced nothing; the reason is for logs only.
    Failed(String),
}

impl GenerationOutcome {
    /// Wrap model output, mapping empty or whitespace-only text to `Failed`.
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            Self::Failed("model returned empty text".to_string())
        } else {
            Self::Generated(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_envelope() {
        let event = ApiGatewayEvent {
            body: r#"{"blog_topic": "rust lambdas"}"#.to_string(),
        };
        let request = BlogRequest::from_envelope(&event).unwrap();
        assert_eq!(request.blog_topic, "rust lambdas");
    }

    #[test]
    fn test_decode_rejects_missing_topic() {
        let event = ApiGatewayEvent {
            body: r#"{"title": "rust lambdas"}"#.to_string(),
        };
        assert!(BlogRequest::from_envelope(&event).is_err());
    }

    #[test]
    fn test_decode_rejects_empty_topic() {
        let event = ApiGatewayEvent {
            body: r#"{"blog_topic": "  "}"#.to_string(),
        };
        assert!(matches!(
            BlogRequest::from_envelope(&event),
            Err(AppError::Request(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_json_body() {
        let event = ApiGatewayEvent {
            body: "not json".to_string(),
        };
        assert!(matches!(
            BlogRequest::from_envelope(&event),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn test_response_body_is_json_encoded() {
        let response = HandlerResponse::ok("Blog Generation is completed");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"Blog Generation is completed\"");
    }

    #[test]
    fn test_response_serializes_status_code_field() {
        let response = HandlerResponse::ok("No blog was generated");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], "\"No blog was generated\"");
    }

    #[test]
    fn test_outcome_maps_empty_text_to_failed() {
        assert!(matches!(
            GenerationOutcome::from_text(String::new()),
            GenerationOutcome::Failed(_)
        ));
        assert!(matches!(
            GenerationOutcome::from_text("   \n".to_string()),
            GenerationOutcome::Failed(_)
        ));
        assert_eq!(
            GenerationOutcome::from_text("text".to_string()),
            GenerationOutcome::Generated("text".to_string())
        );
    }
}
