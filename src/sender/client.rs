//! HTTP client for a callable cloud function
//!
//! Speaks the callable-function wire format: the arguments are wrapped in a
//! `data` envelope and the function answers with either `result` or `error`.

use super::error::SendError;
use super::traits::EmailSender;
use crate::config::ContactConfig;
use crate::state::ContactPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
struct CallableRequest<'a> {
    data: &'a ContactPayload,
}

#[derive(Debug, Default, Deserialize)]
struct CallableError {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Sends contact messages to a single callable function endpoint
pub struct CallableClient {
    client: Client,
    url: String,
}

impl CallableClient {
    /// Create a client for an explicit function URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Create a client from the resolved configuration
    pub fn from_config(config: &ContactConfig) -> Result<Self, SendError> {
        config
            .function_url()
            .map(Self::new)
            .ok_or(SendError::NotConfigured)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EmailSender for CallableClient {
    async fn send_email(&self, payload: ContactPayload) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.url)
            .json(&CallableRequest { data: &payload })
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Map a callable-function HTTP response onto success or failure
fn interpret_response(status: u16, body: &str) -> Result<(), SendError> {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if let Some(error) = parsed.as_ref().and_then(|v| v.get("error")) {
        let error: CallableError = serde_json::from_value(error.clone()).unwrap_or_default();
        let message = match (error.status, error.message) {
            (Some(code), Some(message)) => format!("{code}: {message}"),
            (Some(code), None) => code,
            (None, Some(message)) => message,
            (None, None) => "unknown error".to_string(),
        };
        return Err(SendError::Rejected { status, message });
    }

    if !(200..300).contains(&status) {
        return Err(SendError::Rejected {
            status,
            message: body.trim().to_string(),
        });
    }

    // `"result": null` is a valid answer, so only the key has to be present
    match parsed {
        Some(Value::Object(map)) if map.contains_key("result") => Ok(()),
        _ => Err(SendError::InvalidResponse(body.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_request_wraps_payload_in_data() {
        let payload = payload();
        let json = serde_json::to_value(CallableRequest { data: &payload }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello"
                }
            })
        );
    }

    #[test]
    fn test_result_object_is_success() {
        assert_eq!(interpret_response(200, r#"{"result": {"ok": true}}"#), Ok(()));
    }

    #[test]
    fn test_null_result_is_success() {
        assert_eq!(interpret_response(200, r#"{"result": null}"#), Ok(()));
    }

    #[test]
    fn test_error_member_is_rejection() {
        let err = interpret_response(
            500,
            r#"{"error": {"status": "INTERNAL", "message": "mail server down"}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SendError::Rejected {
                status: 500,
                message: "INTERNAL: mail server down".to_string(),
            }
        );
    }

    #[test]
    fn test_non_success_status_without_json_is_rejection() {
        let err = interpret_response(404, "Not Found").unwrap_err();
        assert!(matches!(err, SendError::Rejected { status: 404, .. }));
    }

    #[test]
    fn test_success_status_with_garbage_body_is_invalid() {
        let err = interpret_response(200, "<html></html>").unwrap_err();
        assert!(matches!(err, SendError::InvalidResponse(_)));
    }

    #[test]
    fn test_success_status_without_result_is_invalid() {
        let err = interpret_response(200, "{}").unwrap_err();
        assert!(matches!(err, SendError::InvalidResponse(_)));
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let result = CallableClient::from_config(&ContactConfig::default());
        assert!(matches!(result, Err(SendError::NotConfigured)));
    }

    #[test]
    fn test_from_config_uses_project_url() {
        let config = ContactConfig {
            project_id: Some("my-project".to_string()),
            ..Default::default()
        };
        let client = CallableClient::from_config(&config).unwrap();
        assert_eq!(
            client.url(),
            "https://us-central1-my-project.cloudfunctions.net/sendEmail"
        );
    }
}
