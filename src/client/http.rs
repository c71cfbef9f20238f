//! Talking to the translation endpoint
//!
//! [`TranslateClient`] is the seam between the page controller and the
//! network; [`HttpTranslateClient`] posts the multipart form to
//! `POST /api/translate` with reqwest.

use crate::client::file::SelectedFile;
use crate::mt::Direction;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Message shown when the server could not be reached at all
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to translate the document.";
/// Message shown when the server sent a JSON error without text
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred during translation.";

/// One outbound translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub file: SelectedFile,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-success status
    Server { status: u16, message: String },
    /// The request never produced a response
    Network(String),
}

impl ClientError {
    /// Build the error for a non-success response. The server's `error`
    /// string wins; a body that is not JSON falls back to the status code.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
        }

        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(error) }) if !error.is_empty() => error,
            Ok(_) => UNKNOWN_FAILURE_MESSAGE.to_string(),
            Err(_) => format!("Request failed with status: {}", status),
        };
        ClientError::Server { status, message }
    }

    /// Text for the error state of the page
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

/// Sends a pending request and returns the body of a successful response
#[async_trait]
pub trait TranslateClient: Send + Sync {
    async fn send(&self, request: &PendingRequest) -> Result<Vec<u8>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpTranslateClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslateClient {
    /// Client for the server at `base_url`, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/translate", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form(request: &PendingRequest) -> Result<Form, ClientError> {
        let part = Part::bytes(request.file.content().to_vec())
            .file_name(request.file.name().to_string());
        let part = match request.file.mime_type() {
            Some(mime) => part.mime_str(mime)?,
            None => part,
        };
        Ok(Form::new()
            .part("file", part)
            .text("direction", request.direction.as_str()))
    }
}

#[async_trait]
impl TranslateClient for HttpTranslateClient {
    async fn send(&self, request: &PendingRequest) -> Result<Vec<u8>, ClientError> {
        let form = Self::form(request)?;
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_string_wins() {
        let err = ClientError::from_response(400, br#"{"success":false,"error":"File is required."}"#);
        assert_eq!(err.user_message(), "File is required.");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ClientError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "Request failed with status: 502");
    }

    #[test]
    fn test_json_without_error_is_unknown_failure() {
        let err = ClientError::from_response(500, br#"{"success":false}"#);
        assert_eq!(err.user_message(), UNKNOWN_FAILURE_MESSAGE);
        let err = ClientError::from_response(500, br#"{"error":""}"#);
        assert_eq!(err.user_message(), UNKNOWN_FAILURE_MESSAGE);
    }

    #[test]
    fn test_network_error_uses_generic_message() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = HttpTranslateClient::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000/api/translate");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) is closed on test machines
        let client = HttpTranslateClient::new("http://127.0.0.1:9").unwrap();
        let request = PendingRequest {
            file: SelectedFile::new("a.txt", "hi"),
            direction: Direction::EnId,
        };
        assert!(matches!(
            client.send(&request).await,
            Err(ClientError::Network(_))
        ));
    }
}
