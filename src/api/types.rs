//! API request and response types

use serde::{Deserialize, Serialize};

/// Request to ask a question on a topic
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// An absent query falls back to the empty string
    #[serde(default)]
    pub query: String,
}

/// Request to reset a topic's history
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(rename = "chatType", default)]
    pub chat_type: String,
}

/// Status response for reset and liveness
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
