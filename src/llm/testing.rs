//! Mock model client for tests

use super::types::{LlmRequest, LlmResponse, Usage};
use super::{LlmError, LlmService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock model client that returns queued responses
pub struct MockLlmService {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    model_id: String,
    /// Record of all requests made
    pub requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmService {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            model_id: model_id.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful text response
    pub fn queue_text(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(LlmResponse {
            text: text.into(),
            usage: Usage::default(),
        }));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_queued_responses_in_order() {
        let mock = MockLlmService::new("test-model");
        mock.queue_text("first");
        mock.queue_text("second");

        let request = LlmRequest::new("prompt");
        assert_eq!(mock.complete(&request).await.unwrap().text, "first");
        assert_eq!(mock.complete(&request).await.unwrap().text, "second");

        // Queue exhausted
        assert!(mock.complete(&request).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockLlmService::new("test-model");
        mock.queue_text("answer");

        mock.complete(&LlmRequest::new("the prompt")).await.unwrap();

        let recorded = mock.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].prompt, "the prompt");
    }
}
