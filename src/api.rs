//! HTTP API

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::history::ConversationStore;
use crate::llm::LlmService;
use crate::prompt::PromptPipeline;
use crate::topic::Topic;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<ConversationStore>,
    thirukkural: Arc<PromptPipeline>,
    bhagavad_gita: Arc<PromptPipeline>,
}

impl AppState {
    pub fn new(service: Arc<dyn LlmService>) -> Self {
        Self {
            history: Arc::new(ConversationStore::new()),
            thirukkural: Arc::new(PromptPipeline::new(Topic::Thirukkural, service.clone())),
            bhagavad_gita: Arc::new(PromptPipeline::new(Topic::BhagavadGita, service)),
        }
    }

    pub fn pipeline(&self, topic: Topic) -> &PromptPipeline {
        match topic {
            Topic::Thirukkural => &self.thirukkural,
            Topic::BhagavadGita => &self.bhagavad_gita,
        }
    }
}
