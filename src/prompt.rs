//! Topic prompt pipelines
//!
//! Two-stage flow: substitute the rendered history and new query into the
//! topic's fixed template, then hand the formatted prompt to the model
//! client. The two pipelines differ only in which template is bound.

use crate::llm::{LlmError, LlmRequest, LlmService};
use crate::topic::Topic;
use std::sync::Arc;

const THIRUKKURAL_TEMPLATE: &str = r"You are a knowledgeable guide to the Thirukkural, the classical Tamil collection of 1330 couplets on virtue, wealth and love written by Thiruvalluvar. Answer the user's question by drawing on the relevant kural, naming its chapter where you can, and explain its meaning in simple terms.

Previous conversation:
{chat_history}

Question: {query}";

const BHAGAVAD_GITA_TEMPLATE: &str = r"You are a knowledgeable guide to the Bhagavad Gita, the dialogue between Lord Krishna and Arjuna on the battlefield of Kurukshetra. Answer the user's question by drawing on the relevant verses, naming the chapter where you can, and explain their teaching in simple terms.

Previous conversation:
{chat_history}

Question: {query}";

fn template(topic: Topic) -> &'static str {
    match topic {
        Topic::Thirukkural => THIRUKKURAL_TEMPLATE,
        Topic::BhagavadGita => BHAGAVAD_GITA_TEMPLATE,
    }
}

/// Fill the topic's template with the conversation so far and the new query
pub fn format_prompt(topic: Topic, query: &str, chat_history: &str) -> String {
    template(topic)
        .replace("{chat_history}", chat_history)
        .replace("{query}", query)
}

/// Prompt pipeline bound to one topic's template
pub struct PromptPipeline {
    topic: Topic,
    service: Arc<dyn LlmService>,
}

impl PromptPipeline {
    pub fn new(topic: Topic, service: Arc<dyn LlmService>) -> Self {
        Self { topic, service }
    }

    /// Format the prompt and invoke the model, returning the answer text.
    /// Any client error propagates unchanged.
    pub async fn answer(&self, query: &str, chat_history: &str) -> Result<String, LlmError> {
        let prompt = format_prompt(self.topic, query, chat_history);
        let response = self.service.complete(&LlmRequest::new(prompt)).await?;
        Ok(response.text)
    }
}
