//! Per-topic conversation history
//!
//! Process-wide state injected through `AppState` rather than held in
//! globals. Each topic's message list sits behind its own mutex, so single
//! operations are atomic. The wider span of a request (render before the
//! model call, append after) is not: two in-flight requests on the same
//! topic can interleave their reads and writes.

use crate::topic::Topic;
use std::sync::Mutex;

/// Message author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single stored message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// In-memory store holding one ordered message list per topic.
///
/// Lives for the process lifetime; nothing is persisted. History grows
/// without bound until an explicit reset.
pub struct ConversationStore {
    thirukkural: Mutex<Vec<ChatMessage>>,
    bhagavad_gita: Mutex<Vec<ChatMessage>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            thirukkural: Mutex::new(Vec::new()),
            bhagavad_gita: Mutex::new(Vec::new()),
        }
    }

    fn messages(&self, topic: Topic) -> &Mutex<Vec<ChatMessage>> {
        match topic {
            Topic::Thirukkural => &self.thirukkural,
            Topic::BhagavadGita => &self.bhagavad_gita,
        }
    }

    /// Append a message to the topic's sequence. Content is stored as-is.
    pub fn append(&self, topic: Topic, role: Role, content: impl Into<String>) {
        self.messages(topic).lock().unwrap().push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    /// Render the history as `"<role>: <content>"` lines in insertion
    /// order. An empty history renders as the empty string.
    pub fn render(&self, topic: Topic) -> String {
        self.messages(topic)
            .lock()
            .unwrap()
            .iter()
            .map(|m| format!("{}: {}", m.role.as_str(), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Discard all messages for the topic. Idempotent.
    pub fn clear(&self, topic: Topic) {
        self.messages(topic).lock().unwrap().clear();
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
