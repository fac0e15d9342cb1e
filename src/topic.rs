//! Conversational topics
//!
//! The API serves exactly two subjects. Keeping them as a closed enum makes
//! an unknown topic unrepresentable past the request boundary.

/// The two fixed conversational subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Thirukkural,
    BhagavadGita,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Thirukkural, Topic::BhagavadGita];

    /// Identifier used on the wire (routes and the reset body)
    pub fn wire_name(self) -> &'static str {
        match self {
            Topic::Thirukkural => "thirukkural",
            Topic::BhagavadGita => "bhagavad-gita",
        }
    }

    /// Human-readable name used in status messages
    pub fn display_name(self) -> &'static str {
        match self {
            Topic::Thirukkural => "Thirukkural",
            Topic::BhagavadGita => "Bhagavad Gita",
        }
    }

    /// Status message returned after a successful history reset
    pub fn cleared_message(self) -> String {
        format!("{} chat history cleared", self.display_name())
    }

    /// Resolve a wire name to a topic
    pub fn parse(s: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.wire_name() == s)
    }
}
