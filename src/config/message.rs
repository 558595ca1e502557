use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role of a seed message in the default LLM context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmMessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for LlmMessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LlmMessageRole::System => "system",
            LlmMessageRole::User => "user",
            LlmMessageRole::Assistant => "assistant",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMessageContent {
    pub role: LlmMessageRole,
    pub content: String,
    /// Any other keys the backend stored alongside role/content.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A message the conversation is seeded with before the user speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMessage {
    pub content: SeedMessageContent,
    #[serde(default)]
    pub extra_metadata: Option<Map<String, Value>>,
}

impl SeedMessage {
    pub fn new(role: LlmMessageRole, content: impl Into<String>) -> Self {
        Self {
            content: SeedMessageContent {
                role,
                content: content.into(),
                extra: Map::new(),
            },
            extra_metadata: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(LlmMessageRole::System, content)
    }

    pub fn role(&self) -> LlmMessageRole {
        self.content.role
    }

    pub fn text(&self) -> &str {
        &self.content.content
    }
}
