//! Backend resources the clients cache for display: workspaces,
//! conversations and messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::{LlmMessageRole, WorkspaceConfig};
use crate::structured::{project, StructuredWorkspaceData};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceModel {
    pub workspace_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub config: WorkspaceConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkspaceModel {
    pub fn structured(&self) -> StructuredWorkspaceData {
        project(&self.config)
    }

    /// Copy without API keys, for anything that only displays the workspace.
    pub fn redacted(&self) -> Self {
        Self {
            config: self.config.without_api_keys(),
            ..self.clone()
        }
    }
}

/// Body of create and update calls. The config, when present, replaces the
/// stored one as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceUpdateModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<WorkspaceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceWithConversations {
    #[serde(flatten)]
    pub workspace: WorkspaceModel,
    #[serde(default)]
    pub conversations: Vec<ConversationModel>,
}

fn default_language_code() -> String {
    "english".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationModel {
    pub conversation_id: Uuid,
    pub workspace_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkspaceWithConversations {
    pub fn redacted(&self) -> Self {
        Self {
            workspace: self.workspace.redacted(),
            conversations: self.conversations.clone(),
        }
    }
}

/// Body of a create-conversation call. The backend seeds the new
/// conversation with the workspace's `default_llm_context`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationCreateModel {
    pub workspace_id: Uuid,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationUpdateModel {
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// A conversation together with its messages, ordered by `message_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessages {
    pub conversation: ConversationModel,
    #[serde(default)]
    pub messages: Vec<MessageModel>,
}

/// Search hit: the matching message and the conversation it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageWithConversationModel {
    pub message: MessageModel,
    pub conversation: ConversationModel,
}

/// One part of a multi-part message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Either plain text or a list of text/image parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageBody {
    /// Text of the message, with parts joined by newlines. Images are skipped.
    pub fn text(&self) -> String {
        match self {
            MessageBody::Text(text) => text.clone(),
            MessageBody::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    ContentPart::ImageUrl { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    pub role: LlmMessageRole,
    pub content: MessageBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageModel {
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub message_number: i64,
    pub content: MessageContent,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub extra_metadata: Option<Map<String, Value>>,
}
