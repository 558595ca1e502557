//! Workspace and conversation calls against the Sesame backend.
//!
//! The backend owns persistence; this module only moves complete documents
//! back and forth. There are no partial updates and no retries.

mod http;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::default_workspace_config;
use crate::editor::WorkspaceEdit;
use crate::error::WorkspaceError;
use crate::models::{
    ConversationCreateModel, ConversationMessages, ConversationModel, ConversationUpdateModel,
    MessageWithConversationModel, WorkspaceModel, WorkspaceUpdateModel,
    WorkspaceWithConversations,
};

pub use http::{HttpWorkspaceClient, HttpWorkspaceClientBuilder};

pub const DEFAULT_CONVERSATION_LIMIT: u32 = 20;

#[async_trait]
pub trait WorkspaceBackend: Send + Sync {
    /// Workspaces, most recently updated first, with API keys removed.
    async fn list_workspaces(&self) -> Result<Vec<WorkspaceModel>, WorkspaceError>;

    async fn get_workspace(&self, workspace_id: Uuid) -> Result<WorkspaceModel, WorkspaceError>;

    async fn create_workspace(
        &self,
        workspace: &WorkspaceUpdateModel,
    ) -> Result<WorkspaceModel, WorkspaceError>;

    async fn update_workspace(
        &self,
        workspace_id: Uuid,
        workspace: &WorkspaceUpdateModel,
    ) -> Result<WorkspaceModel, WorkspaceError>;

    async fn delete_workspace(&self, workspace_id: Uuid) -> Result<(), WorkspaceError>;
}

/// Conversation history kept per workspace.
#[async_trait]
pub trait ConversationBackend: Send + Sync {
    /// Every workspace, most recently updated first, each with up to `limit`
    /// of its unarchived conversations. API keys are removed.
    async fn recent_conversations(
        &self,
        limit: u32,
    ) -> Result<Vec<WorkspaceWithConversations>, WorkspaceError>;

    /// Unarchived conversations of one workspace, most recent first.
    async fn list_conversations(
        &self,
        workspace_id: Uuid,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ConversationModel>, WorkspaceError>;

    async fn create_conversation(
        &self,
        conversation: &ConversationCreateModel,
    ) -> Result<ConversationModel, WorkspaceError>;

    async fn update_conversation(
        &self,
        conversation_id: Uuid,
        update: &ConversationUpdateModel,
    ) -> Result<ConversationModel, WorkspaceError>;

    async fn delete_conversation(&self, conversation_id: Uuid) -> Result<(), WorkspaceError>;

    async fn conversation_messages(
        &self,
        conversation_id: Uuid,
    ) -> Result<ConversationMessages, WorkspaceError>;

    async fn search_messages(
        &self,
        workspace_id: Uuid,
        term: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<MessageWithConversationModel>, WorkspaceError>;
}

/// Applies `edit` on top of the loaded workspace and replaces the stored
/// config with the result.
pub async fn save_workspace<B>(
    backend: &B,
    workspace: &WorkspaceModel,
    edit: &WorkspaceEdit,
) -> Result<WorkspaceModel, WorkspaceError>
where
    B: WorkspaceBackend + ?Sized,
{
    let update = WorkspaceUpdateModel {
        title: edit.title.clone().or_else(|| Some(workspace.title.clone())),
        config: Some(edit.apply(&workspace.config)),
    };
    backend
        .update_workspace(workspace.workspace_id, &update)
        .await
}

/// Creates a workspace from the default template with `edit` applied.
pub async fn create_workspace_from_template<B>(
    backend: &B,
    title: &str,
    edit: &WorkspaceEdit,
) -> Result<WorkspaceModel, WorkspaceError>
where
    B: WorkspaceBackend + ?Sized,
{
    let title = edit.title.as_deref().unwrap_or(title);
    if title.trim().is_empty() {
        return Err(WorkspaceError::InvalidRequest(
            "workspace title must not be empty".to_string(),
        ));
    }
    let create = WorkspaceUpdateModel {
        title: Some(title.to_string()),
        config: Some(edit.apply(&default_workspace_config())),
    };
    backend.create_workspace(&create).await
}
