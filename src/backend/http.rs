use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{ConversationBackend, WorkspaceBackend};
use crate::error::WorkspaceError;
use crate::models::{
    ConversationCreateModel, ConversationMessages, ConversationModel, ConversationUpdateModel,
    MessageWithConversationModel, WorkspaceModel, WorkspaceUpdateModel,
    WorkspaceWithConversations,
};

/// `WorkspaceBackend` over the backend's REST API.
#[derive(Debug, Clone)]
pub struct HttpWorkspaceClient {
    client: reqwest::Client,
    base_url: Url,
    secret: Option<SecretString>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Default)]
pub struct HttpWorkspaceClientBuilder {
    base_url: Option<String>,
    secret: Option<SecretString>,
    timeout_seconds: Option<u64>,
    client: Option<reqwest::Client>,
}

impl HttpWorkspaceClientBuilder {
    /// API root, e.g. `https://sesame.example.com/api/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bearer token sent with every request.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(SecretString::new(secret.into()));
        self
    }

    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<HttpWorkspaceClient, WorkspaceError> {
        let raw = self
            .base_url
            .ok_or_else(|| WorkspaceError::InvalidRequest("No base URL provided".to_string()))?;
        // Url::join drops the last segment unless the base ends with a slash
        let normalized = if raw.ends_with('/') {
            raw
        } else {
            format!("{raw}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| WorkspaceError::InvalidRequest(format!("Invalid base URL: {e}")))?;
        Ok(HttpWorkspaceClient {
            client: self.client.unwrap_or_default(),
            base_url,
            secret: self.secret.filter(|s| !s.expose_secret().is_empty()),
            timeout_seconds: self.timeout_seconds,
        })
    }
}

impl HttpWorkspaceClient {
    pub fn builder() -> HttpWorkspaceClientBuilder {
        HttpWorkspaceClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, WorkspaceError> {
        self.base_url
            .join(path)
            .map_err(|e| WorkspaceError::HttpError(e.to_string()))
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, WorkspaceError> {
        let mut request = self.client.request(method, self.url(path)?);
        if let Some(secret) = &self.secret {
            request = request.bearer_auth(secret.expose_secret());
        }
        if let Some(timeout) = self.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }
        Ok(request)
    }

    fn log_request_payload<T: Serialize>(&self, label: &str, body: &T) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        if let Ok(mut json) = serde_json::to_value(body) {
            mask_api_keys(&mut json);
            log::trace!("{label}: {json}");
        }
    }

    async fn ensure_success_response(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, WorkspaceError> {
        log::debug!("{context} HTTP status: {}", response.status());
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        if status == StatusCode::NOT_FOUND {
            return Err(WorkspaceError::NotFound(format!("{context}: {body}")));
        }
        Err(WorkspaceError::ApiError {
            status: status.as_u16(),
            body,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, WorkspaceError> {
        let response = self.ensure_success_response(response, context).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| WorkspaceError::ResponseFormatError {
            message: format!("Failed to decode {context} response: {e}"),
            raw_response: text,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T, WorkspaceError> {
        let mut request = self.request(Method::GET, path)?;
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.parse_response(response, context).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, WorkspaceError> {
        self.log_request_payload(context, body);
        let response = self.request(method, path)?.json(body).send().await?;
        self.parse_response(response, context).await
    }
}

/// Replaces every value under `config.api_keys` with a placeholder.
fn mask_api_keys(payload: &mut serde_json::Value) {
    let keys = payload
        .get_mut("config")
        .and_then(|config| config.get_mut("api_keys"))
        .and_then(serde_json::Value::as_object_mut);
    if let Some(keys) = keys {
        for key in keys.values_mut() {
            *key = serde_json::Value::from("***");
        }
    }
}

#[async_trait]
impl WorkspaceBackend for HttpWorkspaceClient {
    async fn list_workspaces(&self) -> Result<Vec<WorkspaceModel>, WorkspaceError> {
        let response = self.request(Method::GET, "workspaces")?.send().await?;
        let workspaces: Vec<WorkspaceModel> =
            self.parse_response(response, "list workspaces").await?;
        let mut workspaces: Vec<WorkspaceModel> =
            workspaces.iter().map(WorkspaceModel::redacted).collect();
        workspaces.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(workspaces)
    }

    async fn get_workspace(&self, workspace_id: Uuid) -> Result<WorkspaceModel, WorkspaceError> {
        let path = format!("workspaces/{workspace_id}");
        let response = self.request(Method::GET, &path)?.send().await?;
        self.parse_response(response, "get workspace").await
    }

    async fn create_workspace(
        &self,
        workspace: &WorkspaceUpdateModel,
    ) -> Result<WorkspaceModel, WorkspaceError> {
        self.send_json(Method::POST, "workspaces", workspace, "create workspace")
            .await
    }

    async fn update_workspace(
        &self,
        workspace_id: Uuid,
        workspace: &WorkspaceUpdateModel,
    ) -> Result<WorkspaceModel, WorkspaceError> {
        let path = format!("workspaces/{workspace_id}");
        self.send_json(Method::PUT, &path, workspace, "update workspace")
            .await
    }

    async fn delete_workspace(&self, workspace_id: Uuid) -> Result<(), WorkspaceError> {
        let path = format!("workspaces/{workspace_id}");
        let response = self.request(Method::DELETE, &path)?.send().await?;
        self.ensure_success_response(response, "delete workspace")
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ConversationBackend for HttpWorkspaceClient {
    async fn recent_conversations(
        &self,
        limit: u32,
    ) -> Result<Vec<WorkspaceWithConversations>, WorkspaceError> {
        let workspaces: Vec<WorkspaceWithConversations> = self
            .get_json(
                "conversations/",
                &[("limit", limit.to_string())],
                "recent conversations",
            )
            .await?;
        Ok(workspaces
            .iter()
            .map(WorkspaceWithConversations::redacted)
            .collect())
    }

    async fn list_conversations(
        &self,
        workspace_id: Uuid,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ConversationModel>, WorkspaceError> {
        let path = format!("conversations/{workspace_id}");
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        self.get_json(&path, &query, "list conversations").await
    }

    async fn create_conversation(
        &self,
        conversation: &ConversationCreateModel,
    ) -> Result<ConversationModel, WorkspaceError> {
        self.send_json(
            Method::POST,
            "conversations",
            conversation,
            "create conversation",
        )
        .await
    }

    async fn update_conversation(
        &self,
        conversation_id: Uuid,
        update: &ConversationUpdateModel,
    ) -> Result<ConversationModel, WorkspaceError> {
        let path = format!("conversations/{conversation_id}");
        self.send_json(Method::PUT, &path, update, "update conversation")
            .await
    }

    async fn delete_conversation(&self, conversation_id: Uuid) -> Result<(), WorkspaceError> {
        let path = format!("conversations/{conversation_id}");
        let response = self.request(Method::DELETE, &path)?.send().await?;
        self.ensure_success_response(response, "delete conversation")
            .await?;
        Ok(())
    }

    async fn conversation_messages(
        &self,
        conversation_id: Uuid,
    ) -> Result<ConversationMessages, WorkspaceError> {
        let path = format!("conversations/{conversation_id}/messages");
        self.get_json(&path, &[], "conversation messages").await
    }

    async fn search_messages(
        &self,
        workspace_id: Uuid,
        term: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<MessageWithConversationModel>, WorkspaceError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(WorkspaceError::InvalidRequest(
                "search term must not be empty".to_string(),
            ));
        }
        let path = format!("conversations/{workspace_id}/search");
        let query = [
            ("search_term", term.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        self.get_json(&path, &query, "search messages").await
    }
}
