use anyhow::Context;
use sesame_workspace::backend::DEFAULT_CONVERSATION_LIMIT;
use sesame_workspace::models::ConversationModel;
use sesame_workspace::{
    create_workspace_from_template, save_workspace, ConversationBackend, SettingsRepository,
    WorkspaceBackend,
};
use uuid::Uuid;

use super::edit::edit_from_args;
use super::local::print_json;
use crate::args::CliArgs;

/// Workspace id from the positional argument, or the default workspace.
fn workspace_id(args: &CliArgs, repository: &SettingsRepository) -> anyhow::Result<Uuid> {
    match args.target.as_deref() {
        Some(raw) => Uuid::parse_str(raw).with_context(|| format!("invalid workspace id '{raw}'")),
        None => repository
            .settings()
            .default_workspace
            .ok_or_else(|| anyhow::anyhow!("no workspace id given and no default workspace set")),
    }
}

pub async fn list(repository: &SettingsRepository) -> anyhow::Result<()> {
    let client = repository.client()?;
    let default = repository.settings().default_workspace;
    for workspace in client.list_workspaces().await? {
        let marker = if Some(workspace.workspace_id) == default {
            '*'
        } else {
            ' '
        };
        println!(
            "{marker} {}  {}  {}",
            workspace.workspace_id,
            workspace.updated_at.format("%Y-%m-%d %H:%M"),
            workspace.title
        );
    }
    Ok(())
}

pub async fn get(args: &CliArgs, repository: &SettingsRepository) -> anyhow::Result<()> {
    let client = repository.client()?;
    let workspace = client
        .get_workspace(workspace_id(args, repository)?)
        .await?
        .redacted();
    if args.raw {
        print_json(&workspace)
    } else {
        println!("# {} ({})", workspace.title, workspace.workspace_id);
        print_json(&workspace.structured())
    }
}

/// New workspace from the default template, with the edit flags and the
/// provider keys from settings applied.
pub async fn create(args: &CliArgs, repository: &SettingsRepository) -> anyhow::Result<()> {
    let title = args
        .target
        .as_deref()
        .or(args.title.as_deref())
        .ok_or_else(|| anyhow::anyhow!("missing workspace title"))?;
    let edit = repository
        .settings()
        .api_keys
        .iter()
        .fold(edit_from_args(args)?, |edit, (provider, key)| {
            edit.api_key(provider, key)
        });
    let client = repository.client()?;
    let workspace = create_workspace_from_template(&client, title, &edit).await?;
    println!("Created workspace {} ({})", workspace.title, workspace.workspace_id);
    Ok(())
}

/// Loads a workspace, merges the edit flags into its config and saves it.
pub async fn save(args: &CliArgs, repository: &SettingsRepository) -> anyhow::Result<()> {
    let edit = edit_from_args(args)?;
    if edit.is_empty() {
        anyhow::bail!("nothing to save, pass at least one edit flag");
    }
    let client = repository.client()?;
    let workspace = client.get_workspace(workspace_id(args, repository)?).await?;
    let saved = save_workspace(&client, &workspace, &edit).await?;
    println!("Saved workspace {} ({})", saved.title, saved.workspace_id);
    Ok(())
}

pub async fn delete(args: &CliArgs, repository: &mut SettingsRepository) -> anyhow::Result<()> {
    let id = Uuid::parse_str(args.target.as_deref().unwrap_or_default())
        .context("delete needs a workspace id")?;
    repository.client()?.delete_workspace(id).await?;
    if repository.settings().default_workspace == Some(id) {
        repository.set_default_workspace(None);
        repository.save()?;
    }
    println!("Workspace {id} deleted.");
    Ok(())
}

pub async fn use_workspace(
    args: &CliArgs,
    repository: &mut SettingsRepository,
) -> anyhow::Result<()> {
    let id = Uuid::parse_str(args.target.as_deref().unwrap_or_default())
        .context("use needs a workspace id")?;
    let workspace = repository.client()?.get_workspace(id).await?;
    repository.set_default_workspace(Some(workspace.workspace_id));
    repository.save()?;
    println!("Default workspace set to {} ({id})", workspace.title);
    Ok(())
}

fn print_conversation(conversation: &ConversationModel) {
    println!(
        "  {}  {}  [{}]{}  {}",
        conversation.conversation_id,
        conversation.updated_at.format("%Y-%m-%d %H:%M"),
        conversation.language_code,
        if conversation.archived { " archived" } else { "" },
        conversation.title.as_deref().unwrap_or("(untitled)")
    );
}

/// Conversations of one workspace, a message search within it, or the most
/// recent conversations grouped by workspace when no id is given.
pub async fn conversations(args: &CliArgs, repository: &SettingsRepository) -> anyhow::Result<()> {
    let client = repository.client()?;
    let limit = args.limit.unwrap_or(DEFAULT_CONVERSATION_LIMIT);

    if let Some(term) = args.search.as_deref() {
        let id = workspace_id(args, repository)?;
        for hit in client.search_messages(id, term, limit, args.offset).await? {
            println!(
                "{} #{} {}: {}",
                hit.conversation.title.as_deref().unwrap_or("(untitled)"),
                hit.message.message_number,
                hit.message.content.role,
                hit.message.content.content.text()
            );
        }
        return Ok(());
    }

    match args.target.as_deref() {
        Some(_) => {
            let id = workspace_id(args, repository)?;
            for conversation in client.list_conversations(id, limit, args.offset).await? {
                print_conversation(&conversation);
            }
        }
        None => {
            for group in client.recent_conversations(limit).await? {
                println!("{} ({})", group.workspace.title, group.workspace.workspace_id);
                for conversation in &group.conversations {
                    print_conversation(conversation);
                }
            }
        }
    }
    Ok(())
}

pub async fn messages(args: &CliArgs, repository: &SettingsRepository) -> anyhow::Result<()> {
    let id = Uuid::parse_str(args.target.as_deref().unwrap_or_default())
        .context("messages needs a conversation id")?;
    let history = repository.client()?.conversation_messages(id).await?;
    if args.raw {
        return print_json(&history);
    }
    println!(
        "# {} ({})",
        history.conversation.title.as_deref().unwrap_or("(untitled)"),
        history.conversation.conversation_id
    );
    for message in &history.messages {
        println!(
            "[{}] {}: {}",
            message.message_number,
            message.content.role,
            message.content.content.text()
        );
    }
    Ok(())
}
