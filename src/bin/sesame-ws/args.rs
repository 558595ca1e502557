use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sesame-ws",
    about = "Inspect and edit Sesame workspace configurations"
)]
pub struct CliArgs {
    #[arg(index = 1)]
    pub command: Option<String>,
    /// File, workspace id, title or settings key, depending on the command
    #[arg(index = 2)]
    pub target: Option<String>,
    #[arg(index = 3)]
    pub value: Option<String>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub llm_provider: Option<String>,
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    #[arg(long)]
    pub run_on_config: Option<bool>,
    /// Replaces the seed messages with a single system prompt
    #[arg(long)]
    pub prompt: Option<String>,
    #[arg(long)]
    pub tts_provider: Option<String>,
    #[arg(long)]
    pub tts_model: Option<String>,
    #[arg(long)]
    pub voice: Option<String>,
    /// Language code or name, applied to both TTS and STT
    #[arg(long, short = 'l')]
    pub language: Option<String>,
    #[arg(long)]
    pub interaction_mode: Option<String>,
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// Page size for conversation listings
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
    /// Search term for message search within a workspace
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// Print the raw config instead of the projected view
    #[arg(long)]
    pub raw: bool,
    /// Leave missing fields empty instead of filling them from the template
    #[arg(long)]
    pub no_fallback: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandKind {
    Show,
    Defaults,
    Edit,
    Models,
    Voices,
    List,
    Get,
    Create,
    Save,
    Delete,
    Use,
    Conversations,
    Messages,
    Set,
    Settings,
}

impl CommandKind {
    pub const NAMES: &'static [&'static str] = &[
        "show", "defaults", "edit", "models", "voices", "list", "get", "create", "save",
        "delete", "use", "conversations", "messages", "set", "settings",
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "show" => Some(Self::Show),
            "defaults" => Some(Self::Defaults),
            "edit" => Some(Self::Edit),
            "models" => Some(Self::Models),
            "voices" => Some(Self::Voices),
            "list" | "ls" => Some(Self::List),
            "get" => Some(Self::Get),
            "create" => Some(Self::Create),
            "save" => Some(Self::Save),
            "delete" | "rm" => Some(Self::Delete),
            "use" => Some(Self::Use),
            "conversations" | "convs" => Some(Self::Conversations),
            "messages" | "history" => Some(Self::Messages),
            "set" => Some(Self::Set),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }
}

impl CliArgs {
    pub fn command_kind(&self) -> Option<CommandKind> {
        self.command.as_deref().and_then(CommandKind::parse)
    }
}
