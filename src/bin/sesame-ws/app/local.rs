use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use sesame_workspace::catalog::{llm_models_for, tts_provider, LLM_MODELS, TTS_PROVIDERS};
use sesame_workspace::{
    default_workspace_config, project_with, Fallback, SettingsRepository, WorkspaceConfig,
    WorkspaceModel,
};

use super::edit::edit_from_args;
use crate::args::CliArgs;

/// A JSON file holding either a full workspace resource or a bare config.
enum Document {
    Workspace(WorkspaceModel),
    Config(WorkspaceConfig),
}

impl Document {
    fn read(path: &Path) -> anyhow::Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        if value.get("workspace_id").is_some() {
            Ok(Self::Workspace(serde_json::from_value(value)?))
        } else {
            Ok(Self::Config(serde_json::from_value(value)?))
        }
    }

    fn config(&self) -> &WorkspaceConfig {
        match self {
            Self::Workspace(workspace) => &workspace.config,
            Self::Config(config) => config,
        }
    }
}

fn fallback(args: &CliArgs) -> Fallback {
    if args.no_fallback {
        Fallback::Disabled
    } else {
        Fallback::Template
    }
}

fn required<'a>(value: Option<&'a str>, what: &str) -> anyhow::Result<&'a str> {
    value.ok_or_else(|| anyhow::anyhow!("missing {what}"))
}

pub(super) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn show(args: &CliArgs) -> anyhow::Result<()> {
    let path = required(args.target.as_deref(), "file to show")?;
    let document = Document::read(Path::new(path))?;
    print_json(&project_with(document.config(), fallback(args)))
}

pub fn defaults(args: &CliArgs) -> anyhow::Result<()> {
    let config = default_workspace_config();
    if args.raw {
        print_json(&config)
    } else {
        print_json(&project_with(&config, Fallback::Template))
    }
}

/// Applies the edit flags to a local file and writes the complete result.
pub fn edit(args: &CliArgs) -> anyhow::Result<()> {
    let path = required(args.target.as_deref(), "file to edit")?;
    let edit = edit_from_args(args)?;
    if edit.is_empty() {
        log::warn!("edit of {path} changes nothing");
    }
    let updated = match Document::read(Path::new(path))? {
        Document::Workspace(mut workspace) => {
            workspace.config = edit.apply(&workspace.config);
            if let Some(title) = &edit.title {
                workspace.title = title.clone();
            }
            serde_json::to_string_pretty(&workspace)?
        }
        Document::Config(config) => serde_json::to_string_pretty(&edit.apply(&config))?,
    };
    match &args.output {
        Some(output) => {
            fs::write(output, updated + "\n")
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        None => println!("{updated}"),
    }
    Ok(())
}

pub fn models(args: &CliArgs) {
    let models: Vec<_> = match args.target.as_deref() {
        Some(provider) => llm_models_for(provider).collect(),
        None => LLM_MODELS.iter().collect(),
    };
    for model in models {
        println!("{:<10} {:<45} {}", model.provider, model.id, model.label);
    }
}

pub fn voices(args: &CliArgs) -> anyhow::Result<()> {
    let providers: Vec<_> = match args.target.as_deref() {
        Some(id) => vec![tts_provider(id).ok_or_else(|| anyhow::anyhow!("unknown TTS provider '{id}'"))?],
        None => TTS_PROVIDERS.iter().collect(),
    };
    for provider in providers {
        for language in provider.languages {
            if args.value.as_deref().is_some_and(|l| l != language.id) {
                continue;
            }
            for voice in language.voices {
                println!(
                    "{:<10} {:<3} {:<36} {}",
                    provider.id, language.id, voice.id, voice.name
                );
            }
        }
    }
    Ok(())
}

pub fn set(args: &CliArgs, repository: &mut SettingsRepository) -> anyhow::Result<()> {
    let key = required(args.target.as_deref(), "settings key")?;
    let value = args.value.as_deref().unwrap_or_default();
    repository.update(|settings| settings.set(key, value))?;
    repository.save()?;
    println!("Setting '{key}' updated.");
    Ok(())
}

pub fn settings(repository: &SettingsRepository) -> anyhow::Result<()> {
    println!("# {}", repository.paths().settings_file.display());
    if !repository.exists() {
        println!("# (not saved yet, showing defaults)");
    }
    print!("{}", toml::to_string_pretty(&repository.settings().redacted())?);
    Ok(())
}
