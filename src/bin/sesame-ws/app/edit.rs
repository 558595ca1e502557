use anyhow::Context;
use sesame_workspace::catalog::language;
use sesame_workspace::{InteractionMode, SeedMessage, WorkspaceEdit};

use crate::args::CliArgs;

/// Collects the edit flags into a `WorkspaceEdit`.
pub fn edit_from_args(args: &CliArgs) -> anyhow::Result<WorkspaceEdit> {
    let mut edit = WorkspaceEdit::new();
    if let Some(title) = &args.title {
        edit = edit.title(title);
    }
    if let Some(provider) = &args.llm_provider {
        edit = edit.llm_provider(provider);
    }
    if let Some(model) = &args.model {
        edit = edit.llm_model(model);
    }
    if let Some(run_on_config) = args.run_on_config {
        edit = edit.run_on_config(run_on_config);
    }
    if let Some(prompt) = &args.prompt {
        edit = edit.prompt(vec![SeedMessage::system(prompt)]);
    }
    if let Some(provider) = &args.tts_provider {
        edit = edit.tts_provider(provider);
    }
    if let Some(model) = &args.tts_model {
        edit = edit.tts_model(model);
    }
    if let Some(voice) = &args.voice {
        edit = edit.voice(voice);
    }
    if let Some(raw) = &args.language {
        let code = language(raw).map(|l| l.code).unwrap_or(raw.as_str());
        edit = edit.main_language(code);
    }
    if let Some(raw) = &args.interaction_mode {
        let mode: InteractionMode = raw
            .parse()
            .with_context(|| format!("invalid --interaction-mode '{raw}'"))?;
        edit = edit.interaction_mode(mode);
    }
    Ok(edit)
}
