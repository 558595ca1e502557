mod edit;
mod local;
mod remote;

use clap::Parser;
use sesame_workspace::SettingsRepository;

use crate::args::{CliArgs, CommandKind};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let mut repository = SettingsRepository::load(args.config.clone())?;
    let _logger = init_logging(&repository.settings().logging, repository.paths())?;

    let Some(kind) = args.command_kind() else {
        anyhow::bail!(
            "missing or unknown command, expected one of: {}",
            CommandKind::NAMES.join(", ")
        );
    };
    log::debug!("running {kind:?}");

    match kind {
        CommandKind::Show => local::show(&args),
        CommandKind::Defaults => local::defaults(&args),
        CommandKind::Edit => local::edit(&args),
        CommandKind::Models => {
            local::models(&args);
            Ok(())
        }
        CommandKind::Voices => local::voices(&args),
        CommandKind::List => remote::list(&repository).await,
        CommandKind::Get => remote::get(&args, &repository).await,
        CommandKind::Create => remote::create(&args, &repository).await,
        CommandKind::Save => remote::save(&args, &repository).await,
        CommandKind::Delete => remote::delete(&args, &mut repository).await,
        CommandKind::Use => remote::use_workspace(&args, &mut repository).await,
        CommandKind::Conversations => remote::conversations(&args, &repository).await,
        CommandKind::Messages => remote::messages(&args, &repository).await,
        CommandKind::Set => local::set(&args, &mut repository),
        CommandKind::Settings => local::settings(&repository),
    }
}
