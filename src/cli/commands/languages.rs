use anyhow::Result;

use super::context::CommandContext;
use crate::cli::{
    args::LanguagesCommand,
    exit_status::ExitStatus,
    report::{LanguageRow, print_languages},
};

/// List every discovered language, enabled or not. The active one is starred.
pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let (session, _) = ctx.session();

    let rows: Vec<LanguageRow> = ctx
        .registry
        .languages()
        .iter()
        .map(|info| LanguageRow {
            code: info.code.clone(),
            name: info.name.clone(),
            handle: info.handle.clone().unwrap_or_default(),
            enabled: session.is_language_enabled(&info.code),
            active: info.code == session.current(),
            extensions: info.extensions.clone(),
        })
        .collect();

    print_languages(&rows);
    Ok(ExitStatus::Success)
}
