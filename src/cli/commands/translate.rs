use anyhow::{Context, Result};
use tracing::debug;

use super::context::CommandContext;
use crate::{
    cli::{args::TranslateCommand, exit_status::ExitStatus},
    core::Insert,
};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let (session, _) = ctx.session();

    let resolved = session.lookup(&cmd.text, None);
    debug!(text = %cmd.text, lookup = ?resolved.lookup, "resolved");

    let inserts: Vec<Insert> = cmd.inserts.iter().map(Insert::from).collect();
    let output = session
        .translate(&cmd.text, &inserts, None)
        .with_context(|| format!("Failed to substitute placeholders in '{}'", cmd.text))?;

    println!("{}", output);
    Ok(ExitStatus::Success)
}
