//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{
    init::init,
    languages::languages,
    text::{filename, handle, localize_date, standardize_date},
    translate::translate,
};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Languages(cmd)) => languages(cmd)?,
        Some(Command::Translate(cmd)) => translate(cmd)?,
        Some(Command::Handle(cmd)) => handle(cmd)?,
        Some(Command::Filename(cmd)) => filename(cmd)?,
        Some(Command::LocalizeDate(cmd)) => localize_date(cmd)?,
        Some(Command::StandardizeDate(cmd)) => standardize_date(cmd)?,
        Some(Command::Init) => init()?,
        None => ExitStatus::Success,
    };

    Ok(status.into())
}
