//! Commands that transform a single string with the active language.

use anyhow::{Context, Result};

use super::context::CommandContext;
use crate::{
    cli::{
        args::{DateCommand, FilenameCommand, HandleCommand},
        exit_status::ExitStatus,
    },
    core::{HandleOptions, TransliterationTable},
};

pub fn handle(cmd: HandleCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let (session, _) = ctx.session();

    let additional_rules = TransliterationTable::from_pairs(cmd.rules)
        .context("Invalid --rule")?;
    let options = HandleOptions {
        max_length: cmd.max_length,
        delimiter: cmd.delimiter,
        apply_transliteration: !cmd.no_transliterate,
        uri_encode: cmd.uri_encode,
        additional_rules,
    };
    println!("{}", session.create_handle(&cmd.text, &options));
    Ok(ExitStatus::Success)
}

pub fn filename(cmd: FilenameCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let (session, _) = ctx.session();

    let options = HandleOptions {
        delimiter: cmd.delimiter,
        apply_transliteration: !cmd.no_transliterate,
        ..Default::default()
    };
    println!("{}", session.create_filename(&cmd.text, &options));
    Ok(ExitStatus::Success)
}

pub fn localize_date(cmd: DateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let (session, _) = ctx.session();

    println!("{}", session.localize_date(&cmd.text));
    Ok(ExitStatus::Success)
}

pub fn standardize_date(cmd: DateCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let (session, _) = ctx.session();

    println!("{}", session.standardize_date(&cmd.text));
    Ok(ExitStatus::Success)
}
