//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `languages`: List discovered languages and whether they are enabled
//! - `translate`: Translate a string in the active language
//! - `handle`: Build a URL-safe handle from a string
//! - `filename`: Build a safe filename from a string
//! - `localize-date`: Translate month and day names in a date
//! - `standardize-date`: Turn a localized date back into its canonical form
//! - `init`: Initialize the langkit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Handle(cmd)) => cmd.common.verbose,
            Some(Command::Filename(cmd)) => cmd.common.verbose,
            Some(Command::LocalizeDate(cmd)) | Some(Command::StandardizeDate(cmd)) => {
                cmd.common.verbose
            }
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Language to activate (overrides config file)
    #[arg(short, long, env = "LANGKIT_LANG")]
    pub lang: Option<String>,

    /// Extensions directory (overrides config file)
    #[arg(long)]
    pub extensions_root: Option<PathBuf>,

    /// Directory with datetime.json and transliterations.json (overrides config file)
    #[arg(long)]
    pub lang_root: Option<PathBuf>,

    /// Page namespace used for context-aware translations
    #[arg(long)]
    pub namespace: Option<String>,

    /// Activate the language even if its extension is not enabled
    #[arg(long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Source string
    pub text: String,

    /// Value for the next placeholder; repeat for more
    #[arg(short, long = "insert")]
    pub inserts: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HandleCommand {
    pub text: String,

    /// Maximum handle length in characters (0 for unlimited)
    #[arg(long, default_value_t = crate::core::slug::DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Replacement for invalid characters
    #[arg(long, default_value = crate::core::slug::DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Do not apply the transliteration table first
    #[arg(long)]
    pub no_transliterate: bool,

    /// Percent-encode the handle
    #[arg(long)]
    pub uri_encode: bool,

    /// Extra regex rule run on the joined handle; repeat for more
    #[arg(long = "rule", value_name = "PATTERN=REPLACEMENT", value_parser = parse_rule)]
    pub rules: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FilenameCommand {
    pub text: String,

    /// Replacement for invalid characters
    #[arg(long, default_value = crate::core::slug::DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Do not apply the transliteration table first
    #[arg(long)]
    pub no_transliterate: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DateCommand {
    /// Formatted date
    pub text: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List discovered languages (enabled and disabled)
    Languages(LanguagesCommand),
    /// Translate a string in the active language
    Translate(TranslateCommand),
    /// Build a URL-safe handle from a string
    Handle(HandleCommand),
    /// Build a safe filename from a string
    Filename(FilenameCommand),
    /// Translate month and day names in a formatted date
    LocalizeDate(DateCommand),
    /// Turn a localized date back into its canonical form
    StandardizeDate(DateCommand),
    /// Initialize a new .langkitrc.json configuration file
    Init,
}

/// Split `PATTERN=REPLACEMENT` at the last `=`, so patterns may contain `=`.
fn parse_rule(value: &str) -> Result<(String, String), String> {
    value
        .rsplit_once('=')
        .map(|(pattern, replacement)| (pattern.to_string(), replacement.to_string()))
        .ok_or_else(|| format!("expected PATTERN=REPLACEMENT, got '{}'", value))
}
