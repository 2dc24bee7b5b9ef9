use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod dates;
mod init;
mod languages;
mod text;
mod translate;

const BIN_NAME: &str = "langkit";

pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop the config search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a French core pack, a French contributor and a German
    /// core pack. Only French is enabled.
    pub fn with_language_packs() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            ".langkitrc.json",
            r#"{
  "enabledExtensions": ["lang_fr", "lang_fr_formal"],
  "datetimeSeparator": " à "
}"#,
        )?;
        test.write_file(
            "extensions/lang_fr/lang/lang.fr.json",
            r#"{
  "about": { "name": "Français" },
  "dictionary": {
    "Save": "Enregistrer",
    "Delete": "Supprimer",
    "Hello %s": "Bonjour %s",
    "%1$s of %2$s": "%2$s : %1$s",
    "/publish": { "Save": "Publier" },
    "January": "janvier",
    "February": "février",
    "Monday": "lundi",
    "Tuesday": "mardi"
  },
  "transliterations": { "€": "euro" }
}"#,
        )?;
        test.write_file(
            "extensions/lang_fr_formal/lang/lang.fr.json",
            r#"{
  "about": { "name": "Français" },
  "dictionary": { "Delete": "Effacer" }
}"#,
        )?;
        test.write_file(
            "extensions/lang_de/lang/lang.de.json",
            r#"{
  "about": { "name": "Deutsch" },
  "dictionary": { "Save": "Speichern" }
}"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// Run with `args` and capture stdout, stderr and the exit code.
    pub fn run(&self, args: &[&str]) -> Result<CmdOutput> {
        let output = self.command().args(args).output()?;
        Ok(CmdOutput {
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
            code: output.status.code(),
        })
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
