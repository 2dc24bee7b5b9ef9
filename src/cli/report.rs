//! Output formatting for CLI commands.
//!
//! Kept apart from the core so langkit can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// One row of the `languages` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub code: String,
    pub name: String,
    pub handle: String,
    pub enabled: bool,
    pub active: bool,
    pub extensions: Vec<String>,
}

const HEADERS: [&str; 5] = ["CODE", "NAME", "HANDLE", "STATUS", "EXTENSIONS"];

/// Print a warning to stderr.
pub fn print_warning(message: &str) {
    print_warning_to(message, &mut io::stderr().lock());
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print the languages table to stdout.
pub fn print_languages(rows: &[LanguageRow]) {
    print_languages_to(rows, &mut io::stdout().lock());
}

/// Print the languages table to a custom writer.
///
/// Columns are padded by display width, so names such as `日本語` line up.
pub fn print_languages_to<W: Write>(rows: &[LanguageRow], writer: &mut W) {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            let code = if row.active {
                format!("{}*", row.code)
            } else {
                row.code.clone()
            };
            let status = if row.enabled { "enabled" } else { "disabled" };
            [
                code,
                row.name.clone(),
                row.handle.clone(),
                status.to_string(),
                row.extensions.join(", "),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = format_row(&HEADERS.map(String::from), &widths);
    let _ = writeln!(writer, "{}", header.bold());

    for (row, source) in cells.iter().zip(rows) {
        let line = format_row(row, &widths);
        if source.enabled {
            let _ = writeln!(writer, "{}", line);
        } else {
            let _ = writeln!(writer, "{}", line.dimmed());
        }
    }
}

/// Pad every cell but the last to its column width.
fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(width - cell.width() + 2));
        }
    }
    line.trim_end().to_string()
}

/// Print a success line, e.g. after creating a file.
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(code: &str, name: &str, handle: &str, enabled: bool) -> LanguageRow {
        LanguageRow {
            code: code.to_string(),
            name: name.to_string(),
            handle: handle.to_string(),
            enabled,
            active: false,
            extensions: Vec::new(),
        }
    }

    #[test]
    fn test_languages_table() {
        colored::control::set_override(false);

        let mut fr = row("fr", "Français", "fr", true);
        fr.extensions = vec!["blog".to_string(), "shop".to_string()];
        fr.active = true;
        let rows = vec![
            row("en", "English", "english", true),
            fr,
            row("ja", "日本語", "ja", false),
        ];

        let mut output = Vec::new();
        print_languages_to(&rows, &mut output);

        let expected = "\
CODE  NAME      HANDLE   STATUS    EXTENSIONS
en    English   english  enabled
fr*   Français  fr       enabled   blog, shop
ja    日本語    ja       disabled
";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_warning() {
        colored::control::set_override(false);

        let mut output = Vec::new();
        print_warning_to("something odd", &mut output);
        assert_eq!(String::from_utf8(output).unwrap(), "warning: something odd\n");
    }
}
