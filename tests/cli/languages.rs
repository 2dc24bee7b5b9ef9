use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_lists_all_languages() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    assert_cmd_snapshot!(test.command().arg("languages"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    CODE  NAME      HANDLE   STATUS    EXTENSIONS
    de    Deutsch   de       disabled
    en*   English   english  enabled
    fr    Français  fr       enabled   lang_fr_formal

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_marks_active_language() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["languages", "--lang", "fr"])?;

    assert_eq!(output.code, Some(0));
    let active: Vec<&str> = output
        .stdout
        .lines()
        .filter(|line| line.split_whitespace().next().is_some_and(|c| c.ends_with('*')))
        .collect();
    assert_eq!(active.len(), 1);
    assert!(active[0].starts_with("fr*"));

    Ok(())
}

#[test]
fn test_no_extensions_lists_identity_only() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["languages"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "CODE  NAME     HANDLE   STATUS   EXTENSIONS\nen*   English  english  enabled\n"
    );
    Ok(())
}

#[test]
fn test_malformed_lang_file_is_reported() -> Result<()> {
    let test = CliTest::with_language_packs()?;
    test.write_file("extensions/lang_es/lang/lang.es.json", "{ not json")?;

    let output = test.run(&["languages"])?;

    assert_eq!(output.code, Some(0));
    assert!(!output.stdout.contains("es "));
    assert!(output.stderr.starts_with("warning: Skipped lang file"));
    assert!(output.stderr.contains("lang.es.json"));
    Ok(())
}
