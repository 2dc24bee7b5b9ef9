use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_translate_in_enabled_language() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    assert_cmd_snapshot!(test.command().args(["translate", "Save", "--lang", "fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Enregistrer

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_contributor_overrides_core_pack() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["translate", "Delete", "--lang", "fr"])?;

    assert_eq!(output.stdout, "Effacer\n");
    Ok(())
}

#[test]
fn test_untranslated_string_is_returned_unchanged() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["translate", "Cancel", "--lang", "fr"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Cancel\n");
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn test_translate_with_inserts() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["translate", "Hello %s", "-i", "Zoë", "--lang", "fr"])?;
    assert_eq!(output.stdout, "Bonjour Zoë\n");

    let output = test.run(&[
        "translate",
        "%1$s of %2$s",
        "-i",
        "1",
        "-i",
        "5",
        "--lang",
        "fr",
    ])?;
    assert_eq!(output.stdout, "5 : 1\n");

    Ok(())
}

#[test]
fn test_translate_in_namespace() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["translate", "Save", "--lang", "fr", "--namespace", "/publish"])?;
    assert_eq!(output.stdout, "Publier\n");

    let output = test.run(&["translate", "Save", "--lang", "fr", "--namespace", "/other"])?;
    assert_eq!(output.stdout, "Enregistrer\n");

    Ok(())
}

#[test]
fn test_language_from_env() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test
        .command()
        .args(["translate", "Save"])
        .env("LANGKIT_LANG", "fr")
        .output()?;

    assert_eq!(String::from_utf8(output.stdout)?, "Enregistrer\n");
    Ok(())
}

#[test]
fn test_language_from_config() -> Result<()> {
    let test = CliTest::with_language_packs()?;
    test.write_file(
        ".langkitrc.json",
        r#"{ "enabledExtensions": ["lang_fr"], "language": "fr" }"#,
    )?;

    let output = test.run(&["translate", "Save"])?;

    assert_eq!(output.stdout, "Enregistrer\n");
    Ok(())
}

#[test]
fn test_disabled_language_falls_back() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    assert_cmd_snapshot!(test.command().args(["translate", "Save", "--lang", "de"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Save

    ----- stderr -----
    warning: The selected language 'de' could not be found or is not enabled. Using 'en' instead.
    ");

    Ok(())
}

#[test]
fn test_unknown_language_falls_back() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["translate", "Save", "--lang", "xx", "--force"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Save\n");
    assert!(output.stderr.contains("'xx'"));
    Ok(())
}

#[test]
fn test_force_activates_disabled_language() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["translate", "Save", "--lang", "de", "--force"])?;

    assert_eq!(output.stdout, "Speichern\n");
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn test_missing_insert_is_an_error() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["translate", "%1$s of %2$s", "-i", "one", "--lang", "fr"]),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to substitute placeholders in '%1$s of %2$s': 2 arguments are required, 1 given
    "
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langkitrc.json", "{ nope")?;

    let output = test.run(&["translate", "Save"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Failed to parse config file"));
    Ok(())
}
