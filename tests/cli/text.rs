use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_handle_uses_builtin_transliterations() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["handle", "Bär & Söhne"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "baer-and-soehne\n");
    Ok(())
}

#[test]
fn test_handle_without_transliteration() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["handle", "Bär & Söhne", "--no-transliterate"])?;

    assert_eq!(output.stdout, "bär-söhne\n");
    Ok(())
}

#[test]
fn test_handle_options() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[
        "handle",
        "The Quick Brown Fox",
        "--delimiter",
        "_",
        "--max-length",
        "10",
    ])?;

    assert_eq!(output.stdout, "the_quick\n");
    Ok(())
}

#[test]
fn test_handle_uses_language_transliterations() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["handle", "Prix en €"])?;
    assert_eq!(output.stdout, "prix-en\n");

    let output = test.run(&["handle", "Prix en €", "--lang", "fr"])?;
    assert_eq!(output.stdout, "prix-en-euro\n");

    Ok(())
}

#[test]
fn test_custom_transliterations_replace_builtin() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/transliterations.json", r#"{ "ß": "sz" }"#)?;

    let output = test.run(&["handle", "Straße Bär"])?;

    assert_eq!(output.stdout, "strasze-bär\n");
    Ok(())
}

#[test]
fn test_filename() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["filename", "Quarterly Report (Bär).PDF"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "quarterly-report-baer-.pdf\n");
    Ok(())
}

#[test]
fn test_handle_uri_encode() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["handle", "日本 ブログ", "--uri-encode"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "%e6%97%a5%e6%9c%ac-%e3%83%96%e3%83%ad%e3%82%b0\n"
    );
    Ok(())
}

#[test]
fn test_handle_additional_rules() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[
        "handle",
        "Bär & Söhne",
        "--rule=-and-=-",
        "--rule",
        "oe=ö",
    ])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "baer-söhne\n");
    Ok(())
}

#[test]
fn test_handle_invalid_rule_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["handle", "x", "--rule", "(=y"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Invalid --rule"));
    Ok(())
}
