use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_localize_date() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["localize-date", "Monday 3 January 2011", "--lang", "fr"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    lundi 3 janvier 2011

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_standardize_date() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&[
        "standardize-date",
        "mardi 1 février 2011 à 10:00",
        "--lang",
        "fr",
    ])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Tuesday 1 February 2011 10:00\n");
    Ok(())
}

#[test]
fn test_dates_untouched_in_identity_language() -> Result<()> {
    let test = CliTest::with_language_packs()?;

    let output = test.run(&["localize-date", "Monday 3 January 2011"])?;
    assert_eq!(output.stdout, "Monday 3 January 2011\n");

    let output = test.run(&["standardize-date", "lundi 3 janvier 2011"])?;
    assert_eq!(output.stdout, "lundi 3 janvier 2011\n");

    Ok(())
}

#[test]
fn test_custom_datetime_tokens() -> Result<()> {
    let test = CliTest::with_language_packs()?;
    test.write_file("lang/datetime.json", r#"["Monday"]"#)?;

    let output = test.run(&["localize-date", "Monday 3 January", "--lang", "fr"])?;

    assert_eq!(output.stdout, "lundi 3 January\n");
    Ok(())
}
