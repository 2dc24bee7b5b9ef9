use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .langkitrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".langkitrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in [
        "extensionsRoot",
        "langRoot",
        "identityLanguage",
        "coreMarker",
        "enabledExtensions",
        "datetimeSeparator",
        "language",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{}'", field);
    }

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langkitrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    warning: .langkitrc.json already exists
    ");

    assert_eq!(test.read_file(".langkitrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    let output = test.run(&["translate", "Save"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(output.stdout, "Save\n");

    Ok(())
}
