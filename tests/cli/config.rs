use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_config_creates_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.project_command().arg("--init-config").output()?;
    assert!(output.status.success());

    let content = test.read_file(".pomakerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["languages"], serde_json::json!(["fa", "en"]));
    assert_eq!(parsed["domain"], "base");
    assert_eq!(parsed["sourceLanguage"], "Python");

    Ok(())
}

#[test]
fn test_init_config_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".pomakerc.json", "{}")?;

    let output = test.project_command().arg("--init-config").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    assert_eq!(test.read_file(".pomakerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_invalid_config_fails_before_any_work() -> Result<()> {
    let test = CliTest::with_file(".pomakerc.json", r#"{ "ignores": ["**/[oops"] }"#)?;
    test.write_file("app.py", "_('x')\n")?;

    let output = test.project_command().arg("-t").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("ignores"), "stderr: {}", stderr);
    assert!(!test.root().join("locales").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_config_found_from_nested_working_directory() -> Result<()> {
    let test = CliTest::with_file(
        ".pomakerc.json",
        r#"{ "languages": ["ja", "de"], "domain": "messages" }"#,
    )?;
    test.write_file("app/views/page.py", "_('x')\n")?;
    let (xgettext, _) = test.fake_tools()?;
    let views = test.root().join("app/views");

    let output = test
        .command()
        .current_dir(&views)
        .arg("-t")
        .arg("--xgettext")
        .arg(&xgettext)
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("(de, ja)"), "stdout: {}", stdout);
    assert!(views.join("locales/de/LC_MESSAGES/messages.po").exists());
    assert!(views.join("locales/ja/LC_MESSAGES/messages.po").exists());
    assert!(!views.join("locales/fa").exists());

    Ok(())
}

#[test]
fn test_empty_domain_on_command_line_is_rejected() -> Result<()> {
    let test = CliTest::with_file("app.py", "_('x')\n")?;

    let output = test.project_command().args(["-t", "-d", ""]).output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("domain must not be empty"), "stderr: {}", stderr);
    assert!(!test.root().join("locales").exists());

    Ok(())
}

#[test]
fn test_double_l_log_level_is_accepted() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["-t", "-ll", "CRITICAL", "--path", "does-not-exist"])
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout.contains("initializing translator"));
    assert!(stdout.contains("Error while running command."));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_config_languages_and_domain_are_used() -> Result<()> {
    let test = CliTest::with_file(
        ".pomakerc.json",
        r#"{ "languages": ["ja", "de"], "domain": "messages" }"#,
    )?;
    test.write_file("app.py", "_('x')\n")?;
    let (xgettext, _) = test.fake_tools()?;

    let status = test
        .project_command()
        .arg("-t")
        .arg("--xgettext")
        .arg(&xgettext)
        .status()?;

    assert!(status.success());
    assert!(test.root().join("locales/de/LC_MESSAGES/messages.po").exists());
    assert!(test.root().join("locales/ja/LC_MESSAGES/messages.po").exists());
    assert!(!test.root().join("locales/fa").exists());

    Ok(())
}
