#![cfg(unix)]

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn python_project() -> Result<CliTest> {
    let test = CliTest::with_file("app/main.py", "print(_('Hello'))\n")?;
    test.write_file("app/views.py", "title = _('Title')\n")?;
    test.write_file(".venv/lib/site.py", "_('ignored')\n")?;
    test.write_file("notes.txt", "not python\n")?;
    Ok(test)
}

#[test]
fn test_translate_creates_patched_catalogs() -> Result<()> {
    let test = python_project()?;
    let (xgettext, msgfmt) = test.fake_tools()?;

    let output = test
        .project_command()
        .arg("-t")
        .arg("--xgettext")
        .arg(&xgettext)
        .arg("--msgfmt")
        .arg(&msgfmt)
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("Extracted 2 catalogs from 2 source files (en, fa)"));

    for lang in ["en", "fa"] {
        let po = test.read_file(&format!("locales/{}/LC_MESSAGES/base.po", lang))?;
        assert!(!po.contains("CHARSET"));
        assert!(po.contains("charset=UTF-8"));
        assert!(
            !test
                .root()
                .join(format!("locales/{}/LC_MESSAGES/base.mo", lang))
                .exists()
        );
    }

    let args = test.read_file("locales/fa/LC_MESSAGES/base.po.args")?;
    assert!(args.starts_with("--language=Python -d base -o "));
    assert!(args.contains("app/main.py"));
    assert!(args.contains("app/views.py"));
    assert!(!args.contains(".venv"));
    assert!(!args.contains("notes.txt"));

    Ok(())
}

#[test]
fn test_second_translate_joins_existing_catalog() -> Result<()> {
    let test = python_project()?;
    let (xgettext, _) = test.fake_tools()?;

    for _ in 0..2 {
        let status = test
            .project_command()
            .args(["-t", "-l", "fa"])
            .arg("--xgettext")
            .arg(&xgettext)
            .status()?;
        assert!(status.success());
    }

    let calls = test.read_file("locales/fa/LC_MESSAGES/base.po.args")?;
    let calls: Vec<&str> = calls.lines().collect();
    assert_eq!(calls.len(), 2);
    assert!(!calls[0].ends_with(" -j"));
    assert!(calls[1].ends_with(" -j"));

    let po = test.read_file("locales/fa/LC_MESSAGES/base.po")?;
    assert_eq!(po.matches("charset=UTF-8").count(), 2);
    assert!(!po.contains("CHARSET"));

    Ok(())
}

#[test]
fn test_translate_and_compile() -> Result<()> {
    let test = python_project()?;
    let (xgettext, msgfmt) = test.fake_tools()?;

    let output = test
        .project_command()
        .args(["-t", "-c", "-l", "fa", "en", "de", "fa", "-d", "app"])
        .arg("--xgettext")
        .arg(&xgettext)
        .arg("--msgfmt")
        .arg(&msgfmt)
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("compiled 3 catalogs (de, en, fa)"));
    for lang in ["de", "en", "fa"] {
        assert_eq!(
            test.read_file(&format!("locales/{}/LC_MESSAGES/app.mo", lang))?,
            "MO"
        );
    }

    Ok(())
}

#[test]
fn test_parallel_translate_and_compile() -> Result<()> {
    let test = python_project()?;
    let (xgettext, msgfmt) = test.fake_tools()?;

    let status = test
        .project_command()
        .args(["-t", "-c", "--parallel", "-l", "de", "en", "es", "fa", "fr"])
        .arg("--xgettext")
        .arg(&xgettext)
        .arg("--msgfmt")
        .arg(&msgfmt)
        .status()?;

    assert!(status.success());
    for lang in ["de", "en", "es", "fa", "fr"] {
        let po = test.read_file(&format!("locales/{}/LC_MESSAGES/base.po", lang))?;
        assert!(!po.contains("CHARSET"));
        assert!(
            test.root()
                .join(format!("locales/{}/LC_MESSAGES/base.mo", lang))
                .exists()
        );
    }

    Ok(())
}

#[test]
fn test_strict_mode_fails_on_tool_error() -> Result<()> {
    let test = python_project()?;
    let (_, msgfmt) = test.fake_tools()?;
    test.write_file("locales/fa/LC_MESSAGES/base.po", "msgid \"\"\n")?;

    // `false` exits 1 without writing anything.
    let lenient = test
        .project_command()
        .args(["-c", "-l", "fa", "--msgfmt", "/bin/false"])
        .output()?;
    assert!(lenient.status.success());

    let strict = test
        .project_command()
        .args(["-c", "-l", "fa", "--strict", "--msgfmt", "/bin/false"])
        .output()?;
    let stdout = String::from_utf8_lossy(&strict.stdout);
    assert_eq!(strict.status.code(), Some(1));
    assert!(stdout.contains("`/bin/false` exited with status 1"), "stdout: {}", stdout);

    let ok = test
        .project_command()
        .args(["-c", "-l", "fa", "--strict"])
        .arg("--msgfmt")
        .arg(&msgfmt)
        .output()?;
    assert!(ok.status.success());

    Ok(())
}
