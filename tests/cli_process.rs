mod common;

use std::error::Error;
use std::fs;
use std::process::Command;

use tempfile::tempdir;

use common::write_file;

type TestResult = Result<(), Box<dyn Error>>;

fn treedoc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treedoc"));
    cmd.env("TREEDOC_LOG", "error");
    cmd
}

#[test]
fn missing_target_exits_with_code_one_and_writes_nothing() -> TestResult {
    let scratch = tempdir()?;
    let missing = scratch.path().join("does-not-exist");
    let output = scratch.path().join("out/project.md");

    let result = treedoc()
        .current_dir(scratch.path())
        .arg(&missing)
        .arg(&output)
        .output()?;

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("does not exist"));
    assert!(!output.exists());
    assert!(!scratch.path().join("out").exists());
    Ok(())
}

#[test]
fn once_mode_writes_document_and_exits() -> TestResult {
    let scratch = tempdir()?;
    let root = scratch.path().join("app");
    write_file(&root, "main.py", "print('hi')")?;
    write_file(&root, "__pycache__/main.cpython-312.pyc", "bytecode")?;
    let output = scratch.path().join("out/project.md");

    let status = treedoc()
        .current_dir(scratch.path())
        .arg("--once")
        .arg(&root)
        .arg(&output)
        .status()?;
    assert!(status.success());

    let doc = fs::read_to_string(&output)?;
    assert!(doc.starts_with("# 项目文档\n"));
    assert!(doc.contains("### main.py\n\n```python\nprint('hi')\n```"));
    assert!(!doc.contains("__pycache__"));
    Ok(())
}

#[test]
fn dry_run_prints_rules_without_writing() -> TestResult {
    let scratch = tempdir()?;
    let root = scratch.path().join("app");
    fs::create_dir_all(&root)?;
    let output = scratch.path().join("project.md");

    let result = treedoc()
        .current_dir(scratch.path())
        .arg("--dry-run")
        .arg(&root)
        .arg(&output)
        .output()?;
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ignored_paths"));
    assert!(stdout.contains("ignored_content_paths"));
    assert!(stdout.contains("node_modules/"));
    assert!(!output.exists());
    Ok(())
}
