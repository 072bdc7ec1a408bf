//! Runs the `querygen` binary and checks its exit-code contract.

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};

fn querygen(cwd: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_querygen"))
        .args(args)
        .current_dir(cwd)
        .output()?)
}

#[test]
fn bare_run_ignores_cwd_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("querygen.toml"), "output = [")?;

    let output = querygen(dir.path(), &[])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let root = dir.path().join("resources/tree-sitter-queries");
    assert_eq!(
        std::fs::read_to_string(root.join("go/functions.scm"))?,
        "[(function_declaration) (method_declaration)] @function"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("zig/imports.scm"))?,
        "; No imports queries for zig"
    );
    Ok(())
}

#[test]
fn bare_run_ignores_cwd_overrides() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("querygen.toml"),
        "output = \"elsewhere\"\n[overrides.go]\nfunctions = \"X\"\n",
    )?;

    let output = querygen(dir.path(), &[])?;
    assert!(output.status.success());
    assert!(!dir.path().join("elsewhere").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("resources/tree-sitter-queries/go/functions.scm"))?,
        "[(function_declaration) (method_declaration)] @function"
    );
    Ok(())
}

#[test]
fn explicit_config_is_applied() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("custom.toml"),
        "output = \"elsewhere\"\n[overrides.go]\nfunctions = \"X\"\n",
    )?;

    let output = querygen(dir.path(), &["--config", "custom.toml"])?;
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(dir.path().join("elsewhere/go/functions.scm"))?, "X");
    Ok(())
}

#[test]
fn write_failure_exits_non_zero() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out");
    std::fs::create_dir_all(out.join("ruby/classes.scm"))?;

    let out_arg = out.to_string_lossy().to_string();
    let output = querygen(dir.path(), &["--out", &out_arg])?;
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ruby/classes"));

    // Languages ahead of ruby in the catalog were still written
    assert!(out.join("go/functions.scm").is_file());
    Ok(())
}
