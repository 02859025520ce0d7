//! Integration tests for the macsnap binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MISSING_BREW: &str = "macsnap-test-no-such-brew";

const REPORT: &str = "### macOS Installed Applications ###
Safari
Xcode

### Homebrew Formulae ###
a
b
c

### Homebrew Casks ###
firefox
";

/// A macsnap command isolated from the user's home and environment.
fn macsnap(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("macsnap"));
    cmd.env("HOME", home)
        .env_remove("MACSNAP_BREW")
        .env_remove("MACSNAP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_report(dir: &Path) -> PathBuf {
    let path = dir.join("macos_installed_software_2024-03-09_14-05-07.txt");
    fs::write(&path, REPORT).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--restore"))
        .stdout(predicate::str::contains("--index"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_two_modes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .args(["--index", "--restore", "list.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("macsnap"));
    Ok(())
}

#[test]
fn restore_missing_file_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .args(["--restore", "/nonexistent/path.txt", "--brew", MISSING_BREW])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "File not found at '/nonexistent/path.txt'",
        ));
    Ok(())
}

#[test]
fn index_without_brew_writes_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .current_dir(temp.path())
        .args(["--brew", MISSING_BREW])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Report saved to: ./macos_installed_software_",
        ));

    let reports: Vec<_> = fs::read_dir(temp.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("macos_installed_software_") && name.ends_with(".txt"))
        .collect();
    assert_eq!(reports.len(), 1);

    let text = fs::read_to_string(temp.path().join(&reports[0]))?;
    assert!(text.contains("### Homebrew Formulae ###\nHomebrew not found or no formulae installed.\n"));
    assert!(text.contains("### Homebrew Casks ###\nHomebrew not found or no casks installed.\n"));
    Ok(())
}

#[test]
fn index_honours_output_dir_and_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let apps = temp.path().join("apps");
    let out = temp.path().join("out");
    fs::create_dir_all(apps.join("Safari.app"))?;
    fs::create_dir_all(apps.join("Notes.app"))?;
    fs::create_dir_all(&out)?;

    let config = temp.path().join("macsnap.yml");
    fs::write(
        &config,
        format!(
            "application_dirs: [{}]\nbrew: {}\n",
            apps.display(),
            MISSING_BREW
        ),
    )?;

    macsnap(temp.path())
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let entry = fs::read_dir(&out)?.next().expect("report written")?;
    let text = fs::read_to_string(entry.path())?;
    assert!(text.starts_with("### macOS Installed Applications ###\nNotes\nSafari\n\n"));
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    macsnap(temp.path())
        .current_dir(temp.path())
        .args(["--config", "/nonexistent/macsnap.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn restore_without_brew_lists_manual_apps() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let report = write_report(temp.path());

    macsnap(temp.path())
        .arg("--restore")
        .arg(&report)
        .args(["--brew", MISSING_BREW])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("NOTE: Interactive selection is unavailable"))
        .stdout(predicate::str::contains("  - Safari"))
        .stderr(predicate::str::contains(
            "command not found. Please install Homebrew first.",
        ));
    Ok(())
}

#[test]
fn restore_dry_run_spawns_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let report = write_report(temp.path());

    macsnap(temp.path())
        .arg("--restore")
        .arg(&report)
        .args(["--brew", MISSING_BREW, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Would run: {} install b",
            MISSING_BREW
        )))
        .stdout(predicate::str::contains("install --cask firefox"))
        .stdout(predicate::str::contains("Restore process complete."));
    Ok(())
}

#[cfg(unix)]
mod with_fake_brew {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A `brew` stand-in that logs its arguments and fails to install `b`.
    fn fake_brew(dir: &Path) -> PathBuf {
        let path = dir.join("brew");
        fs::write(
            &path,
            "#!/bin/sh\n\
             echo \"$@\" >> \"$FAKE_BREW_LOG\"\n\
             if [ \"$2\" = \"b\" ]; then echo 'Error: No available formula with the name \"b\".' >&2; exit 1; fi\n\
             exit 0\n",
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn restore_continues_past_failed_item() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let report = write_report(temp.path());
        let brew = fake_brew(temp.path());
        let log = temp.path().join("brew.log");

        macsnap(temp.path())
            .env("FAKE_BREW_LOG", &log)
            .arg("--restore")
            .arg(&report)
            .arg("--brew")
            .arg(&brew)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to install 'b'"))
            .stdout(predicate::str::contains("Restore process complete."));

        let calls = fs::read_to_string(&log)?;
        assert_eq!(
            calls.lines().collect::<Vec<_>>(),
            vec!["install a", "install b", "install c", "install --cask firefox"]
        );
        Ok(())
    }
}
