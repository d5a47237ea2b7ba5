use crate::services::utils::normalize_project_name;
use anyhow::{Result, bail};
use std::process::Command;

/// `None` or `all` selects the whole workspace.
fn is_workspace(project: Option<&str>) -> bool {
    project.is_none_or(|value| value == "all")
}

fn push_target(args: &mut Vec<String>, project: Option<&str>) {
    match project {
        Some(project) if !is_workspace(Some(project)) => {
            args.push("-p".into());
            args.push(normalize_project_name(project));
        },
        _ => args.push("--workspace".into()),
    }
}

/// Runs host tests in the workspace or a specific crate, through `cargo-nextest`
/// when it is installed.
///
/// # Errors
/// Returns an error if the test runner cannot be started or a test fails.
pub fn run_tests(project: Option<&str>) -> Result<()> {
    let label = if is_workspace(project) { "workspace" } else { "crate" };
    let has_nextest = Command::new("cargo-nextest").arg("--version").output().is_ok();

    let mut args: Vec<String> =
        if has_nextest { vec!["nextest".into(), "run".into()] } else { vec!["test".into()] };
    push_target(&mut args, project);
    args.push("--all-features".into());

    if has_nextest {
        args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never", "--status-level", "skip"]
                .into_iter()
                .map(String::from),
        );
    } else {
        args.extend(["--", "-q"].into_iter().map(String::from));
    }

    println!("🧪 Running {label} tests via '{}'...", if has_nextest { "nextest" } else { "cargo test" });
    let status = Command::new("cargo").args(args).status()?;

    if !status.success() {
        bail!("Tests failed!");
    }
    Ok(())
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if the doctest run fails.
pub fn run_doctests(project: Option<&str>) -> Result<()> {
    let label = if is_workspace(project) { "workspace" } else { "crate" };

    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];
    push_target(&mut args, project);
    args.push("--all-features".into());

    println!("📚 Running {label} doc tests via 'cargo test --doc'...");
    let status = Command::new("cargo").args(args).status()?;

    if !status.success() {
        bail!("Doc tests failed!");
    }
    Ok(())
}
