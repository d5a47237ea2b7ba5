use crate::handlers::setup::{is_tool_installed, run_command};
use crate::services::utils::get_project_root;
use anyhow::{Context, Result, bail};
use std::path::Path;

const WEB_CRATE: &str = "wayfarer-web";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

/// Compiles the web crate for the browser and runs `wasm-bindgen` over it.
///
/// # Errors
/// Returns an error if `wasm-bindgen` is missing, the build fails, or the
/// output directory cannot be written.
pub fn build_site(release: bool, out_dir: &Path) -> Result<()> {
    if !is_tool_installed("wasm-bindgen") {
        bail!("wasm-bindgen CLI not found. Run `cargo xtask setup` first.");
    }

    let profile = if release { "release" } else { "debug" };
    println!("📦 Building {WEB_CRATE} ({profile})...");

    let mut args = vec!["build", "-p", WEB_CRATE, "--target", WASM_TARGET];
    if release {
        args.push("--release");
    }
    run_command("cargo", &args)?;

    let root = get_project_root()?;
    let artifact = root
        .join("target")
        .join(WASM_TARGET)
        .join(profile)
        .join(format!("{}.wasm", WEB_CRATE.replace('-', "_")));
    if !artifact.exists() {
        bail!("Expected artifact not found at {}", artifact.display());
    }

    let out_dir = if out_dir.is_absolute() { out_dir.to_path_buf() } else { root.join(out_dir) };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let artifact = artifact.to_string_lossy();
    let out = out_dir.to_string_lossy();
    run_command("wasm-bindgen", &["--target", "web", "--out-dir", &out, &artifact])?;

    println!("✅ Bundle written to {out}");
    Ok(())
}
