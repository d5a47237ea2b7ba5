use crate::services::utils::{CrateKind, get_workspace_crates, render_crate_table};
use anyhow::Result;

/// Lists all applications in the `apps/` directory.
///
/// # Errors
/// Returns an error if the directory cannot be read or crate metadata cannot be parsed.
pub fn list_apps() -> Result<()> {
    let applications = get_workspace_crates(CrateKind::App)?;

    if applications.is_empty() {
        println!("ℹ️ No apps found in 'apps/' directory.");
        return Ok(());
    }

    render_crate_table("Applications", &applications);
    Ok(())
}
