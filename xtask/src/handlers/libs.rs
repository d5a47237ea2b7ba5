use crate::services::utils::{CrateKind, get_workspace_crates, render_crate_table};
use anyhow::Result;

/// Lists the library crates in `infra/` and `crates/shared/`.
///
/// # Errors
/// Returns an error if a directory cannot be read or crate metadata cannot be parsed.
pub fn list_libs() -> Result<()> {
    let libraries = get_workspace_crates(CrateKind::Library)?;

    if libraries.is_empty() {
        println!("ℹ️ No libs found in 'infra/' or 'crates/shared/'.");
        return Ok(());
    }

    render_crate_table("Libraries", &libraries);
    Ok(())
}
