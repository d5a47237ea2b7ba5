use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Every workspace crate except `xtask` carries this prefix.
const CRATE_PREFIX: &str = "wayfarer-";

/// What a workspace folder holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrateKind {
    /// Deliverables under `apps/`.
    App,
    /// Shared code under `infra/` and `crates/shared/`.
    Library,
}

/// Workspace folders scanned for crates, relative to the root.
const CRATE_DIRS: &[(&str, CrateKind)] =
    &[("apps", CrateKind::App), ("infra", CrateKind::Library), ("crates/shared", CrateKind::Library)];

/// Folders holding crates of `kind`, relative to the root.
pub fn dirs_of(kind: CrateKind) -> impl Iterator<Item = &'static str> {
    CRATE_DIRS.iter().filter(move |(_, k)| *k == kind).map(|(dir, _)| *dir)
}

/// # Errors
/// Returns an error if the xtask manifest directory has no parent.
pub fn get_project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("Could not find project root from xtask manifest")
}

#[derive(Debug, Deserialize)]
pub struct CrateInfo {
    /// Crate folder relative to the root, such as `infra/logger`.
    #[serde(skip)]
    pub dir: String,
    pub package: PackageInfo,
}

#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub description: Option<String>,
}

fn crates_in(root: &Path, sub_dir: &str) -> Result<Vec<CrateInfo>> {
    let parent = root.join(sub_dir);
    if !parent.exists() {
        return Ok(Vec::new());
    }

    let mut crates = Vec::new();
    for entry in fs::read_dir(&parent).with_context(|| format!("Reading {sub_dir}"))? {
        let path = entry?.path();
        let manifest = path.join("Cargo.toml");
        if !path.is_dir() || !manifest.exists() {
            continue;
        }

        let content = fs::read_to_string(&manifest)?;
        let mut info: CrateInfo =
            toml::from_str(&content).with_context(|| format!("Parsing {}", manifest.display()))?;
        let folder = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        info.dir = format!("{sub_dir}/{folder}");
        crates.push(info);
    }
    Ok(crates)
}

/// Every crate of `kind`, sorted by folder.
///
/// # Errors
/// Returns an error if a folder cannot be read or a manifest cannot be parsed.
pub fn get_workspace_crates(kind: CrateKind) -> Result<Vec<CrateInfo>> {
    let root = get_project_root()?;
    let mut crates = Vec::new();
    for dir in dirs_of(kind) {
        crates.extend(crates_in(&root, dir)?);
    }
    crates.sort_by(|a, b| a.dir.cmp(&b.dir));
    Ok(crates)
}

fn crate_row(info: &CrateInfo) -> String {
    let desc = info.package.description.as_deref().unwrap_or("-");
    format!("{:<22} {:<18} {}", info.dir, info.package.name, desc)
}

pub fn render_crate_table(title: &str, crates: &[CrateInfo]) {
    println!("\n{title}:\n");
    println!("{:<22} {:<18} Description", "Path", "Crate");
    println!("{:-<80}", "");
    for info in crates {
        println!("{}", crate_row(info));
    }
    println!();
}

/// Prefixes a short crate name such as `kernel` with `wayfarer-`.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project.starts_with(CRATE_PREFIX) { project.to_owned() } else { format!("{CRATE_PREFIX}{project}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_project_name() {
        assert_eq!(normalize_project_name("web"), "wayfarer-web");
        assert_eq!(normalize_project_name("wayfarer-logger"), "wayfarer-logger");
    }

    #[test]
    fn test_library_dirs() {
        assert_eq!(dirs_of(CrateKind::Library).collect::<Vec<_>>(), ["infra", "crates/shared"]);
        assert_eq!(dirs_of(CrateKind::App).collect::<Vec<_>>(), ["apps"]);
    }

    #[test]
    fn test_libraries_span_both_folders() {
        let libs = get_workspace_crates(CrateKind::Library).unwrap();
        let dirs: Vec<&str> = libs.iter().map(|info| info.dir.as_str()).collect();

        assert!(dirs.contains(&"infra/logger"));
        assert!(dirs.contains(&"crates/shared/kernel"));
        assert!(dirs.is_sorted());
        assert!(libs.iter().all(|info| info.package.name.starts_with(CRATE_PREFIX)));
    }

    #[test]
    fn test_apps_are_discovered() {
        let apps = get_workspace_crates(CrateKind::App).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].dir, "apps/web");
        assert_eq!(apps[0].package.name, "wayfarer-web");
    }

    #[test]
    fn test_missing_folder_yields_nothing() {
        let root = get_project_root().unwrap();
        assert!(crates_in(&root, "no-such-dir").unwrap().is_empty());
    }

    #[test]
    fn test_row_shows_path() {
        let info = CrateInfo {
            dir: "infra/derive".into(),
            package: PackageInfo { name: "wayfarer-derive".into(), description: None },
        };
        let row = crate_row(&info);
        assert!(row.starts_with("infra/derive "));
        assert!(row.contains("wayfarer-derive"));
        assert!(row.trim_end().ends_with('-'));
    }
}
