//! # CLI Argument Definitions
//!
//! Subcommands, arguments and flags of `cargo xtask`, declared with `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Wayfarer workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Install the wasm target and the wasm-bindgen CLI
    Setup {},
    /// Compile the web bundle to wasm and generate its JS bindings
    Build {
        /// Build with the release profile
        #[arg(short, long)]
        release: bool,
        /// Where the generated `pkg` files are written
        #[arg(short, long, default_value = "target/site/pkg")]
        out_dir: PathBuf,
    },
    /// Manage the library crates in infra/ and crates/shared/
    Libs {
        #[command(subcommand)]
        action: LibraryAction,
    },
    /// Manage workspace Applications
    Apps {
        #[command(subcommand)]
        action: AppAction,
    },
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'wayfarer-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'wayfarer-' if missing)
        project: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LibraryAction {
    /// List the crates in infra/ and crates/shared/ with their descriptions
    List {},
}

#[derive(Debug, Subcommand)]
pub enum AppAction {
    /// List all applications in the apps/ directory with their descriptions
    List {},
}
