#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{apps, build, libs, setup, testing};
use crate::models::args::{AppAction, AppCommands, Cli, LibraryAction};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Setup {} => setup::setup_project()?,
        AppCommands::Build { release, out_dir } => build::build_site(release, &out_dir)?,
        AppCommands::Libs { action } => match action {
            LibraryAction::List {} => libs::list_libs()?,
        },
        AppCommands::Apps { action } => match action {
            AppAction::List {} => apps::list_apps()?,
        },
        AppCommands::Test { project } => testing::run_tests(project.as_deref())?,
        AppCommands::Doctest { project } => testing::run_doctests(project.as_deref())?,
    }

    Ok(())
}
