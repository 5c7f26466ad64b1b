//! mkpost - blog post scaffolder
//!
//! Creates a dated, slugified Markdown file with a front-matter template in a
//! Jekyll site's `_posts` directory.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod clock;
mod commands;
mod config;
mod error;
mod logging;
mod post;
mod scaffold;
mod ui;

use cli::Cli;
use clock::SystemClock;
use config::Config;
use error::Result;

fn dispatch(cli: Cli) -> Result<()> {
    commands::new_post::run(cli, &SystemClock, Config::resolve)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(e.exit_code());
    }
}
