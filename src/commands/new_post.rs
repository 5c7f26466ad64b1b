//! Default command: scaffold one post from the positional title

use std::path::PathBuf;

use crate::cli::Cli;
use crate::clock::Clock;
use crate::config::Config;
use crate::error::Result;
use crate::post::require_title;
use crate::scaffold::scaffold;
use crate::ui;

/// Scaffold the post named on the command line and report where it went.
///
/// The title is checked before `resolve_config` runs, so a bad title never
/// touches the filesystem.
pub fn run<F>(cli: Cli, clock: &dyn Clock, resolve_config: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<Config>,
{
    let title = require_title(cli.title.as_deref())?;
    let config = resolve_config()?;
    tracing::debug!(
        author = %config.author,
        posts_dir = %config.posts_dir.display(),
        "Resolved configuration"
    );
    let path = scaffold(Some(title), clock, &config)?;
    ui::print_created(&path);
    Ok(path)
}
