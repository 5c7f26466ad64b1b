//! Runtime configuration
//!
//! Compiled-in defaults, each overridable by an environment variable:
//! - `MKPOST_AUTHOR`: author written into the front-matter
//! - `MKPOST_POSTS_DIR`: directory the post is written to

use std::path::{Path, PathBuf};

use crate::error::{Result, io_error};

/// Author used when `MKPOST_AUTHOR` is unset or empty
pub const DEFAULT_AUTHOR: &str = "Dinko Osrecki";

/// Name of the Jekyll posts directory
pub const POSTS_DIR_NAME: &str = "_posts";

/// Environment variable overriding the author
pub const AUTHOR_ENV: &str = "MKPOST_AUTHOR";

/// Environment variable overriding the posts directory
pub const POSTS_DIR_ENV: &str = "MKPOST_POSTS_DIR";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub author: String,
    pub posts_dir: PathBuf,
}

impl Config {
    pub fn new(author: impl Into<String>, posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            author: author.into(),
            posts_dir: posts_dir.into(),
        }
    }

    /// Resolve from the process environment and the running executable's location
    pub fn resolve() -> Result<Self> {
        Self::resolve_with(|key| std::env::var(key).ok(), std::env::current_exe)
    }

    /// Resolve using the given variable lookup and executable locator.
    ///
    /// The executable is only located when `MKPOST_POSTS_DIR` is not set.
    pub fn resolve_with<L, E>(lookup: L, current_exe: E) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
        E: FnOnce() -> std::io::Result<PathBuf>,
    {
        let author = non_empty(lookup(AUTHOR_ENV)).unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        let posts_dir = match non_empty(lookup(POSTS_DIR_ENV)) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let exe = current_exe()
                    .map_err(|e| io_error(format!("Could not locate executable: {e}")))?;
                default_posts_dir(&exe)?
            }
        };

        Ok(Self::new(author, posts_dir))
    }
}

/// `../_posts` relative to the directory holding `exe`, not the working directory.
///
/// Symlinks to the executable are followed so a linked binary still finds the
/// site it was built for.
pub fn default_posts_dir(exe: &Path) -> Result<PathBuf> {
    let exe = dunce::canonicalize(exe).unwrap_or_else(|_| exe.to_path_buf());
    let exe_dir = exe
        .parent()
        .ok_or_else(|| io_error(format!("Executable has no parent directory: {}", exe.display())))?;
    Ok(exe_dir.join("..").join(POSTS_DIR_NAME))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
