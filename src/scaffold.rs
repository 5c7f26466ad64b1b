//! The scaffold pipeline: validate the title, derive the post, write it.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::Config;
use crate::error::{Result, file_write_failed, posts_dir_not_found};
use crate::post::{PostRequest, ScaffoldedFile};

/// Scaffold a post for `title` and return the path written.
///
/// An existing post with the same date and slug is overwritten. The posts
/// directory is never created.
pub fn scaffold(title: Option<&str>, clock: &dyn Clock, config: &Config) -> Result<PathBuf> {
    let request = PostRequest::new(title, &config.author, clock)?;
    let file = request.scaffold_into(&config.posts_dir);
    debug!(
        title = %request.title,
        slug = %request.slug(),
        path = %file.path.display(),
        "Derived post"
    );

    if !config.posts_dir.is_dir() {
        return Err(posts_dir_not_found(&config.posts_dir));
    }

    write_post(&file)?;
    info!(path = %file.path.display(), "Wrote post");
    Ok(file.path)
}

/// Create or truncate the target and write the body. The handle closes on drop,
/// including when a write fails part way.
fn write_post(file: &ScaffoldedFile) -> Result<()> {
    let err = |e: std::io::Error| file_write_failed(&file.path, e);
    let mut handle = File::create(&file.path).map_err(err)?;
    handle.write_all(file.content.as_bytes()).map_err(err)?;
    handle.flush().map_err(err)?;
    Ok(())
}
