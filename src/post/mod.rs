//! Post model: the request built from a title and the file derived from it
//!
//! - [`slug`]: title to slug
//! - [`frontmatter`]: front-matter body rendering

pub mod frontmatter;
pub mod slug;

use chrono::{DateTime, Local, NaiveDate};
use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::error::{Result, empty_title};

/// Extension of every scaffolded post
pub const POST_EXTENSION: &str = "md";

/// Everything needed to scaffold one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub title: String,
    pub creation_date: NaiveDate,
    pub creation_timestamp: DateTime<Local>,
    pub author: String,
}

/// The title, or `InvalidArgument` when it is missing or empty.
///
/// Whitespace-only titles are accepted; they slug to hyphens.
pub fn require_title(title: Option<&str>) -> Result<&str> {
    title.filter(|t| !t.is_empty()).ok_or_else(empty_title)
}

impl PostRequest {
    /// Build a request stamped with the clock's current time.
    ///
    /// Fails with `InvalidArgument` when the title is missing or empty.
    pub fn new(title: Option<&str>, author: &str, clock: &dyn Clock) -> Result<Self> {
        let title = require_title(title)?;
        let now = clock.now();
        Ok(Self {
            title: title.to_string(),
            creation_date: now.date_naive(),
            creation_timestamp: now,
            author: author.to_string(),
        })
    }

    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }

    /// `YYYY-MM-DD-<slug>.md`
    pub fn filename(&self) -> String {
        format!(
            "{}-{}.{POST_EXTENSION}",
            self.creation_date.format("%Y-%m-%d"),
            self.slug()
        )
    }

    /// Derive the file to write under `posts_dir`
    pub fn scaffold_into(&self, posts_dir: &Path) -> ScaffoldedFile {
        ScaffoldedFile {
            path: posts_dir.join(self.filename()),
            content: frontmatter::render(&self.title, &self.creation_timestamp, &self.author),
        }
    }
}

/// A rendered post and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedFile {
    pub path: PathBuf,
    pub content: String,
}
