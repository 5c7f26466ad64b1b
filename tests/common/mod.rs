//! Common test utilities for mkpost integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway Jekyll site with a `_posts` directory
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new site with an empty `_posts` directory
    pub fn new() -> Self {
        let site = Self::without_posts_dir();
        std::fs::create_dir_all(site.posts_dir()).expect("Failed to create _posts directory");
        site
    }

    /// Create a site root with no `_posts` directory
    pub fn without_posts_dir() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.path.join("_posts")
    }

    /// Read a post by file name
    #[allow(dead_code)]
    pub fn read_post(&self, name: &str) -> String {
        std::fs::read_to_string(self.posts_dir().join(name)).expect("Failed to read post")
    }

    /// File names currently in `_posts`, sorted
    pub fn post_names(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.posts_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| {
                e.expect("Failed to read dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// Install a copy of the mkpost binary at `<site>/<dir>/mkpost`
    #[allow(dead_code)]
    pub fn install_binary(&self, dir: &str) -> PathBuf {
        let bin_dir = self.path.join(dir);
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        let target = bin_dir.join(format!("mkpost{}", std::env::consts::EXE_SUFFIX));
        std::fs::copy(mkpost_bin(), &target).expect("Failed to copy mkpost binary");
        target
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to the mkpost binary under test
pub fn mkpost_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mkpost"))
}

/// Command for the real binary writing into `posts_dir`, isolated from the caller's environment
pub fn mkpost_cmd_for_posts(posts_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(mkpost_bin());
    cmd.env("MKPOST_POSTS_DIR", posts_dir)
        .env_remove("MKPOST_AUTHOR")
        .env_remove("MKPOST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Dates the binary may have stamped if it ran between `before` and now
#[allow(dead_code)]
pub fn candidate_dates(before: chrono::NaiveDate) -> Vec<String> {
    let after = chrono::Local::now().date_naive();
    let mut dates = vec![before.format("%Y-%m-%d").to_string()];
    if after != before {
        dates.push(after.format("%Y-%m-%d").to_string());
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_creation() {
        let site = TestSite::new();
        assert!(site.posts_dir().is_dir());
        assert!(site.post_names().is_empty());
    }

    #[test]
    fn test_site_without_posts_dir() {
        let site = TestSite::without_posts_dir();
        assert!(site.path.exists());
        assert!(!site.posts_dir().exists());
    }
}
