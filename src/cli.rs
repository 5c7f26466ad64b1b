//! CLI definition using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// mkpost - scaffold a new blog post
///
/// Writes `YYYY-MM-DD-<slug>.md` with a front-matter template into the site's `_posts` directory.
#[derive(Parser, Debug)]
#[command(
    name = "mkpost",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold a dated blog post with front-matter",
    long_about = "Creates <posts dir>/YYYY-MM-DD-<slug>.md from a post title. The slug is the \
                  lowercased title with each run of whitespace replaced by a hyphen. An existing \
                  post with the same name is overwritten.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mkpost \"My First Post\"      \x1b[90m# _posts/2024-03-05-my-first-post.md\x1b[0m\n\n\
                  \x1b[1m\x1b[32mEnvironment:\x1b[0m\n   \
                  MKPOST_POSTS_DIR   Posts directory (default: ../_posts next to the executable)\n   \
                  MKPOST_AUTHOR      Author written into the front-matter\n   \
                  MKPOST_LOG         Log filter, e.g. debug\n"
)]
pub struct Cli {
    /// Post title; quote it when it contains spaces
    pub title: Option<String>,
}
