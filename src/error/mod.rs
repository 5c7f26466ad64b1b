//! Error types and handling for mkpost
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Invalid command-line input
//! - [`fs`]: File system errors

pub mod fs;
pub mod input;

pub use fs::{io_error, posts_dir_not_found, write_failed as file_write_failed};
pub use input::empty_title;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mkpost operations
#[derive(Error, Diagnostic, Debug)]
pub enum MkpostError {
    // Input errors
    #[error("Invalid argument: {message}")]
    #[diagnostic(
        code(mkpost::input::invalid_argument),
        help("Pass the post title as a single quoted argument, e.g. mkpost \"My First Post\"")
    )]
    InvalidArgument { message: String },

    // File system errors
    #[error("Posts directory not found: {path}")]
    #[diagnostic(
        code(mkpost::fs::posts_dir_not_found),
        help("Create the _posts directory or point MKPOST_POSTS_DIR at an existing one")
    )]
    PostsDirNotFound { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mkpost::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mkpost::fs::io_error))]
    IoError { message: String },
}

impl MkpostError {
    /// Whether this error came from the file system rather than from user input
    pub fn is_io(&self) -> bool {
        !matches!(self, MkpostError::InvalidArgument { .. })
    }

    /// Process exit code: 2 for bad input (as clap uses for usage errors), 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_io() { 1 } else { 2 }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MkpostError>;
