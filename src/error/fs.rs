//! File system errors

use std::path::Path;

use super::MkpostError;

/// Creates an error for a posts directory that does not exist
pub fn posts_dir_not_found(path: impl AsRef<Path>) -> MkpostError {
    MkpostError::PostsDirNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an error for a failed post write
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> MkpostError {
    MkpostError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MkpostError {
    MkpostError::IoError {
        message: message.into(),
    }
}
