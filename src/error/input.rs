//! Command-line input errors

use super::MkpostError;

/// Creates an invalid argument error
pub fn invalid_argument(message: impl Into<String>) -> MkpostError {
    MkpostError::InvalidArgument {
        message: message.into(),
    }
}

/// The title was missing, empty, or only whitespace
pub fn empty_title() -> MkpostError {
    invalid_argument("post title must not be empty")
}
