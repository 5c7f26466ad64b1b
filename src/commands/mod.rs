//! Command implementations for mkpost CLI

pub mod new_post;
