use std::path::PathBuf;
use thiserror::Error;

use crate::metadata::{FieldKey, FileCategory};

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// The exiftool executable could not be started.
    #[error("exiftool not found (tried `{program}`)")]
    ExifToolMissing { program: String },

    /// exiftool ran but exited with a failure status.
    #[error("exiftool {operation} failed: {stderr}")]
    ExifTool { operation: &'static str, stderr: String },

    /// The target path is missing or is not a regular file.
    #[error("{reason}: {}", .path.display())]
    InvalidTarget { path: PathBuf, reason: &'static str },

    #[error("field `{field}` does not apply to {category} files")]
    FieldNotApplicable { field: FieldKey, category: FileCategory },

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
