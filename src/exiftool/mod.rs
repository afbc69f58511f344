//! The external metadata tool.
//!
//! Everything that touches file contents goes through [`MetadataTool`]. The
//! shipped implementation, [`ExifTool`], shells out to Phil Harvey's
//! `exiftool`; tests substitute a recording fake.

mod command;

pub use command::{ExifTool, clear_args, read_args, write_args};

use std::path::Path;

use crate::error::Result;
use crate::metadata::TagAssignment;

/// Captured output of a successful tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// One-shot, blocking operations on a single file.
pub trait MetadataTool {
    /// The display name of the tool.
    fn name(&self) -> &str;
    /// Check the tool can be run; returns its version string.
    fn probe(&self) -> Result<String>;
    /// Dump all metadata as human-readable text.
    fn read_all(&self, path: &Path) -> Result<String>;
    /// Remove every writable tag, rewriting the file in place.
    fn clear_all(&self, path: &Path) -> Result<ToolOutput>;
    /// Apply all assignments in one call, rewriting the file in place.
    fn write_tags(&self, path: &Path, tags: &[TagAssignment]) -> Result<ToolOutput>;
}
