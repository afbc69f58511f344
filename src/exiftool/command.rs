use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::{MetadataTool, ToolOutput};
use crate::error::{Error, Result};
use crate::metadata::TagAssignment;

/// File names are passed through as UTF-8 on every platform.
const CHARSET_ARGS: [&str; 2] = ["-charset", "filename=utf8"];

/// Runs the `exiftool` executable.
///
/// # Example
///
/// ```rust,no_run
/// use hades::exiftool::{ExifTool, MetadataTool};
/// use std::path::Path;
///
/// let tool = ExifTool::new();
/// println!("exiftool {}", tool.probe()?);
/// print!("{}", tool.read_all(Path::new("photo.jpg"))?);
/// # Ok::<(), hades::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExifTool {
    program: PathBuf,
}

impl Default for ExifTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ExifTool {
    /// Use `exiftool` from the search path.
    pub fn new() -> Self {
        Self::with_program("exiftool")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, operation: &'static str, args: Vec<OsString>) -> Result<ToolOutput> {
        log::debug!("{} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        check_status(operation, output)
    }

    fn spawn_error(&self, e: std::io::Error) -> Error {
        if e.kind() == ErrorKind::NotFound {
            Error::ExifToolMissing {
                program: self.program.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    }
}

fn check_status(operation: &'static str, output: Output) -> Result<ToolOutput> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let stderr = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            s => s.to_string(),
        };
        return Err(Error::ExifTool { operation, stderr });
    }

    Ok(ToolOutput { stdout, stderr })
}

/// A relative path starting with `-` would be read as an option; anchor it
/// to the current directory.
fn path_arg(path: &Path) -> OsString {
    if path.is_relative() && path.as_os_str().to_string_lossy().starts_with('-') {
        Path::new(".").join(path).into_os_string()
    } else {
        path.as_os_str().to_owned()
    }
}

/// Arguments for dumping every tag.
pub fn read_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = CHARSET_ARGS.iter().map(OsString::from).collect();
    args.push(path_arg(path));
    args
}

/// Arguments for deleting every writable tag in place.
pub fn clear_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-all=".into(), "-overwrite_original".into()];
    args.extend(CHARSET_ARGS.iter().map(OsString::from));
    args.push(path_arg(path));
    args
}

/// Arguments for writing assignments in place. `-P` keeps the file's
/// modification time; the caller sets it explicitly afterwards.
pub fn write_args(path: &Path, tags: &[TagAssignment]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-overwrite_original".into(), "-P".into()];
    args.extend(CHARSET_ARGS.iter().map(OsString::from));
    args.extend(tags.iter().map(|t| OsString::from(t.to_arg())));
    args.push(path_arg(path));
    args
}

impl MetadataTool for ExifTool {
    fn name(&self) -> &str {
        "ExifTool"
    }

    fn probe(&self) -> Result<String> {
        let output = self.run("version check", vec!["-ver".into()])?;
        Ok(output.stdout.trim().to_string())
    }

    fn read_all(&self, path: &Path) -> Result<String> {
        Ok(self.run("read", read_args(path))?.stdout)
    }

    fn clear_all(&self, path: &Path) -> Result<ToolOutput> {
        self.run("clear", clear_args(path))
    }

    fn write_tags(&self, path: &Path, tags: &[TagAssignment]) -> Result<ToolOutput> {
        self.run("write", write_args(path, tags))
    }
}
