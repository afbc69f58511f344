use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::console::Console;
use crate::error::Error;
use crate::exiftool::{MetadataTool, ToolOutput, clear_args};
use crate::generate::{InjectionMode, obtain_values};
use crate::metadata::{FieldKey, FileCategory, ValueSet, map_to_tags};
use crate::timestamp;

// ANSI accents for the summary table
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Width of the dotted label column in the summary.
const LABEL_WIDTH: usize = 30;

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The operator closed the input before the run finished.
    Cancelled,
}

/// Check the target exists and is a regular file, and detect its category.
pub fn validate_target(path: &Path) -> crate::error::Result<FileCategory> {
    if !path.exists() {
        return Err(Error::InvalidTarget {
            path: path.to_path_buf(),
            reason: "File not found",
        });
    }
    if !path.is_file() {
        return Err(Error::InvalidTarget {
            path: path.to_path_buf(),
            reason: "Not a file",
        });
    }
    Ok(FileCategory::from_path(path))
}

/// One interactive edit of one file.
///
/// The sequence is fixed: probe the tool, validate the target, show current
/// metadata, offer a wipe, pick an injection mode, confirm and write, then
/// show the result.
pub struct Session<'a, T: MetadataTool + ?Sized> {
    tool: &'a T,
    config: &'a Config,
}

impl<'a, T: MetadataTool + ?Sized> Session<'a, T> {
    pub fn new(tool: &'a T, config: &'a Config) -> Self {
        Self { tool, config }
    }

    /// Run the full interactive flow. `path` is prompted for when absent.
    pub fn run<R: BufRead, W: Write>(
        &self,
        path: Option<PathBuf>,
        console: &mut Console<R, W>,
    ) -> Result<Outcome> {
        match self.run_steps(path, console) {
            Ok(()) => Ok(Outcome::Completed),
            Err(e) if matches!(e.downcast_ref::<Error>(), Some(Error::InputClosed)) => {
                log::debug!("Input closed, stopping");
                Ok(Outcome::Cancelled)
            }
            Err(e) => Err(e),
        }
    }

    /// Print the current metadata of a file and return.
    ///
    /// Unlike the reads inside [`Session::run`], a read failure here is the
    /// whole operation failing and is returned.
    pub fn show<R: BufRead, W: Write>(
        &self,
        path: &Path,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        self.check_tool()?;
        validate_target(path)?;
        let text = self
            .tool
            .read_all(path)
            .context("Error reading metadata")?;
        console.say(text.trim_end())?;
        Ok(())
    }

    fn run_steps<R: BufRead, W: Write>(
        &self,
        path: Option<PathBuf>,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        self.check_tool()?;

        let path = match path {
            Some(p) => p,
            None => PathBuf::from(console.prompt("Enter file path")?),
        };
        let category = validate_target(&path)?;
        log::info!(
            "File validated: {}",
            std::path::absolute(&path).unwrap_or_else(|_| path.clone()).display()
        );
        log::info!("File type detected: {}", category.as_str().to_uppercase());

        self.print_metadata(&path, "Current Metadata", console)?;

        console.blank()?;
        if console.confirm("[?] Clean all metadata?")? {
            self.clear(&path, console)?;
        }

        console.blank()?;
        console.say("[?] Inject custom metadata?")?;
        console.say("  [1] Manual input")?;
        console.say("  [2] Random generation")?;
        console.say("  [3] Skip")?;
        let mode = InjectionMode::from_choice(&console.prompt("Select option (1/2/3)")?);
        log::debug!("Injection mode: {mode:?}");

        let values = obtain_values(mode, category, console)?;
        if !values.is_empty() {
            self.print_summary(&values, console)?;
            console.blank()?;
            if console.confirm("[?] Confirm injection?")? {
                self.inject(&path, &values, console)?;
            }
        }

        self.print_metadata(&path, "Final Metadata State", console)?;
        console.blank()?;
        console.say("[✓] Operation completed successfully")?;
        Ok(())
    }

    fn check_tool(&self) -> Result<()> {
        let version = self.tool.probe()?;
        log::info!("{} {version} detected", self.tool.name());
        Ok(())
    }

    /// Reading is best-effort: a failure is reported and the run goes on.
    fn print_metadata<R: BufRead, W: Write>(
        &self,
        path: &Path,
        heading: &str,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.blank()?;
        console.say(format!("[*] {heading}:"))?;
        match self.tool.read_all(path) {
            Ok(text) => console.say(text.trim_end())?,
            Err(e) => log::error!("Error reading metadata: {e}"),
        }
        Ok(())
    }

    fn clear<R: BufRead, W: Write>(&self, path: &Path, console: &mut Console<R, W>) -> Result<()> {
        if self.config.dry_run {
            log::info!("DRY RUN — metadata not wiped");
            let args: Vec<_> = clear_args(path)
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            console.say(format!("  {DIM}{}{RESET}", args.join(" ")))?;
            return Ok(());
        }

        log::info!("Initiating metadata removal...");
        let output = self.tool.clear_all(path).context("Cleaning failed")?;
        log::info!("Metadata successfully wiped");
        echo_tool_output(&output, console)
    }

    fn print_summary<R: BufRead, W: Write>(
        &self,
        values: &ValueSet,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.blank()?;
        console.say(format!("{BOLD}{}{RESET}", "=".repeat(65)))?;
        console.say(format!(
            "{BOLD}[*] Metadata Summary - {}:{RESET}",
            values.category().as_str().to_uppercase()
        ))?;
        console.blank()?;
        console.say(render_summary(values))?;
        console.say(format!("{BOLD}{}{RESET}", "=".repeat(65)))?;

        if self.config.json {
            let json =
                serde_json::to_string_pretty(values).context("Failed to serialize values")?;
            console.say(json)?;
        }
        Ok(())
    }

    fn inject<R: BufRead, W: Write>(
        &self,
        path: &Path,
        values: &ValueSet,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let tags = map_to_tags(values);
        log::info!(
            "Injecting {} tag(s) for {} file...",
            tags.len(),
            values.category().as_str().to_uppercase()
        );

        if self.config.dry_run {
            log::info!("DRY RUN — no changes written");
            for tag in &tags {
                console.say(format!("  {DIM}{tag}{RESET}"))?;
            }
            return Ok(());
        }

        let output = self
            .tool
            .write_tags(path, &tags)
            .context("Injection failed")?;
        echo_tool_output(&output, console)?;

        if let Some(modified) = values.get(FieldKey::ModifyDate) {
            log::info!("Modifying filesystem timestamps...");
            match timestamp::set_file_times(path, modified) {
                Ok(_) => log::info!("Filesystem timestamp modified"),
                Err(e) => log::warn!("Filesystem timestamp modification failed: {e:#}"),
            }
        }

        log::info!("Metadata injection complete");
        Ok(())
    }
}

/// Dotted two-column listing of a value set, one field per line.
pub fn render_summary(values: &ValueSet) -> String {
    values
        .iter()
        .map(|(field, value)| format!("  {:.<LABEL_WIDTH$} {value}", field.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn echo_tool_output<R: BufRead, W: Write>(
    output: &ToolOutput,
    console: &mut Console<R, W>,
) -> Result<()> {
    for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
        if line.contains("Warning") {
            log::warn!("{line}");
        } else {
            console.say(format!("  {DIM}{}{RESET}", line.trim()))?;
        }
    }
    if !output.stderr.trim().is_empty() {
        log::warn!("exiftool warnings:\n{}", output.stderr.trim_end());
    }
    Ok(())
}
