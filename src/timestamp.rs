use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, TimeZone};
use std::fs::{File, FileTimes, OpenOptions};
use std::path::Path;
use std::time::SystemTime;

use crate::generate::DATE_TIME_FORMAT;

/// Interpret an exiftool-style date as local time.
pub fn parse_local(value: &str) -> Result<SystemTime> {
    let naive = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .with_context(|| format!("Invalid date/time {value:?}"))?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("{value} does not exist in the local time zone"))?;
    Ok(SystemTime::from(local))
}

/// Set a file's access and modification times to the given date.
///
/// Write access is not required: a read-only file owned by the caller falls
/// back to a read handle, which is enough to change its times on Unix.
pub fn set_file_times(path: &Path, value: &str) -> Result<SystemTime> {
    let time = parse_local(value)?;
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .or_else(|_| File::open(path))
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.set_times(FileTimes::new().set_accessed(time).set_modified(time))
        .context("Failed to update file times")?;
    Ok(time)
}
