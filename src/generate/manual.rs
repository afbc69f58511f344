use std::io::{BufRead, Write};

use super::validate::{normalize_keywords, parse_coordinate, parse_count, validate_date_time};
use crate::console::Console;
use crate::error::Result;
use crate::metadata::{FieldKey, FieldKind, FileCategory, ValueSet};

/// What to do when an answer fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnInvalid {
    /// Ask the same question again.
    Retry,
    /// Warn and move on without a value.
    Skip,
}

/// One question in the manual entry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStep {
    pub field: FieldKey,
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub on_invalid: OnInvalid,
}

impl PromptStep {
    fn new(category: FileCategory, field: FieldKey) -> Self {
        let (hint, on_invalid) = match field.kind() {
            FieldKind::DateTime => (Some("YYYY:MM:DD HH:MM:SS"), OnInvalid::Retry),
            FieldKind::KeywordList => (Some("comma-separated"), OnInvalid::Skip),
            _ => (None, OnInvalid::Skip),
        };
        Self {
            field,
            label: prompt_label(category, field),
            hint,
            on_invalid,
        }
    }

    fn prompt_text(&self) -> String {
        match self.hint {
            Some(hint) => format!("{} ({hint})", self.label),
            None => self.label.to_string(),
        }
    }

    /// Validate a non-empty answer and return the value to store. `Err`
    /// carries the message to show.
    fn check(&self, answer: &str) -> std::result::Result<String, &'static str> {
        match self.field.kind() {
            FieldKind::DateTime if !validate_date_time(answer) => Err("Invalid date format"),
            FieldKind::Latitude => check_coordinate(answer, 90.0, "Invalid latitude"),
            FieldKind::Longitude => check_coordinate(answer, 180.0, "Invalid longitude"),
            FieldKind::Integer => parse_count(answer)
                .map(|n| n.to_string())
                .ok_or("Invalid number"),
            FieldKind::KeywordList => normalize_keywords(answer).ok_or("No keywords given"),
            _ => Ok(answer.to_string()),
        }
    }
}

fn check_coordinate(
    answer: &str,
    limit: f64,
    message: &'static str,
) -> std::result::Result<String, &'static str> {
    let value = parse_coordinate(answer).ok_or(message)?;
    if value.abs() > limit {
        log::warn!("Coordinate {value} is outside ±{limit}; writing it anyway");
    }
    Ok(answer.to_string())
}

fn prompt_label(category: FileCategory, field: FieldKey) -> &'static str {
    match (category, field) {
        (FileCategory::Video, FieldKey::Make) => "Camera/Device Make",
        (FileCategory::Video, FieldKey::Model) => "Camera/Device Model",
        (FileCategory::Video, FieldKey::Software) => "Editing Software",
        (FileCategory::Video, FieldKey::Duration) => "Duration (seconds)",
        (_, FieldKey::Make) => "Camera Make",
        (_, FieldKey::Model) => "Camera Model",
        (_, FieldKey::Producer) => "Producer/Company",
        (_, FieldKey::Pages) => "Number of Pages",
        (_, FieldKey::Keywords) => "Keywords",
        (_, FieldKey::Language) => "Language (e.g., en, en-US)",
        (_, field) => field.label(),
    }
}

/// The ordered questions asked for a category.
///
/// Author, dates and descriptive fields come first, then the category's own
/// fields, then location.
pub fn prompt_steps(category: FileCategory) -> Vec<PromptStep> {
    let leading = [
        FieldKey::Author,
        FieldKey::CreateDate,
        FieldKey::ModifyDate,
        FieldKey::Title,
        FieldKey::Description,
        FieldKey::Copyright,
    ];
    let trailing = [FieldKey::City, FieldKey::State, FieldKey::Country];

    // Audio prompts stop at software; duration and codec are random-only.
    let extended: Vec<FieldKey> = category
        .extended_fields()
        .iter()
        .copied()
        .filter(|f| {
            category != FileCategory::Audio
                || !matches!(f, FieldKey::Duration | FieldKey::AudioCodec)
        })
        .collect();

    leading
        .into_iter()
        .chain(extended)
        .chain(trailing)
        .map(|field| PromptStep::new(category, field))
        .collect()
}

/// Walk the prompt steps and collect the answers.
///
/// Empty answers skip a field. Invalid dates are asked again; other invalid
/// answers are dropped with a warning.
pub fn collect_manual<R: BufRead, W: Write>(
    category: FileCategory,
    console: &mut Console<R, W>,
) -> Result<ValueSet> {
    console.blank()?;
    console.say(format!(
        "[*] Custom Metadata Editor - {}",
        category.as_str().to_uppercase()
    ))?;
    console.say("[*] Press Enter to skip any field")?;
    console.say("[*] Date format: YYYY:MM:DD HH:MM:SS")?;
    console.blank()?;

    let mut values = ValueSet::new(category);

    for step in prompt_steps(category) {
        loop {
            let answer = console.prompt(&step.prompt_text())?;
            if answer.is_empty() {
                break;
            }
            match step.check(&answer) {
                Ok(value) => {
                    values.insert(step.field, value)?;
                    break;
                }
                Err(message) => {
                    console.say(format!("[!] {message}"))?;
                    if step.on_invalid == OnInvalid::Skip {
                        log::debug!("Skipping {} after invalid input", step.field);
                        break;
                    }
                }
            }
        }
    }

    Ok(values)
}
