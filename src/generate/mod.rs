//! Value generators.
//!
//! A [`ValueSet`] comes from one of three places, chosen by [`InjectionMode`]:
//! the user ([`collect_manual`]), the random generator ([`generate_random`]),
//! or nowhere (skip).

mod manual;
mod random;
mod validate;

pub use manual::{OnInvalid, PromptStep, collect_manual, prompt_steps};
pub use random::{generate_random, generate_random_with, state_for_city};
pub use validate::{
    DATE_TIME_FORMAT, normalize_keywords, parse_coordinate, parse_count, validate_date_time,
};

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;
use crate::metadata::{FileCategory, ValueSet};

/// How new metadata is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionMode {
    Manual,
    Random,
    Skip,
}

impl InjectionMode {
    /// Parse the menu answer. Anything other than `1` or `2` means skip.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::Manual,
            "2" => Self::Random,
            _ => Self::Skip,
        }
    }
}

/// Produce the value set for a mode. Skip yields an empty set.
pub fn obtain_values<R: BufRead, W: Write>(
    mode: InjectionMode,
    category: FileCategory,
    console: &mut Console<R, W>,
) -> Result<ValueSet> {
    match mode {
        InjectionMode::Manual => collect_manual(category, console),
        InjectionMode::Random => {
            log::info!("Generating random metadata for {category} file");
            Ok(generate_random(category))
        }
        InjectionMode::Skip => Ok(ValueSet::new(category)),
    }
}
