//! Field model and tag mapping.
//!
//! - [`FileCategory`] — coarse file kind detected from the extension
//! - [`FieldKey`] / [`ValueSet`] — the fields this tool edits and their values
//! - [`map_to_tags`] — expand a value set into exiftool `-Tag=value` arguments

mod category;
mod fields;
mod mapper;

pub use category::FileCategory;
pub use fields::{FieldKey, FieldKind, ValueSet};
pub use mapper::{TagAssignment, map_to_tags};
