//! # hades
//!
//! Interactive metadata editor for media files. It inspects, wipes and
//! rewrites EXIF/XMP/IPTC tags by driving the external `exiftool` program;
//! this crate only decides *what* to write.
//!
//! ## Quick Start
//!
//! The [`session`] module runs the same flow as the binary, against any
//! reader/writer pair:
//!
//! ```rust,no_run
//! use hades::config::Config;
//! use hades::console::Console;
//! use hades::session::{Outcome, Session};
//! use std::io;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let tool = config.tool();
//!     let mut console = Console::new(io::stdin().lock(), io::stdout());
//!
//!     match Session::new(&tool, &config).run(Some("photo.jpg".into()), &mut console)? {
//!         Outcome::Completed => println!("done"),
//!         Outcome::Cancelled => println!("cancelled"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! ```rust,no_run
//! use hades::exiftool::{ExifTool, MetadataTool};
//! use hades::generate::generate_random;
//! use hades::metadata::{FileCategory, map_to_tags};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = Path::new("clip.mp4");
//!     let values = generate_random(FileCategory::from_path(path));
//!     let tags = map_to_tags(&values);
//!     ExifTool::new().write_tags(path, &tags)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`metadata`] — file categories, fields, value sets and tag mapping
//! - [`generate`] — random, manual and empty value sets; input validation
//! - [`exiftool`] — the external tool boundary
//! - [`session`] — the interactive edit flow
//! - [`config`] — run settings

pub mod config;
pub mod console;
pub mod error;
pub mod exiftool;
pub mod generate;
pub mod metadata;
pub mod session;
pub mod timestamp;

pub use error::{Error, Result};
