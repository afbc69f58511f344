use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::fields::FieldKey;

/// Fields shared by every category.
const COMMON_FIELDS: &[FieldKey] = &[
    FieldKey::Author,
    FieldKey::CreateDate,
    FieldKey::ModifyDate,
    FieldKey::Title,
    FieldKey::Description,
    FieldKey::Copyright,
    FieldKey::City,
    FieldKey::State,
    FieldKey::Country,
];

/// Coarse kind of media file, derived once from the file extension.
///
/// The category decides which fields are offered in manual entry, which ones
/// the random generator fills, and which ones a [`ValueSet`](super::ValueSet)
/// will accept.
///
/// # Example
///
/// ```rust
/// use hades::metadata::FileCategory;
/// use std::path::Path;
///
/// assert_eq!(FileCategory::from_path(Path::new("photo.CR2")), FileCategory::Image);
/// assert_eq!(FileCategory::from_path(Path::new("notes.xyz")), FileCategory::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Document,
    Ebook,
    /// Anything not recognised, archives included.
    Other,
}

impl FileCategory {
    /// Determine the category from a file path extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Other;
        };
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "tiff" | "tif" | "webp" | "heic" | "raw"
            | "cr2" | "nef" | "arw" | "dng" => Self::Image,
            "mp4" | "avi" | "mov" | "mkv" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg"
            | "3gp" | "mts" => Self::Video,
            "mp3" | "wav" | "flac" | "aac" | "ogg" | "m4a" | "wma" | "opus" | "aiff" => Self::Audio,
            "pdf" | "doc" | "docx" | "odt" | "rtf" | "txt" => Self::Document,
            "epub" | "mobi" | "azw" | "azw3" => Self::Ebook,
            _ => Self::Other,
        }
    }

    /// Lower-case name, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Ebook => "ebook",
            Self::Other => "other",
        }
    }

    /// Fields that only make sense for this category, in prompt order.
    pub fn extended_fields(&self) -> &'static [FieldKey] {
        use FieldKey::*;
        match self {
            Self::Image => &[Make, Model, Software, GpsLat, GpsLon],
            Self::Video => &[Make, Model, Software, Duration, VideoCodec, AudioCodec],
            Self::Audio => &[Artist, Album, Composer, Genre, Software, Duration, AudioCodec],
            Self::Document => &[Subject, Producer, Software, Pages, Keywords],
            Self::Ebook => &[Publisher, Genre, Language, Isbn],
            Self::Other => &[],
        }
    }

    /// Whether a field may appear in a value set for this category.
    pub fn accepts(&self, field: FieldKey) -> bool {
        COMMON_FIELDS.contains(&field) || self.extended_fields().contains(&field)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
