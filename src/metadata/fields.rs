use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

use super::category::FileCategory;
use crate::error::{Error, Result};

/// Canonical name of a metadata concept this tool knows how to write.
///
/// Every key maps to at least one exiftool tag (see [`FieldKey::tags`]), so a
/// value set can never hold a field the writer would drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Author,
    CreateDate,
    ModifyDate,
    City,
    State,
    Country,
    GpsLat,
    GpsLon,
    Make,
    Model,
    Title,
    Description,
    Copyright,
    Software,
    Artist,
    Album,
    Composer,
    Genre,
    Duration,
    VideoCodec,
    AudioCodec,
    Subject,
    Producer,
    Pages,
    Keywords,
    Publisher,
    Language,
    Isbn,
}

/// How a field's value is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// `YYYY:MM:DD HH:MM:SS`
    DateTime,
    Latitude,
    Longitude,
    /// Positive whole number.
    Integer,
    /// Comma-separated words.
    KeywordList,
}

impl FieldKey {
    pub const ALL: [FieldKey; 28] = [
        Self::Author,
        Self::CreateDate,
        Self::ModifyDate,
        Self::City,
        Self::State,
        Self::Country,
        Self::GpsLat,
        Self::GpsLon,
        Self::Make,
        Self::Model,
        Self::Title,
        Self::Description,
        Self::Copyright,
        Self::Software,
        Self::Artist,
        Self::Album,
        Self::Composer,
        Self::Genre,
        Self::Duration,
        Self::VideoCodec,
        Self::AudioCodec,
        Self::Subject,
        Self::Producer,
        Self::Pages,
        Self::Keywords,
        Self::Publisher,
        Self::Language,
        Self::Isbn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::CreateDate => "create_date",
            Self::ModifyDate => "modify_date",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::GpsLat => "gps_lat",
            Self::GpsLon => "gps_lon",
            Self::Make => "make",
            Self::Model => "model",
            Self::Title => "title",
            Self::Description => "description",
            Self::Copyright => "copyright",
            Self::Software => "software",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Composer => "composer",
            Self::Genre => "genre",
            Self::Duration => "duration",
            Self::VideoCodec => "video_codec",
            Self::AudioCodec => "audio_codec",
            Self::Subject => "subject",
            Self::Producer => "producer",
            Self::Pages => "pages",
            Self::Keywords => "keywords",
            Self::Publisher => "publisher",
            Self::Language => "language",
            Self::Isbn => "isbn",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Author => "Author/Creator",
            Self::CreateDate => "Creation Date",
            Self::ModifyDate => "Modification Date",
            Self::City => "City",
            Self::State => "State/Province",
            Self::Country => "Country",
            Self::GpsLat => "GPS Latitude",
            Self::GpsLon => "GPS Longitude",
            Self::Make => "Make/Manufacturer",
            Self::Model => "Model",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Copyright => "Copyright",
            Self::Software => "Software",
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Composer => "Composer",
            Self::Genre => "Genre",
            Self::Duration => "Duration",
            Self::VideoCodec => "Video Codec",
            Self::AudioCodec => "Audio Codec",
            Self::Subject => "Subject",
            Self::Producer => "Producer",
            Self::Pages => "Pages",
            Self::Keywords => "Keywords",
            Self::Publisher => "Publisher",
            Self::Language => "Language",
            Self::Isbn => "ISBN",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::CreateDate | Self::ModifyDate => FieldKind::DateTime,
            Self::GpsLat => FieldKind::Latitude,
            Self::GpsLon => FieldKind::Longitude,
            Self::Pages => FieldKind::Integer,
            Self::Keywords => FieldKind::KeywordList,
            _ => FieldKind::Text,
        }
    }

    /// exiftool tag names this field is written to, in emission order.
    ///
    /// Several namespaces are targeted on purpose: exiftool silently skips the
    /// ones a given container has no room for.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::Author => &[
                "Artist",
                "Creator",
                "Author",
                "By-line",
                "XMP:Creator",
                "IPTC:By-line",
            ],
            Self::CreateDate => &[
                "CreateDate",
                "DateTimeOriginal",
                "DateCreated",
                "XMP:CreateDate",
                "EXIF:DateTimeOriginal",
            ],
            Self::ModifyDate => &[
                "ModifyDate",
                "DateTimeDigitized",
                "XMP:ModifyDate",
                "FileModifyDate",
            ],
            Self::City => &["City", "XMP:City", "IPTC:City"],
            Self::State => &["State", "Province-State"],
            Self::Country => &["Country", "XMP:Country"],
            Self::GpsLat => &["GPSLatitude"],
            Self::GpsLon => &["GPSLongitude"],
            Self::Make => &["Make", "XMP:Make"],
            Self::Model => &["Model", "XMP:Model"],
            Self::Title => &["Title", "XMP:Title", "IPTC:ObjectName"],
            Self::Description => &["Description", "XMP:Description", "ImageDescription"],
            Self::Copyright => &["Copyright", "XMP:Rights"],
            Self::Software => &["Software", "XMP:CreatorTool"],
            Self::Artist => &["Artist"],
            Self::Album => &["Album"],
            Self::Composer => &["Composer"],
            Self::Genre => &["Genre"],
            Self::Duration => &["Duration"],
            Self::VideoCodec => &["VideoCodec"],
            Self::AudioCodec => &["AudioCodec"],
            Self::Subject => &["Subject"],
            Self::Producer => &["Producer"],
            Self::Pages => &["Pages"],
            Self::Keywords => &["Keywords"],
            Self::Publisher => &["Publisher"],
            Self::Language => &["Language"],
            Self::Isbn => &["ISBN"],
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values bound to a file category, kept in insertion order.
///
/// # Example
///
/// ```rust
/// use hades::metadata::{FieldKey, FileCategory, ValueSet};
///
/// let mut values = ValueSet::new(FileCategory::Ebook);
/// values.insert(FieldKey::Author, "Jane Doe").unwrap();
/// values.insert(FieldKey::Isbn, "978-0-1234-5678-9").unwrap();
/// assert!(values.insert(FieldKey::GpsLat, "40.0").is_err());
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSet {
    category: FileCategory,
    entries: Vec<(FieldKey, String)>,
}

impl ValueSet {
    pub fn new(category: FileCategory) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    /// Set a field. Replacing an existing key keeps its original position.
    pub fn insert(&mut self, field: FieldKey, value: impl Into<String>) -> Result<()> {
        if !self.category.accepts(field) {
            return Err(Error::FieldNotApplicable {
                field,
                category: self.category,
            });
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
        Ok(())
    }

    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, field: FieldKey) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ValueSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValueSet", 2)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("fields", &OrderedFields(&self.entries))?;
        state.end()
    }
}

struct OrderedFields<'a>(&'a [(FieldKey, String)]);

impl Serialize for OrderedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── FieldKey tables ───────────────────────────────────────────────

    #[test]
    fn every_field_has_tags_and_label() {
        for field in FieldKey::ALL {
            assert!(!field.tags().is_empty(), "{field} has no tags");
            assert!(!field.label().is_empty(), "{field} has no label");
        }
    }

    #[test]
    fn serde_name_matches_as_str() {
        for field in FieldKey::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn author_targets_six_namespaces() {
        assert_eq!(FieldKey::Author.tags().len(), 6);
        assert!(FieldKey::Author.tags().contains(&"IPTC:By-line"));
    }

    #[test]
    fn kinds() {
        assert_eq!(FieldKey::CreateDate.kind(), FieldKind::DateTime);
        assert_eq!(FieldKey::GpsLon.kind(), FieldKind::Longitude);
        assert_eq!(FieldKey::Pages.kind(), FieldKind::Integer);
        assert_eq!(FieldKey::Keywords.kind(), FieldKind::KeywordList);
        assert_eq!(FieldKey::Album.kind(), FieldKind::Text);
    }

    // ── ValueSet ──────────────────────────────────────────────────────

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut values = ValueSet::new(FileCategory::Image);
        values.insert(FieldKey::Title, "first").unwrap();
        values.insert(FieldKey::Author, "A").unwrap();
        values.insert(FieldKey::Title, "second").unwrap();

        let keys: Vec<_> = values.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![FieldKey::Title, FieldKey::Author]);
        assert_eq!(values.get(FieldKey::Title), Some("second"));
    }

    #[test]
    fn insert_rejects_foreign_fields() {
        let mut values = ValueSet::new(FileCategory::Audio);
        let err = values.insert(FieldKey::Make, "Canon").unwrap_err();
        assert!(matches!(
            err,
            Error::FieldNotApplicable { field: FieldKey::Make, category: FileCategory::Audio }
        ));
        assert!(values.is_empty());
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut values = ValueSet::new(FileCategory::Other);
        values.insert(FieldKey::Title, "T").unwrap();
        values.insert(FieldKey::Author, "A").unwrap();
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"category":"other","fields":{"title":"T","author":"A"}}"#);
    }
}
