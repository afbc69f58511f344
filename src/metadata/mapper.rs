use std::fmt;

use super::fields::{FieldKey, ValueSet};

const TAG_GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
const TAG_GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";

/// One `-Tag=value` argument for exiftool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssignment {
    pub tag: &'static str,
    pub value: String,
}

impl TagAssignment {
    pub fn new(tag: &'static str, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// Render as a single command-line argument.
    pub fn to_arg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}={}", self.tag, self.value)
    }
}

/// Expand a value set into tag assignments.
///
/// Fields are visited in insertion order and each non-empty value is written
/// to every tag registered for its key. Coordinates also get their hemisphere
/// reference tag. Duplicates across keys (author and artist both hit `Artist`)
/// are kept; the later one wins inside exiftool.
pub fn map_to_tags(values: &ValueSet) -> Vec<TagAssignment> {
    let mut assignments = Vec::new();

    for (field, value) in values.iter() {
        if value.is_empty() {
            continue;
        }
        for tag in field.tags() {
            assignments.push(TagAssignment::new(*tag, value));
        }
        match field {
            FieldKey::GpsLat => {
                push_hemisphere(&mut assignments, TAG_GPS_LATITUDE_REF, value, 'N', 'S')
            }
            FieldKey::GpsLon => {
                push_hemisphere(&mut assignments, TAG_GPS_LONGITUDE_REF, value, 'E', 'W')
            }
            _ => {}
        }
    }

    log::debug!(
        "Mapped {} field(s) to {} tag assignment(s)",
        values.len(),
        assignments.len()
    );
    assignments
}

fn push_hemisphere(
    assignments: &mut Vec<TagAssignment>,
    tag: &'static str,
    value: &str,
    positive: char,
    negative: char,
) {
    match value.trim().parse::<f64>() {
        Ok(coord) => {
            let reference = if coord >= 0.0 { positive } else { negative };
            assignments.push(TagAssignment::new(tag, reference.to_string()));
        }
        Err(e) => log::warn!("Not writing {tag}: cannot parse coordinate {value:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::FileCategory;

    fn image_values(pairs: &[(FieldKey, &str)]) -> ValueSet {
        let mut values = ValueSet::new(FileCategory::Image);
        for (k, v) in pairs {
            values.insert(*k, *v).unwrap();
        }
        values
    }

    #[test]
    fn assignment_renders_as_argument() {
        let a = TagAssignment::new("XMP:Title", "Sunset over Bay");
        assert_eq!(a.to_arg(), "-XMP:Title=Sunset over Bay");
    }

    #[test]
    fn author_fans_out_verbatim() {
        let values = image_values(&[(FieldKey::Author, "Ava Lee")]);
        let tags = map_to_tags(&values);
        assert_eq!(tags.len(), 6);
        assert!(tags.iter().all(|t| t.value == "Ava Lee"));
        assert_eq!(tags[0].tag, "Artist");
        assert_eq!(tags[5].tag, "IPTC:By-line");
    }

    #[test]
    fn every_field_emits_its_value() {
        let mut values = ValueSet::new(FileCategory::Audio);
        values.insert(FieldKey::Album, "Album 3").unwrap();
        values.insert(FieldKey::Genre, "Jazz").unwrap();
        values.insert(FieldKey::Copyright, "© 2022 Ava Lee").unwrap();

        let tags = map_to_tags(&values);
        for (field, value) in values.iter() {
            let hits: Vec<_> = tags.iter().filter(|t| field.tags().contains(&t.tag)).collect();
            assert!(!hits.is_empty(), "{field} produced nothing");
            assert!(hits.iter().all(|t| t.value == value));
        }
    }

    #[test]
    fn insertion_order_is_emission_order() {
        let values = image_values(&[(FieldKey::Title, "T"), (FieldKey::Make, "Canon")]);
        let tags: Vec<_> = map_to_tags(&values).into_iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec!["Title", "XMP:Title", "IPTC:ObjectName", "Make", "XMP:Make"]);
    }

    #[test]
    fn empty_values_are_skipped() {
        let values = image_values(&[(FieldKey::Title, ""), (FieldKey::Model, "Z50")]);
        let tags = map_to_tags(&values);
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|t| t.value == "Z50"));
    }

    #[test]
    fn no_deduplication_across_fields() {
        let mut values = ValueSet::new(FileCategory::Audio);
        values.insert(FieldKey::Author, "A").unwrap();
        values.insert(FieldKey::Artist, "B").unwrap();
        let artists: Vec<_> = map_to_tags(&values)
            .into_iter()
            .filter(|t| t.tag == "Artist")
            .map(|t| t.value)
            .collect();
        assert_eq!(artists, vec!["A", "B"]);
    }

    // ── GPS hemisphere refs ───────────────────────────────────────────

    #[test]
    fn gps_north_west() {
        let values =
            image_values(&[(FieldKey::GpsLat, "40.712800"), (FieldKey::GpsLon, "-74.006000")]);
        let tags = map_to_tags(&values);
        assert_eq!(
            tags,
            vec![
                TagAssignment::new("GPSLatitude", "40.712800"),
                TagAssignment::new("GPSLatitudeRef", "N"),
                TagAssignment::new("GPSLongitude", "-74.006000"),
                TagAssignment::new("GPSLongitudeRef", "W"),
            ]
        );
    }

    #[test]
    fn gps_south_east_and_zero() {
        let values = image_values(&[(FieldKey::GpsLat, "-33.86"), (FieldKey::GpsLon, "0")]);
        let tags = map_to_tags(&values);
        assert!(tags.contains(&TagAssignment::new("GPSLatitudeRef", "S")));
        assert!(tags.contains(&TagAssignment::new("GPSLongitudeRef", "E")));
    }

    #[test]
    fn unparseable_coordinate_skips_only_the_ref() {
        let values = image_values(&[(FieldKey::GpsLat, "north-ish")]);
        let tags = map_to_tags(&values);
        assert_eq!(tags, vec![TagAssignment::new("GPSLatitude", "north-ish")]);
    }
}
