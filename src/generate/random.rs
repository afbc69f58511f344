use chrono::{Datelike, Local, NaiveDateTime, TimeDelta};
use rand::Rng;
use rand::seq::SliceRandom;

use super::validate::DATE_TIME_FORMAT;
use crate::metadata::{FieldKey, FileCategory, ValueSet};

#[rustfmt::skip]
const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Emma", "Olivia", "Ava", "Sophia",
];

#[rustfmt::skip]
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "White", "Harris", "Clark",
];

#[rustfmt::skip]
const COMPANIES: &[&str] = &[
    "Adobe Systems", "Microsoft Corporation", "Apple Inc.", "Google LLC", "Canon Inc.",
    "Sony Corporation", "Nikon Corporation", "Panasonic", "Samsung Electronics",
    "Intel Corporation", "HP Inc.", "Dell Technologies", "IBM", "Oracle Corporation",
];

/// City → state abbreviation. Every city offered by the generator is listed.
#[rustfmt::skip]
const CITY_STATES: &[(&str, &str)] = &[
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Philadelphia", "PA"),
    ("San Antonio", "TX"),
    ("San Diego", "CA"),
    ("Dallas", "TX"),
    ("San Jose", "CA"),
    ("Austin", "TX"),
    ("Jacksonville", "FL"),
    ("Fort Worth", "TX"),
    ("Columbus", "OH"),
    ("Charlotte", "NC"),
    ("San Francisco", "CA"),
    ("Indianapolis", "IN"),
    ("Seattle", "WA"),
    ("Denver", "CO"),
    ("Washington", "DC"),
    ("Boston", "MA"),
    ("Detroit", "MI"),
    ("Nashville", "TN"),
    ("Portland", "OR"),
    ("Las Vegas", "NV"),
];

#[rustfmt::skip]
const FALLBACK_STATES: &[&str] = &[
    "NY", "CA", "IL", "TX", "AZ", "PA", "FL", "OH", "NC", "WA", "CO", "MA", "MI", "TN", "OR", "NV",
];

const COUNTRIES: &[&str] = &["USA", "United States", "US"];

#[rustfmt::skip]
const PHOTO_CAMERAS: &[(&str, &[&str])] = &[
    ("Canon", &["EOS 5D Mark IV", "EOS R5", "EOS 90D", "EOS Rebel T7i", "PowerShot G7 X"]),
    ("Nikon", &["D850", "Z7 II", "D7500", "D3500", "Z50"]),
    ("Sony", &["Alpha a7 III", "Alpha a7R IV", "Alpha a6400", "RX100 VII", "Alpha a9 II"]),
    ("Fujifilm", &["X-T4", "X-Pro3", "X-E4", "X-S10", "X100V"]),
    ("Olympus", &["OM-D E-M1 Mark III", "OM-D E-M5 Mark III", "PEN E-PL10"]),
    ("Panasonic", &["Lumix DC-GH5", "Lumix DC-G9", "Lumix DC-S1", "Lumix LX100 II"]),
    ("Leica", &["Q2", "M10-R", "SL2", "CL"]),
    ("Pentax", &["K-1 Mark II", "K-3 III", "KP"]),
];

#[rustfmt::skip]
const VIDEO_CAMERAS: &[(&str, &[&str])] = &[
    ("Canon", &["EOS C300 Mark III", "EOS R5 C", "XF605", "EOS C70"]),
    ("Sony", &["FX6", "FX3", "A7S III", "PXW-Z280", "FX9"]),
    ("Panasonic", &["Lumix GH6", "Lumix S1H", "AG-CX350", "HC-X2000"]),
    ("Blackmagic", &["URSA Mini Pro 12K", "Pocket Cinema Camera 6K", "Studio Camera 4K Pro"]),
    ("RED", &["KOMODO 6K", "V-RAPTOR 8K VV", "DSMC2 GEMINI 5K"]),
    ("ARRI", &["ALEXA Mini LF", "ALEXA 35", "AMIRA"]),
    ("GoPro", &["HERO11 Black", "HERO10 Black", "HERO9 Black", "MAX"]),
    ("DJI", &["Mavic 3 Cine", "Air 2S", "Mini 3 Pro", "Inspire 3"]),
];

#[rustfmt::skip]
const PHOTO_SOFTWARE: &[&str] = &[
    "Adobe Photoshop CC 2024", "Adobe Photoshop CS6", "GIMP 2.10", "Adobe Lightroom Classic",
    "Capture One 23", "DxO PhotoLab 6", "Affinity Photo 2", "Luminar AI", "ON1 Photo RAW 2024",
];
#[rustfmt::skip]
const PHOTO_TITLES: &[&str] = &[
    "Untitled", "Photo", "Image", "Capture", "Moment", "Memory", "Snapshot", "Scene", "View",
    "Landscape", "Portrait", "Nature", "Urban", "Street",
];

#[rustfmt::skip]
const VIDEO_SOFTWARE: &[&str] = &[
    "Adobe Premiere Pro 2024", "Final Cut Pro X", "DaVinci Resolve 18",
    "Adobe After Effects 2024", "Avid Media Composer", "Vegas Pro 20", "Filmora 12",
    "HitFilm Pro", "Lightworks",
];
#[rustfmt::skip]
const VIDEO_TITLES: &[&str] = &[
    "Video", "Clip", "Footage", "Recording", "Scene", "Take", "Sequence",
];
const VIDEO_CODECS: &[&str] = &["H.264", "H.265/HEVC", "ProRes 422", "DNxHD"];
const VIDEO_AUDIO_CODECS: &[&str] = &["AAC", "PCM", "MP3", "AC3"];

#[rustfmt::skip]
const AUDIO_SOFTWARE: &[&str] = &[
    "Adobe Audition 2024", "Audacity 3.2", "FL Studio 21", "Ableton Live 11", "Logic Pro X",
    "Pro Tools 2023", "Reaper 6.7", "Cubase 13", "GarageBand",
];
#[rustfmt::skip]
const AUDIO_TITLES: &[&str] = &[
    "Audio", "Track", "Recording", "Sound", "Music", "Podcast", "Voice",
];
#[rustfmt::skip]
const AUDIO_GENRES: &[&str] = &[
    "Rock", "Pop", "Jazz", "Classical", "Electronic", "Hip Hop", "Country", "R&B", "Folk",
    "Blues", "Podcast", "Audiobook", "Speech",
];
const AUDIO_CODECS: &[&str] = &["MP3", "AAC", "FLAC", "WAV", "OGG"];

#[rustfmt::skip]
const DOCUMENT_SOFTWARE: &[&str] = &[
    "Microsoft Word 2021", "LibreOffice Writer 7.4", "Google Docs", "Adobe Acrobat DC",
    "Apple Pages", "WPS Office 2023", "OpenOffice Writer 4.1", "Foxit PDF Editor", "Nitro Pro 13",
];
#[rustfmt::skip]
const DOCUMENT_TITLES: &[&str] = &[
    "Document", "Report", "Letter", "Memo", "Contract", "Proposal", "Invoice", "Resume",
    "Agreement", "Manual", "Guide", "Article",
];
#[rustfmt::skip]
const DOCUMENT_SUBJECTS: &[&str] = &[
    "Business", "Finance", "Legal", "Technical", "Personal", "Marketing", "Research",
    "Education", "Medical", "Engineering", "Administration",
];
#[rustfmt::skip]
const DOCUMENT_KEYWORDS: &[&str] = &[
    "confidential", "draft", "final", "review", "approved", "pending", "urgent", "archived",
];

#[rustfmt::skip]
const PUBLISHERS: &[&str] = &[
    "Penguin Random House", "HarperCollins", "Simon & Schuster", "Hachette", "Macmillan",
    "Scholastic", "Wiley", "O'Reilly Media", "Springer",
];
#[rustfmt::skip]
const EBOOK_GENRES: &[&str] = &[
    "Fiction", "Non-Fiction", "Mystery", "Thriller", "Romance", "Science Fiction", "Fantasy",
    "Biography", "History", "Self-Help", "Technical", "Educational",
];
const LANGUAGES: &[&str] = &["en", "en-US", "en-GB"];

/// How far back creation dates may go.
const HISTORY_DAYS: i64 = 365 * 5;
/// Maximum gap between creation and modification.
const MAX_EDIT_DAYS: i64 = 30;

/// Latitude band used for synthesized image locations (continental US).
const GPS_LAT_RANGE: (f64, f64) = (25.0, 49.0);
/// Longitude band used for synthesized image locations.
const GPS_LON_RANGE: (f64, f64) = (-125.0, -66.0);

/// Build a plausible, random value set for the given category.
pub fn generate_random(category: FileCategory) -> ValueSet {
    let now = Local::now().naive_local();
    generate_random_with(category, &mut rand::thread_rng(), now)
}

/// [`generate_random`] with an explicit RNG and clock.
pub fn generate_random_with<R: Rng + ?Sized>(
    category: FileCategory,
    rng: &mut R,
    now: NaiveDateTime,
) -> ValueSet {
    let mut values = ValueSet::new(category);

    let start = now - TimeDelta::days(HISTORY_DAYS);
    let created = start + TimeDelta::days(rng.gen_range(0..=HISTORY_DAYS));
    let modified = created + TimeDelta::days(rng.gen_range(0..=MAX_EDIT_DAYS));

    let author = random_name(rng);
    let city = pick(rng, CITY_STATES).0;

    set(&mut values, FieldKey::Author, author.clone());
    set(&mut values, FieldKey::CreateDate, created.format(DATE_TIME_FORMAT).to_string());
    set(&mut values, FieldKey::ModifyDate, modified.format(DATE_TIME_FORMAT).to_string());
    set(&mut values, FieldKey::City, city);
    set(&mut values, FieldKey::State, state_for_city(city, rng));
    set(&mut values, FieldKey::Country, pick(rng, COUNTRIES));
    set(&mut values, FieldKey::Copyright, format!("© {} {author}", created.year()));

    match category {
        FileCategory::Image => {
            let (make, models) = pick(rng, PHOTO_CAMERAS);
            let lat = rng.gen_range(GPS_LAT_RANGE.0..=GPS_LAT_RANGE.1);
            let lon = rng.gen_range(GPS_LON_RANGE.0..=GPS_LON_RANGE.1);
            set(&mut values, FieldKey::GpsLat, format!("{lat:.6}"));
            set(&mut values, FieldKey::GpsLon, format!("{lon:.6}"));
            set(&mut values, FieldKey::Make, make);
            set(&mut values, FieldKey::Model, pick(rng, models));
            set(&mut values, FieldKey::Title, pick(rng, PHOTO_TITLES));
            set(&mut values, FieldKey::Description, format!("Photograph taken with {make} camera"));
            set(&mut values, FieldKey::Software, pick(rng, PHOTO_SOFTWARE));
        }
        FileCategory::Video => {
            let (make, models) = pick(rng, VIDEO_CAMERAS);
            set(&mut values, FieldKey::Make, make);
            set(&mut values, FieldKey::Model, pick(rng, models));
            set(&mut values, FieldKey::Title, pick(rng, VIDEO_TITLES));
            set(
                &mut values,
                FieldKey::Description,
                format!("Video footage recorded with {make} camera"),
            );
            set(&mut values, FieldKey::Software, pick(rng, VIDEO_SOFTWARE));
            set(&mut values, FieldKey::Duration, format!("{} seconds", rng.gen_range(1..=180)));
            set(&mut values, FieldKey::VideoCodec, pick(rng, VIDEO_CODECS));
            set(&mut values, FieldKey::AudioCodec, pick(rng, VIDEO_AUDIO_CODECS));
        }
        FileCategory::Audio => {
            let composer = if rng.gen_bool(0.5) {
                author.clone()
            } else {
                random_name(rng)
            };
            set(&mut values, FieldKey::Title, pick(rng, AUDIO_TITLES));
            set(&mut values, FieldKey::Album, format!("Album {}", rng.gen_range(1..=10)));
            set(&mut values, FieldKey::Artist, author);
            set(&mut values, FieldKey::Composer, composer);
            set(&mut values, FieldKey::Genre, pick(rng, AUDIO_GENRES));
            set(&mut values, FieldKey::Software, pick(rng, AUDIO_SOFTWARE));
            set(&mut values, FieldKey::Duration, format!("{} seconds", rng.gen_range(30..=600)));
            set(&mut values, FieldKey::AudioCodec, pick(rng, AUDIO_CODECS));
        }
        FileCategory::Document => {
            let count = rng.gen_range(1..=3);
            let keywords: Vec<&str> = DOCUMENT_KEYWORDS
                .choose_multiple(rng, count)
                .copied()
                .collect();
            set(&mut values, FieldKey::Title, pick(rng, DOCUMENT_TITLES));
            set(&mut values, FieldKey::Subject, pick(rng, DOCUMENT_SUBJECTS));
            set(&mut values, FieldKey::Producer, pick(rng, COMPANIES));
            set(&mut values, FieldKey::Software, pick(rng, DOCUMENT_SOFTWARE));
            set(&mut values, FieldKey::Pages, rng.gen_range(1..=50).to_string());
            set(&mut values, FieldKey::Keywords, keywords.join(", "));
        }
        FileCategory::Ebook => {
            let isbn = format!(
                "978-{}-{}-{}-{}",
                rng.gen_range(0..=9),
                rng.gen_range(1000..=9999),
                rng.gen_range(1000..=9999),
                rng.gen_range(0..=9)
            );
            set(&mut values, FieldKey::Title, format!("Book Title {}", rng.gen_range(1..=100)));
            set(&mut values, FieldKey::Publisher, pick(rng, PUBLISHERS));
            set(&mut values, FieldKey::Genre, pick(rng, EBOOK_GENRES));
            set(&mut values, FieldKey::Language, pick(rng, LANGUAGES));
            set(&mut values, FieldKey::Isbn, isbn);
        }
        FileCategory::Other => {}
    }

    log::debug!("Generated {} random field(s) for {category}", values.len());
    values
}

/// State for a city, from the lookup table when known.
pub fn state_for_city<R: Rng + ?Sized>(city: &str, rng: &mut R) -> &'static str {
    CITY_STATES
        .iter()
        .find(|(c, _)| *c == city)
        .map(|(_, s)| *s)
        .unwrap_or_else(|| pick(rng, FALLBACK_STATES))
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// The tables above only produce fields the category accepts.
fn set(values: &mut ValueSet, field: FieldKey, value: impl Into<String>) {
    let inserted = values.insert(field, value);
    debug_assert!(inserted.is_ok(), "generator emitted a foreign field: {inserted:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::validate::validate_date_time;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALL_CATEGORIES: [FileCategory; 6] = [
        FileCategory::Image,
        FileCategory::Video,
        FileCategory::Audio,
        FileCategory::Document,
        FileCategory::Ebook,
        FileCategory::Other,
    ];

    fn parse(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).unwrap()
    }

    fn fixed_now() -> NaiveDateTime {
        parse("2026:10:19 12:34:56")
    }

    // ── dates ─────────────────────────────────────────────────────────

    #[test]
    fn dates_are_ordered_and_in_window() {
        let now = fixed_now();
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = generate_random_with(FileCategory::Other, &mut rng, now);
            let created = values.get(FieldKey::CreateDate).unwrap();
            let modified = values.get(FieldKey::ModifyDate).unwrap();
            assert!(validate_date_time(created), "{created}");
            assert!(validate_date_time(modified), "{modified}");

            let (created, modified) = (parse(created), parse(modified));
            assert!(modified >= created);
            assert!(modified - created <= TimeDelta::days(MAX_EDIT_DAYS));
            assert!(created >= now - TimeDelta::days(HISTORY_DAYS));
            assert!(modified <= now + TimeDelta::days(MAX_EDIT_DAYS));
        }
    }

    #[test]
    fn unseeded_entry_point_uses_the_clock() {
        let values = generate_random(FileCategory::Image);
        let created = parse(values.get(FieldKey::CreateDate).unwrap());
        let now = Local::now().naive_local();
        assert!(created <= now + TimeDelta::seconds(5));
        assert!(created >= now - TimeDelta::days(HISTORY_DAYS + 1));
    }

    // ── baseline fields ───────────────────────────────────────────────

    #[test]
    fn baseline_is_present_for_every_category() {
        let mut rng = StdRng::seed_from_u64(7);
        for category in ALL_CATEGORIES {
            let values = generate_random_with(category, &mut rng, fixed_now());
            for field in [
                FieldKey::Author,
                FieldKey::CreateDate,
                FieldKey::ModifyDate,
                FieldKey::City,
                FieldKey::State,
                FieldKey::Country,
                FieldKey::Copyright,
            ] {
                assert!(values.contains(field), "{category} missing {field}");
            }
            for (field, _) in values.iter() {
                assert!(category.accepts(field), "{category} got foreign {field}");
            }
        }
    }

    #[test]
    fn copyright_combines_year_and_author() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = generate_random_with(FileCategory::Other, &mut rng, fixed_now());
            let year = parse(values.get(FieldKey::CreateDate).unwrap()).year();
            let author = values.get(FieldKey::Author).unwrap();
            assert_eq!(values.get(FieldKey::Copyright).unwrap(), format!("© {year} {author}"));
            assert_eq!(author.split(' ').count(), 2);
        }
    }

    #[test]
    fn state_always_comes_from_city_table() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = generate_random_with(FileCategory::Other, &mut rng, fixed_now());
            let city = values.get(FieldKey::City).unwrap();
            let expected = CITY_STATES.iter().find(|(c, _)| *c == city).unwrap().1;
            assert_eq!(values.get(FieldKey::State), Some(expected));
        }
    }

    #[test]
    fn state_for_city_lookup_and_fallback() {
        let mut rng = StdRng::seed_from_u64(1);
        for (city, state) in CITY_STATES {
            assert_eq!(state_for_city(city, &mut rng), *state);
        }
        let fallback = state_for_city("Springfield", &mut rng);
        assert!(FALLBACK_STATES.contains(&fallback));
    }

    // ── category layers ───────────────────────────────────────────────

    #[test]
    fn image_gps_within_band() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = generate_random_with(FileCategory::Image, &mut rng, fixed_now());
            let lat: f64 = values.get(FieldKey::GpsLat).unwrap().parse().unwrap();
            let lon: f64 = values.get(FieldKey::GpsLon).unwrap().parse().unwrap();
            assert!((GPS_LAT_RANGE.0..=GPS_LAT_RANGE.1).contains(&lat), "{lat}");
            assert!((GPS_LON_RANGE.0..=GPS_LON_RANGE.1).contains(&lon), "{lon}");
            let decimals = values.get(FieldKey::GpsLat).unwrap().split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 6);
        }
    }

    #[test]
    fn gps_only_for_images() {
        let mut rng = StdRng::seed_from_u64(3);
        for category in ALL_CATEGORIES.into_iter().filter(|c| *c != FileCategory::Image) {
            let values = generate_random_with(category, &mut rng, fixed_now());
            assert!(!values.contains(FieldKey::GpsLat));
            assert!(!values.contains(FieldKey::GpsLon));
        }
    }

    #[test]
    fn camera_model_matches_make() {
        for category in [FileCategory::Image, FileCategory::Video] {
            let table = match category {
                FileCategory::Image => PHOTO_CAMERAS,
                _ => VIDEO_CAMERAS,
            };
            for seed in 0..100 {
                let mut rng = StdRng::seed_from_u64(seed);
                let values = generate_random_with(category, &mut rng, fixed_now());
                let make = values.get(FieldKey::Make).unwrap();
                let model = values.get(FieldKey::Model).unwrap();
                let (_, models) = table.iter().find(|(m, _)| *m == make).unwrap();
                assert!(models.contains(&model), "{make} {model}");
                assert!(values.get(FieldKey::Description).unwrap().contains(make));
            }
        }
    }

    #[test]
    fn audio_artist_is_author() {
        let mut rng = StdRng::seed_from_u64(11);
        let values = generate_random_with(FileCategory::Audio, &mut rng, fixed_now());
        assert_eq!(values.get(FieldKey::Artist), values.get(FieldKey::Author));
        assert!(values.get(FieldKey::Album).unwrap().starts_with("Album "));
        let secs: u32 = values
            .get(FieldKey::Duration)
            .unwrap()
            .trim_end_matches(" seconds")
            .parse()
            .unwrap();
        assert!((30..=600).contains(&secs));
    }

    #[test]
    fn document_pages_and_keywords() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = generate_random_with(FileCategory::Document, &mut rng, fixed_now());
            let pages: u32 = values.get(FieldKey::Pages).unwrap().parse().unwrap();
            assert!((1..=50).contains(&pages));

            let keywords: Vec<&str> =
                values.get(FieldKey::Keywords).unwrap().split(", ").collect();
            assert!((1..=3).contains(&keywords.len()));
            assert!(keywords.iter().all(|k| DOCUMENT_KEYWORDS.contains(k)));
            let mut unique = keywords.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), keywords.len());
        }
    }

    #[test]
    fn ebook_isbn_shape() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = generate_random_with(FileCategory::Ebook, &mut rng, fixed_now());
            let isbn = values.get(FieldKey::Isbn).unwrap();
            let parts: Vec<&str> = isbn.split('-').collect();
            assert_eq!(parts.len(), 5, "{isbn}");
            assert_eq!(parts[0], "978");
            assert_eq!(
                parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
                vec![3, 1, 4, 4, 1]
            );
            assert!(parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())));
            assert!(LANGUAGES.contains(&values.get(FieldKey::Language).unwrap()));
        }
    }

    #[test]
    fn other_gets_only_baseline() {
        let mut rng = StdRng::seed_from_u64(5);
        let values = generate_random_with(FileCategory::Other, &mut rng, fixed_now());
        assert_eq!(values.len(), 7);
    }
}
