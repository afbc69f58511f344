/// Format shared by every date field, as exiftool expects it.
pub const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Check a `YYYY:MM:DD HH:MM:SS` timestamp.
///
/// Components are range-checked individually; the day is only checked against
/// 1..=31, so `2023:02:30 00:00:00` passes. exiftool rejects impossible dates
/// itself when writing.
pub fn validate_date_time(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 19 {
        return false;
    }
    for (i, b) in bytes.iter().enumerate() {
        let ok = match i {
            4 | 7 | 13 | 16 => *b == b':',
            10 => *b == b' ',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return false;
        }
    }

    let num = |range: std::ops::Range<usize>| -> u32 {
        bytes[range]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };

    (1900..=2100).contains(&num(0..4))
        && (1..=12).contains(&num(5..7))
        && (1..=31).contains(&num(8..10))
        && num(11..13) <= 23
        && num(14..16) <= 59
        && num(17..19) <= 59
}

/// Parse a decimal coordinate. No range check is applied.
pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a positive whole number, such as a page count.
pub fn parse_count(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Tidy a comma-separated keyword list into `a, b, c`. `None` when no word
/// is left.
pub fn normalize_keywords(s: &str) -> Option<String> {
    let words: Vec<&str> = s.split(',').map(str::trim).filter(|w| !w.is_empty()).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(", "))
}
