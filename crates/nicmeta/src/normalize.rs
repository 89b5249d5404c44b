use chrono::NaiveDate;

use crate::record::{DateValue, Frequency};
use crate::vocab::Vocabulary;

/// Tries the candidate formats in order and normalizes the first
/// match to ISO-8601. A value that matches none of the formats is
/// passed through unchanged; this function never fails.
pub(crate) fn parse_date(raw: &str, formats: &[&str]) -> DateValue {
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return DateValue::Iso(date);
        }
    }

    DateValue::Raw(raw.to_string())
}

/// Maps a frequency term onto the fixed vocabulary. Unrecognized
/// terms pass through unchanged as plain literals.
pub(crate) fn normalize_frequency(
    raw: &str,
    vocab: &Vocabulary,
) -> Frequency {
    match vocab.frequency_uri(raw) {
        Some(uri) => Frequency::Uri(uri),
        None => Frequency::Raw(raw.to_string()),
    }
}

/// Splits a semicolon-delimited subject list into trimmed, non-empty
/// entries, preserving their order.
pub(crate) fn split_subjects(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
        .map(String::from)
        .collect()
}
