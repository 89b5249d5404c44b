use std::fmt::{self, Display};

use chrono::NaiveDate;

/// A date field after best-effort parsing. Values that match one of
/// the accepted input formats are normalized to ISO-8601; everything
/// else is carried through byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DateValue {
    Iso(NaiveDate),
    Raw(String),
}

impl Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iso(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// An accrual-periodicity field after lookup against the fixed
/// frequency table. Recognized terms become vocabulary URIs,
/// unrecognized terms stay plain literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Frequency {
    Uri(String),
    Raw(String),
}

impl Frequency {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Uri(uri) => uri,
            Self::Raw(raw) => raw,
        }
    }
}

/// The Dublin-Core-level description of one dataset, derived from a
/// single input row. Immutable once mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatasetRecord {
    pub(crate) dataset_uri: String,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) issued: Option<DateValue>,
    pub(crate) modified: Option<DateValue>,
    pub(crate) created: Option<DateValue>,
    pub(crate) publisher: Option<String>,
    pub(crate) accrual_periodicity: Option<Frequency>,
    pub(crate) subjects: Vec<String>,
    pub(crate) landing_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DistributionKind {
    Api,
    File,
}

impl DistributionKind {
    /// The input field whose presence triggers this kind.
    pub(crate) fn source_field(self) -> &'static str {
        match self {
            Self::Api => "datafile_url",
            Self::File => "datafile",
        }
    }

    pub(crate) fn uri_suffix(self) -> &'static str {
        match self {
            Self::Api => "-api",
            Self::File => "-file",
        }
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::File => "FILE",
        }
    }
}

/// One access mechanism of a dataset: an API endpoint or a
/// downloadable file. A dataset carries zero, one or two of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DistributionRecord {
    pub(crate) kind: DistributionKind,
    pub(crate) distribution_uri: String,
    pub(crate) url: String,
    pub(crate) format: Option<String>,
    pub(crate) byte_size: Option<i64>,
    pub(crate) title: Option<String>,
}
