use std::collections::HashMap;

use sophia::api::ns::Namespace;

pub(crate) const DATA_GOV_BASE: &str = "https://data.gov.in";
pub(crate) const FREQ_BASE: &str = "http://purl.org/cld/freq/";

pub(crate) const DCT: &str = "http://purl.org/dc/terms/";
pub(crate) const DCAT: &str = "http://www.w3.org/ns/dcat#";
pub(crate) const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Fixed vocabulary used by the mapping engine: the RDF namespaces,
/// the accepted date formats and the frequency-term table.
///
/// Built once at startup and passed by reference into the mapper and
/// the assemblers; never mutated during a run.
#[derive(Debug)]
pub(crate) struct Vocabulary {
    pub(crate) dct: Namespace<&'static str>,
    pub(crate) dcat: Namespace<&'static str>,
    pub(crate) date_formats: [&'static str; 3],
    frequencies: HashMap<&'static str, &'static str>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            dct: Namespace::new_unchecked(DCT),
            dcat: Namespace::new_unchecked(DCAT),
            date_formats: ["%d/%m/%Y", "%Y-%m-%d", "%m/%d/%Y"],
            frequencies: HashMap::from([
                ("daily", "daily"),
                ("weekly", "weekly"),
                ("monthly", "monthly"),
                ("quarterly", "quarterly"),
                ("yearly", "annual"),
            ]),
        }
    }
}

impl Vocabulary {
    /// Looks up the vocabulary URI for a frequency term. The match is
    /// case-insensitive and ignores surrounding whitespace; `None`
    /// means the term is not part of the fixed table.
    pub(crate) fn frequency_uri(&self, term: &str) -> Option<String> {
        self.frequencies
            .get(term.trim().to_lowercase().as_str())
            .map(|slug| format!("{FREQ_BASE}{slug}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_uri_known_terms() {
        let vocab = Vocabulary::default();

        assert_eq!(
            vocab.frequency_uri("daily").unwrap(),
            "http://purl.org/cld/freq/daily"
        );
        assert_eq!(
            vocab.frequency_uri(" Quarterly ").unwrap(),
            "http://purl.org/cld/freq/quarterly"
        );
        assert_eq!(
            vocab.frequency_uri("YEARLY").unwrap(),
            "http://purl.org/cld/freq/annual"
        );
    }

    #[test]
    fn frequency_uri_unknown_term() {
        let vocab = Vocabulary::default();
        assert!(vocab.frequency_uri("biannual").is_none());
    }
}
