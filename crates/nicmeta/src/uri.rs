use crate::record::DistributionKind;
use crate::vocab::DATA_GOV_BASE;

/// Builds the dataset identifier. A present `node_alias` is appended
/// to the portal base verbatim (aliases are expected to start with
/// `/`; no re-encoding is done, malformed aliases propagate). Rows
/// without an alias get a fallback URI derived from the row index,
/// which is strictly increasing within a run and therefore unique.
pub(crate) fn dataset_uri(
    node_alias: Option<&str>,
    index: usize,
) -> String {
    match node_alias {
        Some(alias) => format!("{DATA_GOV_BASE}{alias}"),
        None => format!("urn:dataset:row-{index}"),
    }
}

/// Derives the distribution identifier from the dataset URI. The two
/// kinds use distinct suffixes, so the identifiers cannot collide.
pub(crate) fn distribution_uri(
    dataset_uri: &str,
    kind: DistributionKind,
) -> String {
    format!("{dataset_uri}{}", kind.uri_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_uri_from_alias() {
        assert_eq!(
            dataset_uri(Some("/catalog/abc"), 0),
            "https://data.gov.in/catalog/abc"
        );
    }

    #[test]
    fn dataset_uri_fallback_embeds_index() {
        assert_eq!(dataset_uri(None, 7), "urn:dataset:row-7");
        assert_ne!(dataset_uri(None, 7), dataset_uri(None, 8));
    }

    #[test]
    fn distribution_uri_suffixes() {
        let base = "https://data.gov.in/catalog/abc";

        assert_eq!(
            distribution_uri(base, DistributionKind::Api),
            "https://data.gov.in/catalog/abc-api"
        );
        assert_eq!(
            distribution_uri(base, DistributionKind::File),
            "https://data.gov.in/catalog/abc-file"
        );
    }
}
