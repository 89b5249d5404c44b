use crate::normalize::{
    normalize_frequency, parse_date, split_subjects,
};
use crate::record::{
    DatasetRecord, DateValue, DistributionKind, DistributionRecord,
};
use crate::row::InputRow;
use crate::uri;
use crate::vocab::{DATA_GOV_BASE, Vocabulary};

/// One mapped input row: the dataset plus its distributions, in the
/// fixed API-before-FILE order.
pub(crate) type MappedRow = (DatasetRecord, Vec<DistributionRecord>);

/// Maps input rows onto dataset and distribution records.
///
/// Mapping is a pure function of the row and its index; any field
/// that fails to parse degrades on its own (raw passthrough or
/// absence) and never aborts the row.
#[derive(Debug)]
pub(crate) struct RecordMapper<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> RecordMapper<'a> {
    pub(crate) fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    pub(crate) fn map(
        &self,
        row: &InputRow,
        index: usize,
    ) -> MappedRow {
        let node_alias = row.get("node_alias");

        let dataset = DatasetRecord {
            dataset_uri: uri::dataset_uri(node_alias, index),
            title: row.get("title").map(String::from),
            description: description(
                row.get("catalog_title"),
                row.get("note"),
            ),
            issued: self.date(row, "published_date"),
            modified: self.date(row, "changed"),
            created: self.date(row, "created"),
            publisher: row
                .get("ministry_department")
                .or_else(|| row.get("state_department"))
                .map(String::from),
            accrual_periodicity: row
                .get("frequency")
                .map(|raw| normalize_frequency(raw, self.vocab)),
            subjects: row
                .get("sector")
                .map(split_subjects)
                .unwrap_or_default(),
            landing_page: node_alias
                .map(|alias| format!("{DATA_GOV_BASE}{alias}")),
        };

        let distributions =
            [DistributionKind::Api, DistributionKind::File]
                .into_iter()
                .filter_map(|kind| self.distribution(row, &dataset, kind))
                .collect();

        (dataset, distributions)
    }

    fn date(
        &self,
        row: &InputRow,
        field: &str,
    ) -> Option<DateValue> {
        row.get(field)
            .map(|raw| parse_date(raw, &self.vocab.date_formats))
    }

    /// A distribution exists iff its triggering field is non-empty;
    /// the two kinds are independent of each other.
    fn distribution(
        &self,
        row: &InputRow,
        dataset: &DatasetRecord,
        kind: DistributionKind,
    ) -> Option<DistributionRecord> {
        let url = row.get(kind.source_field())?;

        Some(DistributionRecord {
            kind,
            distribution_uri: uri::distribution_uri(
                &dataset.dataset_uri,
                kind,
            ),
            url: url.to_string(),
            format: row.get("file_format").map(String::from),
            byte_size: row
                .get("file_size")
                .and_then(|raw| raw.trim().parse::<i64>().ok()),
            title: dataset.title.clone(),
        })
    }
}

/// Builds the description from `catalog_title` and `note`: both
/// present concatenates them, one present uses it alone, neither
/// yields `None` rather than an empty placeholder.
fn description(
    catalog_title: Option<&str>,
    note: Option<&str>,
) -> Option<String> {
    match (catalog_title, note) {
        (Some(catalog), Some(note)) => {
            Some(format!("{catalog}. {note}"))
        }
        (Some(catalog), None) => Some(catalog.to_string()),
        (None, Some(note)) => Some(note.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper_map(
        pairs: &[(&str, &str)],
        index: usize,
    ) -> MappedRow {
        let vocab = Vocabulary::default();
        RecordMapper::new(&vocab)
            .map(&InputRow::from_pairs(pairs), index)
    }

    #[test]
    fn publisher_prefers_ministry_department() {
        let (dataset, _) = mapper_map(
            &[
                ("ministry_department", "Ministry of Agriculture"),
                ("state_department", "Dept. of Farming, Kerala"),
            ],
            0,
        );

        assert_eq!(
            dataset.publisher.as_deref(),
            Some("Ministry of Agriculture")
        );
    }

    #[test]
    fn publisher_falls_back_to_state_department() {
        let (dataset, _) = mapper_map(
            &[
                ("ministry_department", ""),
                ("state_department", "Dept. of Farming, Kerala"),
            ],
            0,
        );

        assert_eq!(
            dataset.publisher.as_deref(),
            Some("Dept. of Farming, Kerala")
        );
    }

    #[test]
    fn description_is_absent_iff_both_sources_are() {
        assert_eq!(
            description(Some("Crops"), Some("by district")).as_deref(),
            Some("Crops. by district")
        );
        assert_eq!(
            description(Some("Crops"), None).as_deref(),
            Some("Crops")
        );
        assert_eq!(
            description(None, Some("by district")).as_deref(),
            Some("by district")
        );
        assert_eq!(description(None, None), None);
    }

    #[test]
    fn distributions_exist_iff_their_field_does() {
        let (_, none) = mapper_map(&[("title", "t")], 0);
        assert!(none.is_empty());

        let (_, api_only) = mapper_map(
            &[("datafile_url", "https://api.data.gov.in/x")],
            0,
        );
        assert_eq!(api_only.len(), 1);
        assert_eq!(api_only[0].kind, DistributionKind::Api);

        let (_, file_only) = mapper_map(
            &[("datafile", "https://data.gov.in/files/x.csv")],
            0,
        );
        assert_eq!(file_only.len(), 1);
        assert_eq!(file_only[0].kind, DistributionKind::File);
    }

    #[test]
    fn both_distributions_in_api_before_file_order() {
        // malformed size degrades to absent on both distributions
        let (dataset, distributions) = mapper_map(
            &[
                ("node_alias", "/catalog/abc"),
                ("datafile_url", "https://api.data.gov.in/x"),
                ("datafile", "https://data.gov.in/files/x.csv"),
                ("file_format", "csv"),
                ("file_size", "not_a_number"),
            ],
            0,
        );

        assert_eq!(distributions.len(), 2);
        assert_eq!(distributions[0].kind, DistributionKind::Api);
        assert_eq!(distributions[1].kind, DistributionKind::File);
        assert_eq!(
            distributions[0].distribution_uri,
            "https://data.gov.in/catalog/abc-api"
        );
        assert_eq!(
            distributions[1].distribution_uri,
            "https://data.gov.in/catalog/abc-file"
        );

        for distribution in &distributions {
            assert_eq!(distribution.byte_size, None);
            assert_eq!(distribution.format.as_deref(), Some("csv"));
            assert_eq!(distribution.title, dataset.title);
        }
    }

    #[test]
    fn byte_size_parses_valid_integers() {
        let (_, distributions) = mapper_map(
            &[
                ("datafile", "https://data.gov.in/files/x.csv"),
                ("file_size", "2048"),
            ],
            0,
        );

        assert_eq!(distributions[0].byte_size, Some(2048));
    }

    #[test]
    fn dataset_uris_stay_unique_without_alias() {
        let rows: Vec<_> = (0..5)
            .map(|index| mapper_map(&[("title", "t")], index).0)
            .collect();

        for (i, a) in rows.iter().enumerate() {
            for b in rows.iter().skip(i + 1) {
                assert_ne!(a.dataset_uri, b.dataset_uri);
            }
        }
    }

    #[test]
    fn dates_normalize_or_pass_through() {
        let (dataset, _) = mapper_map(
            &[
                ("published_date", "04/05/2021"),
                ("changed", "2022-01-31"),
                ("created", "early 2020"),
            ],
            0,
        );

        assert_eq!(
            dataset.issued.unwrap().to_string(),
            "2021-05-04"
        );
        assert_eq!(
            dataset.modified.unwrap().to_string(),
            "2022-01-31"
        );
        assert_eq!(
            dataset.created,
            Some(DateValue::Raw("early 2020".into()))
        );
    }

    #[test]
    fn landing_page_follows_node_alias() {
        let (with_alias, _) =
            mapper_map(&[("node_alias", "/catalog/abc")], 0);
        assert_eq!(
            with_alias.landing_page.as_deref(),
            Some("https://data.gov.in/catalog/abc")
        );
        assert_eq!(
            with_alias.dataset_uri,
            "https://data.gov.in/catalog/abc"
        );

        let (without_alias, _) = mapper_map(&[("title", "t")], 3);
        assert_eq!(without_alias.landing_page, None);
        assert_eq!(without_alias.dataset_uri, "urn:dataset:row-3");
    }
}
