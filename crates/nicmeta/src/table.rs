use serde::Serialize;

use crate::mapper::MappedRow;
use crate::record::DistributionKind;

/// One row of the flat Dublin Core export: one dataset per row, with
/// the subject sequence joined back into a single delimited cell.
#[derive(Debug, Serialize)]
pub(crate) struct DublinCoreRow {
    pub(crate) dataset_uri: String,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) issued: Option<String>,
    pub(crate) modified: Option<String>,
    pub(crate) created: Option<String>,
    pub(crate) publisher: Option<String>,
    #[serde(rename = "accrualPeriodicity")]
    pub(crate) accrual_periodicity: Option<String>,
    pub(crate) subject: Option<String>,
    #[serde(rename = "landingPage")]
    pub(crate) landing_page: Option<String>,
}

/// One row of the flat DCAT export: one distribution per row. The
/// URL column that does not apply to the row's kind stays empty.
#[derive(Debug, Serialize)]
pub(crate) struct DcatRow {
    pub(crate) dataset_uri: String,
    pub(crate) distribution_uri: String,
    pub(crate) distribution_type: &'static str,
    #[serde(rename = "accessURL")]
    pub(crate) access_url: Option<String>,
    #[serde(rename = "downloadURL")]
    pub(crate) download_url: Option<String>,
    pub(crate) format: Option<String>,
    #[serde(rename = "byteSize")]
    pub(crate) byte_size: Option<i64>,
    pub(crate) title: Option<String>,
}

pub(crate) fn dublin_core_rows(
    records: &[MappedRow],
) -> Vec<DublinCoreRow> {
    records
        .iter()
        .map(|(dataset, _)| DublinCoreRow {
            dataset_uri: dataset.dataset_uri.clone(),
            title: dataset.title.clone(),
            description: dataset.description.clone(),
            issued: dataset.issued.as_ref().map(ToString::to_string),
            modified: dataset
                .modified
                .as_ref()
                .map(ToString::to_string),
            created: dataset
                .created
                .as_ref()
                .map(ToString::to_string),
            publisher: dataset.publisher.clone(),
            accrual_periodicity: dataset
                .accrual_periodicity
                .as_ref()
                .map(|frequency| frequency.as_str().to_string()),
            subject: if dataset.subjects.is_empty() {
                None
            } else {
                Some(dataset.subjects.join("; "))
            },
            landing_page: dataset.landing_page.clone(),
        })
        .collect()
}

/// Datasets without distributions are omitted entirely; they never
/// show up as rows with empty distribution columns.
pub(crate) fn dcat_rows(records: &[MappedRow]) -> Vec<DcatRow> {
    records
        .iter()
        .flat_map(|(dataset, distributions)| {
            distributions.iter().map(|distribution| DcatRow {
                dataset_uri: dataset.dataset_uri.clone(),
                distribution_uri: distribution
                    .distribution_uri
                    .clone(),
                distribution_type: distribution.kind.tag(),
                access_url: (distribution.kind
                    == DistributionKind::Api)
                    .then(|| distribution.url.clone()),
                download_url: (distribution.kind
                    == DistributionKind::File)
                    .then(|| distribution.url.clone()),
                format: distribution.format.clone(),
                byte_size: distribution.byte_size,
                title: distribution.title.clone(),
            })
        })
        .collect()
}
