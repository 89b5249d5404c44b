use csv::StringRecord;

/// A single input record, addressed by column name.
///
/// The accessor treats a missing column and an empty cell the same
/// way; the mapping engine never distinguishes the two.
#[derive(Debug, Default)]
pub(crate) struct InputRow {
    fields: Vec<(String, String)>,
}

impl InputRow {
    pub(crate) fn new(
        headers: &StringRecord,
        record: &StringRecord,
    ) -> Self {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self { fields }
    }

    /// Returns the raw value of the named field, or `None` if the
    /// field is absent or empty.
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(name, value)| {
                    (name.to_string(), value.to_string())
                })
                .collect(),
        }
    }
}
