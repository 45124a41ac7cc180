use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Record – one row of the heart-disease table
// ---------------------------------------------------------------------------

/// One patient observation.
///
/// Categorical fields keep the raw integer codes from the source file; no
/// domain check is made, so an unexpected code flows through to the charts
/// untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "integer_code")]
    pub age: i64,
    /// 1 = male, 0 = female.
    #[serde(deserialize_with = "integer_code")]
    pub sex: i64,
    /// Chest-pain type.
    #[serde(deserialize_with = "integer_code")]
    pub cp: i64,
    /// Fasting blood sugar flag.
    #[serde(deserialize_with = "integer_code")]
    pub fbs: i64,
    /// Resting ECG result (0, 1, 2).
    #[serde(deserialize_with = "integer_code")]
    pub restecg: i64,
    /// ST depression induced by exercise relative to rest.
    pub oldpeak: f64,
    /// Number of major vessels coloured by fluoroscopy.
    #[serde(deserialize_with = "integer_code")]
    pub ca: i64,
    /// 1 = heart disease present, 0 = absent.
    #[serde(deserialize_with = "integer_code")]
    pub target: i64,
}

/// Accept `3` as well as `3.0`: tables exported through pandas often carry
/// integral floats in integer columns.
fn integer_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Int(i64),
        Float(f64),
    }

    match Code::deserialize(deserializer)? {
        Code::Int(i) => Ok(i),
        Code::Float(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
        Code::Float(f) => Err(serde::de::Error::custom(format!(
            "expected an integer code, got {f}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// HeartDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the column summaries the filter widgets need.
#[derive(Debug, Clone)]
pub struct HeartDataset {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    /// Observed `(min, max)` age, `None` for an empty table.
    pub age_range: Option<(i64, i64)>,
    /// Sorted set of chest-pain codes present in the table.
    pub chest_pain_types: BTreeSet<i64>,
}

impl HeartDataset {
    /// Build column summaries from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let age_range = records.iter().fold(None, |acc, r| match acc {
            None => Some((r.age, r.age)),
            Some((lo, hi)) => Some((r.age.min(lo), r.age.max(hi))),
        });
        let chest_pain_types = records.iter().map(|r| r.cp).collect();

        HeartDataset {
            records,
            age_range,
            chest_pain_types,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::small_dataset;
    use super::*;

    #[test]
    fn summaries_reflect_records() {
        let ds = small_dataset();
        assert_eq!(ds.len(), 12);
        assert_eq!(ds.age_range, Some((37, 76)));
        assert_eq!(
            ds.chest_pain_types.iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn empty_dataset_has_no_age_range() {
        let ds = HeartDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.age_range, None);
        assert!(ds.chest_pain_types.is_empty());
    }

    #[test]
    fn integral_floats_are_accepted_as_codes() {
        let json = r#"{"age": 54.0, "sex": 1, "cp": 2.0, "fbs": 0, "restecg": 1,
                       "oldpeak": 1.2, "ca": 0.0, "target": 1}"#;
        let rec: Record = serde_json::from_str(json).unwrap();
        assert_eq!(rec.age, 54);
        assert_eq!(rec.cp, 2);
        assert_eq!(rec.ca, 0);
    }

    #[test]
    fn fractional_code_is_rejected() {
        let json = r#"{"age": 54.5, "sex": 1, "cp": 2, "fbs": 0, "restecg": 1,
                       "oldpeak": 1.2, "ca": 0, "target": 1}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
