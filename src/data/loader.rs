use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::model::{HeartDataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons the dataset could not be loaded. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed CSV row {row}: {source}")]
    Csv { row: usize, source: csv::Error },
    #[error("malformed JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported dataset extension: .{0}")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the heart-disease table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row; `age, sex, cp, fbs, restecg, oldpeak, ca, target`
///   are read by name, any other column is ignored
/// * `.json` – `[{ "age": 63, "sex": 1, ... }, ...]` (records orientation)
pub fn load_file(path: &Path) -> Result<HeartDataset, DatasetError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(DatasetError::UnsupportedFormat(other.to_string())),
    };

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(HeartDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let file = open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    reader
        .deserialize::<Record>()
        .enumerate()
        // Row numbers count the header as row 1, matching what an editor shows.
        .map(|(i, rec)| rec.map_err(|source| DatasetError::Csv { row: i + 2, source }))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let file = open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn open(path: &Path) -> Result<std::fs::File, DatasetError> {
    std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const HEART_CSV: &str = "\
age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target
63,1,3,145,233,1,0,150,0,2.3,0,0,1,1
37,1,2,130,250,0,1,187,0,3.5,0,0,2,1
41,0,1,130,204,0,0,172,0,1.4,2,0,2,1
";

    #[test]
    fn csv_reads_known_columns_and_ignores_the_rest() {
        let file = write_temp(".csv", HEART_CSV);
        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.len(), 3);
        let first = &ds.records[0];
        assert_eq!(first.age, 63);
        assert_eq!(first.sex, 1);
        assert_eq!(first.cp, 3);
        assert_eq!(first.fbs, 1);
        assert_eq!(first.restecg, 0);
        assert!((first.oldpeak - 2.3).abs() < 1e-9);
        assert_eq!(first.ca, 0);
        assert_eq!(first.target, 1);
        assert_eq!(ds.age_range, Some((37, 63)));
    }

    #[test]
    fn out_of_domain_codes_pass_through() {
        let file = write_temp(
            ".csv",
            "age,sex,cp,fbs,restecg,oldpeak,ca,target\n50,7,9,3,5,-1.0,4,2\n",
        );
        let ds = load_file(file.path()).unwrap();
        let r = &ds.records[0];
        assert_eq!((r.sex, r.cp, r.fbs, r.restecg, r.ca, r.target), (7, 9, 3, 5, 4, 2));
    }

    #[test]
    fn json_records_are_supported() {
        let file = write_temp(
            ".json",
            r#"[{"age": 58, "sex": 0, "cp": 0, "fbs": 0, "restecg": 0,
                 "oldpeak": 1.0, "ca": 1, "target": 0, "chol": 319}]"#,
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].ca, 1);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_file(Path::new("/definitely/not/here/heart.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }

    #[test]
    fn malformed_row_reports_its_line() {
        let file = write_temp(
            ".csv",
            "age,sex,cp,fbs,restecg,oldpeak,ca,target\n50,1,0,0,0,1.0,0,1\nabc,1,0,0,0,1.0,0,1\n",
        );
        match load_file(file.path()).unwrap_err() {
            DatasetError::Csv { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_required_column_fails() {
        let file = write_temp(".csv", "age,sex,cp\n50,1,0\n");
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DatasetError::Csv { .. }
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".xlsx", "");
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DatasetError::UnsupportedFormat(ext) if ext == "xlsx"
        ));
    }
}
