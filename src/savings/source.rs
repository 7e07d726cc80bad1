use crate::debug_println;
use crate::savings::sample::sample_dataset;
use crate::savings::{MonthlyRecord, MonthlyTripCount, SavingsDataset};
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for loading savings data
#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    Parse(String),
    Http(String),
    InvalidRecord {
        month: String,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "Failed to read savings data: {}", e),
            SourceError::Parse(msg) => write!(f, "Savings data is malformed: {}", msg),
            SourceError::Http(msg) => write!(f, "Failed to fetch savings data: {}", msg),
            SourceError::InvalidRecord {
                month,
                field,
                value,
            } => write!(
                f,
                "Invalid value {} for '{}' in record '{}'",
                value, field, month
            ),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(error: std::io::Error) -> Self {
        SourceError::Io(error)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(error: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON error: {}", error))
    }
}

/// Where dashboard records come from. Aggregation never knows which one it got.
pub trait SavingsSource {
    fn name(&self) -> &str;
    fn fetch(&self) -> Result<SavingsDataset, SourceError>;
}

/// Built-in demo series
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl SavingsSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn fetch(&self) -> Result<SavingsDataset, SourceError> {
        Ok(sample_dataset())
    }
}

/// JSON document on disk: `{"records": [...], "trips": [...]}`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SavingsSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self) -> Result<SavingsDataset, SourceError> {
        let content = fs::read_to_string(&self.path)?;
        let dataset = parse_dataset(&content)?;
        debug_println!(
            "Loaded {} records and {} trip counts from {}",
            dataset.records.len(),
            dataset.trips.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}

/// Parse and validate a dataset document
pub fn parse_dataset(content: &str) -> Result<SavingsDataset, SourceError> {
    if content.trim().is_empty() {
        return Err(SourceError::Parse("document is empty".to_string()));
    }
    let dataset: SavingsDataset = serde_json::from_str(content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Reject blank month labels and negative or non-finite amounts
pub fn validate_dataset(dataset: &SavingsDataset) -> Result<(), SourceError> {
    dataset.records.iter().try_for_each(validate_record)?;
    dataset.trips.iter().try_for_each(validate_trip_count)
}

fn validate_record(record: &MonthlyRecord) -> Result<(), SourceError> {
    check_label(&record.month)?;

    let fields = [
        ("timeSaved", record.time_saved),
        ("tollSaved", record.toll_saved),
        ("fuelSaved", record.fuel_saved),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(SourceError::InvalidRecord {
                month: record.month.clone(),
                field,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_trip_count(trip: &MonthlyTripCount) -> Result<(), SourceError> {
    check_label(&trip.month)
}

fn check_label(month: &str) -> Result<(), SourceError> {
    if month.trim().is_empty() {
        return Err(SourceError::InvalidRecord {
            month: month.to_string(),
            field: "month",
            value: format!("{:?}", month),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::summarize;
    use std::io::Write;

    #[test]
    fn test_sample_source() {
        let dataset = SampleSource.fetch().unwrap();
        assert_eq!(dataset.records.len(), 6);
        assert_eq!(dataset.trips.len(), 6);
        assert_eq!(summarize(&dataset.records).total_saved, 21500.0);
    }

    #[test]
    fn test_file_source_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savings.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "records": [
                    {{"month": "Jul", "timeSaved": 6, "tollSaved": 1400, "fuelSaved": 2000}},
                    {{"month": "Aug", "tollSaved": 900}}
                ],
                "trips": [{{"month": "Jul", "trips": 11}}]
            }}"#
        )
        .unwrap();

        let source = FileSource::new(&path);
        let dataset = source.fetch().unwrap();
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.records[1].fuel_saved, 0.0);
        assert_eq!(dataset.trips[0].trips, 11);

        let summary = summarize(&dataset.records);
        assert_eq!(summary.total_saved, 4300.0);
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch(), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_empty_record_list_is_valid() {
        let dataset = parse_dataset(r#"{"records": []}"#).unwrap();
        assert!(dataset.records.is_empty());
        assert_eq!(summarize(&dataset.records).total_saved, 0.0);
    }

    #[test]
    fn test_rejects_negative_amount() {
        let result = parse_dataset(r#"{"records": [{"month": "Jan", "tollSaved": -5}]}"#);
        match result {
            Err(SourceError::InvalidRecord { month, field, .. }) => {
                assert_eq!(month, "Jan");
                assert_eq!(field, "tollSaved");
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_blank_month() {
        let result = parse_dataset(r#"{"records": [{"month": "  ", "fuelSaved": 5}]}"#);
        assert!(matches!(
            result,
            Err(SourceError::InvalidRecord { field: "month", .. })
        ));

        let result = parse_dataset(r#"{"records": [], "trips": [{"month": "", "trips": 2}]}"#);
        assert!(matches!(
            result,
            Err(SourceError::InvalidRecord { field: "month", .. })
        ));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(parse_dataset(""), Err(SourceError::Parse(_))));
        assert!(matches!(parse_dataset("{not json"), Err(SourceError::Parse(_))));
        assert!(matches!(
            parse_dataset(r#"{"records": [{"tollSaved": 5}]}"#),
            Err(SourceError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_directly() {
        let dataset = SavingsDataset {
            records: vec![MonthlyRecord::new("Jan", f64::NAN, 0.0, 0.0)],
            trips: Vec::new(),
        };
        assert!(matches!(
            validate_dataset(&dataset),
            Err(SourceError::InvalidRecord {
                field: "timeSaved",
                ..
            })
        ));
    }
}
