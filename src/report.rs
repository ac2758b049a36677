//! Writes a finished [`DaySeries`] to a CSV file.

use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use csv::Writer;

use crate::error::OutbreakError;
use crate::log::debug;
use crate::series::DaySeries;

// Checks that the path is valid. Creates the file and all parent directories
// if they do not exist. Returns the file if successful.
fn generate_validate_filepath(path: &Path) -> Result<File, OutbreakError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            create_dir_all(path.parent().expect("Either root or empty path provided"))?;
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(OutbreakError::OutbreakError(
            "Report output files must be CSVs at this time".to_string(),
        )),
    }
}

/// Writes the series as CSV rows with a `day,infected` header, creating
/// parent directories as needed. The output path must end in `.csv`.
///
/// # Errors
///
/// Returns an `OutbreakError` when the path is not a CSV path or the file
/// cannot be written.
pub fn write_series(path: &Path, series: &DaySeries) -> Result<(), OutbreakError> {
    debug!("writing {} rows to {}", series.len(), path.display());
    let file = generate_validate_filepath(path)?;
    let mut writer = Writer::from_writer(file);
    for record in series {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{generate_validate_filepath, write_series};
    use crate::error::OutbreakError;
    use crate::series::{DayRecord, DaySeries};
    use tempfile::tempdir;

    #[test]
    fn writes_and_reads_back() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("series.csv");

        let mut series = DaySeries::with_starting(10);
        series.push(40);
        series.push(160);
        write_series(&path, &series).unwrap();

        assert!(path.exists(), "CSV file should exist");
        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["day", "infected"])
        );
        let records: Vec<DayRecord> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(records, series.records());
    }

    #[test]
    fn creates_parent_directories() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("dirs").join("out.csv");

        let series = DaySeries::with_starting(1);
        write_series(&path, &series).unwrap();
        assert!(path.exists(), "CSV file should exist");
    }

    #[test]
    fn only_csvs_allowed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("series.tsv");
        let result = generate_validate_filepath(&path);
        match result {
            Ok(_) => panic!("Other file types beyond CSV are not allowed (yet)"),
            Err(OutbreakError::OutbreakError(message)) => {
                assert_eq!(message, "Report output files must be CSVs at this time");
            }
            Err(other) => panic!("Unexpected error: {other}"),
        }
    }
}
