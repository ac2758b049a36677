use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `OutbreakError` and maps other errors to
/// convert to an `OutbreakError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum OutbreakError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
    PlotError(String),
    OutbreakError(String),
}

impl From<io::Error> for OutbreakError {
    fn from(error: io::Error) -> Self {
        OutbreakError::IoError(error)
    }
}

impl From<serde_json::Error> for OutbreakError {
    fn from(error: serde_json::Error) -> Self {
        OutbreakError::JsonError(error)
    }
}

impl From<csv::Error> for OutbreakError {
    fn from(error: csv::Error) -> Self {
        OutbreakError::CsvError(error)
    }
}

impl From<String> for OutbreakError {
    fn from(error: String) -> Self {
        OutbreakError::OutbreakError(error)
    }
}

impl From<&str> for OutbreakError {
    fn from(error: &str) -> Self {
        OutbreakError::OutbreakError(error.to_string())
    }
}

impl std::error::Error for OutbreakError {}

impl Display for OutbreakError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
