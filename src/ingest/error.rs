// ==========================================
// Fleet Dispatch Ingest - Error Types
// ==========================================
// Tooling: thiserror derive macro
// Only two fatal kinds exist; every other defect is
// absorbed into the warning log as a soft failure.
// ==========================================

use thiserror::Error;

/// Fatal ingestion errors.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("unsupported file format: {0} (only .xlsx/.xls/.csv are accepted)")]
    UnsupportedFormat(String),

    #[error("file could not be read as the declared format: {0}")]
    UnreadableFile(String),
}

// io errors surface while loading bytes from disk
impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::UnreadableFile(err.to_string())
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::UnreadableFile(err.to_string())
    }
}

impl From<calamine::XlsxError> for IngestError {
    fn from(err: calamine::XlsxError) -> Self {
        IngestError::UnreadableFile(err.to_string())
    }
}

impl From<calamine::XlsError> for IngestError {
    fn from(err: calamine::XlsError) -> Self {
        IngestError::UnreadableFile(err.to_string())
    }
}

/// Result alias for the ingestion pipeline.
pub type IngestResult<T> = Result<T, IngestError>;
