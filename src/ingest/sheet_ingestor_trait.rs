// ==========================================
// Fleet Dispatch Ingest - Sheet Ingestor Trait
// ==========================================
// Top-level ingestion interface (no implementation here).
// The single await point is reading file bytes; everything
// after that is a synchronous in-memory transform.
// ==========================================

use crate::domain::record::IngestOutcome;
use crate::ingest::error::IngestResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// SheetIngestor Trait
// ==========================================
// Implementor: SheetIngestorImpl
#[async_trait]
pub trait SheetIngestor: Send + Sync {
    /// Ingests one spreadsheet file into typed order/partner streams.
    ///
    /// # Arguments
    /// - path: file path; extension decides the format (.csv/.xlsx/.xls)
    ///
    /// # Returns
    /// - Ok(IngestOutcome): batch audit record plus the ParseResult
    /// - Err(UnsupportedFormat): extension outside the accepted set,
    ///   raised before any bytes are read
    /// - Err(UnreadableFile): bytes could not be decoded as the format
    ///
    /// Row-level defects never fail the call; they surface as warnings
    /// inside the ParseResult.
    async fn ingest_file<P: AsRef<Path> + Send>(&self, path: P) -> IngestResult<IngestOutcome>;

    /// Ingests multiple files concurrently.
    ///
    /// # Arguments
    /// - file_paths: paths to ingest, one independent parse per file
    ///
    /// # Returns
    /// - Vec of per-file results, in input order. A failing file does
    ///   not affect the others; its error is carried as a String.
    async fn batch_ingest<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<Result<IngestOutcome, String>>;
}
