// ==========================================
// Fleet Dispatch Ingest - Sheet Ingestor Implementation
// ==========================================
// Orchestration + result assembly.
// Flow: format gate -> read bytes -> grid -> normalize ->
//       (classify -> coerce) per row -> assemble
// Rows are processed strictly in scan order: row-derived
// ids and warning order depend on it.
// ==========================================

use crate::config::IngestConfig;
use crate::domain::record::{IngestBatch, IngestOutcome, ParseResult, Warning};
use crate::ingest::classifier::{classify, RowClass};
use crate::ingest::coercer::{coerce_order, coerce_partner};
use crate::ingest::error::IngestResult;
use crate::ingest::normalizer::normalize;
use crate::ingest::reader::{read_grid, FileFormat};
use crate::ingest::sheet_ingestor_trait::SheetIngestor;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Warning attached when a sheet has a header row but no data rows.
pub const EMPTY_SHEET_WARNING: &str = "file appears to be empty or has no data rows";

/// Warning attached to rows that match neither record shape.
pub const UNCLASSIFIED_ROW_WARNING: &str = "could not classify row as order or partner, skipped";

// ==========================================
// Synchronous core
// ==========================================
/// Parses an in-memory byte buffer into a ParseResult.
///
/// Pure transform: same file name + bytes + config always yield a
/// structurally identical result. The file name only contributes its
/// extension (format selection).
///
/// # Returns
/// - Ok(ParseResult): orders, partners and warnings in row scan order
/// - Err(UnsupportedFormat) / Err(UnreadableFile): the only fatal kinds
pub fn ingest_bytes(
    file_name: &str,
    bytes: &[u8],
    config: &IngestConfig,
) -> IngestResult<ParseResult> {
    // === Step 1: format gate ===
    let format = FileFormat::from_file_name(file_name)?;

    // === Step 2: decode grid ===
    debug!(?format, "decoding byte buffer into grid");
    let grid = read_grid(format, bytes)?;

    // === Step 3: normalize ===
    let sheet = match normalize(&grid) {
        Some(sheet) if !sheet.rows.is_empty() => sheet,
        _ => {
            // Header-only or fully blank input: soft condition, not fatal
            let mut result = ParseResult::empty();
            result.warnings.push(Warning::new(0, EMPTY_SHEET_WARNING));
            return Ok(result);
        }
    };
    debug!(
        headers = sheet.headers.len(),
        rows = sheet.rows.len(),
        "sheet normalized"
    );

    // === Step 4: classify + coerce, row by row ===
    let mut result = ParseResult::empty();
    for row in &sheet.rows {
        match classify(&sheet, row) {
            RowClass::Order => {
                result
                    .orders
                    .push(coerce_order(row, config, &mut result.warnings));
            }
            RowClass::Partner => {
                result
                    .partners
                    .push(coerce_partner(row, config, &mut result.warnings));
            }
            RowClass::Unclassified => {
                // Never drop data without a trace
                warn!(row_number = row.row_number, "unclassifiable row skipped");
                result
                    .warnings
                    .push(Warning::new(row.row_number, UNCLASSIFIED_ROW_WARNING));
            }
        }
    }

    Ok(result)
}

// ==========================================
// SheetIngestorImpl
// ==========================================
pub struct SheetIngestorImpl {
    config: IngestConfig,
}

impl SheetIngestorImpl {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }
}

impl Default for SheetIngestorImpl {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

#[async_trait::async_trait]
impl SheetIngestor for SheetIngestorImpl {
    #[instrument(skip(self, path), fields(batch_id))]
    async fn ingest_file<P: AsRef<Path> + Send>(&self, path: P) -> IngestResult<IngestOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let file_name = path
            .as_ref()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());
        info!(file = %file_name, "starting sheet ingest");

        // Format gate before any bytes are read
        FileFormat::from_file_name(&file_name)?;

        // The single await point of a parse
        let bytes = tokio::fs::read(path.as_ref()).await?;
        debug!(size = bytes.len(), "file bytes loaded");

        let result = ingest_bytes(&file_name, &bytes, &self.config)?;

        let batch = IngestBatch {
            batch_id: batch_id.clone(),
            file_name: Some(file_name),
            total_rows: result.orders.len()
                + result.partners.len()
                + result
                    .warnings
                    .iter()
                    .filter(|w| w.message == UNCLASSIFIED_ROW_WARNING)
                    .count(),
            order_rows: result.orders.len(),
            partner_rows: result.partners.len(),
            warning_rows: result.warnings.len(),
            imported_at: Utc::now(),
            elapsed_ms: start_time.elapsed().as_millis(),
        };

        info!(
            batch_id = %batch_id,
            orders = batch.order_rows,
            partners = batch.partner_rows,
            warnings = batch.warning_rows,
            elapsed_ms = batch.elapsed_ms,
            "sheet ingest complete"
        );

        Ok(IngestOutcome { batch, result })
    }

    async fn batch_ingest<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<Result<IngestOutcome, String>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "starting batch ingest");

        let tasks = file_paths.into_iter().map(|path| {
            let path_str = path.as_ref().to_str().unwrap_or("unknown").to_string();
            async move {
                match self.ingest_file(path).await {
                    Ok(outcome) => Ok(outcome),
                    Err(e) => {
                        error!(file = %path_str, error = %e, "file ingest failed");
                        Err(format!("file {} failed: {}", path_str, e))
                    }
                }
            }
        });

        let results = join_all(tasks).await;

        info!(
            total = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "batch ingest complete"
        );

        results
    }
}
