// ==========================================
// Fleet Dispatch Ingest - Ingestion Layer
// ==========================================
// Responsibility: turn uploaded spreadsheet bytes into
// typed order/partner record streams plus a warning log.
// Pipeline: reader -> normalizer -> (classifier -> coercer)
//           per row -> assembly
// ==========================================

// Module declarations
pub mod classifier;
pub mod coercer;
pub mod error;
pub mod normalizer;
pub mod reader;
pub mod sheet_ingestor_impl;
pub mod sheet_ingestor_trait;

// Re-export core types
pub use classifier::{classify, looks_like_orders, looks_like_partners, RowClass};
pub use coercer::{coerce_order, coerce_partner};
pub use error::{IngestError, IngestResult};
pub use normalizer::{normalize, NormalizedSheet, RawRow};
pub use reader::{read_grid, CsvGridReader, FileFormat, RawGrid, TabularReader, XlsGridReader, XlsxGridReader};
pub use sheet_ingestor_impl::{ingest_bytes, SheetIngestorImpl, EMPTY_SHEET_WARNING, UNCLASSIFIED_ROW_WARNING};
pub use sheet_ingestor_trait::SheetIngestor;
