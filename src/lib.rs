// ==========================================
// Fleet Dispatch Ingest - Core Library
// ==========================================
// Tabular ingestion and record-classification engine:
// splits an uploaded spreadsheet of unknown, mixed schema
// into typed delivery-order and delivery-partner streams
// with a per-row warning trail. A single malformed row
// never fails the batch.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and closed types
pub mod domain;

// Ingestion layer - file bytes to typed records
pub mod ingest;

// Configuration layer - explicit coercion defaults
pub mod config;

// Logging bootstrap
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{GeoPoint, VehicleType};

// Domain entities
pub use domain::record::{
    IngestBatch, IngestOutcome, OrderRecord, ParseResult, PartnerRecord, Warning,
};

// Ingestion engine
pub use ingest::{
    ingest_bytes, FileFormat, IngestError, IngestResult, SheetIngestor, SheetIngestorImpl,
};

// Configuration
pub use config::IngestConfig;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "fleet-dispatch-ingest";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
