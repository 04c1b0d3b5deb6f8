// ==========================================
// Fleet Dispatch Ingest - Configuration Layer
// ==========================================
// Explicit configuration objects for the ingestion engine.
// ==========================================

pub mod ingest_config;

pub use ingest_config::IngestConfig;
