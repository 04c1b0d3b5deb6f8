// ==========================================
// Fleet Dispatch Ingest - Domain Layer
// ==========================================
// Entities and closed types shared across the pipeline.
// ==========================================

pub mod record;
pub mod types;

// Re-export core entities
pub use record::{IngestBatch, IngestOutcome, OrderRecord, ParseResult, PartnerRecord, Warning};
pub use types::{GeoPoint, VehicleType};
