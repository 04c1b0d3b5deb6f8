// ==========================================
// Fleet Dispatch Ingest - Record Domain Model
// ==========================================
// Typed output of the ingestion pipeline.
// Written by the coercer, read-only for every consumer.
// ==========================================

use crate::domain::types::VehicleType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OrderRecord - one delivery order row
// ==========================================
// Invariant: every numeric field is always present and finite.
// Missing/unparsable cells are defaulted by the coercer, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    // ===== Identity =====
    pub external_id: String, // unique-intent, not enforced

    // ===== Pickup =====
    pub pickup_name: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,

    // ===== Drop =====
    pub drop_name: String,
    pub drop_lat: f64,
    pub drop_lng: f64,

    // ===== Dispatch attributes =====
    pub priority: i32,        // intended range 1-5, unvalidated
    pub service_minutes: i32, // on-site service duration
    pub weight: f64,          // parcel weight

    // ===== Time window (optional, pass-through) =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tw_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tw_end: Option<String>,
}

// ==========================================
// PartnerRecord - one delivery partner row
// ==========================================
// Invariant: vehicle_type is always one of the closed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub name: String,
    pub vehicle_type: VehicleType,
    pub capacity: i32,
    pub shift_start: String, // "HH:MM", pass-through
    pub shift_end: String,   // "HH:MM", pass-through
}

// ==========================================
// Warning - per-row data quality note
// ==========================================
// Append-only; order equals row scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// 1-based data row number, header excluded. 0 for file-level warnings.
    pub row_number: usize,
    pub message: String,
}

impl Warning {
    pub fn new(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            message: message.into(),
        }
    }
}

// ==========================================
// ParseResult - the one value a parse returns
// ==========================================
// Immutable once returned; the engine retains no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub orders: Vec<OrderRecord>,
    pub partners: Vec<PartnerRecord>,
    pub warnings: Vec<Warning>,
}

impl ParseResult {
    pub fn empty() -> Self {
        Self {
            orders: Vec::new(),
            partners: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

// ==========================================
// IngestBatch - audit metadata for one ingest
// ==========================================
// Batch bookkeeping around a ParseResult. Not part of the deterministic
// core: batch_id and imported_at vary per call by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestBatch {
    pub batch_id: String, // UUID v4
    pub file_name: Option<String>,
    pub total_rows: usize, // non-blank data rows seen by the normalizer
    pub order_rows: usize,
    pub partner_rows: usize,
    pub warning_rows: usize,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

// ==========================================
// IngestOutcome - batch metadata + parse result
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub batch: IngestBatch,
    pub result: ParseResult,
}
