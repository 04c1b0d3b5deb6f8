// ==========================================
// Fleet Dispatch Ingest - Ingest Configuration
// ==========================================
// Defaults substituted by the coercer for missing or
// unparsable cells. Passed explicitly into every parse
// call; the engine keeps no global configuration.
// ==========================================

use crate::domain::types::{GeoPoint, VehicleType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    // ===== Fallback coordinate pairs =====
    // Substituted as a pair: a missing or unparsable latitude or
    // longitude replaces both halves of that coordinate.
    pub fallback_pickup: GeoPoint,
    pub fallback_drop: GeoPoint,

    // ===== Order defaults =====
    pub default_priority: i32,
    pub default_service_minutes: i32,
    pub default_weight: f64,

    // ===== Partner defaults =====
    pub default_vehicle_type: VehicleType,
    pub default_capacity: i32,
    pub default_shift_start: String,
    pub default_shift_end: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            // Bengaluru city centre / Koramangala; distinct pairs so a
            // defaulted pickup is distinguishable from a defaulted drop.
            fallback_pickup: GeoPoint::new(12.9716, 77.5946),
            fallback_drop: GeoPoint::new(12.9352, 77.6245),
            default_priority: 3,
            default_service_minutes: 5,
            default_weight: 1.0,
            default_vehicle_type: VehicleType::Bike,
            default_capacity: 8,
            default_shift_start: "09:00".to_string(),
            default_shift_end: "18:00".to_string(),
        }
    }
}
