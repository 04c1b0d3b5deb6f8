// ==========================================
// Fleet Dispatch Ingest - Domain Types
// ==========================================
// Closed vocabularies shared by classifier and coercer.
// Serialization format: lowercase (matches source sheets)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Vehicle Type
// ==========================================
// Closed enum: every PartnerRecord carries one of these, never free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Scooter,
    Car,
    Van,
    Truck,
}

impl VehicleType {
    /// Parses a raw cell value into a vehicle type.
    ///
    /// # Arguments
    /// - value: raw cell text (any case, surrounding whitespace allowed)
    ///
    /// # Returns
    /// - Some(VehicleType): value is in the closed vocabulary
    /// - None: unknown vehicle type (caller substitutes the configured default)
    pub fn parse(value: &str) -> Option<VehicleType> {
        match value.trim().to_lowercase().as_str() {
            "bike" => Some(VehicleType::Bike),
            "scooter" => Some(VehicleType::Scooter),
            "car" => Some(VehicleType::Car),
            "van" => Some(VehicleType::Van),
            "truck" => Some(VehicleType::Truck),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Bike => write!(f, "bike"),
            VehicleType::Scooter => write!(f, "scooter"),
            VehicleType::Car => write!(f, "car"),
            VehicleType::Van => write!(f, "van"),
            VehicleType::Truck => write!(f, "truck"),
        }
    }
}

// ==========================================
// Geographic Point
// ==========================================
// Used for the configured fallback coordinate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
