// ==========================================
// Fleet Dispatch Ingest - Field Coercer
// ==========================================
// Stage 3: extract and type-coerce every target field of
// a classified row. Total per-field rules: a missing or
// unparsable cell is replaced by its configured default
// (with a warning where the rule says so) and the row is
// always kept. NaN never reaches a returned record.
// ==========================================

use crate::config::IngestConfig;
use crate::domain::record::{OrderRecord, PartnerRecord, Warning};
use crate::domain::types::VehicleType;
use crate::ingest::normalizer::RawRow;

// ===== Parse helpers =====
// Unparsable or non-finite numerics are treated identically to missing.

fn parse_f64(row: &RawRow, key: &str) -> Option<f64> {
    row.get(key)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_i32(row: &RawRow, key: &str) -> Option<i32> {
    row.get(key).and_then(|v| v.parse::<i32>().ok())
}

fn get_string(row: &RawRow, keys: &[&str]) -> Option<String> {
    row.get_first(keys).map(str::to_string)
}

// ==========================================
// Order coercion
// ==========================================
/// Builds an OrderRecord from a row already classified as an order.
///
/// Defaults (from config where numeric/geographic):
/// - external_id: "ORD-" + zero-padded row number
/// - pickup/drop names: "Unknown Pickup" / "Unknown Drop"
/// - coordinates: configured fallback pair, one warning per pair
/// - priority / service_minutes / weight: configured defaults, no warning
pub fn coerce_order(row: &RawRow, config: &IngestConfig, warnings: &mut Vec<Warning>) -> OrderRecord {
    let external_id = get_string(row, &["external_id", "order_id"])
        .unwrap_or_else(|| format!("ORD-{:03}", row.row_number));

    let pickup_name =
        get_string(row, &["pickup_name"]).unwrap_or_else(|| "Unknown Pickup".to_string());
    let drop_name = get_string(row, &["drop_name"]).unwrap_or_else(|| "Unknown Drop".to_string());

    // A coordinate pair stands or falls together: if either half is
    // missing or unparsable the whole pair is replaced.
    let (pickup_lat, pickup_lng) = match (parse_f64(row, "pickup_lat"), parse_f64(row, "pickup_lng"))
    {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            warnings.push(Warning::new(
                row.row_number,
                format!(
                    "order {}: missing or invalid pickup coordinates, using fallback location",
                    external_id
                ),
            ));
            (config.fallback_pickup.lat, config.fallback_pickup.lng)
        }
    };

    let (drop_lat, drop_lng) = match (parse_f64(row, "drop_lat"), parse_f64(row, "drop_lng")) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            warnings.push(Warning::new(
                row.row_number,
                format!(
                    "order {}: missing or invalid drop coordinates, using fallback location",
                    external_id
                ),
            ));
            (config.fallback_drop.lat, config.fallback_drop.lng)
        }
    };

    OrderRecord {
        external_id,
        pickup_name,
        pickup_lat,
        pickup_lng,
        drop_name,
        drop_lat,
        drop_lng,
        priority: parse_i32(row, "priority").unwrap_or(config.default_priority),
        service_minutes: parse_i32(row, "service_minutes")
            .unwrap_or(config.default_service_minutes),
        weight: parse_f64(row, "weight").unwrap_or(config.default_weight),
        tw_start: get_string(row, &["tw_start"]),
        tw_end: get_string(row, &["tw_end"]),
    }
}

// ==========================================
// Partner coercion
// ==========================================
/// Builds a PartnerRecord from a row already classified as a partner.
///
/// The classifier guarantees one of name/partner_name/driver_name is
/// populated. vehicle_type outside the closed vocabulary falls back to
/// the configured default with a warning naming the partner.
pub fn coerce_partner(
    row: &RawRow,
    config: &IngestConfig,
    warnings: &mut Vec<Warning>,
) -> PartnerRecord {
    let name = get_string(row, &["name", "partner_name", "driver_name"]).unwrap_or_default();

    let vehicle_type = match row.get("vehicle_type") {
        Some(raw) => match VehicleType::parse(raw) {
            Some(vt) => vt,
            None => {
                warnings.push(Warning::new(
                    row.row_number,
                    format!(
                        "partner {}: unknown vehicle_type '{}', defaulting to {}",
                        name, raw, config.default_vehicle_type
                    ),
                ));
                config.default_vehicle_type
            }
        },
        None => {
            warnings.push(Warning::new(
                row.row_number,
                format!(
                    "partner {}: no vehicle_type given, defaulting to {}",
                    name, config.default_vehicle_type
                ),
            ));
            config.default_vehicle_type
        }
    };

    PartnerRecord {
        name,
        vehicle_type,
        capacity: parse_i32(row, "capacity").unwrap_or(config.default_capacity),
        shift_start: get_string(row, &["shift_start"])
            .unwrap_or_else(|| config.default_shift_start.clone()),
        shift_end: get_string(row, &["shift_end"])
            .unwrap_or_else(|| config.default_shift_end.clone()),
    }
}
