// ==========================================
// Fleet Dispatch Ingest - Record Classifier
// ==========================================
// Stage 2: decide per row whether it denotes an Order,
// a Partner, or neither. Row-local: the decision depends
// only on the shared header set and the row itself, so a
// single sheet may legitimately mix both record kinds.
// ==========================================

use crate::ingest::normalizer::{NormalizedSheet, RawRow};

/// Header vocabulary that marks a sheet as order-shaped.
pub const ORDER_HEADERS: [&str; 6] = [
    "pickup_name",
    "pickup_lat",
    "drop_name",
    "drop_lat",
    "order_id",
    "external_id",
];

/// Header vocabulary that marks a sheet as partner-shaped.
pub const PARTNER_HEADERS: [&str; 5] = [
    "name",
    "vehicle_type",
    "capacity",
    "partner_name",
    "driver_name",
];

/// Headers that may carry a partner's display name, in priority order.
pub const PARTNER_NAME_HEADERS: [&str; 3] = ["name", "partner_name", "driver_name"];

// ==========================================
// RowClass - the classification verdict
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Order,
    Partner,
    Unclassified,
}

/// True when the header set intersects the order vocabulary.
pub fn looks_like_orders(sheet: &NormalizedSheet) -> bool {
    ORDER_HEADERS.iter().any(|h| sheet.has_header(h))
}

/// True when the header set intersects the partner vocabulary.
pub fn looks_like_partners(sheet: &NormalizedSheet) -> bool {
    PARTNER_HEADERS.iter().any(|h| sheet.has_header(h))
}

/// Classifies one row.
///
/// Order takes precedence when both predicates match: an order sheet
/// often also carries a "name" column for the customer.
///
/// # Returns
/// - RowClass::Order: order headers present and the row has a pickup or drop name
/// - RowClass::Partner: partner headers present and the row has a partner name
/// - RowClass::Unclassified: neither rule fired
pub fn classify(sheet: &NormalizedSheet, row: &RawRow) -> RowClass {
    if looks_like_orders(sheet) && row.get_first(&["pickup_name", "drop_name"]).is_some() {
        return RowClass::Order;
    }

    if looks_like_partners(sheet) && row.get_first(&PARTNER_NAME_HEADERS).is_some() {
        return RowClass::Partner;
    }

    RowClass::Unclassified
}
