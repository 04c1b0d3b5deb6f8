// ==========================================
// Fleet Dispatch Ingest - Sheet Normalizer
// ==========================================
// Stage 1: RawGrid -> (HeaderSet, row maps).
// Row 0 supplies headers (trimmed, lower-cased).
// Empty cells are omitted from row maps; wholly blank
// rows are dropped silently (visual whitespace, not data).
// Pure function of the grid, no side effects.
// ==========================================

use crate::ingest::reader::RawGrid;
use std::collections::HashMap;

// ==========================================
// RawRow - one non-blank data row
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based data row number (header excluded). Blank rows still
    /// consume a number so warnings point at the sheet line.
    pub row_number: usize,
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Returns the trimmed, non-empty value under a normalized header.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// First non-empty value among several candidate headers, in order.
    pub fn get_first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ==========================================
// NormalizedSheet - normalizer output
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSheet {
    /// Ordered, lower-cased, trimmed headers from row 0.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl NormalizedSheet {
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// Normalizes a raw grid into headers plus keyed rows.
///
/// # Returns
/// - Some(NormalizedSheet): grid had a header row (data rows may be zero)
/// - None: grid was completely empty
pub fn normalize(grid: &RawGrid) -> Option<NormalizedSheet> {
    let mut grid_rows = grid.iter();
    let header_row = grid_rows.next()?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let mut rows = Vec::new();
    for (idx, data_row) in grid_rows.enumerate() {
        let mut fields = HashMap::new();

        for (col_idx, cell) in data_row.iter().enumerate() {
            let value = cell.trim();
            if value.is_empty() {
                continue;
            }
            if let Some(header) = headers.get(col_idx) {
                fields.insert(header.clone(), value.to_string());
            }
        }

        // Blank row: drop silently
        if fields.is_empty() {
            continue;
        }

        rows.push(RawRow {
            row_number: idx + 1,
            fields,
        });
    }

    Some(NormalizedSheet { headers, rows })
}
