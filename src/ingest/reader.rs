// ==========================================
// Fleet Dispatch Ingest - Tabular Reader
// ==========================================
// Stage 0: decode raw bytes into a rectangular grid.
// Supported: Excel (.xlsx/.xls) / CSV (.csv)
// Excel: first worksheet only, later sheets are ignored.
// CSV: RFC 4180 tokenization via the csv crate (quoted
// fields and embedded delimiters are honored).
// ==========================================

use crate::ingest::error::{IngestError, IngestResult};
use calamine::{Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::Path;

/// Rectangular grid of raw cell values, one inner Vec per sheet row.
/// Every cell is rendered to text; empty cells become empty strings.
pub type RawGrid = Vec<Vec<String>>;

// ==========================================
// File format tag
// ==========================================
// Inferred from the file extension before any bytes are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Infers the format from a file name's extension.
    ///
    /// # Returns
    /// - Ok(FileFormat): extension is one of csv/xlsx/xls (any case)
    /// - Err(UnsupportedFormat): anything else, including no extension
    pub fn from_file_name(file_name: &str) -> IngestResult<FileFormat> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Xlsx),
            "xls" => Ok(FileFormat::Xls),
            _ => Err(IngestError::UnsupportedFormat(ext)),
        }
    }
}

// ==========================================
// TabularReader trait
// ==========================================
// One implementor per physical format; all produce the same grid shape.
pub trait TabularReader: Send + Sync {
    /// Decodes a byte buffer into a RawGrid.
    ///
    /// # Returns
    /// - Ok(RawGrid): decoded grid (may be empty)
    /// - Err(UnreadableFile): buffer is not valid in this format
    fn read_grid(&self, bytes: &[u8]) -> IngestResult<RawGrid>;
}

// ==========================================
// CSV reader
// ==========================================
pub struct CsvGridReader;

impl TabularReader for CsvGridReader {
    fn read_grid(&self, bytes: &[u8]) -> IngestResult<RawGrid> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // row 0 is handled by the normalizer
            .flexible(true) // tolerate ragged row lengths
            .from_reader(bytes);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result?;
            grid.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(grid)
    }
}

// ==========================================
// Excel readers (xlsx / legacy xls)
// ==========================================
pub struct XlsxGridReader;

impl TabularReader for XlsxGridReader {
    fn read_grid(&self, bytes: &[u8]) -> IngestResult<RawGrid> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names();
        let first_sheet = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::UnreadableFile("workbook has no worksheets".to_string()))?;

        let range = workbook.worksheet_range(&first_sheet)?;
        Ok(range_to_grid(&range))
    }
}

pub struct XlsGridReader;

impl TabularReader for XlsGridReader {
    fn read_grid(&self, bytes: &[u8]) -> IngestResult<RawGrid> {
        let mut workbook: Xls<_> = Xls::new(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names();
        let first_sheet = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::UnreadableFile("workbook has no worksheets".to_string()))?;

        let range = workbook.worksheet_range(&first_sheet)?;
        Ok(range_to_grid(&range))
    }
}

fn range_to_grid(range: &calamine::Range<calamine::Data>) -> RawGrid {
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

// ==========================================
// Format dispatch
// ==========================================
/// Decodes bytes with the reader matching the declared format.
pub fn read_grid(format: FileFormat, bytes: &[u8]) -> IngestResult<RawGrid> {
    match format {
        FileFormat::Csv => CsvGridReader.read_grid(bytes),
        FileFormat::Xlsx => XlsxGridReader.read_grid(bytes),
        FileFormat::Xls => XlsGridReader.read_grid(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(
            FileFormat::from_file_name("orders.csv").unwrap(),
            FileFormat::Csv
        );
        assert_eq!(
            FileFormat::from_file_name("fleet.XLSX").unwrap(),
            FileFormat::Xlsx
        );
        assert_eq!(
            FileFormat::from_file_name("legacy.xls").unwrap(),
            FileFormat::Xls
        );
    }

    #[test]
    fn test_format_rejects_other_extensions() {
        assert!(matches!(
            FileFormat::from_file_name("report.pdf"),
            Err(IngestError::UnsupportedFormat(ext)) if ext == "pdf"
        ));
        assert!(matches!(
            FileFormat::from_file_name("no_extension"),
            Err(IngestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_csv_reader_basic_grid() {
        let bytes = b"external_id,pickup_name\nORD-1,Warehouse A\nORD-2,Warehouse B\n";
        let grid = CsvGridReader.read_grid(bytes).unwrap();

        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["external_id", "pickup_name"]);
        assert_eq!(grid[2], vec!["ORD-2", "Warehouse B"]);
    }

    #[test]
    fn test_csv_reader_quoted_delimiter() {
        // RFC 4180: a quoted field may contain the delimiter
        let bytes = b"pickup_name,drop_name\n\"Depot, North Gate\",Hub\n";
        let grid = CsvGridReader.read_grid(bytes).unwrap();

        assert_eq!(grid[1][0], "Depot, North Gate");
        assert_eq!(grid[1][1], "Hub");
    }

    #[test]
    fn test_csv_reader_ragged_rows() {
        let bytes = b"a,b,c\n1,2\n3,4,5,6\n";
        let grid = CsvGridReader.read_grid(bytes).unwrap();

        assert_eq!(grid[1].len(), 2);
        assert_eq!(grid[2].len(), 4);
    }

    #[test]
    fn test_csv_reader_invalid_utf8() {
        let bytes = [0x61, 0x2c, 0x62, 0x0a, 0xff, 0xfe, 0x2c, 0x63];
        let result = CsvGridReader.read_grid(&bytes);
        assert!(matches!(result, Err(IngestError::UnreadableFile(_))));
    }

    #[test]
    fn test_xlsx_reader_corrupt_bytes() {
        let result = XlsxGridReader.read_grid(b"not a zip archive");
        assert!(matches!(result, Err(IngestError::UnreadableFile(_))));
    }

    #[test]
    fn test_xls_reader_corrupt_bytes() {
        let result = XlsGridReader.read_grid(b"not an ole2 container");
        assert!(matches!(result, Err(IngestError::UnreadableFile(_))));
    }
}
