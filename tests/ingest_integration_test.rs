// ==========================================
// SheetIngestor integration tests
// ==========================================
// Target: the full ingest flow over real temp files,
// end to end through the async entry point.
// ==========================================

use fleet_dispatch_ingest::ingest::{EMPTY_SHEET_WARNING, UNCLASSIFIED_ROW_WARNING};
use fleet_dispatch_ingest::{
    logging, IngestConfig, IngestError, SheetIngestor, SheetIngestorImpl, VehicleType,
};
use std::io::Write;
use tempfile::TempDir;

/// Writes CSV contents to a named file inside a temp dir.
///
/// The ingestor routes on the file extension, so tests need control
/// over the full file name (NamedTempFile suffixes are random).
fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    write!(file, "{}", contents).expect("write fixture");
    path
}

#[tokio::test]
async fn test_ingest_orders_csv_basic() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "orders.csv",
        "external_id,pickup_name,pickup_lat,pickup_lng,drop_name,drop_lat,drop_lng,priority\n\
         ORD-A,Depot North,12.98,77.60,Hub East,12.93,77.62,1\n\
         ORD-B,Depot North,12.98,77.60,Hub West,12.91,77.58,4\n",
    );

    let ingestor = SheetIngestorImpl::default();
    let outcome = ingestor.ingest_file(&path).await.unwrap();

    assert_eq!(outcome.result.orders.len(), 2);
    assert!(outcome.result.partners.is_empty());
    assert!(outcome.result.warnings.is_empty());
    assert_eq!(outcome.result.orders[0].external_id, "ORD-A");
    assert_eq!(outcome.result.orders[1].priority, 4);

    assert_eq!(outcome.batch.total_rows, 2);
    assert_eq!(outcome.batch.order_rows, 2);
    assert_eq!(outcome.batch.file_name.as_deref(), Some("orders.csv"));
}

#[tokio::test]
async fn test_ingest_partners_csv_basic() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "partners.csv",
        "name,vehicle_type,capacity,shift_start,shift_end\n\
         Asha,van,12,07:00,15:00\n\
         Bala,truck,40,09:00,18:00\n",
    );

    let outcome = SheetIngestorImpl::default().ingest_file(&path).await.unwrap();

    assert_eq!(outcome.result.partners.len(), 2);
    assert!(outcome.result.orders.is_empty());
    assert!(outcome.result.warnings.is_empty());
    assert_eq!(outcome.result.partners[0].vehicle_type, VehicleType::Van);
    assert_eq!(outcome.result.partners[1].capacity, 40);
}

#[tokio::test]
async fn test_header_only_file_is_soft_empty() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.csv", "external_id,pickup_name,drop_name\n");

    let outcome = SheetIngestorImpl::default().ingest_file(&path).await.unwrap();

    assert!(outcome.result.orders.is_empty());
    assert!(outcome.result.partners.is_empty());
    assert_eq!(outcome.result.warnings.len(), 1);
    assert_eq!(outcome.result.warnings[0].message, EMPTY_SHEET_WARNING);
    assert_eq!(outcome.batch.total_rows, 0);
}

#[tokio::test]
async fn test_unsupported_extension_fails_before_reading() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    // Deliberately never created on disk: the format gate must fire
    // before any read is attempted.
    let path = dir.path().join("report.pdf");

    let result = SheetIngestorImpl::default().ingest_file(&path).await;

    assert!(matches!(result, Err(IngestError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_missing_csv_file_is_unreadable() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghost.csv");

    let result = SheetIngestorImpl::default().ingest_file(&path).await;

    assert!(matches!(result, Err(IngestError::UnreadableFile(_))));
}

#[tokio::test]
async fn test_corrupt_xlsx_is_unreadable() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "corrupt.xlsx", "this is not a zip archive");

    let result = SheetIngestorImpl::default().ingest_file(&path).await;

    assert!(matches!(result, Err(IngestError::UnreadableFile(_))));
}

#[tokio::test]
async fn test_defaults_and_warnings_flow_end_to_end() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "mixed.csv",
        "pickup_name,drop_name,name,vehicle_type\n\
         Depot,Hub,,\n\
         ,,Bob,scooter-xl\n\
         garbage-col-only,,,\n",
    );
    let config = IngestConfig::default();

    let outcome = SheetIngestorImpl::new(config.clone())
        .ingest_file(&path)
        .await
        .unwrap();

    // Row 1: order with both coordinate pairs defaulted (2 warnings)
    assert_eq!(outcome.result.orders.len(), 2);
    let order = &outcome.result.orders[0];
    assert_eq!(order.external_id, "ORD-001");
    assert_eq!(order.pickup_lat, config.fallback_pickup.lat);
    assert_eq!(order.drop_lng, config.fallback_drop.lng);

    // Row 2: partner with whitelisted fallback vehicle (1 warning)
    assert_eq!(outcome.result.partners.len(), 1);
    let partner = &outcome.result.partners[0];
    assert_eq!(partner.name, "Bob");
    assert_eq!(partner.vehicle_type, config.default_vehicle_type);

    // Row 3: order again ("garbage-col-only" is a populated pickup_name)
    assert_eq!(outcome.result.orders[1].pickup_name, "garbage-col-only");

    // Warning order follows row scan order
    let messages: Vec<&str> = outcome
        .result
        .warnings
        .iter()
        .map(|w| w.message.as_str())
        .collect();
    assert_eq!(outcome.result.warnings.len(), 5);
    assert!(messages[0].contains("pickup coordinates"));
    assert!(messages[1].contains("drop coordinates"));
    assert!(messages[2].contains("Bob"));
    assert!(messages[3].contains("pickup coordinates"));
    assert!(messages[4].contains("drop coordinates"));
}

#[tokio::test]
async fn test_unclassified_rows_counted_in_batch_total() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "ledger.csv",
        "invoice_no,amount\nINV-1,250\nINV-2,300\n",
    );

    let outcome = SheetIngestorImpl::default().ingest_file(&path).await.unwrap();

    assert_eq!(outcome.batch.total_rows, 2);
    assert_eq!(outcome.batch.order_rows, 0);
    assert_eq!(outcome.batch.partner_rows, 0);
    assert!(outcome
        .result
        .warnings
        .iter()
        .all(|w| w.message == UNCLASSIFIED_ROW_WARNING));
}

#[tokio::test]
async fn test_idempotence_across_two_ingests_of_same_file() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "fleet.csv",
        "pickup_name,drop_name,name,vehicle_type,capacity\n\
         Depot,Hub,,,\n\
         ,,Asha,van,12\n",
    );
    let ingestor = SheetIngestorImpl::default();

    let first = ingestor.ingest_file(&path).await.unwrap();
    let second = ingestor.ingest_file(&path).await.unwrap();

    // Deterministic core: records and warnings are structurally equal.
    // Batch ids/timestamps are audit metadata and differ by design.
    assert_eq!(first.result, second.result);
    assert_ne!(first.batch.batch_id, second.batch.batch_id);
}
