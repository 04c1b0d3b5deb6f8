// ==========================================
// Fleet Dispatch Ingest - CLI entry point
// ==========================================
// Ingests one spreadsheet and prints the ParseResult as
// JSON to stdout; batch audit data goes to the log.
// ==========================================

use anyhow::{bail, Context, Result};
use fleet_dispatch_ingest::{logging, IngestConfig, SheetIngestor, SheetIngestorImpl};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!("{} v{}", fleet_dispatch_ingest::APP_NAME, fleet_dispatch_ingest::VERSION);

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: dispatch-ingest <file.csv|file.xlsx|file.xls>");
    };

    let ingestor = SheetIngestorImpl::new(IngestConfig::default());
    let outcome = ingestor
        .ingest_file(&path)
        .await
        .with_context(|| format!("ingest of {} failed", path))?;

    tracing::info!(
        batch_id = %outcome.batch.batch_id,
        orders = outcome.batch.order_rows,
        partners = outcome.batch.partner_rows,
        warnings = outcome.batch.warning_rows,
        "ingest finished"
    );

    println!("{}", serde_json::to_string_pretty(&outcome.result)?);

    Ok(())
}
