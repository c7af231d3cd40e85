use clap::Parser;
use std::path::PathBuf;

use postrag::application::use_cases::ingest_documents::IngestDocumentsRequest;
use postrag::infrastructure::{AppConfig, AppContainer};

#[derive(Parser, Debug)]
#[command(
    name = "ingest-docs",
    about = "Split, embed and store every .txt and .md file below a directory"
)]
struct Args {
    /// Root directory to walk. Falls back to DOCS_DIR, then `docs`.
    #[arg(long)]
    dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;
    let root = args.dir.unwrap_or_else(|| config.docs_dir.clone());

    let container = AppContainer::new(config).await?;
    tracing::info!("Ingesting documents from {}", root.display());

    let response = container
        .ingest_documents_use_case
        .execute(IngestDocumentsRequest { root })
        .await?;

    let report = &response.report;
    tracing::info!(
        "Finished {} in {} ms: {} files seen, {} ingested, {} skipped, {} failed, {} chunks stored",
        response.root.display(),
        response.elapsed_ms,
        report.files_seen,
        report.files_ingested,
        report.files_skipped,
        report.files_failed,
        report.chunks_stored
    );

    match container.chunk_repository.count().await {
        Ok(total) => tracing::info!("doc_chunks now holds {} rows", total),
        Err(e) => tracing::warn!("Could not count stored chunks: {}", e),
    }

    Ok(())
}
