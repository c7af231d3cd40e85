use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::IngestionService;
use crate::application::services::ingestion_service::IngestionReport;

#[derive(Debug)]
pub enum IngestDocumentsError {
    SourceError(String),
}

impl std::fmt::Display for IngestDocumentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestDocumentsError::SourceError(msg) => write!(f, "Ingestion aborted: {}", msg),
        }
    }
}

impl std::error::Error for IngestDocumentsError {}

#[derive(Debug, Clone)]
pub struct IngestDocumentsRequest {
    pub root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct IngestDocumentsResponse {
    pub root: PathBuf,
    pub report: IngestionReport,
    pub elapsed_ms: u64,
}

pub struct IngestDocumentsUseCase {
    ingestion_service: Arc<IngestionService>,
}

impl IngestDocumentsUseCase {
    pub fn new(ingestion_service: Arc<IngestionService>) -> Self {
        Self { ingestion_service }
    }

    pub async fn execute(
        &self,
        request: IngestDocumentsRequest,
    ) -> Result<IngestDocumentsResponse, IngestDocumentsError> {
        let start_time = std::time::Instant::now();

        let report = self
            .ingestion_service
            .ingest_directory(&request.root)
            .await
            .map_err(|e| IngestDocumentsError::SourceError(e.to_string()))?;

        Ok(IngestDocumentsResponse {
            root: request.root,
            report,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
