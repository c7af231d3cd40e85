use std::sync::Arc;

use crate::{
    application::{
        ports::{ChatProvider, DocumentSource, EmbeddingProvider},
        services::{CharacterTextSplitter, IngestionService, RetrievalService},
        use_cases::{
            AnswerDocsUseCase, AskPostsUseCase, CreatePostUseCase, DeletePostUseCase,
            GetPostUseCase, IngestDocumentsUseCase, ListPostsUseCase, SearchDocsUseCase,
            UpdatePostUseCase,
        },
    },
    domain::repositories::{DocChunkRepository, PostRepository},
    infrastructure::{
        config::AppConfig,
        database::{
            create_connection_pool, get_database_connection,
            repositories::{PostgresDocChunkRepository, PostgresPostRepository},
            run_migrations,
        },
        external_services::{OpenAiChatProvider, OpenAiClient, OpenAiEmbeddingProvider},
        file_system::LocalDocumentSource,
    },
    presentation::http::{
        HttpServer,
        handlers::{AskHandler, PostHandler},
    },
};

pub struct AppContainer {
    pub config: AppConfig,

    // Repositories
    pub chunk_repository: Arc<dyn DocChunkRepository>,

    // Use Cases
    pub ingest_documents_use_case: Arc<IngestDocumentsUseCase>,

    // HTTP Handlers
    pub post_handler: Arc<PostHandler>,
    pub ask_handler: Arc<AskHandler>,
}

impl AppContainer {
    /// Connects to the database, applies pending migrations and wires every
    /// component from `config`.
    pub async fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        // Create database connection pool
        let db_pool = create_connection_pool(&config.database_url, config.db_pool_size)
            .map_err(|e| format!("Failed to create connection pool: {}", e))?;

        let database_url = config.database_url.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = get_database_connection(&database_url)?;
            run_migrations(&mut conn)
        })
        .await?
        .map_err(|e| format!("Failed to run database migrations: {}", e))?;

        // Create repositories
        let post_repository: Arc<dyn PostRepository> =
            Arc::new(PostgresPostRepository::new(db_pool.clone()));
        let chunk_repository: Arc<dyn DocChunkRepository> =
            Arc::new(PostgresDocChunkRepository::new(db_pool));

        // Create external services
        let openai_client = Arc::new(
            OpenAiClient::new(config.openai.clone())
                .map_err(|e| format!("Failed to create OpenAI client: {}", e))?,
        );
        let embedding_provider: Arc<dyn EmbeddingProvider> =
            Arc::new(OpenAiEmbeddingProvider::new(openai_client.clone()));
        let chat_provider: Arc<dyn ChatProvider> =
            Arc::new(OpenAiChatProvider::new(openai_client));
        let document_source: Arc<dyn DocumentSource> = Arc::new(LocalDocumentSource::new());

        // Create application services
        let retrieval_service = Arc::new(RetrievalService::new(
            embedding_provider.clone(),
            chunk_repository.clone(),
        ));
        let ingestion_service = Arc::new(IngestionService::new(
            document_source,
            embedding_provider.clone(),
            chunk_repository.clone(),
            Arc::new(CharacterTextSplitter::default()),
        ));

        // Create use cases
        let create_post_use_case = Arc::new(CreatePostUseCase::new(post_repository.clone()));
        let get_post_use_case = Arc::new(GetPostUseCase::new(post_repository.clone()));
        let list_posts_use_case = Arc::new(ListPostsUseCase::new(post_repository.clone()));
        let update_post_use_case = Arc::new(UpdatePostUseCase::new(post_repository.clone()));
        let delete_post_use_case = Arc::new(DeletePostUseCase::new(post_repository.clone()));
        let ask_posts_use_case =
            Arc::new(AskPostsUseCase::new(post_repository, chat_provider.clone()));
        let search_docs_use_case = Arc::new(SearchDocsUseCase::new(retrieval_service.clone()));
        let answer_docs_use_case =
            Arc::new(AnswerDocsUseCase::new(retrieval_service, chat_provider));
        let ingest_documents_use_case = Arc::new(IngestDocumentsUseCase::new(ingestion_service));

        // Create handlers
        let post_handler = Arc::new(PostHandler::new(
            create_post_use_case,
            get_post_use_case,
            list_posts_use_case,
            update_post_use_case,
            delete_post_use_case,
        ));
        let ask_handler = Arc::new(AskHandler::new(
            ask_posts_use_case,
            search_docs_use_case,
            answer_docs_use_case,
        ));

        Ok(Self {
            config,
            chunk_repository,
            ingest_documents_use_case,
            post_handler,
            ask_handler,
        })
    }

    pub fn http_server(&self) -> HttpServer {
        HttpServer::new(
            self.post_handler.clone(),
            self.ask_handler.clone(),
            self.config.cors_allowed_origins.clone(),
            self.config.port,
        )
    }
}
