use postrag::infrastructure::{AppConfig, AppContainer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting server on port {} (chat model {}, embedding model {})",
        config.port,
        config.openai.chat_model,
        config.openai.embedding_model
    );

    let container = AppContainer::new(config).await?;
    container.http_server().run().await
}
