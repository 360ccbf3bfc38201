use std::sync::Arc;

use media_catalog::api::{self, AppState};
use media_catalog::config::AppConfig;
use media_catalog::database::MemoryRepository;
use media_catalog::models::ContentFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();

    // 内置示例目录（数据导入不在本服务范围内）
    let catalog = ContentFactory::sample_catalog()?;
    tracing::info!("Catalog loaded - {} records", catalog.len());
    let repository = Arc::new(MemoryRepository::new(catalog));

    let app = api::create_router(AppState::new(repository, config.clone()));

    let addr = config.socket_addr()?;
    tracing::info!("🚀 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
