use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

use service::comment::{repo::seaorm::SeaOrmCommentRepository, repository::CommentRepository};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Connect the comment store and run pending migrations when enabled.
async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn CommentRepository>, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }
    Ok(Arc::new(SeaOrmCommentRepository::new(db)))
}

pub fn build_app(cfg: &AppConfig, repo: Arc<dyn CommentRepository>) -> Router {
    let state = ServerState::new(repo);
    routes::build_router(state, &cfg.comments.base_path, routes::build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;
    let repo = build_store(&cfg).await?;
    let app = build_app(&cfg, repo);

    // Bind and serve
    let addr = cfg.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, base_path = %cfg.comments.base_path, "comments server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
