use std::sync::Arc;

use log::info;
use sepep_persistence_memory::{
    MemoryFixtureRepository, MemoryResultRepository, MemoryTeamRepository,
};
use sepep_persistence_sqlite::{
    SqliteFixtureRepository, SqliteResultRepository, SqliteTeamRepository, create_db_pool,
    run_migrations,
};
use sepep_server_app::{
    Application, build_application,
    domain::{fixture::FixtureRepository, result::ResultRepository, team::TeamRepository},
};

use crate::config::{ConfigError, ServerConfig};

mod config;
mod logs;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logger(#[from] logs::LoggerError),
    #[error("failed to open database: {0}")]
    Database(String),
    #[error("HTTP server failed: {0}")]
    Server(#[from] std::io::Error),
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

fn application<T, F, R>(
    config: &ServerConfig,
    teams: T,
    fixtures: F,
    results: R,
) -> Arc<Application>
where
    T: TeamRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    R: ResultRepository + Send + Sync + 'static,
{
    Arc::new(build_application(
        Arc::new(teams),
        Arc::new(fixtures),
        Arc::new(results),
        config.rules,
    ))
}

async fn start() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    logs::init_logger(config.log_file.as_ref())?;

    info!(
        "Ladder scoring: {} points per win, {} per draw",
        config.rules.points_for_win, config.rules.points_for_draw
    );

    let app = match &config.database_url {
        Some(url) => {
            let pool = create_db_pool(url)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            info!("Using SQLite storage at {}", url);
            application(
                &config,
                SqliteTeamRepository::new(pool.clone()),
                SqliteFixtureRepository::new(pool.clone()),
                SqliteResultRepository::new(pool),
            )
        }
        None => {
            info!("SEPEP_DATABASE_URL not set, keeping data in memory");
            application(
                &config,
                MemoryTeamRepository::new(),
                MemoryFixtureRepository::new(),
                MemoryResultRepository::new(),
            )
        }
    };

    info!("Starting application");
    sepep_server_api::http::run(app, &config.addr(), shutdown_signal()).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
