use log::{error, info};

mod config;
mod logs;

use config::ServerConfig;
use event_admin_domain::app::construct_app;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
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

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logs::init_logger(config.log_file.as_ref()) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    let (event_repo, category_repo) =
        match event_admin_persistence::open_repositories(&config.database_url, config.max_connections)
        {
            Ok(repos) => repos,
            Err(e) => {
                error!("Invalid DATABASE_URL: {}", e);
                std::process::exit(1);
            }
        };

    let app = construct_app(event_repo, category_repo);

    info!("Starting application");

    if let Err(e) =
        event_admin_http_api::run(app, &config.bind_address, config.port, shutdown_signal()).await
    {
        error!("HTTP API failed: {}", e);
        std::process::exit(1);
    }
}
