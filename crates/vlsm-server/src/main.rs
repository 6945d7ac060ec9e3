use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vlsm_server::{create_router, Config};

/// VLSM Server - subnet calculation and allocation planning API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "/etc/vlsm-server/config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vlsm_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting VLSM Server");

    // Load configuration - try specified path, then current directory
    let config_path = if std::path::Path::new(&args.config).exists() {
        args.config.clone()
    } else if args.config == "/etc/vlsm-server/config.yaml" {
        let current_dir_config = "config.yaml";
        if std::path::Path::new(current_dir_config).exists() {
            info!(
                "Config not found at {}, using {}",
                args.config, current_dir_config
            );
            current_dir_config.to_string()
        } else {
            args.config.clone()
        }
    } else {
        args.config.clone()
    };

    let config = match Config::from_file(&config_path) {
        Ok(cfg) => {
            info!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path, e);
            info!("Using default configuration");
            Config::default()
        }
    };

    let api_addr = format!("{}:{}", config.api.listen_address, config.api.port);
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .map_err(|e| {
            error!("Failed to bind API server to {}: {}", api_addr, e);
            e
        })?;

    info!("API server listening on {}", api_addr);
    info!("Swagger UI available at http://{}/swagger-ui", api_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
