use arithmos_api::{ApiConfig, AppState, ConfigOverrides, build_app};
use arithmos_core::{Calculator, TracingLog};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Arithmos calculator API server
///
/// Flags left unset keep the value from the config file, or the built-in default.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "ARITHMOS_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level (error, warn, info, debug, trace) [default: info]
    #[arg(short, long, env = "ARITHMOS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Config file path
    #[arg(short, long, env = "ARITHMOS_CONFIG")]
    config_file: Option<PathBuf>,

    /// Disable Swagger UI
    #[arg(long, env = "ARITHMOS_DISABLE_SWAGGER", default_value_t = false)]
    disable_swagger: bool,

    /// Omit `success` from exponent, sqrt and modulo error bodies
    #[arg(long, env = "ARITHMOS_LEGACY_ERRORS", default_value_t = false)]
    legacy_errors: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            disable_swagger: self.disable_swagger,
            legacy_errors: self.legacy_errors,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve configuration first so a file-provided log level reaches the filter
    let loaded = cli
        .config_file
        .as_ref()
        .map(|path| (path, ApiConfig::load_from_file(path)));
    let mut config = match &loaded {
        Some((_, Ok(cfg))) => cfg.clone(),
        _ => ApiConfig::default(),
    };
    config.apply(cli.overrides());

    let filter = format!(
        "arithmos_api={level},arithmos_core={level},tower_http=debug",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &loaded {
        Some((path, Ok(_))) => info!("Configuration loaded from: {}", path.display()),
        Some((_, Err(e))) => warn!(
            "Failed to load config file: {}. Using default configuration.",
            e
        ),
        None => {}
    }

    let addr = config.socket_addr()?;

    let calculator = Calculator::new(Arc::new(TracingLog));
    let swagger = config.enable_swagger;
    let envelope = config.error_envelope;
    let app = build_app(AppState::new(calculator, config));

    info!("Starting server on: {}", addr);
    if swagger {
        info!("Swagger UI: http://{}/swagger-ui", addr);
    }
    info!("Error envelope: {:?}", envelope);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
