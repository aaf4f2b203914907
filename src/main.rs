use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_options::application::aggregator::Aggregator;
use payment_options::config::{AggregatorConfig, AppConfig};
use payment_options::domain::response::PaymentOptionsResponse;
use payment_options::infrastructure::mysql::DatabaseManager;
use payment_options::infrastructure::stub::builtin_registry;
use payment_options::interfaces::http::{self, AppState};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON). Environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the payment options endpoint over HTTP
    Serve {
        /// Port to listen on, overriding configuration
        #[arg(long)]
        port: Option<u16>,
    },
    /// Collect payment options once and print the response as JSON
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref()).into_diagnostic()?;
    init_tracing(&config.server.log_level);

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Options => print_options(&config.aggregator).await,
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_aggregator(config: &AggregatorConfig) -> Aggregator {
    let registry = match &config.enabled_providers {
        Some(enabled) => builtin_registry().retain(enabled),
        None => builtin_registry(),
    };
    Aggregator::new(registry).with_lookup_timeout(config.lookup_timeout())
}

async fn serve(config: AppConfig) -> Result<()> {
    // Store failures are logged inside `connect` and never stop startup.
    let databases = DatabaseManager::connect(&config.databases).await;

    let app = http::router(AppState::new(build_aggregator(&config.aggregator)));
    let bind_to = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(bind_to)
        .await
        .into_diagnostic()?;
    let addr = listener.local_addr().into_diagnostic()?;
    tracing::info!(%addr, "Server started");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .into_diagnostic();

    databases.close().await;
    served
}

async fn print_options(config: &AggregatorConfig) -> Result<()> {
    let data = build_aggregator(config).collect().await;
    let body = PaymentOptionsResponse::success(data)
        .to_json()
        .into_diagnostic()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body).into_diagnostic()?;
    writeln!(stdout).into_diagnostic()?;
    Ok(())
}
