//! Sentiment analysis API entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentiment_api::api::{create_router, AppState};
use sentiment_api::classifier::classify;
use sentiment_api::config::Config;
use sentiment_api::metrics;
use sentiment_api::utils::shutdown_signal;

/// Keyword-based sentiment analysis API.
#[derive(Parser, Debug)]
#[command(name = "sentiment-api")]
#[command(about = "HTTP API that classifies text as positive, negative, or neutral")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Interface to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Interface to bind (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Classify a text and print the result.
    Classify {
        /// Text to classify.
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let mut config = Config::load()?;
    config.verbose |= args.verbose;

    init_tracing(&config);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Classify { text }) => cmd_classify(&text),
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, args.host, args.port).await,
    }
}

/// Install the tracing subscriber.
fn init_tracing(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("sentiment_api=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SENTIMENT API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  CORS Origins:");
    for origin in &config.cors_origins {
        println!("    - {}", origin);
    }
    println!("  Log Level: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "json" } else { "text" });
    println!("======================================================================");

    Ok(())
}

/// Classify a text and print the JSON response.
fn cmd_classify(text: &str) -> anyhow::Result<()> {
    let label = classify(text);
    println!("{}", serde_json::json!({ "sentiment": label }));
    Ok(())
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    let handle = metrics::install_recorder()?;
    metrics::init_metrics();

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    info!("API docs available at http://{}/docs", addr);

    let router = create_router(AppState::new(config, handle))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
