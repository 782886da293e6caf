use marquee_gateway::{Gateway, GatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Marquee Catalog Gateway - HTTP front for the upstream movie/TV catalog API

USAGE:
    marquee-gateway [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 5000)
    TMDB_API_KEY        Upstream API credential
    TMDB_BASE_URL       Upstream base URL (default: https://api.themoviedb.org/3)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    marquee-gateway

    # Run with config file
    marquee-gateway --config config.json

    # Run with custom port
    PORT=9000 marquee-gateway
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        GatewayConfig::from_file(&path)?
    } else {
        GatewayConfig::from_env()
    };

    tracing::info!("Starting Marquee Catalog Gateway");
    tracing::info!("Running on: http://{}:{}", config.host, config.port);
    tracing::info!("Upstream API: {}", config.upstream_base_url);
    tracing::info!(
        "API key: {}",
        if config.api_key_configured() {
            "configured"
        } else {
            "NOT CONFIGURED"
        }
    );
    tracing::info!("Available endpoints:");
    tracing::info!("  GET /trending/{{type}}/{{window}}");
    tracing::info!("  GET /movies/popular");
    tracing::info!("  GET /movies/top-rated");
    tracing::info!("  GET /movies/upcoming");
    tracing::info!("  GET /movies/now-playing");
    tracing::info!("  GET /movie/{{id}}");
    tracing::info!("  GET /tv/popular");
    tracing::info!("  GET /tv/top-rated");
    tracing::info!("  GET /tv/{{id}}");
    tracing::info!("  GET /search?query=...");
    tracing::info!("  GET /genres/movie");
    tracing::info!("  GET /genres/tv");
    tracing::info!("  GET /discover/movie");
    tracing::info!("  GET /health");

    if !config.api_key_configured() {
        tracing::warn!("Upstream API key not configured; catalog routes will fail upstream");
        tracing::warn!(
            "Get a free API key from https://www.themoviedb.org/settings/api and set TMDB_API_KEY"
        );
    }

    Gateway::new(config).run().await
}
