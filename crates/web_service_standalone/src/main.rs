use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_service::config::load_server_config;

/// Session-scoped to-do list web service.
#[derive(Parser, Debug)]
#[command(name = "todo-lists")]
#[command(about = "Serve the session-scoped to-do list API", long_about = None)]
struct Args {
    /// Bind address (overrides APP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides APP_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let args = Args::parse();
    let mut config = load_server_config();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    tracing::info!("Starting to-do list web service...");

    if let Err(e) = web_service::server::run(config).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
