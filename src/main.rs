use clap::Parser;
use formbridge::cli::Cli;
use formbridge::config::Settings;
use formbridge::AppState;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("formbridge=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting formbridge on {}:{}", host, port);

    let state = AppState::new()?;
    let app = formbridge::create_app(state, &settings);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
