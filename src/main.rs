use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use study_helper::{agents::StudyAgent, config::Config, routes::create_router, utils::init_logger};

#[derive(Parser, Debug)]
#[command(name = "study-helper", about = "Ask an LLM mark-weighted questions about your study notes")]
struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logger();

    // Load configuration; a missing API key stops startup here.
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    info!("Configuration loaded: {:?}", config);

    let agent = StudyAgent::from_config(&config.llm)?;
    info!(provider = %agent.provider(), model = %agent.model(), "Study agent ready");

    let state = study_helper::AppState {
        config: config.clone(),
        agent: Arc::new(agent),
    };

    let app = create_router(state);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
