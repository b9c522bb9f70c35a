/// Alexa Skill - Smart home skill backed by a REST device API
use alexa_skill::{api, config::SkillConfig, AppState, Dispatcher, SkillHandler};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "alexa-skill")]
#[command(about = "Alexa smart home skill for a REST device backend", long_about = None)]
struct Cli {
    /// Use a fixed message id and sample time in every response
    #[arg(long, global = true)]
    reproducible: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer one directive read from stdin on stdout
    Handle,
    /// Start the HTTP server
    Serve {
        /// Port to listen on, overrides the configuration
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the response in `handle` mode
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "alexa_skill=info,smarthome_api_client=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let dispatcher = if cli.reproducible {
        tracing::warn!("Reproducible mode: message ids and timestamps are fixed");
        Dispatcher::reproducible()
    } else {
        Dispatcher::production()
    };

    match cli.command {
        Commands::Handle => {
            let config = SkillConfig::load_or_default();
            SkillHandler::new(dispatcher, config.api_config())
                .handle_request(tokio::io::stdin(), tokio::io::stdout())
                .await;
        }
        Commands::Serve { port } => {
            let config = SkillConfig::load()?;
            let handler = SkillHandler::new(dispatcher, config.api_config());
            serve(config, handler, port).await?;
        }
    }

    Ok(())
}

async fn serve(config: SkillConfig, handler: SkillHandler, port: Option<u16>) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Alexa skill");
    tracing::info!("Backend: {}", config.backend.api_url);

    let app = api::create_router(AppState::new(Arc::new(handler)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        port.unwrap_or(config.server.port),
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
