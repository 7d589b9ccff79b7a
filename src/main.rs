use clap::{Parser, Subcommand};

use case_study_service::config::{self, AppConfig};
use case_study_service::studio::{self, GatewayClient};
use case_study_service::telemetry::{self, LogProfile};
use case_study_service::{build_app, run_server, AppState};

#[derive(Parser, Debug)]
#[command(name = "case-study-service", version, about = "Brand case study generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway (default).
    Serve {
        /// Listen port; falls back to $PORT, then 3000.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Interactive terminal client for a running gateway.
    Studio {
        /// Gateway base URL; falls back to $CASE_STUDY_ENDPOINT.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            telemetry::init(LogProfile::Server);
            let config = AppConfig::from_env();
            if config.api_key.is_empty() {
                tracing::warn!("OPENAI_API_KEY is not set; every generation will fail");
            }
            let app = build_app(AppState::from_config(&config));
            run_server(app, port.unwrap_or(config.port)).await
        }
        Command::Studio { endpoint } => {
            telemetry::init(LogProfile::Studio);
            let endpoint = endpoint.unwrap_or_else(config::studio_endpoint_from_env);
            let client = GatewayClient::new(&endpoint);
            tracing::info!(url = client.url(), "studio connected");
            studio::terminal::run(&client).await
        }
    }
}
