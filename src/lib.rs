use std::sync::Arc;

use axum::Router;

pub mod api;
pub mod completion;
pub mod config;
pub mod industry;
pub mod prompt;
pub mod selection;
pub mod studio;
pub mod telemetry;

pub use completion::{CompletionClient, CompletionError, OpenAiClient};
pub use config::AppConfig;
pub use selection::Selection;

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(OpenAiClient::from_config(config)))
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "case study gateway listening");

    axum::serve(listener, app).await?;
    Ok(())
}
