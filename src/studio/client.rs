use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::api::{ErrorResponse, GenerateRequest, GenerateResponse, GENERATION_FAILED};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait CaseStudySource: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError>;
}

pub struct GatewayClient {
    client: Client,
    url: String,
}

impl GatewayClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}/generate", endpoint.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CaseStudySource for GatewayClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error)
                .filter(|error| !error.trim().is_empty())
                .unwrap_or_else(|| GENERATION_FAILED.to_string());
            return Err(GatewayError::Rejected(message));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.case_study)
    }
}
