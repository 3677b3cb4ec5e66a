// src/ui/client.rs
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::api::types::{
    EvaluateRequest, EvaluateResponse, GenerateRequest, GenerateResponse, StrengthenRequest,
    StrengthenResponse,
};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: &'static str, status: u16 },
}

/// The backend the page talks to. One request per call, no retries.
#[async_trait]
pub trait PasswordApi: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ApiError>;

    async fn strengthen(&self, request: &StrengthenRequest) -> Result<StrengthenResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpPasswordApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPasswordApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<Req, Resp>(&self, endpoint: &'static str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status: status.as_u16() });
        }

        Ok(response.json::<Resp>().await?)
    }
}

#[async_trait]
impl PasswordApi for HttpPasswordApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.post_json("/generate", request).await
    }

    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
        self.post_json("/evaluate", request).await
    }

    async fn strengthen(&self, request: &StrengthenRequest) -> Result<StrengthenResponse, ApiError> {
        self.post_json("/strengthen", request).await
    }
}
