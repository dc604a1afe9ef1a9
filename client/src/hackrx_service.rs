use crate::config::FrontendConfig;
use crate::error::FormError;
use crate::models::*;
use anyhow::Result;
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;

/// Thin wrapper over the backend's `/hackrx/run` endpoint.
pub struct HackRxService {
    client: Client,
    run_url: String,
    timeout: Duration,
}

impl HackRxService {
    pub fn new(config: &FrontendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            run_url: config.run_url(),
            timeout: config.timeout,
        })
    }

    pub fn run_url(&self) -> &str {
        &self.run_url
    }

    /// Sends one request. Non-2xx statuses become `FormError::Backend` with the
    /// body untouched; everything else that goes wrong is a transport error.
    pub async fn run(&self, api_key: &str, request: &HackRxRequest) -> Result<HackRxResponse, FormError> {
        let response = self.client
            .post(&self.run_url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            return Err(FormError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| FormError::Transport(format!("invalid response from backend: {}", e)))
    }

    fn transport_error(&self, error: &reqwest::Error) -> FormError {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        if error.is_timeout() {
            FormError::Transport(format!("timed out after {:?} ({})", self.timeout, message))
        } else {
            FormError::Transport(message)
        }
    }
}
