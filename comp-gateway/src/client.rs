use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use comp_core::gateway::{CalculationGateway, GatewayError};
use comp_core::model::{Employee, ScenarioConfig, ScenarioOutcome};

use crate::wire::{CalculateRequest, CalculateResponse, WireConfig};

/// Default bound on a single calculation round trip. The service gives no
/// latency guarantee, so an unbounded wait would hang the whole run.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How much of an error body is carried into the surfaced message.
const ERROR_BODY_LIMIT: usize = 300;

/// Calculation gateway backed by the remote HTTP service.
#[derive(Debug, Clone)]
pub struct HttpCalculationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCalculationGateway {
    /// Build a gateway with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build a gateway with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| GatewayError::Transport(error.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn calculate_url(&self) -> String {
        format!("{}/api/calculate/", self.base_url)
    }
}

fn send_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        // Strip the transport exception down to its message; callers only
        // ever see a plain string.
        GatewayError::Transport(error.to_string())
    }
}

fn truncate_body(body: String) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body;
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

#[async_trait]
impl CalculationGateway for HttpCalculationGateway {
    async fn run_scenario(
        &self,
        employees: &[Employee],
        config: &ScenarioConfig,
    ) -> Result<ScenarioOutcome, GatewayError> {
        let url = self.calculate_url();
        let request = CalculateRequest {
            employees,
            config: WireConfig::from(config),
        };

        debug!(%url, roster = employees.len(), "running scenario");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = truncate_body(response.text().await.unwrap_or_default());
            return Err(GatewayError::RemoteStatus {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: CalculateResponse = response
            .json()
            .await
            .map_err(|error| GatewayError::InvalidResponse(error.to_string()))?;

        Ok(decoded.into())
    }
}
