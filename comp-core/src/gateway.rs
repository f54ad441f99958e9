//! Contract for the remote calculation service.
//!
//! The service owns the actual compensation algorithm; this crate only
//! defines the request/response boundary. Implementations live in their own
//! crate so the core stays transport-free.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Employee, ScenarioConfig, ScenarioOutcome};

/// Errors crossing the gateway boundary.
///
/// Every variant renders as a single human-readable string; callers never
/// see transport-level exception objects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("calculation service unreachable: {0}")]
    Transport(String),

    #[error("calculation service returned HTTP {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    #[error("calculation service response could not be decoded: {0}")]
    InvalidResponse(String),

    #[error("calculation service did not respond within the configured timeout")]
    Timeout,
}

/// A remote run of the compensation calculation over a roster.
#[async_trait]
pub trait CalculationGateway: Send + Sync {
    /// Run one scenario and return the paired results and summary.
    async fn run_scenario(
        &self,
        employees: &[Employee],
        config: &ScenarioConfig,
    ) -> Result<ScenarioOutcome, GatewayError>;
}
