use async_trait::async_trait;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::core::parameter::Parameter;

/// Remote emission estimate for a single activity.
///
/// Implementations make exactly one attempt per call and never cache.
#[async_trait]
pub trait Estimator: Sync {
    async fn estimate(
        &self,
        external_activity_id: &str,
        parameter: Parameter,
    ) -> Result<RemoteEstimate, EstimateError>;
}

#[async_trait]
impl<E: Estimator + ?Sized> Estimator for Box<E> {
    async fn estimate(
        &self,
        external_activity_id: &str,
        parameter: Parameter,
    ) -> Result<RemoteEstimate, EstimateError> {
        (**self).estimate(external_activity_id, parameter).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid estimate request: {0}")]
    InvalidRequest(&'static str),

    #[error("remote estimation is disabled")]
    Disabled,

    #[error("failed to call the estimation API")]
    Network(#[source] reqwest::Error),

    #[error("estimation API responded with {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("failed to deserialize the estimation response")]
    Parse(#[source] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RemoteEstimate {
    #[serde(rename = "co2e")]
    pub co2_amount: f64,

    #[serde(rename = "co2e_unit")]
    pub co2_unit: String,

    #[serde(rename = "emission_factor", default)]
    pub factor: FactorMetadata,
}

/// Emission factor the remote service has picked.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FactorMetadata {
    pub activity_id: Option<String>,

    #[serde(alias = "name")]
    pub activity_name: Option<String>,

    pub category: Option<String>,
    pub source: Option<String>,

    /// Sometimes a number, sometimes a string.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub year: Option<u16>,

    pub region: Option<String>,
    pub unit: Option<String>,
    pub unit_type: Option<String>,
}

/// Estimator used when no API key is configured.
pub struct Disabled;

#[async_trait]
impl Estimator for Disabled {
    async fn estimate(&self, _: &str, _: Parameter) -> Result<RemoteEstimate, EstimateError> {
        Err(EstimateError::Disabled)
    }
}
