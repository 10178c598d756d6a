use clap::Parser;
use reqwest::Url;

use crate::{
    api::{Disabled, Estimator, climatiq},
    core::estimation::EstimationService,
    prelude::*,
};

#[derive(Parser)]
pub struct ApiArgs {
    /// Climatiq API key. Remote estimation is disabled when not set.
    #[clap(long = "api-key", env = "CLIMATIQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Estimation API base URL, `estimate` is appended to it.
    #[clap(
        long = "api-url",
        env = "ESTIMATE_API_URL",
        default_value = "https://api.climatiq.io/data/v1/"
    )]
    base_url: Url,

    /// Emission factor data version.
    #[clap(long = "data-version", env = "ESTIMATE_DATA_VERSION", default_value = "^21")]
    data_version: String,

    /// Remote call timeout, local estimation is used past it.
    #[clap(long = "api-timeout", env = "ESTIMATE_API_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl ApiArgs {
    pub fn new_service(&self) -> Result<EstimationService<Box<dyn Estimator>>> {
        let estimator: Box<dyn Estimator> = match &self.api_key {
            Some(api_key) if !api_key.trim().is_empty() => {
                let api = climatiq::Api::new(
                    api_key.trim(),
                    &self.base_url,
                    &self.data_version,
                    self.timeout.into(),
                )?;
                info!(url = %api.url(), "remote estimation is enabled");
                Box::new(api)
            }
            _ => {
                warn!("no API key, using the local emission factors only");
                Box::new(Disabled)
            }
        };
        Ok(EstimationService::new(estimator))
    }
}
