//! [Climatiq](https://www.climatiq.io/docs/api-reference/estimate)-compatible estimation client.

use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, header};
use reqwest::{Client, ClientBuilder, Url};
use serde::Serialize;

use crate::{
    api::{
        client,
        estimator::{EstimateError, Estimator, RemoteEstimate},
    },
    core::parameter::Parameter,
    prelude::*,
};

pub struct Api {
    client: Client,
    url: Url,
    data_version: String,
}

impl Api {
    /// Create a client posting to `{base_url}/estimate`.
    pub fn new(
        api_key: &str,
        base_url: &Url,
        data_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Self::with_client_builder(client::builder(timeout), api_key, base_url, data_version)
    }

    fn with_client_builder(
        builder: ClientBuilder,
        api_key: &str,
        base_url: &Url,
        data_version: impl Into<String>,
    ) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .context("the API key is not a valid header value")?;
        authorization.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, authorization);

        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let url = base_url.join("estimate")?;

        Ok(Self {
            client: builder.default_headers(headers).build()?,
            url,
            data_version: data_version.into(),
        })
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Estimator for Api {
    #[instrument(skip_all, fields(activity_id = external_activity_id, parameter = %parameter))]
    async fn estimate(
        &self,
        external_activity_id: &str,
        parameter: Parameter,
    ) -> Result<RemoteEstimate, EstimateError> {
        if external_activity_id.is_empty() {
            return Err(EstimateError::InvalidRequest("empty activity ID"));
        }
        let value = parameter.value();
        if !value.is_finite() || value < 0.0 {
            return Err(EstimateError::InvalidRequest(
                "quantity must be a finite non-negative number",
            ));
        }

        debug!("requesting…");
        let request = Request {
            emission_factor: EmissionFactorSelector {
                activity_id: external_activity_id,
                data_version: &self.data_version,
            },
            parameters: parameter,
        };
        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(EstimateError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(EstimateError::Network)?;
        if !status.is_success() {
            return Err(EstimateError::Http { status, body });
        }
        let estimate = serde_json::from_str::<RemoteEstimate>(&body).map_err(EstimateError::Parse)?;
        debug!(co2e = estimate.co2_amount, co2e_unit = %estimate.co2_unit, "estimated");
        Ok(estimate)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    emission_factor: EmissionFactorSelector<'a>,
    parameters: Parameter,
}

#[derive(Serialize)]
struct EmissionFactorSelector<'a> {
    activity_id: &'a str,
    data_version: &'a str,
}
