use std::fmt::{Display, Formatter};

use futures::future::join_all;
use serde::Serialize;

use crate::{
    api::{EstimateError, Estimator, FactorMetadata, RemoteEstimate},
    catalog::{self, ActivityFactor, Domain},
    core::{comparison::Comparison, inputs::Inputs, parameter::Parameter},
    prelude::*,
    quantity::cost::Cost,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Remote,
    Local,
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct EstimationResult {
    pub activity: &'static ActivityFactor,
    pub quantity: Parameter,
    pub co2_amount: f64,
    pub co2_unit: String,
    pub source: Source,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<Cost>,

    /// Emission factor metadata reported by the remote service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<FactorMetadata>,
}

impl EstimationResult {
    pub fn remote(
        activity: &'static ActivityFactor,
        quantity: Parameter,
        estimate: RemoteEstimate,
        estimated_cost: Option<Cost>,
    ) -> Self {
        Self {
            activity,
            quantity,
            co2_amount: estimate.co2_amount,
            co2_unit: estimate.co2_unit,
            source: Source::Remote,
            estimated_cost,
            factor: Some(estimate.factor),
        }
    }

    /// Multiply the quantity by the static factor.
    pub fn local(
        activity: &'static ActivityFactor,
        quantity: Parameter,
        estimated_cost: Option<Cost>,
    ) -> Self {
        Self {
            activity,
            quantity,
            co2_amount: quantity.value() * activity.unit_factor,
            co2_unit: "kg".to_string(),
            source: Source::Local,
            estimated_cost,
            factor: None,
        }
    }

    /// Emitted amount converted to kilograms, so that remote and local results are comparable.
    pub fn co2_kilograms(&self) -> f64 {
        match self.co2_unit.to_ascii_lowercase().as_str() {
            "kg" => self.co2_amount,
            "g" => self.co2_amount / 1000.0,
            "t" | "tonne" | "tonnes" => self.co2_amount * 1000.0,
            "lb" | "lbs" => self.co2_amount * 0.453_592_37,
            unit => {
                warn!(unit, activity = self.activity.id, "unknown CO₂e unit, assuming kilograms");
                self.co2_amount
            }
        }
    }
}

pub struct EstimationService<E> {
    estimator: E,
}

impl<E: Estimator> EstimationService<E> {
    pub const fn new(estimator: E) -> Self {
        Self { estimator }
    }

    /// Estimate the activity remotely, falling back to the static factor on any error.
    #[instrument(skip_all, fields(activity = activity.id))]
    pub async fn estimate<I: Inputs>(
        &self,
        activity: &'static ActivityFactor,
        inputs: &I,
    ) -> EstimationResult {
        let quantity = inputs.parameter(activity);
        let estimated_cost = inputs.estimated_cost(quantity);
        match self.estimator.estimate(activity.external_activity_id, quantity).await {
            Ok(estimate) => {
                info!(%quantity, co2e = estimate.co2_amount, unit = %estimate.co2_unit, "estimated remotely");
                EstimationResult::remote(activity, quantity, estimate, estimated_cost)
            }
            Err(EstimateError::Disabled) => {
                debug!(%quantity, "remote estimation is disabled");
                EstimationResult::local(activity, quantity, estimated_cost)
            }
            Err(error) => {
                let error = Error::from(error);
                warn!(%quantity, "falling back to the local factor: {error:#}");
                EstimationResult::local(activity, quantity, estimated_cost)
            }
        }
    }

    /// Estimate the selected activity and its alternatives concurrently.
    ///
    /// Every call falls back independently.
    #[instrument(skip_all, fields(selected = selected.id, n_alternatives = alternatives.len()))]
    pub async fn compare<I: Inputs>(
        &self,
        selected: &'static ActivityFactor,
        alternatives: &[&'static ActivityFactor],
        inputs: &I,
    ) -> Comparison {
        let alternative_inputs = inputs.for_alternative();
        let (selected, alternatives) = futures::join!(
            self.estimate(selected, inputs),
            join_all(
                alternatives.iter().map(|&activity| self.estimate(activity, &alternative_inputs))
            ),
        );
        Comparison::build(selected, alternatives)
    }
}

/// Alternatives to compare against when the user has not picked any.
///
/// Energy alternatives are restricted to the same category: a fan may replace an air conditioner,
/// but not a shower.
pub fn default_alternatives(selected: &ActivityFactor) -> Vec<&'static ActivityFactor> {
    let domain = selected.domain();
    catalog::factors_for(domain)
        .iter()
        .filter(|activity| activity.id != selected.id)
        .filter(|activity| domain != Domain::Energy || activity.category == selected.category)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use approx::assert_abs_diff_eq;
    use async_trait::async_trait;
    use http::StatusCode;

    use super::*;
    use crate::{
        api::Disabled,
        catalog::{ConsumerClass, find},
        core::inputs::{EnergyInputs, FoodInputs, FoodPeriod, TransportInputs, UsagePeriod},
        quantity::{distance::Kilometers, mass::Kilograms, power::Watts, time::Hours},
    };

    /// Always fails like an unavailable service.
    struct Failing;

    #[async_trait]
    impl Estimator for Failing {
        async fn estimate(&self, _: &str, _: Parameter) -> Result<RemoteEstimate, EstimateError> {
            Err(EstimateError::Http {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: String::new(),
            })
        }
    }

    /// Answers only for the known external activity IDs and records every call.
    #[derive(Default)]
    struct Fixture {
        co2e: HashMap<&'static str, f64>,
        calls: Mutex<Vec<(String, Parameter)>>,
    }

    impl Fixture {
        fn with(mut self, external_activity_id: &'static str, co2e: f64) -> Self {
            self.co2e.insert(external_activity_id, co2e);
            self
        }
    }

    #[async_trait]
    impl Estimator for Fixture {
        async fn estimate(
            &self,
            external_activity_id: &str,
            parameter: Parameter,
        ) -> Result<RemoteEstimate, EstimateError> {
            self.calls.lock().unwrap().push((external_activity_id.to_string(), parameter));
            self.co2e
                .get(external_activity_id)
                .map(|&co2_amount| RemoteEstimate {
                    co2_amount,
                    co2_unit: "kg".to_string(),
                    factor: FactorMetadata {
                        activity_id: Some(external_activity_id.to_string()),
                        ..FactorMetadata::default()
                    },
                })
                .ok_or(EstimateError::InvalidRequest("unknown activity"))
        }
    }

    fn activity(id: &str) -> &'static ActivityFactor {
        find(id).unwrap()
    }

    #[tokio::test]
    async fn test_car_gasoline_fallback() {
        let inputs = TransportInputs { distance: Kilometers(20.0) };
        let result = EstimationService::new(Failing).estimate(activity("car_gasoline"), &inputs).await;
        assert_abs_diff_eq!(result.co2_amount, 3.84, epsilon = 1e-9);
        assert_eq!(result.co2_unit, "kg");
        assert_eq!(result.source, Source::Local);
        assert_eq!(result.estimated_cost, None);
        assert!(result.factor.is_none());
    }

    #[tokio::test]
    async fn test_remote_amount_is_unchanged() {
        let car = activity("car_gasoline");
        let service = EstimationService::new(Fixture::default().with(car.external_activity_id, 4.0321));
        let result = service.estimate(car, &TransportInputs { distance: Kilometers(20.0) }).await;
        assert_eq!(result.source, Source::Remote);
        assert_eq!(result.co2_amount, 4.0321);
        assert_eq!(result.co2_unit, "kg");
        assert_eq!(
            result.factor.and_then(|factor| factor.activity_id).as_deref(),
            Some(car.external_activity_id),
        );
    }

    #[tokio::test]
    async fn test_local_fallback_for_every_activity() {
        let service = EstimationService::new(Disabled);
        for activity in catalog::factors_in(enumset::EnumSet::all()) {
            for quantity in [0.0, 1.0, 12.5, 1000.0] {
                let parameter = match activity.domain() {
                    Domain::Transport => Parameter::Distance(Kilometers(quantity)),
                    Domain::Food => Parameter::Weight(Kilograms(quantity)),
                    Domain::Energy => Parameter::Energy(quantity.into()),
                };
                let result = EstimationResult::local(activity, parameter, None);
                assert_abs_diff_eq!(result.co2_amount, quantity * activity.unit_factor);
            }
        }
        let result = service
            .estimate(activity("beef"), &FoodInputs { weight: Kilograms(0.5), period: FoodPeriod::Week })
            .await;
        assert_eq!(result.quantity, Parameter::Weight(Kilograms(3.5)));
        assert_abs_diff_eq!(result.co2_amount, 94.5, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_energy_quantity_and_cost() {
        let inputs = EnergyInputs::builder()
            .hours_used(Hours(24.0))
            .period(UsagePeriod::Day)
            .region_code("sp")
            .consumer_class(ConsumerClass::Residential)
            .build();
        let result = EstimationService::new(Failing).estimate(activity("geladeira"), &inputs).await;
        assert_abs_diff_eq!(result.quantity.value(), 86.4, epsilon = 1e-9);
        assert_abs_diff_eq!(result.estimated_cost.unwrap().0, 86.4 * 0.76, epsilon = 1e-9);
        assert_abs_diff_eq!(result.co2_amount, 86.4 * 0.0385, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_energy_unknown_region_has_no_cost() {
        let inputs = EnergyInputs::builder().hours_used(Hours(1.0)).region_code("ZZ").build();
        let result = EstimationService::new(Failing).estimate(activity("geladeira"), &inputs).await;
        assert_eq!(result.estimated_cost, None);
    }

    #[tokio::test]
    async fn test_compare_isolates_failures() {
        let car = activity("car_gasoline");
        let service = EstimationService::new(Fixture::default().with(car.external_activity_id, 5.0));
        let alternatives = [activity("bus"), activity("bicycle")];
        let comparison = service
            .compare(car, &alternatives, &TransportInputs { distance: Kilometers(10.0) })
            .await;

        assert_eq!(comparison.selected.source, Source::Remote);
        assert_abs_diff_eq!(comparison.selected.co2_amount, 5.0);
        assert_eq!(comparison.alternatives.len(), 2);
        assert!(comparison.alternatives.iter().all(|result| result.source == Source::Local));
        assert_eq!(comparison.alternatives[0].activity.id, "bus");
        assert_eq!(comparison.alternatives[1].activity.id, "bicycle");
        assert_eq!(service.estimator.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_compare_alternatives_use_their_own_power() {
        let service = EstimationService::new(Fixture::default());
        let inputs = EnergyInputs::builder()
            .hours_used(Hours(1.0))
            .period(UsagePeriod::Hour)
            .power_override(Watts(2000.0))
            .build();
        let comparison =
            service.compare(activity("ar_condicionado"), &[activity("ventilador")], &inputs).await;
        assert_abs_diff_eq!(comparison.selected.quantity.value(), 2.0);
        assert_abs_diff_eq!(comparison.alternatives[0].quantity.value(), 0.1);
        assert_eq!(comparison.savings.len(), 1);
        assert_eq!(comparison.savings[0].activity.id, "ventilador");
    }

    #[test]
    fn test_default_alternatives() {
        let car = activity("car_gasoline");
        let alternatives = default_alternatives(car);
        assert_eq!(alternatives.len(), catalog::factors_for(Domain::Transport).len() - 1);
        assert!(alternatives.iter().all(|alternative| alternative.id != car.id));

        let ids: Vec<_> = default_alternatives(activity("ar_condicionado"))
            .into_iter()
            .map(|alternative| alternative.id)
            .collect();
        assert_eq!(ids, ["ventilador"]);
    }

    #[test]
    fn test_co2_kilograms() {
        let mut result = EstimationResult::local(
            activity("beef"),
            Parameter::Weight(Kilograms(1.0)),
            None,
        );
        result.co2_amount = 1.5;
        result.co2_unit = "t".to_string();
        assert_abs_diff_eq!(result.co2_kilograms(), 1500.0);
        result.co2_unit = "g".to_string();
        assert_abs_diff_eq!(result.co2_kilograms(), 0.0015);
        result.co2_unit = "KG".to_string();
        assert_abs_diff_eq!(result.co2_kilograms(), 1.5);
        result.co2_unit = "furlongs".to_string();
        assert_abs_diff_eq!(result.co2_kilograms(), 1.5);
    }
}
