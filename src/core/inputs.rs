//! Raw user inputs per domain, and how each of them turns into a [`Parameter`].

use bon::Builder;
use serde::Serialize;

use crate::{
    catalog::{self, ActivityFactor, ConsumerClass},
    core::parameter::Parameter,
    prelude::*,
    quantity::{
        cost::Cost,
        distance::Kilometers,
        mass::Kilograms,
        power::Watts,
        time::Hours,
    },
};

pub trait Inputs: Clone + Sync {
    /// Derive the physical quantity for the activity.
    fn parameter(&self, activity: &ActivityFactor) -> Parameter;

    fn estimated_cost(&self, _parameter: Parameter) -> Option<Cost> {
        None
    }

    /// Inputs to estimate an alternative activity with.
    #[must_use]
    fn for_alternative(&self) -> Self {
        self.clone()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TransportInputs {
    pub distance: Kilometers,
}

impl Inputs for TransportInputs {
    fn parameter(&self, _activity: &ActivityFactor) -> Parameter {
        Parameter::Distance(self.distance)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FoodPeriod {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl FoodPeriod {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 30.0,
            Self::Year => 365.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct FoodInputs {
    pub weight: Kilograms,
    pub period: FoodPeriod,
}

impl Inputs for FoodInputs {
    fn parameter(&self, _activity: &ActivityFactor) -> Parameter {
        Parameter::Weight(self.weight * self.period.multiplier())
    }
}

/// Appliance usage period, the multiplier is applied on top of the daily usage hours.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UsagePeriod {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl UsagePeriod {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Hour => 1.0,
            Self::Day => 24.0,
            Self::Week => 168.0,
            Self::Month => 720.0,
            Self::Year => 8760.0,
        }
    }
}

#[derive(Clone, Debug, Builder)]
pub struct EnergyInputs {
    pub hours_used: Hours,

    #[builder(default)]
    pub period: UsagePeriod,

    /// Overrides the appliance average power.
    pub power_override: Option<Watts>,

    /// Federative unit code for the cost estimate.
    #[builder(into)]
    pub region_code: Option<String>,

    #[builder(default)]
    pub consumer_class: ConsumerClass,
}

impl EnergyInputs {
    pub fn power(&self, activity: &ActivityFactor) -> Watts {
        self.power_override.or(activity.average_power).unwrap_or(Watts::ZERO)
    }
}

impl Inputs for EnergyInputs {
    fn parameter(&self, activity: &ActivityFactor) -> Parameter {
        Parameter::Energy(self.power(activity) * (self.hours_used * self.period.multiplier()))
    }

    fn estimated_cost(&self, parameter: Parameter) -> Option<Cost> {
        let Parameter::Energy(energy) = parameter else {
            return None;
        };
        let region_code = self.region_code.as_deref()?;
        let Some(tariff) = catalog::tariff_for(region_code) else {
            debug!(region_code, "no tariff for the region");
            return None;
        };
        Some(energy * tariff.rate(self.consumer_class))
    }

    /// The power override belongs to the selected appliance only.
    fn for_alternative(&self) -> Self {
        Self { power_override: None, ..self.clone() }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("`{0}` must be a positive number")]
    NotPositive(f64),
}

/// Parse a strictly positive finite number, used to validate user input before any calculation.
pub fn parse_positive<T: From<f64>>(value: &str) -> Result<T, InputError> {
    let number: f64 =
        value.trim().parse().map_err(|_| InputError::NotANumber(value.to_string()))?;
    if number.is_finite() && number > 0.0 {
        Ok(T::from(number))
    } else {
        Err(InputError::NotPositive(number))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::energy::KilowattHours;

    fn refrigerator() -> &'static ActivityFactor {
        catalog::find("geladeira").unwrap()
    }

    #[test]
    fn test_refrigerator_day() {
        let inputs = EnergyInputs::builder().hours_used(Hours(24.0)).period(UsagePeriod::Day).build();
        let Parameter::Energy(energy) = inputs.parameter(refrigerator()) else {
            panic!("energy expected");
        };
        assert_abs_diff_eq!(energy.0, 86.4, epsilon = 1e-9);
    }

    #[test]
    fn test_power_override() {
        let inputs = EnergyInputs::builder()
            .hours_used(Hours(2.0))
            .period(UsagePeriod::Hour)
            .power_override(Watts(500.0))
            .build();
        assert_eq!(inputs.parameter(refrigerator()), Parameter::Energy(KilowattHours(1.0)));
        assert_eq!(inputs.for_alternative().power_override, None);
        assert_eq!(inputs.for_alternative().hours_used, Hours(2.0));
    }

    #[test]
    fn test_estimated_cost() {
        let inputs = EnergyInputs::builder()
            .hours_used(Hours(1.0))
            .region_code("SP")
            .consumer_class(ConsumerClass::Commercial)
            .build();
        let cost = inputs.estimated_cost(Parameter::Energy(KilowattHours(10.0))).unwrap();
        assert_abs_diff_eq!(cost.0, 7.1, epsilon = 1e-9);
    }

    #[test]
    fn test_estimated_cost_unknown_region() {
        let inputs = EnergyInputs::builder().hours_used(Hours(1.0)).region_code("ZZ").build();
        assert_eq!(inputs.estimated_cost(Parameter::Energy(KilowattHours(10.0))), None);
    }

    #[test]
    fn test_estimated_cost_without_region() {
        let inputs = EnergyInputs::builder().hours_used(Hours(1.0)).build();
        assert_eq!(inputs.estimated_cost(Parameter::Energy(KilowattHours(10.0))), None);
    }

    #[test]
    fn test_food_period() {
        let inputs = FoodInputs { weight: Kilograms(0.5), period: FoodPeriod::Week };
        let beef = catalog::find("beef").unwrap();
        assert_eq!(inputs.parameter(beef), Parameter::Weight(Kilograms(3.5)));
    }

    #[test]
    fn test_period_multipliers() {
        for (period, multiplier) in [
            (FoodPeriod::Day, 1.0),
            (FoodPeriod::Week, 7.0),
            (FoodPeriod::Month, 30.0),
            (FoodPeriod::Year, 365.0),
        ] {
            assert_eq!(period.multiplier(), multiplier, "{period:?}");
        }
        for (period, multiplier) in [
            (UsagePeriod::Hour, 1.0),
            (UsagePeriod::Day, 24.0),
            (UsagePeriod::Week, 168.0),
            (UsagePeriod::Month, 720.0),
            (UsagePeriod::Year, 8760.0),
        ] {
            assert_eq!(period.multiplier(), multiplier, "{period:?}");
        }
    }

    #[test]
    fn test_refrigerator_year() {
        let inputs = EnergyInputs::builder().hours_used(Hours(1.0)).period(UsagePeriod::Year).build();
        let Parameter::Energy(energy) = inputs.parameter(refrigerator()) else {
            panic!("energy expected");
        };
        assert_abs_diff_eq!(energy.0, 150.0 * 8760.0 / 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_positive_ok() {
        assert_eq!(parse_positive::<Kilometers>(" 20 "), Ok(Kilometers(20.0)));
    }

    #[test]
    fn test_parse_positive_rejects() {
        assert_eq!(
            parse_positive::<Kilometers>("twenty"),
            Err(InputError::NotANumber("twenty".to_string())),
        );
        assert_eq!(parse_positive::<Kilometers>("0"), Err(InputError::NotPositive(0.0)));
        assert_eq!(parse_positive::<Kilometers>("-1.5"), Err(InputError::NotPositive(-1.5)));
        assert!(parse_positive::<Kilometers>("inf").is_err());
        assert!(parse_positive::<Kilometers>("NaN").is_err());
    }
}
