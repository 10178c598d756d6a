use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    catalog::Metric,
    quantity::{distance::Kilometers, energy::KilowattHours, mass::Kilograms},
};

/// Physical quantity of an activity, in the unit of its domain metric.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Parameter {
    Distance(Kilometers),
    Weight(Kilograms),
    Energy(KilowattHours),
}

impl Parameter {
    pub const fn metric(self) -> Metric {
        match self {
            Self::Distance(_) => Metric::Distance,
            Self::Weight(_) => Metric::Weight,
            Self::Energy(_) => Metric::Energy,
        }
    }

    pub const fn value(self) -> f64 {
        match self {
            Self::Distance(distance) => distance.0,
            Self::Weight(weight) => weight.0,
            Self::Energy(energy) => energy.0,
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Distance(distance) => Display::fmt(distance, f),
            Self::Weight(weight) => Display::fmt(weight, f),
            Self::Energy(energy) => Display::fmt(energy, f),
        }
    }
}

/// Serializes as `{"<metric>": value, "<metric>_unit": "<unit>"}`.
impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let metric = self.metric();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(metric.name(), &self.value())?;
        map.serialize_entry(&format!("{}_unit", metric.name()), metric.unit())?;
        map.end()
    }
}
