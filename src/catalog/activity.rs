use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::power::Watts;

#[derive(Debug, Serialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Transport,
    Food,
    Energy,
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "Transport"),
            Self::Food => write!(f, "Food"),
            Self::Energy => write!(f, "Energy"),
        }
    }
}

impl Domain {
    pub const fn metric(self) -> Metric {
        match self {
            Self::Transport => Metric::Distance,
            Self::Food => Metric::Weight,
            Self::Energy => Metric::Energy,
        }
    }
}

/// Physical quantity an activity is measured in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Distance,
    Weight,
    Energy,
}

impl Metric {
    /// Parameter name in the estimation request.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Weight => "weight",
            Self::Energy => "energy",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Distance => "km",
            Self::Weight => "kg",
            Self::Energy => "kWh",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Car,
    Motorcycle,
    PublicTransport,
    Air,
    Active,
    RedMeat,
    Poultry,
    Seafood,
    Dairy,
    PlantProtein,
    Grain,
    Produce,
    Refrigeration,
    Cooling,
    WaterHeating,
    Kitchen,
    Laundry,
    Electronics,
    Lighting,
}

impl Category {
    pub const fn domain(self) -> Domain {
        match self {
            Self::Car | Self::Motorcycle | Self::PublicTransport | Self::Air | Self::Active => {
                Domain::Transport
            }
            Self::RedMeat
            | Self::Poultry
            | Self::Seafood
            | Self::Dairy
            | Self::PlantProtein
            | Self::Grain
            | Self::Produce => Domain::Food,
            Self::Refrigeration
            | Self::Cooling
            | Self::WaterHeating
            | Self::Kitchen
            | Self::Laundry
            | Self::Electronics
            | Self::Lighting => Domain::Energy,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::PublicTransport => "Public transport",
            Self::Air => "Air",
            Self::Active => "Active",
            Self::RedMeat => "Red meat",
            Self::Poultry => "Poultry",
            Self::Seafood => "Seafood",
            Self::Dairy => "Dairy",
            Self::PlantProtein => "Plant protein",
            Self::Grain => "Grain",
            Self::Produce => "Produce",
            Self::Refrigeration => "Refrigeration",
            Self::Cooling => "Cooling",
            Self::WaterHeating => "Water heating",
            Self::Kitchen => "Kitchen",
            Self::Laundry => "Laundry",
            Self::Electronics => "Electronics",
            Self::Lighting => "Lighting",
        };
        write!(f, "{name}")
    }
}

#[must_use]
#[derive(Debug, PartialEq, Serialize)]
pub struct ActivityFactor {
    pub id: &'static str,

    pub display_name: &'static str,

    /// Kilograms of CO₂e per unit of the domain [`Metric`].
    pub unit_factor: f64,

    /// Activity identifier on the remote estimation API.
    pub external_activity_id: &'static str,

    pub category: Category,

    /// Typical power draw, appliances only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_power: Option<Watts>,
}

impl ActivityFactor {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        unit_factor: f64,
        external_activity_id: &'static str,
        category: Category,
    ) -> Self {
        Self { id, display_name, unit_factor, external_activity_id, category, average_power: None }
    }

    pub const fn with_average_power(mut self, watts: f64) -> Self {
        self.average_power = Some(Watts(watts));
        self
    }

    pub const fn domain(&self) -> Domain {
        self.category.domain()
    }
}
