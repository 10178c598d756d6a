use clap::Parser;

use crate::{
    catalog::{self, ConsumerClass, Domain},
    cli::comparison::{ComparisonArgs, lookup},
    core::inputs::{EnergyInputs, UsagePeriod, parse_positive},
    prelude::*,
    quantity::{power::Watts, time::Hours},
};

#[derive(Parser)]
pub struct EnergyArgs {
    /// Appliance ID, for example `geladeira`.
    #[clap(long)]
    appliance: String,

    /// Usage hours, multiplied by the period multiplier.
    #[clap(long = "hours", value_parser = parse_positive::<Hours>)]
    hours_used: Hours,

    #[clap(long, default_value = "day")]
    period: UsagePeriod,

    /// Actual appliance power, the catalog average is used by default.
    #[clap(long = "power-watts", value_parser = parse_positive::<Watts>)]
    power: Option<Watts>,

    /// Federative unit code to estimate the cost in, for example `SP`.
    #[clap(long, env = "REGION")]
    region: Option<String>,

    #[clap(long = "consumer-class", default_value = "residential")]
    consumer_class: ConsumerClass,

    #[clap(flatten)]
    comparison: ComparisonArgs,
}

impl EnergyArgs {
    pub async fn run(self) -> Result {
        let selected = lookup(Domain::Energy, &self.appliance)?;
        if let Some(region) = &self.region
            && catalog::tariff_for(region).is_none()
        {
            warn!(%region, "unknown region, the cost will not be estimated");
        }
        let inputs = EnergyInputs::builder()
            .hours_used(self.hours_used)
            .period(self.period)
            .maybe_power_override(self.power)
            .maybe_region_code(self.region)
            .consumer_class(self.consumer_class)
            .build();
        self.comparison.run(selected, &inputs).await
    }
}
