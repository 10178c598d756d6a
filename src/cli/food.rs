use clap::Parser;

use crate::{
    catalog::Domain,
    cli::comparison::{ComparisonArgs, lookup},
    core::inputs::{FoodInputs, FoodPeriod, parse_positive},
    prelude::*,
    quantity::mass::Kilograms,
};

#[derive(Parser)]
pub struct FoodArgs {
    /// Activity ID, for example `beef`.
    #[clap(long)]
    activity: String,

    /// Consumed weight per day.
    #[clap(long = "weight-kg", value_parser = parse_positive::<Kilograms>)]
    weight: Kilograms,

    #[clap(long, default_value = "day")]
    period: FoodPeriod,

    #[clap(flatten)]
    comparison: ComparisonArgs,
}

impl FoodArgs {
    pub async fn run(self) -> Result {
        let selected = lookup(Domain::Food, &self.activity)?;
        self.comparison
            .run(selected, &FoodInputs { weight: self.weight, period: self.period })
            .await
    }
}
