use clap::Parser;

use crate::{
    catalog::Domain,
    cli::comparison::{ComparisonArgs, lookup},
    core::inputs::{TransportInputs, parse_positive},
    prelude::*,
    quantity::distance::Kilometers,
};

#[derive(Parser)]
pub struct TransportArgs {
    /// Activity ID, for example `car_gasoline`.
    #[clap(long)]
    activity: String,

    /// Travelled distance.
    #[clap(long = "distance-km", value_parser = parse_positive::<Kilometers>)]
    distance: Kilometers,

    #[clap(flatten)]
    comparison: ComparisonArgs,
}

impl TransportArgs {
    pub async fn run(self) -> Result {
        let selected = lookup(Domain::Transport, &self.activity)?;
        self.comparison.run(selected, &TransportInputs { distance: self.distance }).await
    }
}
