mod api;
mod catalog;
mod comparison;
mod energy;
mod food;
mod output;
mod transport;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        catalog::{CatalogArgs, TariffsArgs},
        energy::EnergyArgs,
        food::FoodArgs,
        transport::TransportArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Transport(args) => args.run().await,
            Command::Food(args) => args.run().await,
            Command::Energy(args) => args.run().await,
            Command::Catalog(args) => args.run(),
            Command::Tariffs(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate a trip and compare it against other means of transport.
    #[clap(name = "transport")]
    Transport(Box<TransportArgs>),

    /// Estimate food consumption and compare it against other foods.
    #[clap(name = "food")]
    Food(Box<FoodArgs>),

    /// Estimate an appliance usage and compare it against similar appliances.
    #[clap(name = "energy")]
    Energy(Box<EnergyArgs>),

    /// List the emission factors.
    #[clap(name = "catalog")]
    Catalog(CatalogArgs),

    /// List the electricity tariffs.
    #[clap(name = "tariffs")]
    Tariffs(TariffsArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let result = Args::try_parse_from([
            "footprint",
            "transport",
            "--activity",
            "car_gasoline",
            "--distance-km",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_numeric_weight() {
        let result = Args::try_parse_from([
            "footprint",
            "food",
            "--activity",
            "beef",
            "--weight-kg",
            "a lot",
        ]);
        assert!(result.is_err());
    }
}
