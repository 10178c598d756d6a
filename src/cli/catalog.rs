use clap::Parser;
use enumset::EnumSet;

use crate::{
    catalog::{self, Domain},
    prelude::*,
    tables::{build_catalog_table, build_tariffs_table},
};

#[derive(Parser)]
pub struct CatalogArgs {
    /// Domains to list, all by default.
    #[clap(long = "domain", value_delimiter = ',', num_args = 1..)]
    domains: Vec<Domain>,
}

impl CatalogArgs {
    pub fn run(self) -> Result {
        let mut domains: EnumSet<Domain> = self.domains.into_iter().collect();
        if domains.is_empty() {
            domains = EnumSet::all();
        }
        println!("{}", build_catalog_table(catalog::factors_in(domains)));
        Ok(())
    }
}

#[derive(Parser)]
pub struct TariffsArgs {
    /// Only show this federative unit.
    #[clap(long)]
    region: Option<String>,
}

impl TariffsArgs {
    pub fn run(self) -> Result {
        let tariffs = match &self.region {
            Some(region) => std::slice::from_ref(
                catalog::tariff_for(region)
                    .with_context(|| format!("no tariff for the region `{region}`"))?,
            ),
            None => catalog::tariffs(),
        };
        println!("{}", build_tariffs_table(tariffs));
        Ok(())
    }
}
