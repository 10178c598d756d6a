use clap::Parser;
use itertools::Itertools;

use crate::{
    catalog::{self, ActivityFactor, Domain},
    cli::{api::ApiArgs, output::OutputArgs},
    core::{estimation::default_alternatives, inputs::Inputs, session::Session},
    prelude::*,
};

#[derive(Parser)]
pub struct ComparisonArgs {
    /// Alternative activity IDs to compare against, all similar activities by default.
    #[clap(long, value_delimiter = ',', num_args = 1..)]
    alternatives: Vec<String>,

    #[clap(flatten)]
    api: ApiArgs,

    #[clap(flatten)]
    output: OutputArgs,
}

impl ComparisonArgs {
    #[instrument(skip_all, fields(selected = selected.id))]
    pub async fn run<I: Inputs>(&self, selected: &'static ActivityFactor, inputs: &I) -> Result {
        let alternatives = self.alternatives(selected)?;
        info!(n_alternatives = alternatives.len(), "estimating…");
        let comparison = self.api.new_service()?.compare(selected, &alternatives, inputs).await;

        let mut session = Session::default();
        session.replace(comparison);
        self.output.print(&session)?;
        if let Some(comparison) = session.reset() {
            debug!(n_savings = comparison.savings.len(), "session cleared");
        }
        Ok(())
    }

    fn alternatives(&self, selected: &ActivityFactor) -> Result<Vec<&'static ActivityFactor>> {
        if self.alternatives.is_empty() {
            return Ok(default_alternatives(selected));
        }
        let alternatives = self
            .alternatives
            .iter()
            .map(|id| lookup(selected.domain(), id.trim()))
            .filter_ok(|alternative| alternative.id != selected.id)
            .collect::<Result<Vec<_>>>()?;
        Ok(alternatives.into_iter().unique_by(|alternative| alternative.id).collect())
    }
}

pub fn lookup(domain: Domain, id: &str) -> Result<&'static ActivityFactor> {
    if let Some(activity) = catalog::find_in(domain, id) {
        return Ok(activity);
    }
    match catalog::find(id) {
        Some(activity) => bail!("`{id}` is a {} activity, not a {domain} one", activity.domain()),
        None => bail!("unknown {domain} activity `{id}`, run `footprint catalog` to list them"),
    }
}
