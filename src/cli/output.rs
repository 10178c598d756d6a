use clap::Parser;

use crate::{
    core::session::Session,
    prelude::*,
    tables::{build_comparison_table, build_savings_table},
};

#[derive(Parser)]
pub struct OutputArgs {
    /// Print the comparison as JSON.
    #[clap(long)]
    json: bool,
}

impl OutputArgs {
    pub fn print(&self, session: &Session) -> Result {
        let entry = session.current().context("nothing has been calculated")?;
        let comparison = &entry.comparison;
        if self.json {
            println!("{}", serde_json::to_string_pretty(comparison)?);
            return Ok(());
        }
        println!("{}", build_comparison_table(comparison));
        if comparison.savings.is_empty() {
            info!("no better alternative found");
        } else {
            println!("{}", build_savings_table(comparison));
        }
        if let Some(best) = comparison.best_saving() {
            info!(
                activity = best.activity.id,
                co2_saved = best.co2_saved,
                pct_saved = best.pct_saved,
                "best alternative",
            );
        }
        info!(calculated_at = %entry.calculated_at.format("%Y-%m-%d %H:%M:%S"), "done");
        Ok(())
    }
}
