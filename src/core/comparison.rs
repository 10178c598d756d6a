use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    catalog::{ActivityFactor, editorial_for},
    core::estimation::EstimationResult,
};

#[derive(Clone, Debug, Serialize)]
pub struct Saving {
    pub activity: &'static ActivityFactor,

    /// Kilograms of CO₂e, always positive.
    pub co2_saved: f64,

    pub pct_saved: f64,
    pub benefits: &'static [&'static str],
    pub drawbacks: &'static [&'static str],
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub selected: EstimationResult,

    /// All the estimated alternatives, including the worse ones.
    pub alternatives: Vec<EstimationResult>,

    /// Better alternatives only, in the order they were passed.
    pub savings: Vec<Saving>,
}

impl Comparison {
    pub fn build(selected: EstimationResult, alternatives: Vec<EstimationResult>) -> Self {
        let selected_co2 = selected.co2_kilograms();
        let savings = alternatives
            .iter()
            .filter_map(|alternative| {
                let co2_saved = selected_co2 - alternative.co2_kilograms();
                (co2_saved > 0.0).then(|| {
                    let editorial = editorial_for(alternative.activity);
                    Saving {
                        activity: alternative.activity,
                        co2_saved,
                        pct_saved: pct_saved(selected_co2, co2_saved),
                        benefits: editorial.benefits,
                        drawbacks: editorial.drawbacks,
                    }
                })
            })
            .collect();
        Self { selected, alternatives, savings }
    }

    pub fn saving_for(&self, activity_id: &str) -> Option<&Saving> {
        self.savings.iter().find(|saving| saving.activity.id == activity_id)
    }

    pub fn best_saving(&self) -> Option<&Saving> {
        self.savings.iter().max_by_key(|saving| OrderedFloat(saving.co2_saved))
    }
}

fn pct_saved(selected_co2: f64, co2_saved: f64) -> f64 {
    if selected_co2 > 0.0 { co2_saved / selected_co2 * 100.0 } else { 0.0 }
}
