use std::cmp::Reverse;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    catalog::{ActivityFactor, TariffEntry},
    core::{
        comparison::Comparison,
        estimation::{EstimationResult, Source},
    },
    fmt::{FormattedEmission, FormattedPercentage},
    quantity::cost::Cost,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_comparison_table(comparison: &Comparison) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Activity", "Quantity", "Emission", "Source", "Cost", "Saved", "Saved %"]);

    let selected = &comparison.selected;
    let mut row = result_cells(selected);
    row.push(Cell::new(""));
    row.push(Cell::new(""));
    table.add_row(row.into_iter().map(|cell| cell.add_attribute(Attribute::Bold)).collect_vec());

    for alternative in &comparison.alternatives {
        let mut row = result_cells(alternative);
        if let Some(saving) = comparison.saving_for(alternative.activity.id) {
            row.push(
                Cell::new(FormattedEmission(saving.co2_saved, "kg"))
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Green),
            );
            row.push(
                Cell::new(FormattedPercentage(saving.pct_saved))
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Green),
            );
        } else {
            row.push(Cell::new("no saving").add_attribute(Attribute::Dim).fg(Color::Red));
            row.push(Cell::new(""));
        }
        table.add_row(row);
    }
    table
}

fn result_cells(result: &EstimationResult) -> Vec<Cell> {
    vec![
        Cell::new(result.activity.display_name),
        Cell::new(result.quantity).set_alignment(CellAlignment::Right),
        Cell::new(FormattedEmission(result.co2_amount, &result.co2_unit))
            .set_alignment(CellAlignment::Right),
        Cell::new(result.source).fg(match result.source {
            Source::Remote => Color::Cyan,
            Source::Local => Color::DarkYellow,
        }),
        result.estimated_cost.map_or_else(
            || Cell::new("").add_attribute(Attribute::Dim),
            |cost| {
                Cell::new(cost)
                    .set_alignment(CellAlignment::Right)
                    .fg(if cost >= Cost::ONE_CENT { Color::Reset } else { Color::Green })
            },
        ),
    ]
}

pub fn build_savings_table(comparison: &Comparison) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Alternative", "Benefits", "Drawbacks"]);
    let best = comparison.best_saving().map(|saving| saving.activity.id);
    for saving in &comparison.savings {
        let name = Cell::new(saving.activity.display_name);
        table.add_row(vec![
            if best == Some(saving.activity.id) { name.fg(Color::Green) } else { name },
            Cell::new(saving.benefits.join("\n")),
            Cell::new(saving.drawbacks.join("\n")).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// List the activities, heaviest emitters first within each domain.
pub fn build_catalog_table<'a>(activities: impl IntoIterator<Item = &'a ActivityFactor>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Domain", "Category", "Factor", "Average power"]);
    let activities = activities
        .into_iter()
        .sorted_by_key(|activity| (activity.domain() as u8, Reverse(OrderedFloat(activity.unit_factor))));
    for activity in activities {
        let unit = activity.domain().metric().unit();
        table.add_row(vec![
            Cell::new(activity.id).add_attribute(Attribute::Bold),
            Cell::new(activity.display_name),
            Cell::new(activity.domain()).add_attribute(Attribute::Dim),
            Cell::new(activity.category),
            Cell::new(format!("{:.4} kg/{unit}", activity.unit_factor))
                .set_alignment(CellAlignment::Right),
            activity.average_power.map_or_else(
                || Cell::new(""),
                |power| Cell::new(power).set_alignment(CellAlignment::Right),
            ),
        ]);
    }
    table
}

pub fn build_tariffs_table(tariffs: &[TariffEntry]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Provider", "Residential", "Commercial", "Industrial"]);
    for tariff in tariffs {
        table.add_row(vec![
            Cell::new(tariff.region_code).add_attribute(Attribute::Bold),
            Cell::new(tariff.provider_name),
            Cell::new(tariff.residential_rate).set_alignment(CellAlignment::Right),
            Cell::new(tariff.commercial_rate).set_alignment(CellAlignment::Right),
            Cell::new(tariff.industrial_rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
