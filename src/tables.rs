use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        bill::MonthlyBill,
        model::{AnnualDemand, AnnualSummary},
        multi_start::Optimization,
        tier::{Contract, Tier},
    },
    fmt::Percentage,
    quantity::{Quantity, cost::Cost, power::Kilowatts},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn cost_cell(cost: Cost) -> Cell {
    Cell::new(cost).set_alignment(CellAlignment::Right)
}

fn excess_cell<const POWER: isize, const COST: isize>(value: Quantity<POWER, COST>) -> Cell
where
    Quantity<POWER, COST>: std::fmt::Display,
{
    let cell = Cell::new(value).set_alignment(CellAlignment::Right);
    if value.is_positive() { cell.fg(Color::Red) } else { cell.add_attribute(Attribute::Dim) }
}

fn short_contract(contract: &Contract) -> String {
    format!(
        "{:.0} / {:.0} / {:.0} / {:.0}",
        contract.peak.0, contract.semi_peak.0, contract.saturday_semi_peak.0, contract.off_peak.0,
    )
}

#[must_use]
pub fn build_summary_table(
    optimization: &Optimization,
    current: AnnualSummary,
    optimized: AnnualSummary,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Basic", "Excess", "Total"]);
    table.add_row(vec![
        Cell::new("Current"),
        cost_cell(current.basic_cost),
        excess_cell(current.excess_cost),
        cost_cell(optimization.baseline_cost).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Optimized"),
        cost_cell(optimized.basic_cost),
        excess_cell(optimized.excess_cost),
        cost_cell(optimization.cost).add_attribute(Attribute::Bold),
    ]);
    let savings_color = if optimization.savings.is_positive() { Color::Green } else { Color::Reset };
    table.add_row(vec![
        Cell::new("Savings"),
        Cell::new(""),
        Cell::new(Percentage(optimization.savings_ratio()))
            .set_alignment(CellAlignment::Right)
            .fg(savings_color),
        cost_cell(optimization.savings).fg(savings_color).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_contract_table(current: &Contract, optimized: &Contract) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tier", "Current", "Optimized", "Change"]);
    for (tier, current_capacity) in current.iter() {
        let change = optimized[tier] - *current_capacity;
        table.add_row(vec![
            Cell::new(tier),
            Cell::new(current_capacity).set_alignment(CellAlignment::Right),
            Cell::new(optimized[tier]).set_alignment(CellAlignment::Right),
            Cell::new(change).set_alignment(CellAlignment::Right).fg(
                if change.is_positive() {
                    Color::DarkYellow
                } else if change < Kilowatts::ZERO {
                    Color::Green
                } else {
                    Color::Reset
                },
            ),
        ]);
    }
    table
}

#[must_use]
pub fn build_seeds_table(optimization: &Optimization) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Seed", "Start", "Start cost", "Result", "Cost", "Passes"]);
    for outcome in &optimization.outcomes {
        let is_best = outcome.seed == optimization.best_seed;
        table.add_row(vec![
            Cell::new(outcome.seed).fg(if is_best { Color::Green } else { Color::Reset }),
            Cell::new(short_contract(&outcome.start)).add_attribute(Attribute::Dim),
            cost_cell(outcome.start_cost).add_attribute(Attribute::Dim),
            Cell::new(short_contract(&outcome.solution.contract)),
            cost_cell(outcome.solution.cost),
            Cell::new(outcome.solution.n_passes).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Monthly breakdown of a single contract.
#[must_use]
pub fn build_bills_table(bills: &[MonthlyBill]) -> Table {
    let mut table = new_table();
    let mut header = vec![
        Cell::new("Month"),
        Cell::new("Basic"),
        Cell::new("Excess"),
        Cell::new("Total"),
    ];
    header.extend(Tier::all().map(|tier| Cell::new(format!("{tier} excess"))));
    table.set_header(header);
    for bill in bills {
        let mut row = vec![
            Cell::new(bill.month.name()),
            cost_cell(bill.basic_cost),
            excess_cell(bill.excess_cost),
            cost_cell(bill.total_cost).add_attribute(Attribute::Bold),
        ];
        row.extend(bill.excess.iter().map(|(_, excess)| excess_cell(*excess)));
        table.add_row(row);
    }
    table
}

/// Monthly breakdown of the current and optimized contracts side by side.
#[must_use]
pub fn build_comparison_table(current: &[MonthlyBill], optimized: &[MonthlyBill]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Month",
        "Basic",
        "Excess",
        "Total",
        "Optimized basic",
        "Optimized excess",
        "Optimized total",
    ]);
    for (current, optimized) in current.iter().zip(optimized) {
        table.add_row(vec![
            Cell::new(current.month.name()),
            cost_cell(current.basic_cost),
            excess_cell(current.excess_cost),
            cost_cell(current.total_cost).add_attribute(Attribute::Bold),
            cost_cell(optimized.basic_cost),
            excess_cell(optimized.excess_cost),
            cost_cell(optimized.total_cost).fg(if optimized.total_cost <= current.total_cost {
                Color::Green
            } else {
                Color::Red
            }),
        ]);
    }
    table
}

/// Monthly demand of one tier against the cumulative capacity it has to clear.
#[must_use]
pub fn build_demand_table(
    tier: Tier,
    demands: &AnnualDemand,
    current: &[MonthlyBill],
    optimized: &[MonthlyBill],
    current_contract: &Contract,
    optimized_contract: &Contract,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Month"),
        Cell::new(format!("{tier} demand")),
        Cell::new("Current capacity"),
        Cell::new("Current excess"),
        Cell::new("Optimized capacity"),
        Cell::new("Optimized excess"),
    ]);
    let current_capacity = current_contract.cumulative(tier);
    let optimized_capacity = optimized_contract.cumulative(tier);
    for ((demand, current), optimized) in demands.iter().zip(current).zip(optimized) {
        table.add_row(vec![
            Cell::new(current.month.name()),
            Cell::new(demand[tier]).set_alignment(CellAlignment::Right),
            Cell::new(current_capacity)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            excess_cell(current.excess[tier]),
            Cell::new(optimized_capacity)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            excess_cell(optimized.excess[tier]),
        ]);
    }
    table
}
