use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ppc_core::{ActionRow, CannibalizationReport, HarvestCandidate, HarvestReport};
use ppc_ingest::ColumnResolution;
use ppc_model::Status;

use crate::types::AnalyzeOutcome;

pub fn print_summary(outcome: &AnalyzeOutcome, currency: &str) {
    let ingest = &outcome.ingest;
    println!("Report: {}", outcome.report.display());
    println!(
        "Rows: {} read, {} skipped, {} after aggregation",
        ingest.source_rows, ingest.skipped_rows, ingest.aggregated_rows
    );
    let options = &outcome.result.options;
    println!(
        "Decision: ROAS threshold {}%, min orders {}",
        options.roas_improvement_threshold_pct, options.min_orders_for_roas_winner
    );
    println!();
    print_cannibalization(&outcome.result.cannibalization, currency);
    println!();
    print_harvest(&outcome.result.harvest, currency);
    if let Some(exports) = &outcome.exports {
        println!();
        if let Some(path) = &exports.action_plan {
            println!("Action plan: {}", path.display());
        }
        if let Some(path) = &exports.harvest_list {
            println!("Harvest list: {}", path.display());
        }
    }
}

fn print_cannibalization(report: &CannibalizationReport, currency: &str) {
    println!("Cannibalization:");
    if report.is_clean() {
        println!("No cannibalization found. Account structure is clean.");
        return;
    }
    let summary = &report.summary;
    let mut metrics = Table::new();
    metrics.set_header(vec![
        header_cell("Cannibalized Keywords"),
        header_cell("Wasted Spend (Negate Targets)"),
        header_cell("Conflicting Ad Groups"),
    ]);
    apply_metric_table_style(&mut metrics);
    metrics.add_row(vec![
        Cell::new(summary.conflicted_terms).add_attribute(Attribute::Bold),
        Cell::new(format_money(summary.wasted_spend, currency))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.conflicting_ad_groups).add_attribute(Attribute::Bold),
    ]);
    println!("{metrics}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Search Term"),
        header_cell("Campaign"),
        header_cell("Ad Group"),
        header_cell("Spend"),
        header_cell("Sales"),
        header_cell("Orders"),
        header_cell("ROAS"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    apply_detail_table_style(&mut table);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Center);
    for action in &report.actions {
        table.add_row(action_cells(action, currency));
    }
    println!("{table}");
}

fn action_cells(action: &ActionRow, currency: &str) -> Vec<Cell> {
    let dim = !action.status.is_keep();
    let text = |value: &str| {
        if dim {
            dim_cell(value)
        } else {
            Cell::new(value)
        }
    };
    vec![
        text(&action.search_term),
        text(&action.campaign),
        text(&action.ad_group),
        text(&format_money(action.spend, currency)),
        text(&format_money(action.sales, currency)),
        text(&action.orders.to_string()),
        text(&format!("{:.2}", action.roas)),
        status_cell(action.status),
        text(&action.reason),
    ]
}

fn print_harvest(report: &HarvestReport, currency: &str) {
    println!("Harvesting:");
    if report.is_empty() {
        println!("No new harvesting opportunities found.");
        return;
    }
    let mut metrics = Table::new();
    metrics.set_header(vec![
        header_cell("New Keywords Found"),
        header_cell("Potential Revenue"),
    ]);
    apply_metric_table_style(&mut metrics);
    metrics.add_row(vec![
        Cell::new(report.summary.new_keywords).add_attribute(Attribute::Bold),
        Cell::new(format_money(report.summary.potential_revenue, currency))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{metrics}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Search Term"),
        header_cell("Campaign"),
        header_cell("Ad Group"),
        header_cell("Match Type"),
        header_cell("Orders"),
        header_cell("Sales"),
        header_cell("Spend"),
        header_cell("ROAS"),
    ]);
    apply_detail_table_style(&mut table);
    for index in 4..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for candidate in &report.candidates {
        table.add_row(harvest_cells(candidate, currency));
    }
    println!("{table}");
}

fn harvest_cells(candidate: &HarvestCandidate, currency: &str) -> Vec<Cell> {
    vec![
        Cell::new(&candidate.search_term)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&candidate.campaign),
        Cell::new(&candidate.ad_group),
        Cell::new(candidate.match_type.as_str()),
        Cell::new(candidate.orders),
        Cell::new(format_money(candidate.sales, currency)),
        Cell::new(format_money(candidate.spend, currency)),
        Cell::new(format!("{:.2}", candidate.roas)),
    ]
}

/// Prints the header mapping; missing fields are highlighted.
pub fn print_columns(resolution: &ColumnResolution) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Header"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, column) in resolution.entries() {
        match column {
            Some(column) => table.add_row(vec![
                Cell::new(field.as_str()),
                Cell::new(column.index + 1),
                Cell::new(&column.header).fg(Color::Green),
            ]),
            None => table.add_row(vec![
                Cell::new(field.as_str()),
                dim_cell("-"),
                Cell::new("<missing>")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
            ]),
        };
    }
    println!("{table}");
}

/// Formats an amount with two decimals and thousands separators.
pub fn format_money(value: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{currency}{grouped}.{fraction}")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_metric_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: Status) -> Cell {
    match status {
        Status::Keep => Cell::new("KEEP")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Status::Negate => Cell::new("NEGATE")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
