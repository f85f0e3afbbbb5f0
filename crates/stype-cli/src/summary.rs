use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stype_model::Status;
use stype_report::status_counts;

use crate::commands::ClassifyResult;

pub fn print_summary(result: &ClassifyResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.run_report {
        println!("Run report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (status, count) in status_counts(&result.classified) {
        table.add_row(vec![status_cell(status), count_cell(status, count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.classified.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let inconsistent: Vec<&str> = result
        .classified
        .iter()
        .filter(|item| !item.is_consistent())
        .map(|item| item.record.id.as_str())
        .collect();
    if !inconsistent.is_empty() {
        eprintln!("Records needing catalog attention:");
        for id in inconsistent {
            eprintln!("- {id}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: Status) -> Cell {
    let cell = Cell::new(status.as_str()).fg(status_color(status));
    if status == Status::ReviewInconsistent {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn count_cell(status: Status, count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(status_color(status))
    }
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Pass => Color::Green,
        Status::Review | Status::ReviewEdge => Color::Yellow,
        Status::Fail | Status::ReviewInconsistent => Color::Red,
    }
}
