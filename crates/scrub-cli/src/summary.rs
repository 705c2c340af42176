use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use scrub_analyze::FieldSummary;
use scrub_model::FieldTypeMap;
use scrub_transform::PipelineReport;

pub fn print_types(types: &FieldTypeMap) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Inferred type")]);
    apply_table_style(&mut table);
    for (field, field_type) in types {
        table.add_row(vec![field.clone(), field_type.to_string()]);
    }
    println!("{table}");
}

pub fn print_preview(data: &scrub_model::Table, limit: usize) {
    if data.is_empty() {
        println!("(no rows)");
        return;
    }
    let mut table = Table::new();
    table.set_header(data.columns.iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in data.rows.iter().take(limit) {
        table.add_row(
            data.columns
                .iter()
                .map(|column| {
                    row.get(column)
                        .map(ToString::to_string)
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
    if data.len() > limit {
        println!("... and {} more rows", data.len() - limit);
    }
}

pub fn print_report(report: &PipelineReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec!["Original rows".to_string(), report.original_rows.to_string()]);
    table.add_row(vec!["Cleaned rows".to_string(), report.cleaned_rows.to_string()]);
    table.add_row(vec![
        "Duplicates removed".to_string(),
        report.duplicates_removed.to_string(),
    ]);
    table.add_row(vec![
        "Fields processed".to_string(),
        report.fields_processed.to_string(),
    ]);
    table.add_row(vec!["Missing strategy".to_string(), report.strategy.clone()]);
    println!("{table}");
}

pub fn print_stats(stats: &BTreeMap<String, FieldSummary>) {
    if stats.is_empty() {
        println!("(no numeric fields)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Std"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (field, summary) in stats {
        table.add_row(vec![
            field.clone(),
            summary.count.to_string(),
            format!("{:.2}", summary.mean),
            format!("{:.2}", summary.median),
            format!("{:.2}", summary.min),
            format!("{:.2}", summary.max),
            format!("{:.2}", summary.std),
        ]);
    }
    println!("{table}");
}

pub fn print_outliers(flagged: &scrub_model::Table, field: &str, z_threshold: f64) {
    println!(
        "Outliers in {field:?} (z > {z_threshold}): {}",
        flagged.len()
    );
    if !flagged.is_empty() {
        print_preview(flagged, flagged.len());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
