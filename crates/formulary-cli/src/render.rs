//! Terminal rendering for catalog pages and interaction matches.

use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use formulary_model::{CatalogPage, CatalogSchema, InteractionRecord};

pub fn catalog_table(page: &CatalogPage, schema: &CatalogSchema) -> Table {
    let mut table = Table::new();
    table.set_header(schema.labels().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for record in &page.records {
        let row: Vec<Cell> = schema
            .labels()
            .map(|label| match record.get(label) {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            })
            .collect();
        table.add_row(row);
    }
    table
}

pub fn catalog_caption(page: &CatalogPage) -> String {
    match page.display_range() {
        Some((first, last)) => format!(
            "rows {first}–{last} of {} (page {} of {})",
            page.total_records, page.page_number, page.total_pages
        ),
        None => format!("0 rows (page {} of {})", page.page_number, page.total_pages),
    }
}

pub fn interactions_table(matches: &[InteractionRecord]) -> Table {
    let detail_columns: BTreeSet<&str> = matches
        .iter()
        .flat_map(|record| record.details.keys().map(String::as_str))
        .collect();
    let mut table = Table::new();
    let mut headers = vec![header_cell("Drug 1"), header_cell("Drug 2")];
    headers.extend(detail_columns.iter().map(|name| header_cell(name)));
    table.set_header(headers);
    apply_table_style(&mut table);
    for record in matches {
        let mut row = vec![Cell::new(&record.drug_a), Cell::new(&record.drug_b)];
        for name in &detail_columns {
            row.push(match record.details.get(*name) {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }
    table
}

pub fn schema_table(schema: &CatalogSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source Column"), header_cell("Display Label")]);
    apply_table_style(&mut table);
    for column in &schema.columns {
        table.add_row(vec![
            Cell::new(&column.source),
            Cell::new(&column.label),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
