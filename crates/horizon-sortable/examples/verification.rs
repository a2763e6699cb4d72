//! Horizon Sortable Verification Example
//!
//! Console walkthrough for runtime verification of:
//! - Initial sort from a TOML configuration
//! - Header clicks toggling direction
//! - Date columns with templates and with the ISO fallback
//! - Header and row classes after each sort
//!
//! Run with: RUST_LOG=horizon_sortable=debug cargo run -p horizon-sortable --example verification

use std::sync::Arc;

use horizon_sortable::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
sort_at_start = true
initial_sort_column = 0
initial_sort_order = "asc"

[classes]
odd_rows = "odd"
even_rows = "even"
"#;

fn print_table(title: &str, table: &SortableTable<SimpleTableModel>) {
    let model = table.model();
    let state = table.engine().state();
    println!("\n== {title} (column {:?}, {:?})", state.active_column, state.order);

    let headers: Vec<String> = table
        .header_classes()
        .into_iter()
        .map(|class| class.unwrap_or_else(|| "-".to_string()))
        .collect();
    println!("   header classes: {}", headers.join(" | "));

    for (row, class) in table.row_classes().into_iter().enumerate() {
        let cells: Vec<String> = (0..model.column_count())
            .map(|column| model.cell_text(row, column).unwrap_or_default())
            .collect();
        println!(
            "   {:<5} {}",
            class.unwrap_or_default(),
            cells.join(" | ")
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = Arc::new(
        SimpleTableModel::from_strings([
            ["foxtrot", "4", "05-03-2020", "2020-03-05T10:00:00", "x"],
            ["zulu", "3", "17-11-2019", "2019-11-17", "y"],
            ["uniform", "1", "", "not a date", "z"],
            ["bravo", "2", "29-02-2020", "2021-01-01T00:00:00+01:00", "w"],
        ])
        .with_column_meta(vec![
            ColumnMeta::text(),
            ColumnMeta::text(),
            ColumnMeta::date_format("dd-MM-yyyy"),
            ColumnMeta::iso_date(),
            ColumnMeta::disabled(),
        ]),
    );

    let config = SortableConfig::from_toml_str(CONFIG)?;
    let table = SortableTable::new(
        SortEngine::builder(model)
            .config(config)
            .on_before_sort(|column| println!("-> before sort of column {column}"))
            .on_after_sort(|column| println!("<- after sort of column {column}")),
    )?;
    print_table("initial sort", &table);

    table.click_header(0);
    print_table("name, clicked again", &table);

    table.click_header(1);
    print_table("number", &table);

    table.click_header(2);
    print_table("dd-MM-yyyy dates", &table);

    table.click_header(2);
    print_table("dd-MM-yyyy dates, descending", &table);

    table.click_header(3);
    print_table("ISO dates", &table);

    table.click_header(4);
    print_table("disabled column (unchanged)", &table);

    Ok(())
}
