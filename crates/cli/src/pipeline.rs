//! Rank, sort and format a parsed table.

use crate::config::{OutputFormat, PipelineConfig};
use tablerank_table::{Result, Table};
use tracing::info;

/// Add the rank column and order the rows.
pub fn run(table: Table, config: &PipelineConfig) -> Result<Table> {
    info!(
        rows = table.row_count(),
        source = %config.rank_source,
        column = %config.rank_column,
        "ranking table"
    );
    let table = table.with_rank_column(&config.rank_source, &config.rank_column)?;

    info!(column = config.sort_column(), order = ?config.sort_order(), "sorting table");
    table.sort_by_order(config.sort_column(), config.sort_order())
}

/// Format the table for printing. The text always ends with a newline.
pub fn format_output(table: &Table, config: &PipelineConfig) -> Result<String> {
    match config.format {
        OutputFormat::Table => table.render_with_options(&config.render_options()),
        OutputFormat::Json => table.to_json_string().map(|json| json + "\n"),
        OutputFormat::Csv => Ok(table.to_csv_string()),
    }
}
