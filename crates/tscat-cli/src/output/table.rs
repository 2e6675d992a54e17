//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use tscat::CatalogStats;

/// Coverage data for a single file.
pub struct FileCoverage {
    /// Path as given on the command line.
    pub file: String,
    /// Target language of the catalog.
    pub language: String,
    pub stats: CatalogStats,
}

/// Format coverage data as a table.
pub fn format_coverage_table(coverage: &[FileCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "File",
        "Language",
        "Contexts",
        "Entries",
        "Finished",
        "Unfinished",
        "Vanished",
        "Completion",
    ]);

    for row in coverage {
        table.add_row(vec![
            row.file.clone(),
            row.language.clone(),
            row.stats.contexts.to_string(),
            row.stats.entries.to_string(),
            row.stats.finished.to_string(),
            row.stats.unfinished.to_string(),
            row.stats.vanished.to_string(),
            format!("{:.1}%", row.stats.completion()),
        ]);
    }
    for index in 2..8 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
