use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn cyan_header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(*label).fg(TableColor::Cyan))
        .collect()
}

/// Count cell colored by how much of the total survived the filter.
pub fn color_coded_count_cell(count: usize, total: usize) -> Cell {
    let text = count.to_string();
    if total == 0 || count == 0 {
        Cell::new(text).fg(TableColor::Red)
    } else if count == total {
        Cell::new(text).fg(TableColor::Green)
    } else {
        Cell::new(text).fg(TableColor::Yellow)
    }
}

pub fn check_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("yes").fg(TableColor::Green)
    } else {
        Cell::new("no").fg(TableColor::Red)
    }
}
