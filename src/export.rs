use std::collections::BTreeMap;

use crate::dates::DateMapper;
use crate::state::Grid;

/// Flatten the grid into a `date string -> painted` mapping, one entry per
/// cell. The mapper assigns every cell a distinct date, and map insertion
/// keeps last-write-wins if that ever stopped holding. Keys sort
/// lexicographically, which for zero-padded ISO dates is chronological.
pub fn date_mapping(grid: &Grid, mapper: &DateMapper) -> BTreeMap<String, bool> {
    let mut mapping = BTreeMap::new();
    for (pos, active) in grid.cells() {
        mapping.insert(mapper.date_key(pos), active);
    }
    mapping
}

/// Serialize the grid to the compact single-line JSON shown in the result
/// pane and placed on the clipboard.
pub fn to_json(grid: &Grid, mapper: &DateMapper) -> serde_json::Result<String> {
    serde_json::to_string(&date_mapping(grid, mapper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CellPosition, GRID_CELLS, GridEditor};

    #[test]
    fn empty_grid_exports_every_cell_as_false() {
        for year in [2023, 2024, 2025] {
            let mapping = date_mapping(&Grid::new(), &DateMapper::new(year));
            assert_eq!(mapping.len(), GRID_CELLS);
            assert!(mapping.values().all(|&painted| !painted));
        }
    }

    #[test]
    fn painting_new_years_day_shows_up_under_its_date() {
        let mapper = DateMapper::new(2025);
        let mut editor = GridEditor::new();

        // Press the cell for January 1 and release without dragging.
        editor.pointer_down(CellPosition::new(3, 0));
        editor.pointer_up();

        let mapping = date_mapping(editor.grid(), &mapper);
        assert_eq!(mapping.len(), GRID_CELLS);
        assert_eq!(mapping.get("2025-01-01"), Some(&true));
        assert_eq!(mapping.values().filter(|&&painted| painted).count(), 1);
    }

    #[test]
    fn json_is_compact_and_single_line() {
        let mapper = DateMapper::new(2025);
        let mut editor = GridEditor::new();
        editor.pointer_down(CellPosition::new(3, 0));
        editor.pointer_up();

        let json = to_json(editor.grid(), &mapper).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(!json.contains('\n'));
        assert!(!json.contains(' '));
        assert!(json.contains("\"2025-01-01\":true"));
        assert!(json.contains("\"2025-01-02\":false"));
    }

    #[test]
    fn keys_are_ordered_chronologically() {
        let json = to_json(&Grid::new(), &DateMapper::new(2025)).unwrap();
        // First grid cell is Dec 29, 2024; last is Jan 3, 2026.
        assert!(json.starts_with("{\"2024-12-29\":"));
        assert!(json.ends_with("\"2026-01-03\":false}"));
    }
}
