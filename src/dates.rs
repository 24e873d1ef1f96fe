use chrono::{Datelike, Duration, NaiveDate};

use crate::state::CellPosition;

/// Key format of the exported mapping; consumers key on it, so it must stay
/// stable across runs.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

const HOVER_LABEL_FORMAT: &str = "%b %-d, %Y";

/// Maps grid coordinates to calendar dates for one fixed year.
///
/// Column 0 holds the week containing January 1, with rows counted from
/// Sunday, so the cells before `first_weekday` in that column fall in the
/// previous year. Those edge dates are part of the contract and are exported
/// as-is.
#[derive(Clone, Copy, Debug)]
pub struct DateMapper {
    year: i32,
    anchor: NaiveDate,
    first_weekday: i64,
}

impl DateMapper {
    /// `year` is validated by the config layer before it gets here.
    pub fn new(year: i32) -> Self {
        let anchor = NaiveDate::from_ymd_opt(year, 1, 1)
            .expect("year must be within the supported calendar range");
        let first_weekday = i64::from(anchor.weekday().num_days_from_sunday());
        Self {
            year,
            anchor,
            first_weekday,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Sunday-based weekday of January 1 (0 = Sunday .. 6 = Saturday); the
    /// row of the grid cell that holds New Year's Day.
    pub fn first_weekday(&self) -> usize {
        self.first_weekday as usize
    }

    pub fn date_at(&self, pos: CellPosition) -> NaiveDate {
        let days = pos.row as i64 + pos.col as i64 * 7 - self.first_weekday;
        self.anchor + Duration::days(days)
    }

    pub fn date_key(&self, pos: CellPosition) -> String {
        self.date_at(pos).format(DATE_KEY_FORMAT).to_string()
    }

    pub fn hover_label(&self, pos: CellPosition) -> String {
        self.date_at(pos).format(HOVER_LABEL_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::state::{GRID_CELLS, GRID_COLS, GRID_ROWS};

    #[test]
    fn anchor_cell_maps_to_new_years_day() {
        // January 1, 2025 is a Wednesday.
        let mapper = DateMapper::new(2025);
        assert_eq!(mapper.first_weekday(), 3);
        assert_eq!(
            mapper.date_at(CellPosition::new(3, 0)),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn grid_dates_are_distinct_and_consecutive() {
        let mapper = DateMapper::new(2025);
        let mut seen = HashSet::new();
        let mut prev: Option<NaiveDate> = None;

        for col in 0..GRID_COLS {
            for row in 0..GRID_ROWS {
                let date = mapper.date_at(CellPosition::new(row, col));
                if let Some(prev) = prev {
                    assert_eq!(date - prev, Duration::days(1));
                }
                assert!(seen.insert(date));
                prev = Some(date);
            }
        }

        assert_eq!(seen.len(), GRID_CELLS);
    }

    #[test]
    fn leap_day_appears_exactly_once() {
        let mapper = DateMapper::new(2024);
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let count = (0..GRID_COLS)
            .flat_map(|col| (0..GRID_ROWS).map(move |row| CellPosition::new(row, col)))
            .filter(|&pos| mapper.date_at(pos) == leap)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn grid_edges_roll_into_neighboring_years() {
        let mapper = DateMapper::new(2025);
        assert_eq!(mapper.date_key(CellPosition::new(0, 0)), "2024-12-29");
        assert_eq!(
            mapper.date_key(CellPosition::new(GRID_ROWS - 1, GRID_COLS - 1)),
            "2026-01-03"
        );
    }

    #[test]
    fn hover_label_is_human_readable() {
        let mapper = DateMapper::new(2025);
        assert_eq!(mapper.hover_label(CellPosition::new(3, 0)), "Jan 1, 2025");
        assert_eq!(mapper.hover_label(CellPosition::new(0, 0)), "Dec 29, 2024");
    }
}
