//! Grid builders for month, year and time views.
//!
//! Every builder is a pure function of its arguments: "today" and "now" are
//! passed in, never read from a clock.
pub mod month;
pub mod time;
pub mod year;

pub use month::{GridCell, MonthGrid, MonthGridArgs, build_month_grid, first_grid_day};
pub use time::{
    HourCycle, PeriodCell, TimeFormat, TimeGrid, TimeGridArgs, TimeSteps, build_time_grid,
};
pub use year::{MonthCell, YearGridArgs, build_year_grid};

/// Columns of a month grid, one per weekday.
pub const DATE_COLUMNS: usize = 7;
/// Rows of a month grid.
pub const DATE_ROWS: usize = 6;
/// Cells of a month grid.
pub const DATE_CELLS: usize = DATE_COLUMNS * DATE_ROWS;
/// Cells of a year grid.
pub const MONTH_CELLS: usize = 12;
