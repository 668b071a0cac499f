//! Plain-text rendering of grids.
use std::fmt::Write;

use tessera_temporal::{
    enumerate::UnitCell,
    grid::{GridCell, MonthCell, MonthGrid, TimeGrid},
    labels::CalendarLabels,
};

pub fn month(grid: &MonthGrid, labels: &dyn CalendarLabels) -> String {
    let mut out = format!(
        "{} {}\n",
        labels.month_name(grid.month().month()),
        grid.month().year()
    );
    for weekday in grid.weekdays() {
        let _ = write!(out, " {:<3}", labels.weekday_short_name(weekday));
    }
    out.push('\n');
    for row in grid.rows() {
        for cell in row {
            out.push_str(&day(cell));
        }
        out.push('\n');
    }
    out
}

fn day(cell: &GridCell) -> String {
    let label = &cell.label;
    if !cell.is_current_period {
        "  . ".to_string()
    } else if cell.disabled {
        " -- ".to_string()
    } else if cell.is_selected {
        format!("[{label}]")
    } else if cell.is_in_range {
        format!("={label}=")
    } else if cell.is_in_preview {
        format!("+{label}+")
    } else if cell.is_today {
        format!("*{label}*")
    } else {
        format!(" {label} ")
    }
}

pub fn year(cells: &[MonthCell]) -> String {
    let mut out = String::new();
    for row in cells.chunks(3) {
        for cell in row {
            let name = &cell.name;
            let text = match (cell.disabled, cell.is_selected) {
                (true, _) => " --- ".to_string(),
                (false, true) => format!("[{name}]"),
                (false, false) => format!(" {name} "),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}

pub fn time(grid: &TimeGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "hour   {}", column(&grid.hours));
    let _ = writeln!(out, "minute {}", column(&grid.minutes));
    if let Some(seconds) = &grid.seconds {
        let _ = writeln!(out, "second {}", column(seconds));
    }
    if let Some(period) = &grid.period {
        let cells: Vec<String> = period
            .iter()
            .map(|cell| match (cell.disabled, cell.is_selected) {
                (true, _) => "--".to_string(),
                (false, true) => format!("[{}]", cell.label),
                (false, false) => cell.label.clone(),
            })
            .collect();
        let _ = writeln!(out, "period {}", cells.join(" "));
    }
    out
}

fn column(cells: &[UnitCell]) -> String {
    cells
        .iter()
        .map(|cell| if cell.disabled { "--" } else { cell.label.as_str() })
        .collect::<Vec<_>>()
        .join(" ")
}
