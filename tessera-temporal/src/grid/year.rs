//! The 12-cell month picker of a year view.
use std::sync::Arc;

use derive_setters::Setters;

use crate::{
    constraint::{AllDates, ConstraintSet, SelectableDates, is_date_disabled},
    date::{CalendarDate, YearMonth},
    granularity::Granularity,
    grid::MONTH_CELLS,
    labels::{CalendarLabels, EnglishLabels},
    selection::SelectionState,
};

/// Configuration for [`build_year_grid`].
#[derive(Clone, Setters)]
pub struct YearGridArgs {
    /// The displayed year.
    pub year: i32,
    /// The host's current date.
    pub today: CalendarDate,
    /// Current selection.
    pub selection: SelectionState<CalendarDate>,
    /// Effective bounds.
    pub constraints: ConstraintSet,
    /// Extra per-year and per-date policy.
    pub selectable_dates: Arc<dyn SelectableDates>,
    /// Month names.
    pub labels: Arc<dyn CalendarLabels>,
}

impl YearGridArgs {
    /// Creates arguments for `year` with everything else at its default.
    pub fn new(year: i32, today: CalendarDate) -> Self {
        Self {
            year,
            today,
            selection: SelectionState::single(),
            constraints: ConstraintSet::unbounded(),
            selectable_dates: Arc::new(AllDates),
            labels: Arc::new(EnglishLabels),
        }
    }
}

/// One month of a year grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    /// The month shown in this cell.
    pub month: YearMonth,
    /// Zero-padded month ordinal, `"01"` to `"12"`.
    pub label: String,
    /// Abbreviated month name from the label provider.
    pub name: String,
    /// Whether no day of the month can be selected.
    pub disabled: bool,
    /// Whether this is the host's current month.
    pub is_current_period: bool,
    /// Whether the selection touches this month.
    pub is_selected: bool,
}

/// Builds the twelve month cells of `args.year`.
pub fn build_year_grid(args: &YearGridArgs) -> [MonthCell; MONTH_CELLS] {
    let year_selectable = args.selectable_dates.is_selectable_year(args.year);
    let selected_months = selected_months(&args.selection);
    std::array::from_fn(|index| {
        let month = YearMonth::new_unchecked(args.year, index as u8);
        MonthCell {
            month,
            label: Granularity::Month.label(month.month()),
            name: args.labels.month_short_name(month.month()),
            disabled: !year_selectable
                || args.constraints.is_disabled(&month)
                || !has_selectable_day(month, args),
            is_current_period: args.today.year_month() == month,
            is_selected: selected_months.contains(&Some(month)),
        }
    })
}

fn has_selectable_day(month: YearMonth, args: &YearGridArgs) -> bool {
    (1..=month.days()).any(|day| {
        !is_date_disabled(
            month.clamped_date(day),
            &args.constraints,
            args.selectable_dates.as_ref(),
        )
    })
}

fn selected_months(selection: &SelectionState<CalendarDate>) -> [Option<YearMonth>; 2] {
    match selection {
        SelectionState::Single(date) => [date.map(|d| d.year_month()), None],
        SelectionState::Range(range) => [
            range.start().map(|d| d.year_month()),
            range.end().map(|d| d.year_month()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::resolve_constraints;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn twelve_cells_with_current_month_flagged() {
        let grid = build_year_grid(&YearGridArgs::new(2026, date(2026, 9, 18)));
        assert_eq!(grid.len(), 12);
        let current: Vec<u8> = grid
            .iter()
            .filter(|c| c.is_current_period)
            .map(|c| c.month.month())
            .collect();
        assert_eq!(current, [9]);
        assert_eq!(grid[0].label, "01");
        assert_eq!(grid[0].name, "Jan");

        let other_year = build_year_grid(&YearGridArgs::new(2025, date(2026, 9, 18)));
        assert!(other_year.iter().all(|c| !c.is_current_period));
    }

    #[test]
    fn months_outside_bounds_are_disabled() {
        let constraints = resolve_constraints(
            Some(date(2026, 2, 15).into()),
            Some(date(2026, 7, 1).into()),
        );
        let grid = build_year_grid(
            &YearGridArgs::new(2026, date(2026, 0, 1)).constraints(constraints),
        );
        let disabled: Vec<u8> = grid
            .iter()
            .filter(|c| c.disabled)
            .map(|c| c.month.month())
            .collect();
        assert_eq!(disabled, [0, 1, 8, 9, 10, 11]);
    }

    #[test]
    fn months_with_no_selectable_day_are_disabled() {
        struct NoFebruary;
        impl SelectableDates for NoFebruary {
            fn is_selectable_date(&self, date: CalendarDate) -> bool {
                date.month() != 1 && date != CalendarDate::new(2026, 3, 1).unwrap()
            }
        }
        let grid = build_year_grid(
            &YearGridArgs::new(2026, date(2026, 0, 1)).selectable_dates(Arc::new(NoFebruary)),
        );
        let disabled: Vec<u8> = grid
            .iter()
            .filter(|c| c.disabled)
            .map(|c| c.month.month())
            .collect();
        assert_eq!(disabled, [1]);
    }

    #[test]
    fn range_endpoints_mark_their_months() {
        let selection = SelectionState::Range(crate::selection::RangeSelection::from_endpoints(
            Some(date(2026, 1, 3)),
            Some(date(2026, 4, 9)),
        ));
        let grid = build_year_grid(&YearGridArgs::new(2026, date(2026, 0, 1)).selection(selection));
        let selected: Vec<u8> = grid
            .iter()
            .filter(|c| c.is_selected)
            .map(|c| c.month.month())
            .collect();
        assert_eq!(selected, [1, 4]);
    }
}
