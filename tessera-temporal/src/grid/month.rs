//! The 6x7 day grid of a month view.
use std::{fmt, sync::Arc};

use derive_setters::Setters;
use smallvec::SmallVec;

use crate::{
    constraint::{AllDates, ConstraintSet, SelectableDates, is_date_disabled},
    convert::{MonthRelation, month_relation},
    date::{CalendarDate, Weekday, YearMonth, weekday_sequence},
    granularity::Granularity,
    grid::{DATE_CELLS, DATE_COLUMNS},
    selection::SelectionState,
};

/// Configuration for [`build_month_grid`].
#[derive(Clone, Setters)]
pub struct MonthGridArgs {
    /// The displayed month.
    pub month: YearMonth,
    /// Weekday of the first grid column.
    pub first_day_of_week: Weekday,
    /// The host's current date.
    pub today: CalendarDate,
    /// Current selection.
    pub selection: SelectionState<CalendarDate>,
    /// Date under the pointer while a range is pending.
    #[setters(strip_option)]
    pub hovered: Option<CalendarDate>,
    /// Dates carrying host events; cells report the indices that match.
    pub events: Vec<CalendarDate>,
    /// Effective bounds.
    pub constraints: ConstraintSet,
    /// Extra per-date policy.
    pub selectable_dates: Arc<dyn SelectableDates>,
}

impl MonthGridArgs {
    /// Creates arguments for `month` with everything else at its default.
    pub fn new(month: YearMonth, today: CalendarDate) -> Self {
        Self {
            month,
            first_day_of_week: Weekday::Monday,
            today,
            selection: SelectionState::single(),
            hovered: None,
            events: Vec::new(),
            constraints: ConstraintSet::unbounded(),
            selectable_dates: Arc::new(AllDates),
        }
    }
}

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// The date shown in this cell.
    pub date: CalendarDate,
    /// Zero-padded day label.
    pub label: String,
    /// Whether the date may not be selected.
    pub disabled: bool,
    /// False for leading and trailing days of adjacent months.
    pub is_current_period: bool,
    /// Whether the date is the host's today.
    pub is_today: bool,
    /// Whether the date is the single selection or a range endpoint.
    pub is_selected: bool,
    /// Whether the date starts the range.
    pub is_range_start: bool,
    /// Whether the date ends the range.
    pub is_range_end: bool,
    /// Whether the date is inside a complete range, endpoints included.
    pub is_in_range: bool,
    /// Whether the date is inside the hover preview of a pending range.
    pub is_in_preview: bool,
    /// Indices into [`MonthGridArgs::events`] for this date.
    pub events: SmallVec<[usize; 2]>,
}

/// A month view: always [`DATE_CELLS`] cells in row-major order.
#[derive(Clone)]
pub struct MonthGrid {
    month: YearMonth,
    first_day_of_week: Weekday,
    cells: Vec<GridCell>,
    constraints: ConstraintSet,
    selectable_dates: Arc<dyn SelectableDates>,
}

impl MonthGrid {
    /// Returns the displayed month.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns the weekday of the first column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Returns the weekdays of the seven columns.
    pub fn weekdays(&self) -> [Weekday; DATE_COLUMNS] {
        weekday_sequence(self.first_day_of_week)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Iterates the grid one week at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DATE_COLUMNS)
    }

    /// Returns the date shown at `index`.
    pub fn date_at(&self, index: usize) -> Option<CalendarDate> {
        self.cells.get(index).map(|cell| cell.date)
    }

    /// Returns the position of `date`, if the grid shows it.
    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        let first = self.cells.first()?.date;
        let offset = date.days_since_epoch() - first.days_since_epoch();
        usize::try_from(offset).ok().filter(|index| *index < DATE_CELLS)
    }

    /// Returns where `date` sits relative to the displayed month.
    pub fn relation(&self, date: CalendarDate) -> MonthRelation {
        month_relation(date, self.month)
    }

    /// Returns the constraints the grid was built with.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Returns true when `date` may not be selected, whether or not it is
    /// shown.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        is_date_disabled(date, &self.constraints, self.selectable_dates.as_ref())
    }
}

impl PartialEq for MonthGrid {
    fn eq(&self, other: &Self) -> bool {
        self.month == other.month
            && self.first_day_of_week == other.first_day_of_week
            && self.cells == other.cells
            && self.constraints == other.constraints
    }
}

impl fmt::Debug for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthGrid")
            .field("month", &self.month)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("cells", &self.cells)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

/// Returns the date shown in the top-left cell of `month`'s grid.
pub fn first_grid_day(month: YearMonth, first_day_of_week: Weekday) -> CalendarDate {
    let first = month.first_day();
    let offset = (first.weekday().index_from_monday() - first_day_of_week.index_from_monday())
        .rem_euclid(7);
    first.add_days(-(offset as i64))
}

/// Builds the 42-cell grid for `args.month`.
pub fn build_month_grid(args: &MonthGridArgs) -> MonthGrid {
    let start = first_grid_day(args.month, args.first_day_of_week);
    let range = match &args.selection {
        SelectionState::Range(range) => Some(*range),
        SelectionState::Single(_) => None,
    };
    let preview = range
        .zip(args.hovered)
        .and_then(|(range, hovered)| range.preview(hovered));

    let cells = (0..DATE_CELLS)
        .map(|index| {
            let date = start.add_days(index as i64);
            GridCell {
                date,
                label: Granularity::Day.label(date.day()),
                disabled: is_date_disabled(
                    date,
                    &args.constraints,
                    args.selectable_dates.as_ref(),
                ),
                is_current_period: date.year_month() == args.month,
                is_today: date == args.today,
                is_selected: args.selection.is_selected(date),
                is_range_start: range.is_some_and(|r| r.start() == Some(date)),
                is_range_end: range.is_some_and(|r| r.end() == Some(date)),
                is_in_range: range.is_some_and(|r| r.contains(date)),
                is_in_preview: preview.is_some_and(|(lo, hi)| lo <= date && date <= hi),
                events: args
                    .events
                    .iter()
                    .enumerate()
                    .filter(|(_, event)| **event == date)
                    .map(|(idx, _)| idx)
                    .collect(),
            }
        })
        .collect();

    MonthGrid {
        month: args.month,
        first_day_of_week: args.first_day_of_week,
        cells,
        constraints: args.constraints.clone(),
        selectable_dates: args.selectable_dates.clone(),
    }
}
