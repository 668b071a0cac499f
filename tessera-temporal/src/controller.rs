//! Stateful picker controllers that own selection and focus.
//!
//! The engine's functions return new values instead of mutating. A controller
//! is the single owner a host keeps between frames: it applies clicks and key
//! presses through those functions, stores the results, and rebuilds grids on
//! demand.
//!
//! Hosts driving a controller from several event handlers wrap it in a
//! [`SharedController`] so that mutations are serialized.
//!
//! # Example
//!
//! ```
//! use tessera_temporal::{
//!     controller::{DatePickerController, PickerKey},
//!     date::CalendarDate,
//!     navigation::{Direction, NavCommand},
//!     selection::SelectionState,
//! };
//!
//! let today = CalendarDate::new(2026, 9, 18).unwrap();
//! let mut picker = DatePickerController::new(SelectionState::single(), today);
//!
//! picker.handle_key(PickerKey::Navigate(NavCommand::Step(Direction::Forward)));
//! assert!(picker.handle_key(PickerKey::Enter));
//! assert_eq!(picker.selection().anchor(), Some(today.add_days(1)));
//! ```
use std::{ops::RangeInclusive, sync::Arc};

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    constraint::{
        AllDates, Bound, ConstraintSet, SelectableDates, is_date_disabled, resolve_constraints,
    },
    convert::{DayPeriod, period_of, to_12h, to_24h},
    date::{CalendarDate, Weekday, YearMonth},
    enumerate::{UnitCell, enumerate},
    error::TemporalError,
    granularity::Granularity,
    grid::{
        HourCycle, MonthCell, MonthGrid, MonthGridArgs, TimeFormat, TimeGrid, TimeGridArgs,
        TimeSteps, YearGridArgs, build_month_grid, build_time_grid, build_year_grid,
    },
    input::FieldInput,
    instant::Instant,
    labels::{CalendarLabels, EnglishLabels},
    navigation::{Direction, FocusCursor, FocusGrid, NavCommand, UnitGrid, move_day_focus},
    selection::{SelectionState, select_if},
    time::{TimeOfDay, WireTime},
};

/// A controller shared between event handlers.
pub type SharedController<T> = Arc<Mutex<T>>;

/// Wraps `controller` for shared, serialized access.
pub fn share<T>(controller: T) -> SharedController<T> {
    Arc::new(Mutex::new(controller))
}

/// Default values used by the pickers.
pub struct PickerDefaults;

impl PickerDefaults {
    /// Default selectable year range.
    pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2100;

    /// Default first column of a month grid.
    pub const FIRST_DAY_OF_WEEK: Weekday = Weekday::Monday;

    /// Returns a selectable-dates policy that allows every date.
    pub fn all_dates() -> Arc<dyn SelectableDates> {
        Arc::new(AllDates)
    }
}

/// Keys a date picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    /// Commit the focused date.
    Enter,
    /// Commit the focused date.
    Space,
    /// Move focus without committing.
    Navigate(NavCommand),
}

/// Owns the selection, focus and display state of a date picker.
#[derive(Clone)]
pub struct DatePickerController {
    selection: SelectionState<CalendarDate>,
    displayed_month: YearMonth,
    focus: CalendarDate,
    hovered: Option<CalendarDate>,
    year_range: RangeInclusive<i32>,
    first_day_of_week: Weekday,
    constraints: ConstraintSet,
    selectable_dates: Arc<dyn SelectableDates>,
}

impl DatePickerController {
    /// Creates a controller showing the selection's anchor, or `today` when
    /// nothing is selected.
    pub fn new(selection: SelectionState<CalendarDate>, today: CalendarDate) -> Self {
        let year_range = PickerDefaults::YEAR_RANGE;
        let focus = selection.anchor().unwrap_or(today);
        let displayed_month = clamp_month_to_range(focus.year_month(), &year_range);
        Self {
            selection,
            displayed_month,
            focus: focus_in_month(focus, displayed_month),
            hovered: None,
            year_range,
            first_day_of_week: PickerDefaults::FIRST_DAY_OF_WEEK,
            constraints: ConstraintSet::unbounded(),
            selectable_dates: PickerDefaults::all_dates(),
        }
    }

    /// Returns the current selection.
    pub fn selection(&self) -> SelectionState<CalendarDate> {
        self.selection
    }

    /// Returns the month currently displayed.
    pub fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    /// Returns the keyboard focus.
    pub fn focus(&self) -> CalendarDate {
        self.focus
    }

    /// Returns the hovered date, if any.
    pub fn hovered(&self) -> Option<CalendarDate> {
        self.hovered
    }

    /// Returns the allowed year range.
    pub fn year_range(&self) -> &RangeInclusive<i32> {
        &self.year_range
    }

    /// Returns the weekday of the first grid column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Returns the effective bounds.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Returns the selectable-dates policy.
    pub fn selectable_dates(&self) -> &Arc<dyn SelectableDates> {
        &self.selectable_dates
    }

    /// Returns true when `date` may be selected.
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        self.year_range.contains(&date.year())
            && !is_date_disabled(date, &self.constraints, self.selectable_dates.as_ref())
    }

    /// Applies a click on `date`. Returns true when the selection changed.
    pub fn select(&mut self, date: CalendarDate) -> bool {
        let next = select_if(self.selection, date, |date| self.is_selectable(*date));
        if next == self.selection {
            return false;
        }
        self.selection = next;
        self.focus = date;
        self.hovered = None;
        self.displayed_month = clamp_month_to_range(date.year_month(), &self.year_range);
        true
    }

    /// Clears the selection, keeping its mode.
    pub fn clear_selection(&mut self) {
        self.selection = self.selection.cleared();
    }

    /// Replaces the selection mode and value.
    pub fn set_selection(&mut self, selection: SelectionState<CalendarDate>) {
        self.selection = selection;
        self.retain_selectable();
        if let Some(anchor) = self.selection.anchor() {
            self.set_displayed_month(anchor.year_month());
        }
    }

    /// Updates the date under the pointer.
    pub fn set_hovered(&mut self, hovered: Option<CalendarDate>) {
        self.hovered = hovered;
    }

    /// Moves keyboard focus. The displayed month follows the focus.
    pub fn move_focus(&mut self, command: NavCommand) {
        let focus = move_day_focus(self.focus, command, |date| !self.is_selectable(date));
        self.focus = focus;
        self.displayed_month = clamp_month_to_range(focus.year_month(), &self.year_range);
    }

    /// Commits the focused date into the selection.
    pub fn activate(&mut self) -> bool {
        self.select(self.focus)
    }

    /// Handles a key press. Returns true when the selection changed.
    pub fn handle_key(&mut self, key: PickerKey) -> bool {
        match key {
            PickerKey::Enter | PickerKey::Space => self.activate(),
            PickerKey::Navigate(command) => {
                self.move_focus(command);
                false
            }
        }
    }

    /// Shows `month`, clamped to the year range.
    pub fn set_displayed_month(&mut self, month: YearMonth) {
        self.displayed_month = clamp_month_to_range(month, &self.year_range);
        self.focus = focus_in_month(self.focus, self.displayed_month);
    }

    /// Shows the next month unless the year range ends.
    pub fn next_month(&mut self) {
        if can_navigate_next(self.displayed_month, &self.year_range) {
            self.set_displayed_month(self.displayed_month.add_months(1));
        }
    }

    /// Shows the previous month unless the year range ends.
    pub fn previous_month(&mut self) {
        if can_navigate_prev(self.displayed_month, &self.year_range) {
            self.set_displayed_month(self.displayed_month.add_months(-1));
        }
    }

    /// Updates the allowed year range. A reversed range is flipped.
    pub fn set_year_range(&mut self, year_range: RangeInclusive<i32>) {
        self.year_range = normalize_year_range(year_range);
        self.set_displayed_month(self.displayed_month);
        self.retain_selectable();
    }

    /// Updates the first grid column.
    pub fn set_first_day_of_week(&mut self, first_day_of_week: Weekday) {
        self.first_day_of_week = first_day_of_week;
    }

    /// Resolves and applies new bounds, dropping selected dates they exclude.
    ///
    /// Returns the resolved set so hosts can surface its diagnostics.
    pub fn set_constraints(&mut self, min: Option<Bound>, max: Option<Bound>) -> &ConstraintSet {
        self.constraints = resolve_constraints(min, max);
        self.retain_selectable();
        &self.constraints
    }

    /// Updates the selectable-dates policy, dropping selected dates it
    /// excludes.
    pub fn set_selectable_dates(&mut self, selectable_dates: Arc<dyn SelectableDates>) {
        self.selectable_dates = selectable_dates;
        self.retain_selectable();
    }

    /// Builds the grid of the displayed month.
    pub fn month_grid(&self, today: CalendarDate) -> MonthGrid {
        let mut args = MonthGridArgs::new(self.displayed_month, today)
            .first_day_of_week(self.first_day_of_week)
            .selection(self.selection)
            .constraints(self.constraints.clone())
            .selectable_dates(self.policy());
        args.hovered = self.hovered;
        build_month_grid(&args)
    }

    /// Builds the month cells of the displayed year with English names.
    pub fn year_grid(&self, today: CalendarDate) -> [MonthCell; 12] {
        self.year_grid_with_labels(today, Arc::new(EnglishLabels))
    }

    /// Builds the month cells of the displayed year.
    pub fn year_grid_with_labels(
        &self,
        today: CalendarDate,
        labels: Arc<dyn CalendarLabels>,
    ) -> [MonthCell; 12] {
        build_year_grid(
            &YearGridArgs::new(self.displayed_month.year(), today)
                .selection(self.selection)
                .constraints(self.constraints.clone())
                .selectable_dates(self.policy())
                .labels(labels),
        )
    }

    fn policy(&self) -> Arc<dyn SelectableDates> {
        Arc::new(WithinYears {
            years: self.year_range.clone(),
            inner: self.selectable_dates.clone(),
        })
    }

    fn retain_selectable(&mut self) {
        let endpoints = match self.selection {
            SelectionState::Single(date) => [date, None],
            SelectionState::Range(range) => [range.start(), range.end()],
        };
        if endpoints.iter().flatten().any(|date| !self.is_selectable(*date)) {
            debug!("Dropping a selection excluded by the new bounds");
            self.selection = self.selection.cleared();
        }
    }
}

impl Default for DatePickerController {
    fn default() -> Self {
        let start = YearMonth::new_unchecked(*PickerDefaults::YEAR_RANGE.start(), 0);
        Self::new(SelectionState::single(), start.first_day())
    }
}

/// Restricts another policy to a range of years.
struct WithinYears {
    years: RangeInclusive<i32>,
    inner: Arc<dyn SelectableDates>,
}

impl SelectableDates for WithinYears {
    fn is_selectable_date(&self, date: CalendarDate) -> bool {
        self.inner.is_selectable_date(date)
    }

    fn is_selectable_year(&self, year: i32) -> bool {
        self.years.contains(&year) && self.inner.is_selectable_year(year)
    }
}

fn normalize_year_range(range: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let start = *range.start();
    let end = *range.end();
    if start <= end { range } else { end..=start }
}

fn clamp_month_to_range(month: YearMonth, year_range: &RangeInclusive<i32>) -> YearMonth {
    let start = *year_range.start();
    let end = *year_range.end();
    if month.year() < start {
        YearMonth::new_unchecked(start, 0)
    } else if month.year() > end {
        YearMonth::new_unchecked(end, 11)
    } else {
        month
    }
}

fn can_navigate_prev(month: YearMonth, year_range: &RangeInclusive<i32>) -> bool {
    let start = *year_range.start();
    month.year() > start || (month.year() == start && month.month() > 0)
}

fn can_navigate_next(month: YearMonth, year_range: &RangeInclusive<i32>) -> bool {
    let end = *year_range.end();
    month.year() < end || (month.year() == end && month.month() < 11)
}

fn focus_in_month(focus: CalendarDate, month: YearMonth) -> CalendarDate {
    if focus.year_month() == month {
        focus
    } else {
        month.clamped_date(focus.day())
    }
}

/// Steps from `current` through the enabled cells of `column`.
///
/// A value off the step grid moves to the first enabled cell past it in
/// `direction`, wrapping once.
fn step_in_column(
    column: &[UnitCell],
    granularity: Granularity,
    current: u8,
    direction: Direction,
) -> Option<u8> {
    if column.iter().any(|cell| cell.value == current) {
        let cursor = FocusCursor::new(granularity, current);
        let next = UnitGrid::new(granularity, column)
            .move_focus(cursor, NavCommand::Step(direction))
            .value;
        let enabled = column.iter().any(|cell| cell.value == next && !cell.disabled);
        return enabled.then_some(next);
    }
    let enabled: Vec<u8> = column
        .iter()
        .filter(|cell| !cell.disabled)
        .map(|cell| cell.value)
        .collect();
    match direction {
        Direction::Forward => enabled.iter().find(|value| **value > current).or(enabled.first()),
        Direction::Backward => {
            enabled.iter().rev().find(|value| **value < current).or(enabled.last())
        }
    }
    .copied()
}

/// A column of a time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// Hours.
    Hour,
    /// Minutes.
    Minute,
    /// Seconds.
    Second,
}

impl TimeField {
    fn granularity(self) -> Granularity {
        match self {
            TimeField::Hour => Granularity::Hour24,
            TimeField::Minute => Granularity::Minute,
            TimeField::Second => Granularity::Second,
        }
    }
}

/// Owns the value and display settings of a time picker.
///
/// The time is kept on a 24-hour clock; the hour cycle only affects display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerController {
    date: CalendarDate,
    time: TimeOfDay,
    format: TimeFormat,
    steps: TimeSteps,
    constraints: ConstraintSet,
}

impl TimePickerController {
    /// Creates a controller starting at `initial`.
    ///
    /// The date part is only used to evaluate date-time bounds.
    pub fn new(initial: Instant) -> Self {
        Self {
            date: initial.date(),
            time: initial.time(),
            format: TimeFormat::default(),
            steps: TimeSteps::default(),
            constraints: ConstraintSet::unbounded(),
        }
    }

    /// Returns the selected time.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the date and time bounds are evaluated against.
    pub fn reference(&self) -> Instant {
        Instant::from_parts(self.date, self.time)
    }

    /// Returns the hour, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// Returns the minute.
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Returns the second.
    pub fn second(&self) -> u8 {
        self.time.second()
    }

    /// Returns the period of the selected hour.
    pub fn period(&self) -> DayPeriod {
        period_of(self.time.hour())
    }

    /// Returns the hour as shown for the current hour cycle.
    pub fn hour_for_display(&self) -> u8 {
        match self.format.hour_cycle {
            HourCycle::H24 => self.time.hour(),
            HourCycle::H12 => to_12h(self.time.hour()).map_or(12, |hour| hour.hour),
        }
    }

    /// Returns the display format.
    pub fn format(&self) -> TimeFormat {
        self.format
    }

    /// Returns the column steps.
    pub fn steps(&self) -> TimeSteps {
        self.steps
    }

    /// Returns the effective bounds.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Returns true when the selected time falls outside the bounds.
    pub fn is_disabled(&self) -> bool {
        self.constraints.is_disabled(&self.reference())
    }

    /// Returns the selected time in its wire form.
    pub fn wire_value(&self) -> WireTime {
        WireTime::new(self.time, self.format.precision)
    }

    /// Sets the hour from a 24-hour value.
    pub fn set_hour(&mut self, hour: u8) -> Result<(), TemporalError> {
        let hour = Granularity::Hour24.check(hour as i64, self.date.year_month())?;
        self.time = TimeOfDay::new(hour, self.time.minute(), self.time.second())?;
        Ok(())
    }

    /// Sets the hour from the value shown in the hour column.
    ///
    /// On a 12-hour clock the current period is kept.
    pub fn set_display_hour(&mut self, hour: u8) -> Result<(), TemporalError> {
        match self.format.hour_cycle {
            HourCycle::H24 => self.set_hour(hour),
            HourCycle::H12 => self.set_hour(to_24h(hour, self.period())?),
        }
    }

    /// Sets the minute.
    pub fn set_minute(&mut self, minute: u8) -> Result<(), TemporalError> {
        self.time = TimeOfDay::new(self.time.hour(), minute, self.time.second())?;
        Ok(())
    }

    /// Sets the second.
    pub fn set_second(&mut self, second: u8) -> Result<(), TemporalError> {
        self.time = TimeOfDay::new(self.time.hour(), self.time.minute(), second)?;
        Ok(())
    }

    /// Sets the whole time. Returns false, leaving the value unchanged, when
    /// `time` is outside the bounds.
    pub fn set_time(&mut self, time: TimeOfDay) -> bool {
        let candidate = Instant::from_parts(self.date, time);
        if self.constraints.is_disabled(&candidate) {
            debug!("Ignoring selection of disabled time {time:?}");
            return false;
        }
        self.time = time;
        true
    }

    /// Applies a parsed text field. Returns true when the time changed.
    pub fn apply_input(&mut self, input: &FieldInput<WireTime>) -> bool {
        match input.value() {
            Some(wire) => self.set_time(wire.time),
            None => false,
        }
    }

    /// Moves the selected hour into `period`, keeping the 12-hour value.
    ///
    /// Has no effect on a 24-hour clock.
    pub fn set_period(&mut self, period: DayPeriod) {
        if self.format.hour_cycle == HourCycle::H24 || self.period() == period {
            return;
        }
        let hour = (self.time.hour() + 12) % 24;
        self.time = TimeOfDay::new_unchecked(hour, self.time.minute(), self.time.second());
    }

    /// Moves `field` to the next enabled value of its column, wrapping once.
    ///
    /// Leaves the time unchanged when the column has no enabled value.
    pub fn increment(&mut self, field: TimeField) {
        self.shift(field, Direction::Forward);
    }

    /// Moves `field` to the previous enabled value of its column, wrapping once.
    ///
    /// Leaves the time unchanged when the column has no enabled value.
    pub fn decrement(&mut self, field: TimeField) {
        self.shift(field, Direction::Backward);
    }

    fn shift(&mut self, field: TimeField, direction: Direction) {
        let column = self.column(field);
        let granularity = field.granularity();
        let current = self.field_value(field);
        let Some(next) = step_in_column(&column, granularity, current, direction) else {
            debug!("No enabled {granularity} value to move to from {current}");
            return;
        };
        self.set_field(field, next);
        if field == TimeField::Hour {
            self.settle_into_bounds();
        }
    }

    /// Pulls minutes, then seconds, to the nearest enabled value after an
    /// hour change landed on a partly disabled hour.
    fn settle_into_bounds(&mut self) {
        for field in [TimeField::Minute, TimeField::Second] {
            if !self.is_disabled() {
                return;
            }
            let current = self.field_value(field);
            let nearest = self
                .column(field)
                .iter()
                .filter(|cell| !cell.disabled)
                .map(|cell| cell.value)
                .min_by_key(|value| value.abs_diff(current));
            if let Some(value) = nearest {
                self.set_field(field, value);
            }
        }
    }

    fn column(&self, field: TimeField) -> Vec<UnitCell> {
        let step = match field {
            TimeField::Hour => self.steps.hour,
            TimeField::Minute => self.steps.minute,
            TimeField::Second => self.steps.second,
        };
        enumerate(
            field.granularity(),
            step,
            self.reference(),
            &self.constraints,
        )
    }

    fn field_value(&self, field: TimeField) -> u8 {
        match field {
            TimeField::Hour => self.time.hour(),
            TimeField::Minute => self.time.minute(),
            TimeField::Second => self.time.second(),
        }
    }

    fn set_field(&mut self, field: TimeField, value: u8) {
        let (hour, minute, second) = (self.time.hour(), self.time.minute(), self.time.second());
        self.time = match field {
            TimeField::Hour => TimeOfDay::new_unchecked(value, minute, second),
            TimeField::Minute => TimeOfDay::new_unchecked(hour, value, second),
            TimeField::Second => TimeOfDay::new_unchecked(hour, minute, value),
        };
    }

    /// Updates the display format.
    pub fn set_format(&mut self, format: TimeFormat) {
        self.format = format;
    }

    /// Updates the column steps.
    pub fn set_steps(&mut self, steps: TimeSteps) {
        self.steps = steps;
    }

    /// Updates the date used for date-time bounds.
    pub fn set_date(&mut self, date: CalendarDate) {
        self.date = date;
    }

    /// Resolves and applies new bounds.
    pub fn set_constraints(&mut self, min: Option<Bound>, max: Option<Bound>) -> &ConstraintSet {
        self.constraints = resolve_constraints(min, max);
        &self.constraints
    }

    /// Builds the picker columns around the selected time.
    pub fn time_grid(&self) -> TimeGrid {
        build_time_grid(
            &TimeGridArgs::new(self.reference())
                .format(self.format)
                .steps(self.steps)
                .constraints(self.constraints.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        granularity::Step,
        selection::{RangePhase, RangeSelection},
        time::TimePrecision,
    };

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn time(text: &str) -> Option<Bound> {
        Some(Bound::Time(text.parse().unwrap()))
    }

    #[test]
    fn starts_on_the_selection_or_today() {
        let today = date(2026, 9, 18);
        let empty = DatePickerController::new(SelectionState::single(), today);
        assert_eq!(empty.displayed_month(), today.year_month());
        assert_eq!(empty.focus(), today);

        let selected = SelectionState::Single(Some(date(2024, 1, 29)));
        let picker = DatePickerController::new(selected, today);
        assert_eq!(picker.displayed_month(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(picker.focus(), date(2024, 1, 29));
    }

    #[test]
    fn arrows_move_focus_and_enter_commits() {
        let mut picker = DatePickerController::new(SelectionState::range(), date(2024, 4, 10));
        let right = PickerKey::Navigate(NavCommand::Step(Direction::Forward));
        assert!(!picker.handle_key(right));
        assert!(picker.selection().is_empty());
        assert!(picker.handle_key(PickerKey::Space));

        let down = PickerKey::Navigate(NavCommand::StepRow(Direction::Forward));
        picker.handle_key(down);
        assert!(picker.handle_key(PickerKey::Enter));
        let expected =
            RangeSelection::from_endpoints(Some(date(2024, 4, 11)), Some(date(2024, 4, 18)));
        assert_eq!(picker.selection(), SelectionState::Range(expected));
    }

    #[test]
    fn focus_crossing_a_month_edge_changes_the_displayed_month() {
        let mut picker = DatePickerController::new(SelectionState::single(), date(2024, 4, 28));
        picker.move_focus(NavCommand::StepRow(Direction::Forward));
        assert_eq!(picker.focus(), date(2024, 5, 4));
        assert_eq!(picker.displayed_month(), YearMonth::new(2024, 5).unwrap());
    }

    #[test]
    fn disabled_dates_cannot_be_selected() {
        let mut picker = DatePickerController::new(SelectionState::single(), date(2024, 4, 10));
        picker.set_constraints(Some(date(2024, 4, 5).into()), None);
        assert!(!picker.select(date(2024, 4, 1)));
        assert!(picker.selection().is_empty());
        assert!(picker.select(date(2024, 4, 6)));
    }

    #[test]
    fn new_bounds_drop_excluded_selections() {
        let selection = SelectionState::Single(Some(date(2024, 4, 1)));
        let mut picker = DatePickerController::new(selection, date(2024, 4, 10));
        picker.set_constraints(None, Some(date(2024, 5, 1).into()));
        assert!(!picker.selection().is_empty());
        picker.set_constraints(Some(date(2024, 4, 5).into()), None);
        assert!(picker.selection().is_empty());
    }

    #[test]
    fn inverted_bounds_surface_a_diagnostic() {
        let mut picker = DatePickerController::default();
        let resolved = picker.set_constraints(
            Some(date(2024, 11, 31).into()),
            Some(date(2024, 0, 1).into()),
        );
        assert_eq!(resolved.diagnostics().len(), 1);
        assert!(resolved.min().is_none() && resolved.max().is_none());
    }

    #[test]
    fn month_paging_stops_at_the_year_range() {
        let mut picker = DatePickerController::new(SelectionState::single(), date(2024, 0, 15));
        picker.set_year_range(2024..=2024);
        picker.previous_month();
        assert_eq!(picker.displayed_month(), YearMonth::new(2024, 0).unwrap());
        for _ in 0..20 {
            picker.next_month();
        }
        assert_eq!(picker.displayed_month(), YearMonth::new(2024, 11).unwrap());
        assert_eq!(picker.focus(), date(2024, 11, 15));
    }

    #[test]
    fn dates_outside_the_year_range_are_disabled() {
        let mut picker = DatePickerController::new(SelectionState::single(), date(2024, 11, 30));
        picker.set_year_range(2025..=2020);
        assert_eq!(picker.year_range(), &(2020..=2025));
        picker.set_year_range(2020..=2024);
        assert!(!picker.is_selectable(date(2025, 0, 1)));
        let grid = picker.month_grid(date(2024, 11, 30));
        let last = grid.cells().last().unwrap();
        assert_eq!(last.date.year(), 2025);
        assert!(last.disabled);
    }

    #[test]
    fn month_grid_reflects_controller_state() {
        let mut picker = DatePickerController::new(SelectionState::range(), date(2024, 4, 10));
        picker.set_first_day_of_week(Weekday::Sunday);
        picker.select(date(2024, 4, 3));
        picker.set_hovered(Some(date(2024, 4, 6)));
        let grid = picker.month_grid(date(2024, 4, 10));
        assert_eq!(grid.weekdays()[0], Weekday::Sunday);
        let previewed = grid.cells().iter().filter(|c| c.is_in_preview).count();
        assert_eq!(previewed, 4);
        assert!(grid.cells().iter().any(|c| c.is_today));

        let months = picker.year_grid(date(2024, 4, 10));
        assert!(months[4].is_selected);
    }

    #[test]
    fn shared_controllers_serialize_mutation() {
        let shared = share(DatePickerController::new(SelectionState::range(), date(2024, 4, 10)));
        let handles: Vec<_> = [3_u8, 9]
            .into_iter()
            .map(|day| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.lock().select(date(2024, 4, day)))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        let range = match shared.lock().selection() {
            SelectionState::Range(range) => range,
            SelectionState::Single(_) => panic!("expected a range"),
        };
        assert_eq!(range.phase(), RangePhase::Complete);
        assert_eq!(range.bounds(), Some((date(2024, 4, 3), date(2024, 4, 9))));
    }

    fn time_picker(hour: u8, minute: u8) -> TimePickerController {
        TimePickerController::new(Instant::new(2024, 4, 10, hour, minute, 0).unwrap())
    }

    #[test]
    fn twelve_hour_display_keeps_a_24_hour_value() {
        let mut picker = time_picker(0, 30);
        picker.set_format(TimeFormat::default().hour_cycle(HourCycle::H12));
        assert_eq!(picker.hour_for_display(), 12);
        assert_eq!(picker.period(), DayPeriod::Am);

        picker.set_period(DayPeriod::Pm);
        assert_eq!(picker.hour(), 12);
        picker.set_display_hour(3).unwrap();
        assert_eq!(picker.hour(), 15);
        assert!(picker.set_display_hour(0).is_err());
        assert_eq!(picker.wire_value().to_string(), "15:30");
    }

    #[test]
    fn period_switch_is_ignored_on_a_24_hour_clock() {
        let mut picker = time_picker(9, 0);
        picker.set_period(DayPeriod::Pm);
        assert_eq!(picker.hour(), 9);
        assert_eq!(picker.hour_for_display(), 9);
    }

    #[test]
    fn increments_wrap_through_the_step_column() {
        let mut picker = time_picker(23, 45);
        picker.set_steps(TimeSteps::default().minute(Step::try_from(15_i64).unwrap()));
        picker.increment(TimeField::Minute);
        assert_eq!((picker.hour(), picker.minute()), (23, 0));
        picker.increment(TimeField::Hour);
        assert_eq!(picker.hour(), 0);
        picker.decrement(TimeField::Hour);
        assert_eq!(picker.hour(), 23);
        picker.decrement(TimeField::Second);
        assert_eq!(picker.second(), 59);
    }

    #[test]
    fn off_grid_values_step_onto_the_column() {
        let mut picker = time_picker(10, 50);
        picker.set_steps(TimeSteps::default().minute(Step::try_from(15_i64).unwrap()));
        picker.increment(TimeField::Minute);
        assert_eq!((picker.hour(), picker.minute()), (10, 0));

        let mut picker = time_picker(10, 50);
        picker.set_steps(TimeSteps::default().minute(Step::try_from(15_i64).unwrap()));
        picker.decrement(TimeField::Minute);
        assert_eq!(picker.minute(), 45);

        let mut picker = time_picker(10, 20);
        picker.set_steps(TimeSteps::default().minute(Step::try_from(15_i64).unwrap()));
        picker.increment(TimeField::Minute);
        assert_eq!(picker.minute(), 30);
    }

    #[test]
    fn stepping_past_a_bound_wraps_to_the_first_enabled_hour() {
        let mut picker = time_picker(17, 0);
        picker.set_constraints(time("09:00"), time("17:00"));
        picker.increment(TimeField::Hour);
        assert_eq!(picker.time(), TimeOfDay::new(9, 0, 0).unwrap());
        assert!(!picker.is_disabled());
        picker.decrement(TimeField::Hour);
        assert_eq!(picker.time(), TimeOfDay::new(17, 0, 0).unwrap());
        picker.increment(TimeField::Minute);
        assert_eq!(picker.time(), TimeOfDay::new(17, 0, 0).unwrap());
    }

    #[test]
    fn hour_steps_pull_minutes_into_bounds() {
        let mut picker = time_picker(16, 45);
        picker.set_constraints(time("09:30"), time("17:00"));
        picker.increment(TimeField::Hour);
        assert_eq!(picker.time(), TimeOfDay::new(17, 0, 0).unwrap());

        let mut picker = time_picker(10, 15);
        picker.set_constraints(time("09:30"), time("17:00"));
        picker.decrement(TimeField::Hour);
        assert_eq!(picker.time(), TimeOfDay::new(9, 30, 0).unwrap());
        assert!(!picker.is_disabled());
    }

    #[test]
    fn fully_disabled_column_keeps_the_time() {
        let mut picker = time_picker(20, 10);
        picker.set_constraints(time("09:00"), time("17:00"));
        picker.increment(TimeField::Minute);
        assert_eq!(picker.time(), TimeOfDay::new(20, 10, 0).unwrap());
        picker.increment(TimeField::Hour);
        assert_eq!(picker.hour(), 9);
    }

    #[test]
    fn out_of_domain_values_are_errors() {
        let mut picker = time_picker(9, 0);
        assert!(matches!(
            picker.set_hour(24),
            Err(TemporalError::InvalidUnitValue { .. })
        ));
        assert!(picker.set_minute(60).is_err());
        assert!(picker.set_second(75).is_err());
        assert_eq!(picker.time(), TimeOfDay::new(9, 0, 0).unwrap());
    }

    #[test]
    fn typed_times_respect_bounds() {
        let mut picker = time_picker(12, 0);
        picker.set_constraints(time("09:00"), time("17:00"));
        let early = crate::input::parse_time_input("08:59");
        assert!(!picker.apply_input(&early));
        let ok = crate::input::parse_time_input("16:45");
        assert!(picker.apply_input(&ok));
        assert_eq!(picker.wire_value().to_string(), "16:45");
        assert!(!picker.apply_input(&crate::input::parse_time_input("")));
    }

    #[test]
    fn time_grid_follows_format_and_bounds() {
        let mut picker = time_picker(9, 0);
        picker.set_format(TimeFormat::default().precision(TimePrecision::Second));
        picker.set_constraints(time("09:30"), None);
        assert!(picker.is_disabled());
        let grid = picker.time_grid();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.minutes.iter().filter(|c| c.disabled).count(), 30);
        assert_eq!(picker.wire_value().to_string(), "09:00:00");
    }
}
