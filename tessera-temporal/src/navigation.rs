//! Keyboard focus movement over grids, skipping disabled units.
//!
//! Navigation only moves focus. Whether a move also commits a selection is up
//! to the host (pickers commit on Enter/Space, not on arrow keys).
use tracing::debug;

use crate::{
    date::CalendarDate,
    enumerate::UnitCell,
    granularity::Granularity,
    grid::{DATE_COLUMNS, DATE_ROWS, MonthCell, MonthGrid, TimeGrid},
};

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later values.
    Forward,
    /// Towards earlier values.
    Backward,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A focus movement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// One unit, wrapping once past the domain edge.
    Step(Direction),
    /// One grid row (a week on day grids).
    StepRow(Direction),
    /// One month on day grids.
    Page(Direction),
    /// First enabled unit.
    Home,
    /// Last enabled unit.
    End,
}

/// Focus position inside a unit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusCursor {
    /// The domain the cursor is in.
    pub granularity: Granularity,
    /// The focused unit value.
    pub value: u8,
}

impl FocusCursor {
    /// Creates a cursor.
    pub fn new(granularity: Granularity, value: u8) -> Self {
        Self { granularity, value }
    }
}

/// A grid keyboard focus can move over.
pub trait FocusGrid {
    /// What identifies the focused cell.
    type Cursor: Copy + PartialEq;

    /// Returns the cursor after applying `command`.
    ///
    /// Lands only on enabled cells. When no enabled cell exists in the
    /// requested direction the cursor is returned unchanged.
    fn move_focus(&self, cursor: Self::Cursor, command: NavCommand) -> Self::Cursor;
}

/// Applies `command` to `cursor` on `grid`.
pub fn move_focus<G: FocusGrid + ?Sized>(
    grid: &G,
    cursor: G::Cursor,
    command: NavCommand,
) -> G::Cursor {
    grid.move_focus(cursor, command)
}

/// A single column of unit cells, optionally laid out in rows.
#[derive(Debug, Clone, Copy)]
pub struct UnitGrid<'a> {
    granularity: Granularity,
    cells: &'a [UnitCell],
    line_length: Option<usize>,
}

impl<'a> UnitGrid<'a> {
    /// Wraps the output of [`crate::enumerate::enumerate`].
    pub fn new(granularity: Granularity, cells: &'a [UnitCell]) -> Self {
        Self {
            granularity,
            cells,
            line_length: None,
        }
    }

    /// Lays the cells out in rows of `line_length`, enabling
    /// [`NavCommand::StepRow`].
    pub fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = Some(line_length).filter(|len| *len > 0);
        self
    }
}

impl FocusGrid for UnitGrid<'_> {
    type Cursor = FocusCursor;

    fn move_focus(&self, cursor: FocusCursor, command: NavCommand) -> FocusCursor {
        if cursor.granularity != self.granularity {
            return cursor;
        }
        let values: Vec<u8> = self.cells.iter().map(|cell| cell.value).collect();
        let disabled: Vec<bool> = self.cells.iter().map(|cell| cell.disabled).collect();
        move_in_domain(&values, &disabled, cursor, command, self.line_length)
    }
}

impl FocusGrid for TimeGrid {
    type Cursor = FocusCursor;

    fn move_focus(&self, cursor: FocusCursor, command: NavCommand) -> FocusCursor {
        let column = match cursor.granularity {
            g if g == self.hour_granularity => &self.hours,
            Granularity::Minute => &self.minutes,
            Granularity::Second => match &self.seconds {
                Some(seconds) => seconds,
                None => return cursor,
            },
            _ => return cursor,
        };
        UnitGrid::new(cursor.granularity, column).move_focus(cursor, command)
    }
}

impl FocusGrid for [MonthCell] {
    type Cursor = FocusCursor;

    fn move_focus(&self, cursor: FocusCursor, command: NavCommand) -> FocusCursor {
        if cursor.granularity != Granularity::Month {
            return cursor;
        }
        let values: Vec<u8> = self.iter().map(|cell| cell.month.month()).collect();
        let disabled: Vec<bool> = self.iter().map(|cell| cell.disabled).collect();
        move_in_domain(&values, &disabled, cursor, command, None)
    }
}

fn move_in_domain(
    values: &[u8],
    disabled: &[bool],
    cursor: FocusCursor,
    command: NavCommand,
    line_length: Option<usize>,
) -> FocusCursor {
    let Some(position) = values.iter().position(|value| *value == cursor.value) else {
        debug!("Focus cursor {cursor:?} is not in its domain");
        return cursor;
    };
    let target = match command {
        NavCommand::Step(direction) => scan(disabled, position, 1, direction),
        NavCommand::StepRow(direction) => {
            line_length.and_then(|stride| scan(disabled, position, stride, direction))
        }
        NavCommand::Page(_) => None,
        NavCommand::Home => disabled.iter().position(|d| !d),
        NavCommand::End => disabled.iter().rposition(|d| !d),
    };
    match target {
        Some(index) => FocusCursor::new(cursor.granularity, values[index]),
        None => {
            debug!("No enabled unit for {command:?} from {cursor:?}");
            cursor
        }
    }
}

/// Walks `stride` cells at a time from `position`, wrapping around the domain,
/// and returns the first enabled index. Visits at most `disabled.len()` cells.
fn scan(disabled: &[bool], position: usize, stride: usize, direction: Direction) -> Option<usize> {
    let len = disabled.len() as i64;
    (1..=len)
        .map(|i| (position as i64 + direction.sign() * stride as i64 * i).rem_euclid(len) as usize)
        .find(|index| !disabled[*index])
}

impl FocusGrid for MonthGrid {
    type Cursor = CalendarDate;

    fn move_focus(&self, cursor: CalendarDate, command: NavCommand) -> CalendarDate {
        move_day_focus(cursor, command, |date| self.is_disabled(date))
    }
}

/// Day-grid movement over any disabled-date predicate.
///
/// Steps wrap within the cursor's month; rows and pages cross month edges.
pub(crate) fn move_day_focus(
    cursor: CalendarDate,
    command: NavCommand,
    is_disabled: impl Fn(CalendarDate) -> bool,
) -> CalendarDate {
    let target = match command {
        NavCommand::Step(direction) => {
            let month = cursor.year_month();
            let days = month.days() as i64;
            (1..=days)
                .map(|i| {
                    let day = (cursor.day() as i64 - 1 + direction.sign() * i).rem_euclid(days);
                    month.clamped_date(day as u8 + 1)
                })
                .find(|date| !is_disabled(*date))
        }
        NavCommand::StepRow(direction) => (1..=DATE_ROWS as i64)
            .map(|i| cursor.add_days(direction.sign() * DATE_COLUMNS as i64 * i))
            .find(|date| !is_disabled(*date)),
        NavCommand::Page(direction) => {
            let month = cursor.year_month().add_months(direction.sign() as i32);
            let landing = month.clamped_date(cursor.day()).day();
            let days: Vec<u8> = match direction {
                Direction::Forward => (landing..=month.days()).chain((1..landing).rev()).collect(),
                Direction::Backward => {
                    (1..=landing).rev().chain(landing + 1..=month.days()).collect()
                }
            };
            days.into_iter()
                .map(|day| month.clamped_date(day))
                .find(|date| !is_disabled(*date))
        }
        NavCommand::Home => {
            let month = cursor.year_month();
            (1..=month.days())
                .map(|day| month.clamped_date(day))
                .find(|date| !is_disabled(*date))
        }
        NavCommand::End => {
            let month = cursor.year_month();
            (1..=month.days())
                .rev()
                .map(|day| month.clamped_date(day))
                .find(|date| !is_disabled(*date))
        }
    };
    target.unwrap_or_else(|| {
        debug!("No enabled day for {command:?} from {cursor}");
        cursor
    })
}
