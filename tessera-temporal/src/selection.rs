//! Single and range selection with the two-click range protocol.
use tracing::debug;

use crate::{constraint::ConstraintSet, instant::Temporal};

/// Progress of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    /// Nothing selected.
    Empty,
    /// A start is selected and the end is pending.
    PendingEnd,
    /// Both endpoints are selected.
    Complete,
}

/// A start/end pair whose endpoints are always ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSelection<T> {
    start: Option<T>,
    end: Option<T>,
}

impl<T: Copy + Ord> RangeSelection<T> {
    /// An empty range.
    pub fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Builds a range from possibly unordered or partial endpoints.
    ///
    /// Endpoints are swapped into order, and a lone `end` becomes the start of
    /// an in-progress selection.
    pub fn from_endpoints(start: Option<T>, end: Option<T>) -> Self {
        match (start, end) {
            (Some(a), Some(b)) => Self {
                start: Some(a.min(b)),
                end: Some(a.max(b)),
            },
            (Some(only), None) | (None, Some(only)) => Self {
                start: Some(only),
                end: None,
            },
            (None, None) => Self::empty(),
        }
    }

    /// Returns the start.
    pub fn start(&self) -> Option<T> {
        self.start
    }

    /// Returns the end.
    pub fn end(&self) -> Option<T> {
        self.end
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RangePhase {
        match (self.start, self.end) {
            (None, _) => RangePhase::Empty,
            (Some(_), None) => RangePhase::PendingEnd,
            (Some(_), Some(_)) => RangePhase::Complete,
        }
    }

    /// Returns the ordered bounds once the range is complete.
    pub fn bounds(&self) -> Option<(T, T)> {
        self.start.zip(self.end)
    }

    /// Returns true when `value` lies within a complete range, endpoints
    /// included.
    pub fn contains(&self, value: T) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= value && value <= end)
    }

    /// Returns the span a pending range would cover if completed at `hovered`.
    pub fn preview(&self, hovered: T) -> Option<(T, T)> {
        match (self.start, self.end) {
            (Some(start), None) => Some((start.min(hovered), start.max(hovered))),
            _ => None,
        }
    }

    fn advance(self, value: T) -> Self {
        match (self.start, self.end) {
            (Some(start), None) if value < start => Self {
                start: Some(value),
                end: Some(start),
            },
            (Some(start), None) => Self {
                start: Some(start),
                end: Some(value),
            },
            _ => Self {
                start: Some(value),
                end: None,
            },
        }
    }
}

impl<T: Copy + Ord> Default for RangeSelection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// What a picker currently has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState<T> {
    /// At most one value.
    Single(Option<T>),
    /// A start/end pair.
    Range(RangeSelection<T>),
}

impl<T: Copy + Ord> SelectionState<T> {
    /// An empty single selection.
    pub fn single() -> Self {
        SelectionState::Single(None)
    }

    /// An empty range selection.
    pub fn range() -> Self {
        SelectionState::Range(RangeSelection::empty())
    }

    /// Returns true when `value` is the single value or a range endpoint.
    pub fn is_selected(&self, value: T) -> bool {
        match self {
            SelectionState::Single(selected) => *selected == Some(value),
            SelectionState::Range(range) => {
                range.start() == Some(value) || range.end() == Some(value)
            }
        }
    }

    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionState::Single(selected) => selected.is_none(),
            SelectionState::Range(range) => range.phase() == RangePhase::Empty,
        }
    }

    /// Returns the same mode with nothing selected.
    pub fn cleared(&self) -> Self {
        match self {
            SelectionState::Single(_) => SelectionState::Single(None),
            SelectionState::Range(_) => SelectionState::Range(RangeSelection::empty()),
        }
    }

    /// Returns the value the picker should bring into view.
    pub fn anchor(&self) -> Option<T> {
        match self {
            SelectionState::Single(selected) => *selected,
            SelectionState::Range(range) => range.start(),
        }
    }
}

/// Applies a click on `value` to `state`.
///
/// Disabled values leave the state unchanged.
pub fn select<T: Temporal>(
    state: SelectionState<T>,
    value: T,
    constraints: &ConstraintSet,
) -> SelectionState<T> {
    select_if(state, value, |candidate| !constraints.is_disabled(candidate))
}

/// Applies a click on `value` to `state`, consulting `is_enabled` first.
pub fn select_if<T: Copy + Ord>(
    state: SelectionState<T>,
    value: T,
    is_enabled: impl FnOnce(&T) -> bool,
) -> SelectionState<T> {
    if !is_enabled(&value) {
        debug!("Ignoring selection of a disabled value");
        return state;
    }
    match state {
        SelectionState::Single(_) => SelectionState::Single(Some(value)),
        SelectionState::Range(range) => SelectionState::Range(range.advance(value)),
    }
}
