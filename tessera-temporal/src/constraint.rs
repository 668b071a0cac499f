//! Min/max bounds and the per-unit disablement derived from them.
use std::{cmp::Ordering, fmt};

use smallvec::SmallVec;
use tracing::warn;

use crate::{
    date::CalendarDate,
    error::TemporalError,
    instant::{Field, FieldKey, Instant, Temporal},
    time::{TimePrecision, WireTime},
};

/// A user-supplied minimum or maximum.
///
/// Bounds only constrain the fields they carry: a [`Bound::Time`] never
/// disables a day, and a [`Bound::Date`] never disables an hour on a later day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// A calendar day.
    Date(CalendarDate),
    /// A time of day, independent of the date.
    Time(WireTime),
    /// A full date and time.
    DateTime(Instant),
}

impl Bound {
    /// Returns the fields this bound carries.
    pub fn field_key(&self) -> FieldKey {
        match self {
            Bound::Date(date) => date.field_key(),
            Bound::Time(wire) => {
                let last = match wire.precision {
                    TimePrecision::Minute => Field::Minute,
                    TimePrecision::Second => Field::Second,
                };
                wire.time.field_key().truncate(last)
            }
            Bound::DateTime(instant) => instant.field_key(),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Date(date) => date.fmt(f),
            Bound::Time(wire) => wire.fmt(f),
            Bound::DateTime(instant) => instant.fmt(f),
        }
    }
}

impl From<CalendarDate> for Bound {
    fn from(date: CalendarDate) -> Self {
        Bound::Date(date)
    }
}

impl From<WireTime> for Bound {
    fn from(time: WireTime) -> Self {
        Bound::Time(time)
    }
}

impl From<Instant> for Bound {
    fn from(instant: Instant) -> Self {
        Bound::DateTime(instant)
    }
}

/// Effective bounds after resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    min: Option<Bound>,
    max: Option<Bound>,
    diagnostics: SmallVec<[TemporalError; 1]>,
}

impl ConstraintSet {
    /// A set without bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns the effective minimum.
    pub fn min(&self) -> Option<&Bound> {
        self.min.as_ref()
    }

    /// Returns the effective maximum.
    pub fn max(&self) -> Option<&Bound> {
        self.max.as_ref()
    }

    /// Returns the problems found while resolving the bounds.
    pub fn diagnostics(&self) -> &[TemporalError] {
        &self.diagnostics
    }

    /// Returns true when `value` falls strictly outside `[min, max]`.
    ///
    /// Only the fields carried by both `value` and the bound take part.
    pub fn is_disabled<T: Temporal>(&self, value: &T) -> bool {
        self.is_key_disabled(&value.field_key())
    }

    pub(crate) fn is_key_disabled(&self, key: &FieldKey) -> bool {
        let below = self
            .min
            .is_some_and(|min| key.compare_overlap(&min.field_key()) == Some(Ordering::Less));
        let above = self
            .max
            .is_some_and(|max| key.compare_overlap(&max.field_key()) == Some(Ordering::Greater));
        below || above
    }
}

/// Resolves user-supplied bounds into an effective [`ConstraintSet`].
///
/// An inverted pair (`min > max`) is not partially honored: both bounds are
/// dropped and an [`TemporalError::InvertedConstraints`] diagnostic is recorded.
/// A time-of-day bound paired with a date or date-time bound is never inverted:
/// the pair constrains different days, not one span.
pub fn resolve_constraints(min: Option<Bound>, max: Option<Bound>) -> ConstraintSet {
    if let (Some(lo), Some(hi)) = (min, max)
        && is_inverted(lo.field_key(), hi.field_key())
    {
        warn!("Ignoring inverted constraints: min {lo} is after max {hi}");
        let mut diagnostics = SmallVec::new();
        diagnostics.push(TemporalError::InvertedConstraints { min: lo, max: hi });
        return ConstraintSet {
            min: None,
            max: None,
            diagnostics,
        };
    }
    ConstraintSet {
        min,
        max,
        diagnostics: SmallVec::new(),
    }
}

fn is_inverted(min: FieldKey, max: FieldKey) -> bool {
    min.first() == max.first() && min.compare_overlap(&max) == Some(Ordering::Greater)
}

/// Controls which dates are selectable beyond the min/max bounds.
pub trait SelectableDates: Send + Sync {
    /// Returns true when the date can be selected.
    fn is_selectable_date(&self, _date: CalendarDate) -> bool {
        true
    }

    /// Returns true when the year can be selected.
    fn is_selectable_year(&self, _year: i32) -> bool {
        true
    }
}

/// A policy that allows every date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDates;

impl SelectableDates for AllDates {}

/// Returns true when `date` is blocked by either the bounds or the policy.
pub fn is_date_disabled(
    date: CalendarDate,
    constraints: &ConstraintSet,
    selectable_dates: &dyn SelectableDates,
) -> bool {
    constraints.is_disabled(&date)
        || !selectable_dates.is_selectable_year(date.year())
        || !selectable_dates.is_selectable_date(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeOfDay;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn time(text: &str) -> Bound {
        Bound::Time(text.parse().unwrap())
    }

    #[test]
    fn inverted_pair_drops_both_bounds_with_one_diagnostic() {
        let resolved = resolve_constraints(
            Some(date(2024, 11, 31).into()),
            Some(date(2024, 0, 1).into()),
        );
        assert_eq!(resolved.min(), None);
        assert_eq!(resolved.max(), None);
        assert_eq!(resolved.diagnostics().len(), 1);
        assert!(matches!(
            resolved.diagnostics()[0],
            TemporalError::InvertedConstraints { .. }
        ));
        assert!(!resolved.is_disabled(&date(1900, 0, 1)));
    }

    #[test]
    fn date_time_min_with_an_earlier_time_max_is_kept() {
        let min: Bound = Instant::new(2024, 2, 10, 18, 0, 0).unwrap().into();
        let max = time("09:00");
        let resolved = resolve_constraints(Some(min), Some(max));
        assert!(resolved.diagnostics().is_empty());
        assert_eq!(resolved.min(), Some(&min));
        assert_eq!(resolved.max(), Some(&max));
        assert!(resolved.is_disabled(&Instant::new(2024, 2, 10, 17, 0, 0).unwrap()));
        assert!(!resolved.is_disabled(&Instant::new(2024, 2, 11, 8, 0, 0).unwrap()));

        let date_min: Bound = date(2024, 2, 11).into();
        let date_time_max: Bound = Instant::new(2024, 2, 10, 23, 0, 0).unwrap().into();
        let inverted = resolve_constraints(Some(date_min), Some(date_time_max));
        assert_eq!(inverted.diagnostics().len(), 1);
    }

    #[test]
    fn ordered_pair_passes_through() {
        let min: Bound = date(2024, 0, 1).into();
        let max: Bound = date(2024, 11, 31).into();
        let resolved = resolve_constraints(Some(min), Some(max));
        assert_eq!(resolved.min(), Some(&min));
        assert_eq!(resolved.max(), Some(&max));
        assert!(resolved.diagnostics().is_empty());
    }

    #[test]
    fn equal_bounds_are_not_inverted() {
        let resolved = resolve_constraints(Some(time("09:30")), Some(time("09:30")));
        assert!(resolved.diagnostics().is_empty());
        assert!(resolved.min().is_some());
    }

    #[test]
    fn disablement_is_strictly_outside_the_bounds() {
        let resolved = resolve_constraints(
            Some(date(2024, 2, 10).into()),
            Some(date(2024, 2, 20).into()),
        );
        assert!(resolved.is_disabled(&date(2024, 2, 9)));
        assert!(!resolved.is_disabled(&date(2024, 2, 10)));
        assert!(!resolved.is_disabled(&date(2024, 2, 20)));
        assert!(resolved.is_disabled(&date(2024, 2, 21)));
    }

    #[test]
    fn date_bounds_propagate_to_instants_on_the_boundary_day() {
        let min = Instant::new(2024, 2, 10, 9, 30, 0).unwrap();
        let resolved = resolve_constraints(Some(min.into()), None);
        assert!(resolved.is_disabled(&Instant::new(2024, 2, 10, 9, 29, 59).unwrap()));
        assert!(!resolved.is_disabled(&Instant::new(2024, 2, 11, 0, 0, 0).unwrap()));
        assert!(!resolved.is_disabled(&date(2024, 2, 10)));
        assert!(resolved.is_disabled(&date(2024, 2, 9)));
    }

    #[test]
    fn time_bounds_do_not_affect_dates() {
        let resolved = resolve_constraints(Some(time("09:30")), Some(time("17:00")));
        assert!(!resolved.is_disabled(&date(2024, 2, 10)));
        assert!(!resolved.is_disabled(&TimeOfDay::new(17, 0, 1).unwrap()));
        assert!(resolved.is_disabled(&TimeOfDay::new(17, 1, 0).unwrap()));
        assert!(resolved.is_disabled(&TimeOfDay::new(9, 29, 0).unwrap()));
    }

    #[test]
    fn adding_a_bound_never_enables_a_value() {
        let loose = resolve_constraints(Some(date(2024, 2, 10).into()), None);
        let tight = resolve_constraints(
            Some(date(2024, 2, 10).into()),
            Some(date(2024, 2, 15).into()),
        );
        for day in 1..=31 {
            let d = date(2024, 2, day);
            if loose.is_disabled(&d) {
                assert!(tight.is_disabled(&d));
            }
        }
    }

    struct Weekdays;

    impl SelectableDates for Weekdays {
        fn is_selectable_date(&self, date: CalendarDate) -> bool {
            date.weekday().index_from_monday() < 5
        }
    }

    #[test]
    fn selectable_dates_policy_layers_on_bounds() {
        let constraints = ConstraintSet::unbounded();
        // 2024-03-09 is a Saturday.
        assert!(is_date_disabled(date(2024, 2, 9), &constraints, &Weekdays));
        assert!(!is_date_disabled(date(2024, 2, 11), &constraints, &Weekdays));
        assert!(!is_date_disabled(date(2024, 2, 9), &constraints, &AllDates));
    }
}
