//! Enumeration of the selectable values of one granularity.
use crate::{
    constraint::ConstraintSet,
    convert::{period_of, to_24h},
    date::YearMonth,
    granularity::{Granularity, Step},
    instant::{FieldKey, Instant, Temporal},
    time::TimeOfDay,
};

/// One selectable unit value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitCell {
    /// The unit value within its granularity's domain.
    pub value: u8,
    /// Zero-padded text form of `value`.
    pub label: String,
    /// Whether the value falls outside the effective bounds.
    pub disabled: bool,
}

/// Lists the values of `granularity` from the start of its domain, `step` apart.
///
/// Each value is substituted into `reference` at this granularity and checked
/// against `constraints`. Coarser units keep the reference's values, so a
/// `09:30` minimum only disables minutes while the reference hour is 9.
///
/// # Examples
///
/// ```
/// use tessera_temporal::{
///     constraint::{Bound, resolve_constraints},
///     enumerate::enumerate,
///     granularity::{Granularity, Step},
///     instant::Instant,
/// };
///
/// let min = Bound::Time("09:30".parse().unwrap());
/// let constraints = resolve_constraints(Some(min), None);
/// let at_nine = Instant::new(2024, 2, 10, 9, 0, 0).unwrap();
///
/// let minutes = enumerate(Granularity::Minute, Step::ONE, at_nine, &constraints);
/// assert!(minutes[29].disabled);
/// assert!(!minutes[30].disabled);
/// ```
pub fn enumerate(
    granularity: Granularity,
    step: Step,
    reference: Instant,
    constraints: &ConstraintSet,
) -> Vec<UnitCell> {
    let domain = granularity.domain(reference.date().year_month());
    let (start, end) = (*domain.start() as u32, *domain.end() as u32);
    (start..=end)
        .step_by(step.get() as usize)
        .map(|value| {
            let value = value as u8;
            let key = candidate_key(granularity, value, reference);
            UnitCell {
                value,
                label: granularity.label(value),
                disabled: constraints.is_key_disabled(&key),
            }
        })
        .collect()
}

/// Builds the comparison key for `value` substituted into `reference`.
fn candidate_key(granularity: Granularity, value: u8, reference: Instant) -> FieldKey {
    let date = reference.date();
    let time = reference.time();
    let instant = match granularity {
        Granularity::Day => Instant::from_parts(
            date.year_month().clamped_date(value),
            TimeOfDay::MIDNIGHT,
        ),
        Granularity::Month => {
            return YearMonth::new_unchecked(date.year(), value).field_key();
        }
        Granularity::Hour24 => reference.with_time(TimeOfDay::new_unchecked(value, 0, 0)),
        Granularity::Hour12 => {
            let hour = to_24h(value, period_of(time.hour())).unwrap_or(value);
            reference.with_time(TimeOfDay::new_unchecked(hour, 0, 0))
        }
        Granularity::Minute => {
            reference.with_time(TimeOfDay::new_unchecked(time.hour(), value, 0))
        }
        Granularity::Second => reference.with_time(TimeOfDay::new_unchecked(
            time.hour(),
            time.minute(),
            value,
        )),
    };
    instant.field_key().truncate(granularity.field())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constraint::{Bound, resolve_constraints},
        date::CalendarDate,
    };

    fn at(hour: u8, minute: u8) -> Instant {
        Instant::new(2024, 2, 10, hour, minute, 0).unwrap()
    }

    fn min_time(text: &str) -> ConstraintSet {
        resolve_constraints(Some(Bound::Time(text.parse().unwrap())), None)
    }

    fn disabled_values(cells: &[UnitCell]) -> Vec<u8> {
        cells.iter().filter(|c| c.disabled).map(|c| c.value).collect()
    }

    #[test]
    fn domains_follow_granularity() {
        let none = ConstraintSet::unbounded();
        let values = |g| -> Vec<u8> {
            enumerate(g, Step::ONE, at(0, 0), &none)
                .into_iter()
                .map(|c| c.value)
                .collect()
        };
        assert_eq!(values(Granularity::Hour12), (1..=12).collect::<Vec<_>>());
        assert_eq!(values(Granularity::Hour24), (0..=23).collect::<Vec<_>>());
        assert_eq!(values(Granularity::Month), (0..=11).collect::<Vec<_>>());
        assert_eq!(values(Granularity::Day).len(), 31);
        assert_eq!(values(Granularity::Second).len(), 60);
    }

    #[test]
    fn steps_skip_values_from_domain_start() {
        let step = Step::try_from(15_i64).unwrap();
        let cells = enumerate(Granularity::Minute, step, at(0, 0), &ConstraintSet::unbounded());
        let labels: Vec<&str> = cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["00", "15", "30", "45"]);

        let step = Step::try_from(5_i64).unwrap();
        let hours = enumerate(Granularity::Hour12, step, at(0, 0), &ConstraintSet::unbounded());
        assert_eq!(hours.iter().map(|c| c.value).collect::<Vec<_>>(), [1, 6, 11]);
    }

    #[test]
    fn minute_disablement_depends_on_the_reference_hour() {
        let constraints = min_time("09:30");
        let at_nine = enumerate(Granularity::Minute, Step::ONE, at(9, 0), &constraints);
        assert_eq!(disabled_values(&at_nine), (0..30).collect::<Vec<_>>());
        let at_ten = enumerate(Granularity::Minute, Step::ONE, at(10, 0), &constraints);
        assert!(disabled_values(&at_ten).is_empty());
    }

    #[test]
    fn hour_disablement_keeps_the_boundary_hour() {
        let constraints = min_time("09:30");
        let hours = enumerate(Granularity::Hour24, Step::ONE, at(12, 0), &constraints);
        assert_eq!(disabled_values(&hours), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn twelve_hour_values_use_the_reference_period() {
        let constraints = resolve_constraints(None, Some(Bound::Time("13:00".parse().unwrap())));
        let morning = enumerate(Granularity::Hour12, Step::ONE, at(8, 0), &constraints);
        assert!(disabled_values(&morning).is_empty());
        let afternoon = enumerate(Granularity::Hour12, Step::ONE, at(13, 0), &constraints);
        // 2 PM through 11 PM are after the maximum; 12 PM and 1 PM are not.
        assert_eq!(disabled_values(&afternoon), (2..=11).collect::<Vec<_>>());
    }

    #[test]
    fn seconds_depend_on_hour_and_minute() {
        let constraints = min_time("09:30:20");
        let cells = enumerate(Granularity::Second, Step::ONE, at(9, 30), &constraints);
        assert_eq!(disabled_values(&cells), (0..20).collect::<Vec<_>>());
        let later = enumerate(Granularity::Second, Step::ONE, at(9, 31), &constraints);
        assert!(disabled_values(&later).is_empty());
    }

    #[test]
    fn coarse_date_bounds_reach_time_units_only_on_the_boundary_day() {
        let min = Instant::new(2024, 2, 10, 9, 30, 0).unwrap();
        let constraints = resolve_constraints(Some(min.into()), None);
        let on_day = enumerate(Granularity::Hour24, Step::ONE, at(12, 0), &constraints);
        assert_eq!(disabled_values(&on_day).len(), 9);
        let next_day = Instant::new(2024, 2, 11, 0, 0, 0).unwrap();
        let after = enumerate(Granularity::Hour24, Step::ONE, next_day, &constraints);
        assert!(disabled_values(&after).is_empty());
    }

    #[test]
    fn day_and_month_values_respect_date_bounds() {
        let min = CalendarDate::new(2024, 2, 10).unwrap();
        let max = CalendarDate::new(2024, 4, 5).unwrap();
        let constraints = resolve_constraints(Some(min.into()), Some(max.into()));
        let days = enumerate(Granularity::Day, Step::ONE, at(0, 0), &constraints);
        assert_eq!(disabled_values(&days), (1..10).collect::<Vec<_>>());
        let months = enumerate(Granularity::Month, Step::ONE, at(0, 0), &constraints);
        assert_eq!(disabled_values(&months), [0, 1, 5, 6, 7, 8, 9, 10, 11]);
    }
}
