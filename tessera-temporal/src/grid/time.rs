//! Hour, minute, second and period columns of a time picker.
use derive_setters::Setters;

use crate::{
    constraint::ConstraintSet,
    convert::{DayPeriod, period_of},
    enumerate::{UnitCell, enumerate},
    granularity::{Granularity, Step},
    instant::Instant,
    time::{TimeOfDay, TimePrecision},
};

/// Whether hours are shown on a 12- or 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourCycle {
    /// `1..=12` with an AM/PM column.
    H12,
    /// `0..=23`.
    #[default]
    H24,
}

impl HourCycle {
    /// Returns the granularity of the hour column.
    pub fn granularity(self) -> Granularity {
        match self {
            HourCycle::H12 => Granularity::Hour12,
            HourCycle::H24 => Granularity::Hour24,
        }
    }
}

/// How a time picker presents its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Setters)]
pub struct TimeFormat {
    /// 12- or 24-hour display.
    pub hour_cycle: HourCycle,
    /// Whether a seconds column is shown.
    pub precision: TimePrecision,
}

/// Distance between enumerated values of each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Setters)]
pub struct TimeSteps {
    /// Hour step.
    pub hour: Step,
    /// Minute step.
    pub minute: Step,
    /// Second step.
    pub second: Step,
}

/// Configuration for [`build_time_grid`].
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct TimeGridArgs {
    /// The currently selected date and time.
    pub reference: Instant,
    /// Display format.
    pub format: TimeFormat,
    /// Column steps.
    pub steps: TimeSteps,
    /// Effective bounds.
    pub constraints: ConstraintSet,
}

impl TimeGridArgs {
    /// Creates arguments around `reference` with everything else at its
    /// default.
    pub fn new(reference: Instant) -> Self {
        Self {
            reference,
            format: TimeFormat::default(),
            steps: TimeSteps::default(),
            constraints: ConstraintSet::unbounded(),
        }
    }
}

/// One entry of the AM/PM column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCell {
    /// The period.
    pub period: DayPeriod,
    /// `"AM"` or `"PM"`.
    pub label: String,
    /// Whether every hour of this period is disabled.
    pub disabled: bool,
    /// Whether the reference time falls in this period.
    pub is_selected: bool,
}

/// The columns of a time picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    /// Granularity of the hour column.
    pub hour_granularity: Granularity,
    /// Hour column.
    pub hours: Vec<UnitCell>,
    /// Minute column, disabled relative to the reference hour.
    pub minutes: Vec<UnitCell>,
    /// Second column when seconds are shown.
    pub seconds: Option<Vec<UnitCell>>,
    /// AM/PM column on a 12-hour clock.
    pub period: Option<[PeriodCell; 2]>,
}

impl TimeGrid {
    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        2 + usize::from(self.seconds.is_some()) + usize::from(self.period.is_some())
    }
}

/// Builds the time columns around `args.reference`.
///
/// Minutes and seconds depend on the reference hour (and minute), so a host
/// rebuilds the grid whenever the selected hour changes.
pub fn build_time_grid(args: &TimeGridArgs) -> TimeGrid {
    let reference = args.reference;
    let constraints = &args.constraints;
    let hour_granularity = args.format.hour_cycle.granularity();

    let hours = enumerate(hour_granularity, args.steps.hour, reference, constraints);
    let minutes = enumerate(Granularity::Minute, args.steps.minute, reference, constraints);
    let seconds = match args.format.precision {
        TimePrecision::Second => Some(enumerate(
            Granularity::Second,
            args.steps.second,
            reference,
            constraints,
        )),
        TimePrecision::Minute => None,
    };
    let period = match args.format.hour_cycle {
        HourCycle::H12 => Some([DayPeriod::Am, DayPeriod::Pm].map(|period| {
            period_cell(period, reference, args.steps.hour, constraints)
        })),
        HourCycle::H24 => None,
    };

    TimeGrid {
        hour_granularity,
        hours,
        minutes,
        seconds,
        period,
    }
}

fn period_cell(
    period: DayPeriod,
    reference: Instant,
    hour_step: Step,
    constraints: &ConstraintSet,
) -> PeriodCell {
    let time = reference.time();
    let hour = time.hour() % 12
        + match period {
            DayPeriod::Am => 0,
            DayPeriod::Pm => 12,
        };
    let shifted =
        reference.with_time(TimeOfDay::new_unchecked(hour, time.minute(), time.second()));
    let disabled = enumerate(Granularity::Hour12, hour_step, shifted, constraints)
        .iter()
        .all(|cell| cell.disabled);
    PeriodCell {
        period,
        label: period.to_string(),
        disabled,
        is_selected: period_of(time.hour()) == period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Bound, resolve_constraints};

    fn at(hour: u8, minute: u8) -> Instant {
        Instant::new(2024, 2, 10, hour, minute, 0).unwrap()
    }

    fn bound(text: &str) -> Option<Bound> {
        Some(Bound::Time(text.parse().unwrap()))
    }

    #[test]
    fn default_format_has_two_columns() {
        let grid = build_time_grid(&TimeGridArgs::new(at(9, 0)));
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.hours.len(), 24);
        assert_eq!(grid.minutes.len(), 60);
        assert!(grid.seconds.is_none());
        assert!(grid.period.is_none());
    }

    #[test]
    fn twelve_hour_format_with_seconds_has_four_columns() {
        let format = TimeFormat::default()
            .hour_cycle(HourCycle::H12)
            .precision(TimePrecision::Second);
        let grid = build_time_grid(&TimeGridArgs::new(at(15, 0)).format(format));
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.hour_granularity, Granularity::Hour12);
        assert_eq!(grid.hours.first().map(|c| c.value), Some(1));
        let period = grid.period.unwrap();
        assert!(period[1].is_selected && !period[0].is_selected);
        assert_eq!(period[0].label, "AM");
    }

    #[test]
    fn minutes_are_recomputed_for_the_selected_hour() {
        let constraints = resolve_constraints(bound("09:30"), None);
        let at_nine = build_time_grid(&TimeGridArgs::new(at(9, 0)).constraints(constraints.clone()));
        assert_eq!(at_nine.minutes.iter().filter(|c| c.disabled).count(), 30);
        let at_ten = build_time_grid(&TimeGridArgs::new(at(10, 0)).constraints(constraints));
        assert!(at_ten.minutes.iter().all(|c| !c.disabled));
    }

    #[test]
    fn periods_are_disabled_when_all_their_hours_are() {
        let constraints = resolve_constraints(bound("13:00"), bound("18:00"));
        let format = TimeFormat::default().hour_cycle(HourCycle::H12);
        let grid = build_time_grid(
            &TimeGridArgs::new(at(14, 0))
                .format(format)
                .constraints(constraints),
        );
        let period = grid.period.unwrap();
        assert!(period[0].disabled);
        assert!(!period[1].disabled);
    }

    #[test]
    fn steps_thin_out_columns() {
        let steps = TimeSteps::default()
            .minute(Step::try_from(5_i64).unwrap())
            .hour(Step::try_from(2_i64).unwrap());
        let grid = build_time_grid(&TimeGridArgs::new(at(0, 0)).steps(steps));
        assert_eq!(grid.minutes.len(), 12);
        assert_eq!(grid.hours.len(), 12);
    }
}
