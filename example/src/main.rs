//! Drives the date and time picker controllers from a scripted session and
//! prints the resulting grids as text.
//!
//! Pass a `YYYY-MM-DD` date to start the range from that day instead of today.
mod render;

use tessera_temporal::{
    clock::{Clock, SystemClock},
    controller::{DatePickerController, PickerKey, TimeField, TimePickerController, share},
    convert::DayPeriod,
    granularity::Step,
    grid::{HourCycle, TimeFormat, TimeSteps},
    input::{FieldInput, parse_date_input},
    labels::EnglishLabels,
    navigation::{Direction, NavCommand},
    selection::SelectionState,
    time::{TimePrecision, WireTime},
};
use tracing::{info, warn};

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tessera_temporal=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() {
    init_tracing();

    let clock = SystemClock;
    let now = clock.now();
    let today = now.date();

    let start = match std::env::args().nth(1).map(|text| parse_date_input(&text)) {
        Some(FieldInput::Valid(date)) => date,
        Some(FieldInput::Invalid(error)) => {
            warn!("{error}; starting from today");
            today
        }
        Some(FieldInput::Empty) | None => today,
    };

    let picker = share(DatePickerController::new(SelectionState::range(), start));
    {
        let mut picker = picker.lock();
        picker.set_constraints(Some(today.add_days(-30).into()), None);
        picker.handle_key(PickerKey::Enter);
        for command in [
            NavCommand::StepRow(Direction::Forward),
            NavCommand::Step(Direction::Forward),
            NavCommand::Step(Direction::Forward),
        ] {
            picker.handle_key(PickerKey::Navigate(command));
        }
        let focus = picker.focus();
        picker.set_hovered(Some(focus));
        info!("Range start {start}, hovering {focus}");
    }

    let labels = EnglishLabels;
    {
        let picker = picker.lock();
        println!("{}", render::month(&picker.month_grid(today), &labels));
    }

    let completed = picker.lock().handle_key(PickerKey::Space);
    info!("Range completed: {completed}");
    {
        let picker = picker.lock();
        println!("{}", render::month(&picker.month_grid(today), &labels));
        println!("{}", render::year(&picker.year_grid(today)));
    }

    let mut time = TimePickerController::new(now);
    time.set_format(
        TimeFormat::default()
            .hour_cycle(HourCycle::H12)
            .precision(TimePrecision::Minute),
    );
    if let Ok(step) = Step::try_from(5_u32) {
        time.set_steps(TimeSteps::default().minute(step));
    }
    let opening = "09:00".parse::<WireTime>().ok().map(Into::into);
    let closing = "17:30".parse::<WireTime>().ok().map(Into::into);
    time.set_constraints(opening, closing);
    time.set_period(DayPeriod::Pm);
    if time.is_disabled() {
        // Evenings step back to the last open hour.
        time.decrement(TimeField::Hour);
    }
    time.increment(TimeField::Minute);
    println!("{}", render::time(&time.time_grid()));
    println!("Selected {} ({})", time.wire_value(), time.period());
    if time.is_disabled() {
        warn!("{} is outside opening hours", time.wire_value());
    }
}
