//! The three scenario drivers.
//!
//! Each driver starts a [`DaySeries`] at day 0 with the starting infected
//! count, then applies [`daily_infection`] once per simulated day until its
//! stopping condition is met. Drivers perform no I/O; the saturation and
//! vaccine drivers additionally produce a one-line summary string that the
//! caller is free to print.

use crate::log::trace;
use crate::random::UniformSource;
use crate::series::DaySeries;
use crate::transmission::daily_infection;

/// The output of one scenario driver: the finished series plus, for the
/// saturation and vaccine scenarios, a one-line human-readable summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioRun {
    pub series: DaySeries,
    pub summary: Option<String>,
}

/// Models disease spread over a fixed number of days.
///
/// Produces `number_days + 1` records for days `0..=number_days`. There is
/// no population ceiling, so the count can exceed any nominal population.
pub fn infection_model<R: UniformSource>(
    rng: &mut R,
    number_days: u32,
    starting_infected: u64,
    infection_probability: f64,
    max_infections: u32,
) -> ScenarioRun {
    trace!("running fixed-duration model over {number_days} days");
    let mut series = DaySeries::with_starting(starting_infected);
    for _day in 1..=number_days {
        let day_infection = daily_infection(
            rng,
            series.last_infected(),
            infection_probability,
            max_infections,
        );
        series.push(day_infection);
    }
    ScenarioRun {
        series,
        summary: None,
    }
}

/// Models the length of time for a full population to become infected.
///
/// Each day the raw count from [`daily_infection`] is recorded, clamped to
/// `population` once it reaches the ceiling; the loop stops as soon as the
/// recorded count equals `population`. The condition is checked before the
/// first iteration, so a starting count at or above the population produces
/// a series with only the day-0 record.
///
/// The summary's estimate of days until full infection is one past the last
/// recorded day index (and so reads 1 when no day is simulated at all).
pub fn full_pop_infected<R: UniformSource>(
    rng: &mut R,
    population: u64,
    starting_infected: u64,
    infection_probability: f64,
    max_infections: u32,
) -> ScenarioRun {
    trace!("running saturation model with population {population}");
    let mut series = DaySeries::with_starting(starting_infected);
    while series.last_infected() < population {
        let day_infection = daily_infection(
            rng,
            series.last_infected(),
            infection_probability,
            max_infections,
        );
        if day_infection < population {
            series.push(day_infection);
        } else {
            series.push(population);
        }
    }
    let days = series.last_day() + 1;
    let summary = format!("Model estimates {days} days until the full population is infected.");
    ScenarioRun {
        series,
        summary: Some(summary),
    }
}

/// Models the introduction of a vaccine partway through a fixed-duration
/// run.
///
/// From `vaccine_day` onward the vaccine's effectiveness is subtracted from
/// the infection probability. The difference is passed through unclamped; a
/// negative effective probability simply produces no new infections (see
/// [`daily_infection`]). No population ceiling is applied.
pub fn vaccine_introduction<R: UniformSource>(
    rng: &mut R,
    starting_infected: u64,
    vaccine_day: u32,
    vaccine_effectiveness: f64,
    number_days: u32,
    infection_probability: f64,
    max_infections: u32,
) -> ScenarioRun {
    trace!("running vaccine model, vaccine introduced on day {vaccine_day}");
    let mut series = DaySeries::with_starting(starting_infected);
    for day in 1..=number_days {
        let effective_probability = if day < vaccine_day {
            infection_probability
        } else {
            infection_probability - vaccine_effectiveness
        };
        let day_infection = daily_infection(
            rng,
            series.last_infected(),
            effective_probability,
            max_infections,
        );
        series.push(day_infection);
    }
    let summary = format!(
        "With a vaccine on day {vaccine_day} the model estimates there will be {} people infected on day {number_days}",
        series.last_infected()
    );
    ScenarioRun {
        series,
        summary: Some(summary),
    }
}
