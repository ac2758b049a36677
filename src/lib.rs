//! A Monte Carlo model of disease spread
//!
//! Outbreak is a single-run stochastic model of disease transmission in a
//! population. Each simulated day, every currently infected person makes a
//! fixed number of encounters, and each encounter infects one more person
//! with some probability. Three scenario drivers step that update rule
//! across days:
//! * A fixed-duration run over a given number of days.
//! * A saturation run that continues until the whole population is infected.
//! * A vaccine run that reduces the infection probability from a given day
//!   onward.
//!
//! Each driver produces a day-indexed series of infected counts which the
//! surrounding tooling writes to CSV and renders as a line chart. The model
//! itself performs no I/O; randomness comes from an injected
//! [`UniformSource`](random::UniformSource) so runs can be made
//! reproducible.

pub mod error;
pub mod log;
pub mod parameters;
pub mod plot;
pub mod random;
pub mod report;
pub mod runner;
pub mod scenarios;
pub mod series;
pub mod transmission;

pub use error::OutbreakError;
pub use series::{DayRecord, DaySeries};
