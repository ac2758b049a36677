//! Model parameters, loaded from a JSON file or taken from the defaults.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::OutbreakError;
use crate::log::debug;
use crate::transmission::DEFAULT_MAX_INFECTIONS;

/// Everything the scenario drivers need for one run. Any field omitted from
/// the JSON input falls back to its default, matching the demo run shipped
/// in `input.json`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Number of people infected on day 0.
    pub starting_infected: u64,
    /// Probability that one encounter infects one more person.
    pub infection_probability: f64,
    /// Encounters per infected person per day.
    pub max_infections: u32,
    /// Run length for the fixed-duration and vaccine scenarios.
    pub number_days: u32,
    /// Population ceiling for the saturation scenario.
    pub population: u64,
    /// Day the vaccine is introduced.
    pub vaccine_day: u32,
    /// Flat reduction of the infection probability from `vaccine_day` on.
    pub vaccine_effectiveness: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            starting_infected: 10,
            infection_probability: 0.05,
            max_infections: DEFAULT_MAX_INFECTIONS,
            number_days: 10,
            population: 1000,
            vaccine_day: 3,
            vaccine_effectiveness: 0.01,
        }
    }
}

impl Parameters {
    /// Reads parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` when the file cannot be opened or parsed.
    pub fn from_file(path: &Path) -> Result<Self, OutbreakError> {
        debug!("loading parameters from {}", path.display());
        let config_file = File::open(path)?;
        let parameters = serde_json::from_reader(config_file)?;
        Ok(parameters)
    }

    /// Checks the parameters for values the model cannot do anything
    /// sensible with.
    ///
    /// The drivers themselves accept whatever they are given; this check is
    /// applied only on the command-line path. Callers who want the raw
    /// unchecked behavior can call the drivers directly.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` describing the first rejected value.
    pub fn validate(&self) -> Result<(), OutbreakError> {
        if !(0.0..=1.0).contains(&self.infection_probability) {
            return Err(format!(
                "infection_probability must be in [0, 1], got {}",
                self.infection_probability
            )
            .into());
        }
        if self.starting_infected == 0 {
            return Err("starting_infected must be positive".into());
        }
        if self.population == 0 {
            return Err("population must be positive".into());
        }
        if self.number_days == 0 {
            return Err("number_days must be positive".into());
        }
        if self.vaccine_day == 0 {
            return Err("vaccine_day must be positive".into());
        }
        if self.infection_probability - self.vaccine_effectiveness < 0.0 {
            return Err(format!(
                "vaccine_effectiveness {} exceeds infection_probability {}",
                self.vaccine_effectiveness, self.infection_probability
            )
            .into());
        }
        Ok(())
    }
}
