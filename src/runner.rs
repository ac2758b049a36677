//! Command-line entry point: parses arguments, loads parameters, runs the
//! selected scenario, and hands the results to the CSV and plot sinks.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::OutbreakError;
use crate::log::{info, set_log_level, LevelFilter};
use crate::parameters::Parameters;
use crate::plot::SeriesPlot;
use crate::random::RandomSource;
use crate::report::write_series;
use crate::scenarios::{full_pop_infected, infection_model, vaccine_introduction, ScenarioRun};

/// The scenario driver to run.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Fixed-duration run over `number_days` days.
    Fixed,
    /// Run until the full population is infected.
    Saturation,
    /// Fixed-duration run with a vaccine introduced on `vaccine_day`.
    Vaccine,
}

impl Scenario {
    fn file_stem(self) -> &'static str {
        match self {
            Scenario::Fixed => "fixed",
            Scenario::Saturation => "saturation",
            Scenario::Vaccine => "vaccine",
        }
    }
}

/// Default cli arguments for the outbreak runner
#[derive(Parser, Debug)]
#[command(name = "outbreak", about = "A Monte Carlo model of disease spread")]
pub struct BaseArgs {
    /// Scenario to run
    #[arg(short, long, value_enum, default_value_t = Scenario::Fixed)]
    pub scenario: Scenario,

    /// Random seed; seeded from OS entropy when absent
    #[arg(short, long)]
    pub random_seed: Option<u64>,

    /// Optional path for a parameters JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for CSV and plot output
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = LevelFilter::Off)]
    pub log_level: LevelFilter,

    /// Skip rendering the plot
    #[arg(long)]
    pub no_plot: bool,
}

/// Runs one scenario end to end: parameters in, CSV/plot/summary out.
///
/// Returns the finished `ScenarioRun` so callers (and tests) can inspect the
/// series directly.
///
/// # Errors
///
/// Returns an error if parameter loading or validation fails, or if one of
/// the output sinks fails.
pub fn run(args: &BaseArgs) -> Result<ScenarioRun, OutbreakError> {
    // Off is the default; leave the global logger untouched in that case
    if args.log_level != LevelFilter::Off {
        set_log_level(args.log_level);
    }

    let parameters = match &args.config {
        Some(path) => Parameters::from_file(path)?,
        None => Parameters::default(),
    };
    parameters.validate()?;
    info!(
        "running {:?} scenario with {:?}",
        args.scenario, parameters
    );

    let mut rng = match args.random_seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };

    let run = match args.scenario {
        Scenario::Fixed => infection_model(
            &mut rng,
            parameters.number_days,
            parameters.starting_infected,
            parameters.infection_probability,
            parameters.max_infections,
        ),
        Scenario::Saturation => full_pop_infected(
            &mut rng,
            parameters.population,
            parameters.starting_infected,
            parameters.infection_probability,
            parameters.max_infections,
        ),
        Scenario::Vaccine => vaccine_introduction(
            &mut rng,
            parameters.starting_infected,
            parameters.vaccine_day,
            parameters.vaccine_effectiveness,
            parameters.number_days,
            parameters.infection_probability,
            parameters.max_infections,
        ),
    };

    let csv_path = args
        .output_dir
        .join(format!("{}_series.csv", args.scenario.file_stem()));
    write_series(&csv_path, &run.series)?;

    if let Some(summary) = &run.summary {
        println!("{summary}");
    }

    if !args.no_plot {
        let plot_path = args
            .output_dir
            .join(format!("{}_series.png", args.scenario.file_stem()));
        let mut plot = SeriesPlot::new(&plot_path, "Infected");
        if args.scenario == Scenario::Vaccine {
            plot = plot.vaccine_day(parameters.vaccine_day);
        }
        plot.render(&run.series)?;
    }

    Ok(run)
}
