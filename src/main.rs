use std::{error::Error as _, fmt::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use thiserror::Error;
use twine_core::Model;
use uom::si::{
    temperature_interval::kelvin as delta_kelvin, thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius, volume_rate::liter_per_minute,
};

use clampon_bias::{
    config::{self, ConfigError, Parameters},
    models::thermal::clamp_sensor::{
        ClampSensor, ClampSensorError, HEADLINE_FLOW_LPM, Reading, Report,
    },
};

/// Estimate how far a clamp-on pipe sensor misreads the water temperature.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML parameter file; missing keys use the reference installation.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Flow rate to evaluate, L/min. Repeat for several; replaces the file's list.
    #[arg(short, long = "flow", value_name = "L/MIN")]
    flows: Vec<f64>,

    /// Print the effective parameters as TOML and exit.
    #[arg(long)]
    print_defaults: bool,

    /// Log per-flow model diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("model evaluation failed")]
    Model(#[from] ClampSensorError),

    #[error("could not format output")]
    Format(#[from] std::fmt::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        StderrLogger::install();
    }

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Builds the full output, or fails without producing any of it.
fn run(cli: &Cli) -> Result<String, CliError> {
    let mut params = match &cli.config {
        Some(path) => config::load(path)?,
        None => Parameters::default(),
    };
    if !cli.flows.is_empty() {
        params.flows_lpm.clone_from(&cli.flows);
    }

    if cli.print_defaults {
        return Ok(params.to_toml()?);
    }

    let inputs = params.to_inputs()?;
    let report = ClampSensor::new(params.flows()).call(&inputs)?;
    Ok(render(&report)?)
}

fn render(report: &Report) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    if let Some(headline) = report.headline() {
        writeln!(
            out,
            "Water - air: {:+.2} K",
            headline.water_minus_air.get::<delta_kelvin>()
        )?;
        writeln!(
            out,
            "At {HEADLINE_FLOW_LPM} L/min: still air {}, draft {}",
            summarize(&headline.still),
            summarize(&headline.draft),
        )?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "{:>10}  {:>12}  {:>12}  {:>13}  {:>13}",
        "Q, L/min", "Ts still, C", "Ts draft, C", "bias still, K", "bias draft, K"
    )?;
    for row in &report.rows {
        writeln!(
            out,
            "{:>10.2}  {:>12.3}  {:>12.3}  {:>13.3}  {:>13.3}",
            row.flow.get::<liter_per_minute>(),
            row.still.sensor_temperature.get::<degree_celsius>(),
            row.draft.sensor_temperature.get::<degree_celsius>(),
            row.still.bias.get::<delta_kelvin>(),
            row.draft.bias.get::<delta_kelvin>(),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Diagnostics")?;
    if let Some([still, draft]) = report.wire_sides() {
        writeln!(
            out,
            "  lead-wire conductance: still {:.3e} W/K, draft {:.3e} W/K",
            still.get::<watt_per_kelvin>(),
            draft.get::<watt_per_kelvin>(),
        )?;
    }
    for row in &report.rows {
        writeln!(
            out,
            "  {:>8.2} L/min  Re = {:>9.0}  {}",
            row.flow.get::<liter_per_minute>(),
            row.reynolds,
            row.regime,
        )?;
    }

    Ok(out)
}

fn summarize(reading: &Reading) -> String {
    format!(
        "{} by {:.2} K",
        reading.direction(),
        reading.bias.get::<delta_kelvin>().abs()
    )
}

/// Writes log records to stderr.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl StderrLogger {
    fn install() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}
